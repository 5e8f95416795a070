//! Error types for the AAS value layer

use thiserror::Error;

/// Errors raised while reading model values from their textual form.
///
/// Constructing and mutating model elements never fails; only parsing does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An enumeration literal that none of the variants spell
    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// A key that is not of the form `(Type)[IdType]value`
    #[error("Malformed key '{0}': expected (Type)[IdType]value")]
    MalformedKey(String),
}

impl ModelError {
    pub(crate) fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        tracing::debug!(kind, value = %value, "unknown enumeration literal");
        Self::UnknownVariant { kind, value }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_message() {
        let err = ModelError::unknown("ModelingKind", "Draft");
        assert_eq!(err.to_string(), "Unknown ModelingKind 'Draft'");
    }

    #[test]
    fn test_malformed_key_message() {
        let err = ModelError::MalformedKey("Submodel".to_string());
        assert!(err.to_string().contains("(Type)[IdType]value"));
    }
}
