//! Global identifiers of identifiable elements

use serde::{Deserialize, Serialize};

literal_enum! {
    /// How an identifier string is to be interpreted
    pub enum IdentifierType {
        /// International Registration Data Identifier (ISO 29002-5)
        Irdi => "IRDI",
        /// Internationalized Resource Identifier (RFC 3987)
        Iri => "IRI",
        /// Any other identifier format
        Custom => "Custom",
    }
}

/// Globally unique identification of an element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    /// The identifier value
    pub identifier: String,

    /// Format of `identifier`
    pub id_type: IdentifierType,
}

impl Identifier {
    pub fn new(identifier: impl Into<String>, id_type: IdentifierType) -> Self {
        Self {
            identifier: identifier.into(),
            id_type,
        }
    }

    pub fn iri(identifier: impl Into<String>) -> Self {
        Self::new(identifier, IdentifierType::Iri)
    }

    pub fn irdi(identifier: impl Into<String>) -> Self {
        Self::new(identifier, IdentifierType::Irdi)
    }

    pub fn custom(identifier: impl Into<String>) -> Self {
        Self::new(identifier, IdentifierType::Custom)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn id_type(&self) -> IdentifierType {
        self.id_type
    }
}

impl core::fmt::Display for Identifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}]{}", self.id_type, self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_constructors() {
        let id = Identifier::iri("https://example.com/ids/sm/1");
        assert_eq!(id.id_type(), IdentifierType::Iri);
        assert_eq!(id.identifier(), "https://example.com/ids/sm/1");
        assert_eq!(Identifier::irdi("0173-1#01-AAA").id_type(), IdentifierType::Irdi);
        assert_eq!(Identifier::custom("x").id_type(), IdentifierType::Custom);
    }

    #[test]
    fn test_identifier_display() {
        assert_eq!(Identifier::iri("urn:x").to_string(), "[IRI]urn:x");
    }

    #[test]
    fn test_identifier_serde_shape() {
        let json = serde_json::to_value(Identifier::irdi("0173-1#01-AAA")).unwrap();
        assert_eq!(json, serde_json::json!({"identifier": "0173-1#01-AAA", "idType": "IRDI"}));
    }
}
