//! References: key paths pointing at other elements or external concepts
//!
//! A [`Reference`] is held by value. It never owns the element it points at,
//! so references may cross the containment tree freely.

use crate::error::{ModelError, Result};
use core::fmt::Write as _;
use serde::{Deserialize, Serialize};

literal_enum! {
    /// The kind of element a key points at
    pub enum KeyElements {
        Asset => "Asset",
        AssetAdministrationShell => "AssetAdministrationShell",
        ConceptDescription => "ConceptDescription",
        Submodel => "Submodel",
        AccessPermissionRule => "AccessPermissionRule",
        AnnotatedRelationshipElement => "AnnotatedRelationshipElement",
        BasicEvent => "BasicEvent",
        Blob => "Blob",
        Capability => "Capability",
        ConceptDictionary => "ConceptDictionary",
        DataElement => "DataElement",
        File => "File",
        Entity => "Entity",
        Event => "Event",
        MultiLanguageProperty => "MultiLanguageProperty",
        Operation => "Operation",
        Property => "Property",
        Range => "Range",
        ReferenceElement => "ReferenceElement",
        RelationshipElement => "RelationshipElement",
        SubmodelElement => "SubmodelElement",
        SubmodelElementCollection => "SubmodelElementCollection",
        View => "View",
        /// Reference to an element outside any shell
        GlobalReference => "GlobalReference",
        /// Reference to a fragment inside a file or blob
        FragmentReference => "FragmentReference",
    }
}

literal_enum! {
    /// Format of a key value
    pub enum KeyType {
        Custom => "Custom",
        Irdi => "IRDI",
        Iri => "IRI",
        /// Short identifier, unique within the parent namespace
        IdShort => "IdShort",
        FragmentId => "FragmentId",
    }
}

/// One step of a reference path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    /// What kind of element this key denotes
    #[serde(rename = "type")]
    pub key_type: KeyElements,

    /// The key value
    pub value: String,

    /// Format of `value`
    pub id_type: KeyType,
}

impl Key {
    pub fn new(key_type: KeyElements, value: impl Into<String>, id_type: KeyType) -> Self {
        Self {
            key_type,
            value: value.into(),
            id_type,
        }
    }

    pub fn key_type(&self) -> KeyElements {
        self.key_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn id_type(&self) -> KeyType {
        self.id_type
    }
}

/// Writes `value` with `\\` and `,` backslash-escaped, so that keys can be
/// comma-joined without ambiguity.
fn write_escaped(f: &mut core::fmt::Formatter<'_>, value: &str) -> core::fmt::Result {
    for c in value.chars() {
        if c == '\\' || c == ',' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    Ok(())
}

/// Inverse of `write_escaped`; a trailing lone backslash is kept as is.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    out
}

/// Splits reference text at every unescaped `,` that starts a new key.
fn split_keys(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    let mut iter = s.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == ',' && matches!(iter.peek(), Some((_, '('))) {
            parts.push(&s[start..i]);
            start = i + 1;
        }
    }
    parts.push(&s[start..]);
    parts
}

impl core::fmt::Display for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({})[{}]", self.key_type, self.id_type)?;
        write_escaped(f, &self.value)
    }
}

impl core::str::FromStr for Key {
    type Err = ModelError;

    /// Parses `(Type)[IdType]value`; the value is taken verbatim up to the
    /// end, with backslash escapes resolved.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || {
            tracing::debug!(key = s, "malformed key");
            ModelError::MalformedKey(s.to_string())
        };

        let rest = s.strip_prefix('(').ok_or_else(malformed)?;
        let (key_type, rest) = rest.split_once(')').ok_or_else(malformed)?;
        let rest = rest.strip_prefix('[').ok_or_else(malformed)?;
        let (id_type, value) = rest.split_once(']').ok_or_else(malformed)?;

        Ok(Self {
            key_type: key_type.parse()?,
            value: unescape(value),
            id_type: id_type.parse()?,
        })
    }
}

/// A pointer to another element, expressed as an ordered key path
///
/// The first key names the outermost element (usually an identifiable), every
/// following key descends one level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub keys: Vec<Key>,
}

impl Reference {
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// A reference consisting of a single key
    pub fn from_key(key: Key) -> Self {
        Self { keys: vec![key] }
    }

    /// Builder: append a key to the path
    pub fn with_key(mut self, key: Key) -> Self {
        self.keys.push(key);
        self
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn first_key(&self) -> Option<&Key> {
        self.keys.first()
    }

    pub fn last_key(&self) -> Option<&Key> {
        self.keys.last()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl From<Key> for Reference {
    fn from(key: Key) -> Self {
        Self::from_key(key)
    }
}

impl core::fmt::Display for Reference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl core::str::FromStr for Reference {
    type Err = ModelError;

    /// Parses comma-joined keys, e.g. `(Submodel)[IRI]urn:sm,(Property)[IdShort]temp`.
    ///
    /// A new key starts at every unescaped `,(`. Empty text is the empty
    /// reference, matching what an empty reference displays as.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::default());
        }

        let keys = split_keys(s)
            .into_iter()
            .map(str::parse::<Key>)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { keys })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submodel_key() -> Key {
        Key::new(KeyElements::Submodel, "urn:example:sm:1", KeyType::Iri)
    }

    #[test]
    fn test_key_display() {
        assert_eq!(submodel_key().to_string(), "(Submodel)[IRI]urn:example:sm:1");
    }

    #[test]
    fn test_key_parse() {
        let key: Key = "(Property)[IdShort]temperature".parse().unwrap();
        assert_eq!(key.key_type(), KeyElements::Property);
        assert_eq!(key.id_type(), KeyType::IdShort);
        assert_eq!(key.value(), "temperature");
    }

    #[test]
    fn test_key_parse_rejects_missing_brackets() {
        let err = "Property[IdShort]x".parse::<Key>().unwrap_err();
        assert_eq!(err, ModelError::MalformedKey("Property[IdShort]x".to_string()));

        let err = "(Property)IdShort]x".parse::<Key>().unwrap_err();
        assert!(matches!(err, ModelError::MalformedKey(_)));
    }

    #[test]
    fn test_key_parse_rejects_unknown_type() {
        let err = "(Gadget)[IRI]x".parse::<Key>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownVariant { kind: "KeyElements", .. }));
    }

    #[test]
    fn test_reference_text_round_trip() {
        let reference = Reference::from_key(submodel_key())
            .with_key(Key::new(KeyElements::Property, "temperature", KeyType::IdShort));

        let text = reference.to_string();
        assert_eq!(text, "(Submodel)[IRI]urn:example:sm:1,(Property)[IdShort]temperature");
        assert_eq!(text.parse::<Reference>().unwrap(), reference);
    }

    #[test]
    fn test_reference_value_may_contain_commas() {
        let reference: Reference = "(GlobalReference)[Custom]a,b".parse().unwrap();
        assert_eq!(reference.keys().len(), 1);
        assert_eq!(reference.first_key().unwrap().value(), "a,b");
    }

    #[test]
    fn test_empty_reference_round_trips() {
        let empty = Reference::default();
        assert_eq!(empty.to_string(), "");
        assert_eq!("".parse::<Reference>(), Ok(empty));
    }

    #[test]
    fn test_blank_reference_is_malformed() {
        assert!(matches!("  ".parse::<Reference>(), Err(ModelError::MalformedKey(_))));
    }

    #[test]
    fn test_key_value_keeps_surrounding_whitespace() {
        let key = Key::new(KeyElements::GlobalReference, " abc ", KeyType::Custom);
        assert_eq!(key.to_string().parse::<Key>(), Ok(key.clone()));

        let reference = Reference::from_key(key);
        assert_eq!(reference.to_string().parse::<Reference>(), Ok(reference));
    }

    #[test]
    fn test_key_value_with_key_separator_round_trips() {
        let reference = Reference::from_key(Key::new(
            KeyElements::GlobalReference,
            "f(x,(y))",
            KeyType::Custom,
        ))
        .with_key(Key::new(KeyElements::Property, "a\\,(b", KeyType::IdShort));

        let text = reference.to_string();
        assert_eq!(text, "(GlobalReference)[Custom]f(x\\,(y)),(Property)[IdShort]a\\\\\\,(b");
        assert_eq!(text.parse::<Reference>(), Ok(reference));
    }

    #[test]
    fn test_trailing_backslash_is_kept() {
        let key: Key = "(Property)[IdShort]x\\".parse().unwrap();
        assert_eq!(key.value(), "x\\");
    }

    #[test]
    fn test_key_order_matters() {
        let a = Key::new(KeyElements::Submodel, "a", KeyType::Iri);
        let b = Key::new(KeyElements::Property, "b", KeyType::IdShort);

        let forward = Reference::new(vec![a.clone(), b.clone()]);
        let backward = Reference::new(vec![b, a]);
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_key_serde_field_names() {
        let json = serde_json::to_value(submodel_key()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "Submodel", "value": "urn:example:sm:1", "idType": "IRI"})
        );
    }
}
