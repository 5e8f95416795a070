//! Language-tagged strings

use serde::{Deserialize, Serialize};

/// A text together with the language it is written in
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LangString {
    /// Language tag, e.g. `en` or `de-DE`
    pub language: String,

    /// The text itself
    pub value: String,
}

impl LangString {
    pub fn new(language: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            value: value.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl core::fmt::Display for LangString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}@{}", self.value, self.language)
    }
}
