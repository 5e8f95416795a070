//! Data elements - Submodel elements that hold a value

use crate::facet::{
    attribute_iri, DataSpecificationFacet, KindFacet, QualifiableFacet, ReferableFacet,
    SemanticsFacet,
};
use aas_types::{LangString, Reference};
use serde::{Deserialize, Serialize};

/// A single typed value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// XSD data type of `value`, e.g. `xs:double`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_type: Option<String>,

    /// The value in its lexical form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,

    /// Reference to a global unique id of a coded value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_id: Option<Reference>,

    #[serde(flatten)]
    referable: ReferableFacet,
    #[serde(flatten)]
    qualifiable: QualifiableFacet,
    #[serde(flatten)]
    semantics: SemanticsFacet,
    #[serde(flatten)]
    kind: KindFacet,
    #[serde(flatten)]
    data_specification: DataSpecificationFacet,
}

model_element! {
    Property => PropertyBuilder,
    facets {
        referable: ReferableFacet,
        qualifiable: QualifiableFacet,
        semantics: SemanticsFacet,
        kind: KindFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [
        attribute_iri!("Property/valueType"),
        attribute_iri!("Property/value"),
        attribute_iri!("Property/valueId"),
    ],
}

impl Property {
    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }

    pub fn set_value_type(&mut self, value_type: Option<String>) {
        self.value_type = value_type;
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub fn value_id(&self) -> Option<&Reference> {
        self.value_id.as_ref()
    }

    pub fn set_value_id(&mut self, value_id: Option<Reference>) {
        self.value_id = value_id;
    }
}

builder_setters!(PropertyBuilder {
    opt value_type: impl Into<String> => set_value_type;
    opt value: impl Into<String> => set_value;
    opt value_id: Reference => set_value_id;
});

/// A property whose value is given in several languages
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiLanguageProperty {
    #[serde(default)]
    values: Vec<LangString>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_id: Option<Reference>,

    #[serde(flatten)]
    referable: ReferableFacet,
    #[serde(flatten)]
    qualifiable: QualifiableFacet,
    #[serde(flatten)]
    semantics: SemanticsFacet,
    #[serde(flatten)]
    kind: KindFacet,
    #[serde(flatten)]
    data_specification: DataSpecificationFacet,
}

model_element! {
    MultiLanguageProperty => MultiLanguagePropertyBuilder,
    facets {
        referable: ReferableFacet,
        qualifiable: QualifiableFacet,
        semantics: SemanticsFacet,
        kind: KindFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [
        attribute_iri!("MultiLanguageProperty/value"),
        attribute_iri!("MultiLanguageProperty/valueId"),
    ],
}

impl MultiLanguageProperty {
    pub fn values(&self) -> &[LangString] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut Vec<LangString> {
        &mut self.values
    }

    pub fn set_values(&mut self, values: Vec<LangString>) {
        self.values = values;
    }

    /// The text for `language`, if present
    pub fn value_in(&self, language: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.language == language)
            .map(|v| v.value.as_str())
    }

    pub fn value_id(&self) -> Option<&Reference> {
        self.value_id.as_ref()
    }

    pub fn set_value_id(&mut self, value_id: Option<Reference>) {
        self.value_id = value_id;
    }
}

builder_setters!(MultiLanguagePropertyBuilder {
    list value, values: LangString => values_mut, set_values;
    opt value_id: Reference => set_value_id;
});

/// An interval of values
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_type: Option<String>,

    /// Lower bound; absent means open towards negative infinity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<String>,

    /// Upper bound; absent means open towards positive infinity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<String>,

    #[serde(flatten)]
    referable: ReferableFacet,
    #[serde(flatten)]
    qualifiable: QualifiableFacet,
    #[serde(flatten)]
    semantics: SemanticsFacet,
    #[serde(flatten)]
    kind: KindFacet,
    #[serde(flatten)]
    data_specification: DataSpecificationFacet,
}

model_element! {
    Range => RangeBuilder,
    facets {
        referable: ReferableFacet,
        qualifiable: QualifiableFacet,
        semantics: SemanticsFacet,
        kind: KindFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [
        attribute_iri!("Range/valueType"),
        attribute_iri!("Range/min"),
        attribute_iri!("Range/max"),
    ],
}

impl Range {
    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }

    pub fn set_value_type(&mut self, value_type: Option<String>) {
        self.value_type = value_type;
    }

    pub fn min(&self) -> Option<&str> {
        self.min.as_deref()
    }

    pub fn set_min(&mut self, min: Option<String>) {
        self.min = min;
    }

    pub fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }

    pub fn set_max(&mut self, max: Option<String>) {
        self.max = max;
    }
}

builder_setters!(RangeBuilder {
    opt value_type: impl Into<String> => set_value_type;
    opt min: impl Into<String> => set_min;
    opt max: impl Into<String> => set_max;
});

/// Binary content embedded in the model
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Vec<u8>>,

    #[serde(flatten)]
    referable: ReferableFacet,
    #[serde(flatten)]
    qualifiable: QualifiableFacet,
    #[serde(flatten)]
    semantics: SemanticsFacet,
    #[serde(flatten)]
    kind: KindFacet,
    #[serde(flatten)]
    data_specification: DataSpecificationFacet,
}

model_element! {
    Blob => BlobBuilder,
    facets {
        referable: ReferableFacet,
        qualifiable: QualifiableFacet,
        semantics: SemanticsFacet,
        kind: KindFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [
        attribute_iri!("Blob/mimeType"),
        attribute_iri!("Blob/value"),
    ],
}

impl Blob {
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn set_mime_type(&mut self, mime_type: Option<String>) {
        self.mime_type = mime_type;
    }

    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<Vec<u8>>) {
        self.value = value;
    }
}

builder_setters!(BlobBuilder {
    opt mime_type: impl Into<String> => set_mime_type;
    opt value: impl Into<Vec<u8>> => set_value;
});

/// A file referenced by path or URI
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,

    /// Path or URI of the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,

    #[serde(flatten)]
    referable: ReferableFacet,
    #[serde(flatten)]
    qualifiable: QualifiableFacet,
    #[serde(flatten)]
    semantics: SemanticsFacet,
    #[serde(flatten)]
    kind: KindFacet,
    #[serde(flatten)]
    data_specification: DataSpecificationFacet,
}

model_element! {
    File => FileBuilder,
    facets {
        referable: ReferableFacet,
        qualifiable: QualifiableFacet,
        semantics: SemanticsFacet,
        kind: KindFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [
        attribute_iri!("File/mimeType"),
        attribute_iri!("File/value"),
    ],
}

impl File {
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn set_mime_type(&mut self, mime_type: Option<String>) {
        self.mime_type = mime_type;
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

builder_setters!(FileBuilder {
    opt mime_type: impl Into<String> => set_mime_type;
    opt value: impl Into<String> => set_value;
});

/// A reference held as a submodel element
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Reference>,

    #[serde(flatten)]
    referable: ReferableFacet,
    #[serde(flatten)]
    qualifiable: QualifiableFacet,
    #[serde(flatten)]
    semantics: SemanticsFacet,
    #[serde(flatten)]
    kind: KindFacet,
    #[serde(flatten)]
    data_specification: DataSpecificationFacet,
}

model_element! {
    ReferenceElement => ReferenceElementBuilder,
    facets {
        referable: ReferableFacet,
        qualifiable: QualifiableFacet,
        semantics: SemanticsFacet,
        kind: KindFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [attribute_iri!("ReferenceElement/value")],
}

impl ReferenceElement {
    pub fn value(&self) -> Option<&Reference> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Option<Reference>) {
        self.value = value;
    }
}

builder_setters!(ReferenceElementBuilder {
    opt value: Reference => set_value;
});
