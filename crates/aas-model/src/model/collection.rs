//! SubmodelElementCollection - A nested group of submodel elements

use super::SubmodelElement;
use crate::facet::{
    attribute_iri, DataSpecificationFacet, KindFacet, QualifiableFacet, Referable,
    ReferableFacet, SemanticsFacet,
};
use serde::{Deserialize, Serialize};

/// A set or list of submodel elements, owned by the collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmodelElementCollection {
    #[serde(default)]
    values: Vec<SubmodelElement>,

    /// Whether the order of `values` carries meaning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ordered: Option<bool>,

    /// Whether `values` may contain equal elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allow_duplicates: Option<bool>,

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
    SubmodelElementCollection => SubmodelElementCollectionBuilder,
    facets {
        referable: ReferableFacet,
        qualifiable: QualifiableFacet,
        semantics: SemanticsFacet,
        kind: KindFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [
        attribute_iri!("SubmodelElementCollection/value"),
        attribute_iri!("SubmodelElementCollection/ordered"),
        attribute_iri!("SubmodelElementCollection/allowDuplicates"),
    ],
}

impl SubmodelElementCollection {
    pub fn values(&self) -> &[SubmodelElement] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut Vec<SubmodelElement> {
        &mut self.values
    }

    pub fn set_values(&mut self, values: Vec<SubmodelElement>) {
        self.values = values;
    }

    /// The direct child with the given idShort
    pub fn value_by_id_short(&self, id_short: &str) -> Option<&SubmodelElement> {
        self.values.iter().find(|e| e.id_short() == Some(id_short))
    }

    pub fn ordered(&self) -> Option<bool> {
        self.ordered
    }

    pub fn set_ordered(&mut self, ordered: Option<bool>) {
        self.ordered = ordered;
    }

    pub fn allow_duplicates(&self) -> Option<bool> {
        self.allow_duplicates
    }

    pub fn set_allow_duplicates(&mut self, allow_duplicates: Option<bool>) {
        self.allow_duplicates = allow_duplicates;
    }
}

builder_setters!(SubmodelElementCollectionBuilder {
    list value, values: SubmodelElement => values_mut, set_values;
    opt ordered: bool => set_ordered;
    opt allow_duplicates: bool => set_allow_duplicates;
});
