//! Submodel - One aspect of an asset, as a tree of submodel elements
//!
//! A submodel structures the virtual representation of an asset into
//! distinguishable parts, each referring to a well-defined domain. It owns its
//! elements exclusively; links to elements elsewhere are `Reference` values.

use super::SubmodelElement;
use crate::facet::{
    attribute_iri, DataSpecificationFacet, IdentifiableFacet, KindFacet, QualifiableFacet,
    Referable, ReferableFacet, SemanticsFacet,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submodel {
    #[serde(default)]
    submodel_elements: Vec<SubmodelElement>,

    #[serde(flatten)]
    referable: ReferableFacet,
    #[serde(flatten)]
    identifiable: IdentifiableFacet,
    #[serde(flatten)]
    kind: KindFacet,
    #[serde(flatten)]
    semantics: SemanticsFacet,
    #[serde(flatten)]
    qualifiable: QualifiableFacet,
    #[serde(flatten)]
    data_specification: DataSpecificationFacet,
}

model_element! {
    Submodel => SubmodelBuilder,
    facets {
        referable: ReferableFacet,
        identifiable: IdentifiableFacet,
        kind: KindFacet,
        semantics: SemanticsFacet,
        qualifiable: QualifiableFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [attribute_iri!("Submodel/submodelElement")],
}

impl Submodel {
    pub fn submodel_elements(&self) -> &[SubmodelElement] {
        &self.submodel_elements
    }

    pub fn submodel_elements_mut(&mut self) -> &mut Vec<SubmodelElement> {
        &mut self.submodel_elements
    }

    pub fn set_submodel_elements(&mut self, submodel_elements: Vec<SubmodelElement>) {
        self.submodel_elements = submodel_elements;
    }

    /// The top-level element with the given idShort
    pub fn submodel_element_by_id_short(&self, id_short: &str) -> Option<&SubmodelElement> {
        self.submodel_elements
            .iter()
            .find(|e| e.id_short() == Some(id_short))
    }
}

builder_setters!(SubmodelBuilder {
    list submodel_element, submodel_elements: SubmodelElement => submodel_elements_mut, set_submodel_elements;
});
