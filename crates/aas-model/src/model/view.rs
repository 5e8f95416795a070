//! View - A filtered perspective on the elements of a shell

use crate::facet::{
    attribute_iri, DataSpecificationFacet, ReferableFacet, SemanticsFacet,
};
use aas_types::Reference;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    /// References to the elements that belong to this view
    #[serde(default)]
    contained_elements: Vec<Reference>,

    #[serde(flatten)]
    referable: ReferableFacet,
    #[serde(flatten)]
    semantics: SemanticsFacet,
    #[serde(flatten)]
    data_specification: DataSpecificationFacet,
}

model_element! {
    View => ViewBuilder,
    facets {
        referable: ReferableFacet,
        semantics: SemanticsFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [attribute_iri!("View/containedElement")],
}

impl View {
    pub fn contained_elements(&self) -> &[Reference] {
        &self.contained_elements
    }

    pub fn contained_elements_mut(&mut self) -> &mut Vec<Reference> {
        &mut self.contained_elements
    }

    pub fn set_contained_elements(&mut self, contained_elements: Vec<Reference>) {
        self.contained_elements = contained_elements;
    }
}

builder_setters!(ViewBuilder {
    list contained_element, contained_elements: Reference => contained_elements_mut, set_contained_elements;
});
