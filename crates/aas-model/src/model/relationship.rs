//! RelationshipElement - A directed relation between two elements

use crate::facet::{
    attribute_iri, DataSpecificationFacet, KindFacet, QualifiableFacet, ReferableFacet,
    SemanticsFacet,
};
use aas_types::Reference;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipElement {
    /// Subject of the relationship
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first: Option<Reference>,

    /// Object of the relationship
    #[serde(default, skip_serializing_if = "Option::is_none")]
    second: Option<Reference>,

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
    RelationshipElement => RelationshipElementBuilder,
    facets {
        referable: ReferableFacet,
        qualifiable: QualifiableFacet,
        semantics: SemanticsFacet,
        kind: KindFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [
        attribute_iri!("RelationshipElement/first"),
        attribute_iri!("RelationshipElement/second"),
    ],
}

impl RelationshipElement {
    pub fn first(&self) -> Option<&Reference> {
        self.first.as_ref()
    }

    pub fn set_first(&mut self, first: Option<Reference>) {
        self.first = first;
    }

    pub fn second(&self) -> Option<&Reference> {
        self.second.as_ref()
    }

    pub fn set_second(&mut self, second: Option<Reference>) {
        self.second = second;
    }
}

builder_setters!(RelationshipElementBuilder {
    opt first: Reference => set_first;
    opt second: Reference => set_second;
});
