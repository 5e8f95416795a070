//! Capability - An implementation-independent description of a function

use crate::facet::{
    DataSpecificationFacet, KindFacet, QualifiableFacet, ReferableFacet, SemanticsFacet,
};
use serde::{Deserialize, Serialize};

/// A capability; its meaning lives entirely in its semantic id
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
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
    Capability => CapabilityBuilder,
    facets {
        referable: ReferableFacet,
        qualifiable: QualifiableFacet,
        semantics: SemanticsFacet,
        kind: KindFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [],
}
