//! Asset - A physical or logical object represented by a shell

use crate::facet::{DataSpecificationFacet, IdentifiableFacet, ReferableFacet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(flatten)]
    referable: ReferableFacet,
    #[serde(flatten)]
    identifiable: IdentifiableFacet,
    #[serde(flatten)]
    data_specification: DataSpecificationFacet,
}

model_element! {
    Asset => AssetBuilder,
    facets {
        referable: ReferableFacet,
        identifiable: IdentifiableFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [],
}
