//! HasKind - Template vs. instance marker

use super::{attribute_iri, FacetData, HasFacet};
use crate::builder::Builder;
use aas_types::ModelingKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindFacet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ModelingKind>,
}

impl FacetData for KindFacet {
    const ATTRIBUTE_IRIS: &'static [&'static str] = &[attribute_iri!("HasKind/kind")];
}

pub trait HasKind: HasFacet<KindFacet> {
    fn kind(&self) -> Option<ModelingKind> {
        HasFacet::<KindFacet>::facet(self).kind
    }

    fn set_kind(&mut self, kind: Option<ModelingKind>) {
        HasFacet::<KindFacet>::facet_mut(self).kind = kind;
    }
}

impl<T: HasFacet<KindFacet> + ?Sized> HasKind for T {}

pub trait HasKindBuilder: Builder
where
    Self::Target: HasKind,
{
    fn kind(&mut self, kind: ModelingKind) -> &mut Self {
        self.building_instance().set_kind(Some(kind));
        self
    }
}

impl<B> HasKindBuilder for B
where
    B: Builder,
    B::Target: HasKind,
{
}
