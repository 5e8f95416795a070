//! HasSemantics - Elements whose meaning is defined by a semantic reference

use super::{attribute_iri, FacetData, HasFacet};
use crate::builder::Builder;
use aas_types::Reference;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticsFacet {
    /// Reference to the concept that defines this element's semantics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
}

impl FacetData for SemanticsFacet {
    const ATTRIBUTE_IRIS: &'static [&'static str] = &[attribute_iri!("HasSemantics/semanticId")];
}

pub trait HasSemantics: HasFacet<SemanticsFacet> {
    fn semantic_id(&self) -> Option<&Reference> {
        HasFacet::<SemanticsFacet>::facet(self).semantic_id.as_ref()
    }

    fn set_semantic_id(&mut self, semantic_id: Option<Reference>) {
        HasFacet::<SemanticsFacet>::facet_mut(self).semantic_id = semantic_id;
    }
}

impl<T: HasFacet<SemanticsFacet> + ?Sized> HasSemantics for T {}

pub trait HasSemanticsBuilder: Builder
where
    Self::Target: HasSemantics,
{
    fn semantic_id(&mut self, semantic_id: Reference) -> &mut Self {
        self.building_instance().set_semantic_id(Some(semantic_id));
        self
    }
}

impl<B> HasSemanticsBuilder for B
where
    B: Builder,
    B::Target: HasSemantics,
{
}
