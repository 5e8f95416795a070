//! Identifiable - Elements with a globally unique identifier

use super::{attribute_iri, FacetData, HasFacet, Referable, ReferableFacet};
use crate::builder::Builder;
use crate::model::AdministrativeInformation;
use aas_types::Identifier;
use serde::{Deserialize, Serialize};

/// Attributes of an identifiable element
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifiableFacet {
    /// Global identifier of the element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identification: Option<Identifier>,

    /// Version and revision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<AdministrativeInformation>,
}

impl FacetData for IdentifiableFacet {
    const ATTRIBUTE_IRIS: &'static [&'static str] = &[
        attribute_iri!("Identifiable/identification"),
        attribute_iri!("Identifiable/administration"),
    ];
}

/// Contract of an identifiable element; every identifiable is also referable
pub trait Identifiable: Referable + HasFacet<IdentifiableFacet> {
    fn identification(&self) -> Option<&Identifier> {
        HasFacet::<IdentifiableFacet>::facet(self).identification.as_ref()
    }

    fn set_identification(&mut self, identification: Option<Identifier>) {
        HasFacet::<IdentifiableFacet>::facet_mut(self).identification = identification;
    }

    fn administration(&self) -> Option<&AdministrativeInformation> {
        HasFacet::<IdentifiableFacet>::facet(self).administration.as_ref()
    }

    fn set_administration(&mut self, administration: Option<AdministrativeInformation>) {
        HasFacet::<IdentifiableFacet>::facet_mut(self).administration = administration;
    }
}

impl<T> Identifiable for T where T: HasFacet<ReferableFacet> + HasFacet<IdentifiableFacet> + ?Sized {}

/// Fluent setters for builders of identifiable elements
pub trait IdentifiableBuilder: Builder
where
    Self::Target: Identifiable,
{
    fn identification(&mut self, identification: Identifier) -> &mut Self {
        self.building_instance().set_identification(Some(identification));
        self
    }

    fn administration(&mut self, administration: AdministrativeInformation) -> &mut Self {
        self.building_instance().set_administration(Some(administration));
        self
    }
}

impl<B> IdentifiableBuilder for B
where
    B: Builder,
    B::Target: Identifiable,
{
}
