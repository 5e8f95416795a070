//! Qualifiable - Elements that carry constraints

use super::{attribute_iri, FacetData, HasFacet};
use crate::builder::Builder;
use crate::model::Constraint;
use serde::{Deserialize, Serialize};

/// Attributes of a qualifiable element
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifiableFacet {
    /// Qualifiers and formulas, in insertion order
    #[serde(default)]
    pub qualifiers: Vec<Constraint>,
}

impl FacetData for QualifiableFacet {
    const ATTRIBUTE_IRIS: &'static [&'static str] = &[attribute_iri!("Qualifiable/qualifier")];
}

pub trait Qualifiable: HasFacet<QualifiableFacet> {
    fn qualifiers(&self) -> &[Constraint] {
        &HasFacet::<QualifiableFacet>::facet(self).qualifiers
    }

    fn qualifiers_mut(&mut self) -> &mut Vec<Constraint> {
        &mut HasFacet::<QualifiableFacet>::facet_mut(self).qualifiers
    }

    fn set_qualifiers(&mut self, qualifiers: Vec<Constraint>) {
        HasFacet::<QualifiableFacet>::facet_mut(self).qualifiers = qualifiers;
    }
}

impl<T: HasFacet<QualifiableFacet> + ?Sized> Qualifiable for T {}

pub trait QualifiableBuilder: Builder
where
    Self::Target: Qualifiable,
{
    /// Append one constraint (a qualifier or a formula)
    fn qualifier(&mut self, qualifier: impl Into<Constraint>) -> &mut Self {
        self.building_instance().qualifiers_mut().push(qualifier.into());
        self
    }

    /// Replace all constraints
    fn qualifiers(&mut self, qualifiers: Vec<Constraint>) -> &mut Self {
        self.building_instance().set_qualifiers(qualifiers);
        self
    }
}

impl<B> QualifiableBuilder for B
where
    B: Builder,
    B::Target: Qualifiable,
{
}
