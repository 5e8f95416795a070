//! Referable - Elements that can be referenced by their short id

use super::{attribute_iri, FacetData, HasFacet};
use crate::builder::Builder;
use aas_types::LangString;
use serde::{Deserialize, Serialize};

/// Attributes of a referable element
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferableFacet {
    /// Identifying string, unique within the parent's namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<LangString>,

    /// Descriptions in several languages
    #[serde(default)]
    pub descriptions: Vec<LangString>,

    /// Categories, e.g. CONSTANT, PARAMETER or VARIABLE
    #[serde(default)]
    pub referable_categories: Vec<String>,
}

impl FacetData for ReferableFacet {
    const ATTRIBUTE_IRIS: &'static [&'static str] = &[
        attribute_iri!("Referable/idShort"),
        attribute_iri!("Referable/displayName"),
        attribute_iri!("Referable/description"),
        attribute_iri!("Referable/referableCategory"),
    ];
}

/// Contract of a referable element
pub trait Referable: HasFacet<ReferableFacet> {
    fn id_short(&self) -> Option<&str> {
        HasFacet::<ReferableFacet>::facet(self).id_short.as_deref()
    }

    fn set_id_short(&mut self, id_short: Option<String>) {
        HasFacet::<ReferableFacet>::facet_mut(self).id_short = id_short;
    }

    fn display_name(&self) -> Option<&LangString> {
        HasFacet::<ReferableFacet>::facet(self).display_name.as_ref()
    }

    fn set_display_name(&mut self, display_name: Option<LangString>) {
        HasFacet::<ReferableFacet>::facet_mut(self).display_name = display_name;
    }

    fn descriptions(&self) -> &[LangString] {
        &HasFacet::<ReferableFacet>::facet(self).descriptions
    }

    fn descriptions_mut(&mut self) -> &mut Vec<LangString> {
        &mut HasFacet::<ReferableFacet>::facet_mut(self).descriptions
    }

    fn set_descriptions(&mut self, descriptions: Vec<LangString>) {
        HasFacet::<ReferableFacet>::facet_mut(self).descriptions = descriptions;
    }

    fn referable_categories(&self) -> &[String] {
        &HasFacet::<ReferableFacet>::facet(self).referable_categories
    }

    fn referable_categories_mut(&mut self) -> &mut Vec<String> {
        &mut HasFacet::<ReferableFacet>::facet_mut(self).referable_categories
    }

    fn set_referable_categories(&mut self, categories: Vec<String>) {
        HasFacet::<ReferableFacet>::facet_mut(self).referable_categories = categories;
    }
}

impl<T: HasFacet<ReferableFacet> + ?Sized> Referable for T {}

/// Fluent setters for builders of referable elements
pub trait ReferableBuilder: Builder
where
    Self::Target: Referable,
{
    fn id_short(&mut self, id_short: impl Into<String>) -> &mut Self {
        self.building_instance().set_id_short(Some(id_short.into()));
        self
    }

    fn display_name(&mut self, display_name: LangString) -> &mut Self {
        self.building_instance().set_display_name(Some(display_name));
        self
    }

    /// Append one description
    fn description(&mut self, description: LangString) -> &mut Self {
        self.building_instance().descriptions_mut().push(description);
        self
    }

    /// Replace all descriptions
    fn descriptions(&mut self, descriptions: Vec<LangString>) -> &mut Self {
        self.building_instance().set_descriptions(descriptions);
        self
    }

    /// Append one category
    fn referable_category(&mut self, category: impl Into<String>) -> &mut Self {
        self.building_instance()
            .referable_categories_mut()
            .push(category.into());
        self
    }

    /// Replace all categories
    fn referable_categories(&mut self, categories: Vec<String>) -> &mut Self {
        self.building_instance().set_referable_categories(categories);
        self
    }
}

impl<B> ReferableBuilder for B
where
    B: Builder,
    B::Target: Referable,
{
}
