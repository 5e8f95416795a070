//! HasDataSpecification - Elements described by external data specification templates

use super::{attribute_iri, FacetData, HasFacet};
use crate::builder::Builder;
use aas_types::Reference;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSpecificationFacet {
    /// References to the data specification templates used
    #[serde(default)]
    pub data_specifications: Vec<Reference>,
}

impl FacetData for DataSpecificationFacet {
    const ATTRIBUTE_IRIS: &'static [&'static str] =
        &[attribute_iri!("HasDataSpecification/dataSpecification")];
}

pub trait HasDataSpecification: HasFacet<DataSpecificationFacet> {
    fn data_specifications(&self) -> &[Reference] {
        &HasFacet::<DataSpecificationFacet>::facet(self).data_specifications
    }

    fn data_specifications_mut(&mut self) -> &mut Vec<Reference> {
        &mut HasFacet::<DataSpecificationFacet>::facet_mut(self).data_specifications
    }

    fn set_data_specifications(&mut self, data_specifications: Vec<Reference>) {
        HasFacet::<DataSpecificationFacet>::facet_mut(self).data_specifications =
            data_specifications;
    }
}

impl<T: HasFacet<DataSpecificationFacet> + ?Sized> HasDataSpecification for T {}

pub trait HasDataSpecificationBuilder: Builder
where
    Self::Target: HasDataSpecification,
{
    /// Append one data specification reference
    fn data_specification(&mut self, data_specification: Reference) -> &mut Self {
        self.building_instance()
            .data_specifications_mut()
            .push(data_specification);
        self
    }

    /// Replace all data specification references
    fn data_specifications(&mut self, data_specifications: Vec<Reference>) -> &mut Self {
        self.building_instance()
            .set_data_specifications(data_specifications);
        self
    }
}

impl<B> HasDataSpecificationBuilder for B
where
    B: Builder,
    B::Target: HasDataSpecification,
{
}
