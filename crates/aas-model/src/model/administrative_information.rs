//! AdministrativeInformation - Version and revision of an identifiable element

use crate::facet::{attribute_iri, DataSpecificationFacet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrativeInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    revision: Option<String>,

    #[serde(flatten)]
    data_specification: DataSpecificationFacet,
}

model_element! {
    AdministrativeInformation => AdministrativeInformationBuilder,
    facets { data_specification: DataSpecificationFacet },
    attributes [
        attribute_iri!("AdministrativeInformation/version"),
        attribute_iri!("AdministrativeInformation/revision"),
    ],
}

impl AdministrativeInformation {
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_version(&mut self, version: Option<String>) {
        self.version = version;
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    pub fn set_revision(&mut self, revision: Option<String>) {
        self.revision = revision;
    }
}

builder_setters!(AdministrativeInformationBuilder {
    opt version: impl Into<String> => set_version;
    opt revision: impl Into<String> => set_revision;
});
