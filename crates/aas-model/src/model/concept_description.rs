//! ConceptDescription - The semantic definition an element's semanticId points at

use crate::facet::{attribute_iri, DataSpecificationFacet, IdentifiableFacet, ReferableFacet};
use aas_types::Reference;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDescription {
    /// External concepts this description is a case of
    #[serde(default)]
    is_case_ofs: Vec<Reference>,

    #[serde(flatten)]
    referable: ReferableFacet,
    #[serde(flatten)]
    identifiable: IdentifiableFacet,
    #[serde(flatten)]
    data_specification: DataSpecificationFacet,
}

model_element! {
    ConceptDescription => ConceptDescriptionBuilder,
    facets {
        referable: ReferableFacet,
        identifiable: IdentifiableFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [attribute_iri!("ConceptDescription/isCaseOf")],
}

impl ConceptDescription {
    pub fn is_case_ofs(&self) -> &[Reference] {
        &self.is_case_ofs
    }

    pub fn is_case_ofs_mut(&mut self) -> &mut Vec<Reference> {
        &mut self.is_case_ofs
    }

    pub fn set_is_case_ofs(&mut self, is_case_ofs: Vec<Reference>) {
        self.is_case_ofs = is_case_ofs;
    }
}

builder_setters!(ConceptDescriptionBuilder {
    list is_case_of, is_case_ofs: Reference => is_case_ofs_mut, set_is_case_ofs;
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Asset;
    use crate::prelude::*;
    use aas_types::{Identifier, Key, KeyElements, KeyType};

    #[test]
    fn test_concept_description_builder() {
        let eclass = Reference::from_key(Key::new(
            KeyElements::GlobalReference,
            "0173-1#02-AAO677#002",
            KeyType::Irdi,
        ));

        let concept = ConceptDescription::builder()
            .identification(Identifier::irdi("0173-1#02-AAO677#002"))
            .id_short("ManufacturerName")
            .is_case_of(eclass.clone())
            .build();

        assert_eq!(concept.is_case_ofs(), &[eclass]);
        assert_eq!(concept.id_short(), Some("ManufacturerName"));
    }

    #[test]
    fn test_asset_and_empty_concept_description_differ_by_type() {
        let id = Identifier::iri("urn:example:1");
        let asset = Asset::builder().identification(id.clone()).build();
        let concept = ConceptDescription::builder().identification(id).build();

        let asset: &dyn ModelElement = &asset;
        let concept: &dyn ModelElement = &concept;
        assert!(asset != concept);
        assert_eq!(asset.model_type(), crate::element::ModelType::Asset);
    }
}
