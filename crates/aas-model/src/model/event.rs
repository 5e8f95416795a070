//! BasicEvent - An element that produces events about an observed element

use crate::facet::{
    attribute_iri, DataSpecificationFacet, KindFacet, QualifiableFacet, ReferableFacet,
    SemanticsFacet,
};
use aas_types::Reference;
use serde::{Deserialize, Serialize};

/// A basic event
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicEvent {
    /// The referable whose changes the event reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    observed: Option<Reference>,

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
    BasicEvent => BasicEventBuilder,
    facets {
        referable: ReferableFacet,
        qualifiable: QualifiableFacet,
        semantics: SemanticsFacet,
        kind: KindFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [attribute_iri!("BasicEvent/observed")],
}

impl BasicEvent {
    pub fn observed(&self) -> Option<&Reference> {
        self.observed.as_ref()
    }

    pub fn set_observed(&mut self, observed: Option<Reference>) {
        self.observed = observed;
    }
}

builder_setters!(BasicEventBuilder {
    opt observed: Reference => set_observed;
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use aas_types::{Key, KeyElements, KeyType, LangString, ModelingKind};

    fn observed() -> Reference {
        Reference::from_key(Key::new(KeyElements::Submodel, "urn:sm:1", KeyType::Iri))
            .with_key(Key::new(KeyElements::Property, "temperature", KeyType::IdShort))
    }

    #[test]
    fn test_new_event_is_empty() {
        let event = BasicEvent::new();

        assert!(event.observed().is_none());
        assert!(event.id_short().is_none());
        assert!(event.display_name().is_none());
        assert!(event.semantic_id().is_none());
        assert!(event.kind().is_none());
        assert!(event.descriptions().is_empty());
        assert!(event.referable_categories().is_empty());
        assert!(event.qualifiers().is_empty());
        assert!(event.data_specifications().is_empty());
    }

    #[test]
    fn test_builder_matches_direct_mutation() {
        let built = BasicEvent::builder()
            .id_short("overheat")
            .observed(observed())
            .kind(ModelingKind::Instance)
            .description(LangString::new("en", "Too hot"))
            .build();

        let mut direct = BasicEvent::new();
        direct.set_observed(Some(observed()));
        direct.set_kind(Some(ModelingKind::Instance));
        direct.set_id_short(Some("overheat".to_string()));
        direct.descriptions_mut().push(LangString::new("en", "Too hot"));

        assert_eq!(built, direct);
    }

    #[test]
    fn test_observed_is_part_of_equality() {
        let a = BasicEvent::builder().id_short("e").build();
        let b = BasicEvent::builder().id_short("e").observed(observed()).build();
        assert_ne!(a, b);
    }

    #[test]
    fn test_attribute_iris() {
        let iris = BasicEvent::attribute_iris();
        assert_eq!(iris.len(), 9);
        assert_eq!(iris[0], "https://admin-shell.io/aas/3/0/RC01/BasicEvent/observed");
        assert!(iris.iter().all(|iri| crate::facet::is_model_iri(iri)));
        assert_eq!(BasicEvent::MODEL_TYPE.iri(), "aas:BasicEvent");
    }
}
