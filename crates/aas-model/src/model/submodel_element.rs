//! SubmodelElement - Any element that can be placed inside a submodel
//!
//! The enum is the polymorphic container used wherever the metamodel allows
//! "some submodel element". Its derived equality compares the variant first,
//! so elements of different concrete types are never equal. Every variant
//! shares the same facet set, so the enum forwards those facets and can be
//! used with the facet traits directly.

use super::{
    BasicEvent, Blob, Capability, File, MultiLanguageProperty, Operation, Property, Range,
    ReferenceElement, RelationshipElement, SubmodelElementCollection,
};
use crate::element::{ModelElement, ModelType};
use crate::facet::{
    DataSpecificationFacet, HasFacet, KindFacet, QualifiableFacet, ReferableFacet, SemanticsFacet,
};
use serde::{Deserialize, Serialize};

macro_rules! submodel_elements {
    (
        facets [$($facet:ty),+ $(,)?],
        variants $variants:tt $(,)?
    ) => {
        submodel_elements!(@enum $variants);
        $(
            submodel_elements!(@facet $facet, $variants);
        )+
    };

    (@enum [$($variant:ident),+ $(,)?]) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(tag = "modelType")]
        pub enum SubmodelElement {
            $($variant($variant),)+
        }

        impl SubmodelElement {
            pub fn as_element(&self) -> &dyn ModelElement {
                match self {
                    $(SubmodelElement::$variant(e) => e,)+
                }
            }
        }

        $(
            impl From<$variant> for SubmodelElement {
                fn from(element: $variant) -> Self {
                    SubmodelElement::$variant(element)
                }
            }
        )+
    };

    (@facet $facet:ty, [$($variant:ident),+ $(,)?]) => {
        impl HasFacet<$facet> for SubmodelElement {
            fn facet(&self) -> &$facet {
                match self {
                    $(SubmodelElement::$variant(e) => HasFacet::<$facet>::facet(e),)+
                }
            }

            fn facet_mut(&mut self) -> &mut $facet {
                match self {
                    $(SubmodelElement::$variant(e) => HasFacet::<$facet>::facet_mut(e),)+
                }
            }
        }
    };
}

submodel_elements! {
    facets [
        ReferableFacet,
        QualifiableFacet,
        SemanticsFacet,
        KindFacet,
        DataSpecificationFacet,
    ],
    variants [
        Property,
        MultiLanguageProperty,
        Range,
        Blob,
        File,
        ReferenceElement,
        RelationshipElement,
        SubmodelElementCollection,
        Capability,
        Operation,
        BasicEvent,
    ],
}

impl SubmodelElement {
    pub fn model_type(&self) -> ModelType {
        self.as_element().model_type()
    }

    /// The concrete element, if it is a `T`
    pub fn downcast_ref<T: ModelElement>(&self) -> Option<&T> {
        self.as_element().as_any().downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use aas_types::ModelingKind;

    #[test]
    fn test_facets_forward_to_variant() {
        let mut element: SubmodelElement = Property::builder()
            .id_short("speed")
            .kind(ModelingKind::Template)
            .build()
            .into();

        assert_eq!(element.id_short(), Some("speed"));
        assert_eq!(element.kind(), Some(ModelingKind::Template));

        element.set_id_short(Some("velocity".to_string()));
        let property = element.downcast_ref::<Property>().unwrap();
        assert_eq!(property.id_short(), Some("velocity"));
    }

    #[test]
    fn test_variant_is_part_of_equality() {
        let capability: SubmodelElement = Capability::builder().id_short("x").build().into();
        let event: SubmodelElement = BasicEvent::builder().id_short("x").build().into();

        assert_ne!(capability, event);
        assert_eq!(capability.model_type(), ModelType::Capability);
        assert_eq!(event.model_type(), ModelType::BasicEvent);
        assert!(capability.downcast_ref::<BasicEvent>().is_none());
    }

    #[test]
    fn test_serde_tag_uses_model_type_name() {
        let element: SubmodelElement = Range::builder().id_short("r").min("1").build().into();
        let json = serde_json::to_value(&element).unwrap();

        assert_eq!(json["modelType"], element.model_type().name());
        assert_eq!(json["idShort"], "r");
        assert_eq!(serde_json::from_value::<SubmodelElement>(json).unwrap(), element);
    }
}
