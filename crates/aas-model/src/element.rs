//! Element typing and type-tagged structural equality
//!
//! Statically, every concrete element derives `PartialEq`/`Hash` over its
//! declared attributes, so two values of the same type compare attribute by
//! attribute. [`ModelElement`] extends that to trait objects: comparing two
//! `&dyn ModelElement` of different concrete types yields `false`, and hashes
//! are prefixed with the [`ModelType`] so equal hashes imply equal types.

use aas_types::ModelError;
use core::any::Any;
use core::fmt::Debug;
use core::hash::{Hash, Hasher};

macro_rules! model_types {
    ($($variant:ident),+ $(,)?) => {
        /// Every concrete element type of the metamodel
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ModelType {
            $($variant,)+
        }

        impl ModelType {
            pub const ALL: &'static [ModelType] = &[$(ModelType::$variant),+];

            /// Metamodel name, e.g. `BasicEvent`
            pub fn name(&self) -> &'static str {
                match self {
                    $(ModelType::$variant => stringify!($variant),)+
                }
            }

            /// Type IRI, e.g. `aas:BasicEvent`
            pub fn iri(&self) -> &'static str {
                match self {
                    $(ModelType::$variant => concat!("aas:", stringify!($variant)),)+
                }
            }
        }
    };
}

model_types! {
    AssetAdministrationShell,
    AssetInformation,
    Asset,
    Submodel,
    ConceptDescription,
    View,
    AdministrativeInformation,
    Qualifier,
    Formula,
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
    OperationVariable,
    BasicEvent,
}

impl core::fmt::Display for ModelType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for ModelType {
    type Err = ModelError;

    /// Accepts either the name (`Submodel`) or the IRI (`aas:Submodel`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s || t.iri() == s)
            .ok_or_else(|| ModelError::UnknownVariant {
                kind: "ModelType",
                value: s.to_string(),
            })
    }
}

/// A concrete element type with a fixed place in the metamodel
pub trait TypedElement {
    const MODEL_TYPE: ModelType;

    /// IRIs of all declared attributes, in field order
    ///
    /// Serializers use these to map attributes; they carry no behavior here.
    fn attribute_iris() -> Vec<&'static str>;
}

/// Object-safe view of any concrete element
pub trait ModelElement: Debug + Any + 'static {
    fn model_type(&self) -> ModelType;

    fn as_any(&self) -> &dyn Any;

    /// Structural equality across trait objects; `false` for different types
    fn eq_dyn(&self, other: &dyn ModelElement) -> bool;

    /// Feeds the model type, then every declared attribute, into `state`
    fn hash_dyn(&self, state: &mut dyn Hasher);
}

impl<T> ModelElement for T
where
    T: TypedElement + Eq + Hash + Debug + 'static,
{
    fn model_type(&self) -> ModelType {
        T::MODEL_TYPE
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn ModelElement) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn hash_dyn(&self, mut state: &mut dyn Hasher) {
        T::MODEL_TYPE.hash(&mut state);
        self.hash(&mut state);
    }
}

impl PartialEq for dyn ModelElement {
    fn eq(&self, other: &Self) -> bool {
        self.eq_dyn(other)
    }
}

impl Eq for dyn ModelElement {}

impl Hash for dyn ModelElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_dyn(state);
    }
}
