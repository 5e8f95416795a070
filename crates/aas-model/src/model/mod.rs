//! Model - The concrete elements of the metamodel
//!
//! Each element is a plain struct composed of its own attributes and the
//! facet storage it embeds. Equality and hashing are derived, so two elements
//! are equal exactly when they have the same type and every declared
//! attribute compares equal, sequences included in order.

pub mod administrative_information;
pub mod asset;
pub mod capability;
pub mod collection;
pub mod concept_description;
pub mod constraint;
pub mod data_element;
pub mod event;
pub mod operation;
pub mod relationship;
pub mod shell;
pub mod submodel;
pub mod submodel_element;
pub mod view;

pub use administrative_information::{AdministrativeInformation, AdministrativeInformationBuilder};
pub use asset::{Asset, AssetBuilder};
pub use capability::{Capability, CapabilityBuilder};
pub use collection::{SubmodelElementCollection, SubmodelElementCollectionBuilder};
pub use concept_description::{ConceptDescription, ConceptDescriptionBuilder};
pub use constraint::{Constraint, Formula, FormulaBuilder, Qualifier, QualifierBuilder};
pub use data_element::{
    Blob, BlobBuilder, File, FileBuilder, MultiLanguageProperty, MultiLanguagePropertyBuilder,
    Property, PropertyBuilder, Range, RangeBuilder, ReferenceElement, ReferenceElementBuilder,
};
pub use event::{BasicEvent, BasicEventBuilder};
pub use operation::{Operation, OperationBuilder, OperationVariable, OperationVariableBuilder};
pub use relationship::{RelationshipElement, RelationshipElementBuilder};
pub use shell::{
    AssetAdministrationShell, AssetAdministrationShellBuilder, AssetInformation,
    AssetInformationBuilder,
};
pub use submodel::{Submodel, SubmodelBuilder};
pub use submodel_element::SubmodelElement;
pub use view::{View, ViewBuilder};
