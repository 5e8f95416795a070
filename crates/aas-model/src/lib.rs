//! # AAS Model
//!
//! The Asset Administration Shell metamodel as composable Rust types.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          aas-model                              │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  facet/   - Attribute groups, contracts, facet builders     ││
//! │  │  builder  - Generic builder core                            ││
//! │  │  element  - Model types and type-tagged equality            ││
//! │  │  model/   - Concrete elements and their builders            ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! │                               │                                 │
//! │                          aas-types                              │
//! │            (references, lang strings, identifiers)              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An element such as [`model::Property`] embeds the storage of each facet it
//! has (`Referable`, `Qualifiable`, `HasSemantics`, ...). The facet contract
//! traits and the facet builder traits are blanket-implemented over that
//! storage, so adding an element never means re-implementing a facet.
//!
//! Bring the traits into scope with the prelude:
//!
//! ```
//! use aas_model::prelude::*;
//! use aas_model::model::Property;
//!
//! let p = Property::builder().id_short("rpm").value("1450").build();
//! assert_eq!(p.id_short(), Some("rpm"));
//! ```

#[macro_use]
mod macros;

pub mod builder;
pub mod element;
pub mod facet;
pub mod model;

/// Traits needed to read, mutate and build elements
pub mod prelude {
    pub use crate::builder::Builder;
    pub use crate::element::{ModelElement, ModelType, TypedElement};
    pub use crate::facet::{
        FacetData, HasDataSpecification, HasDataSpecificationBuilder, HasFacet, HasKind,
        HasKindBuilder, HasSemantics, HasSemanticsBuilder, Identifiable, IdentifiableBuilder,
        Qualifiable, QualifiableBuilder, Referable, ReferableBuilder,
    };
}

// Re-export commonly used types
pub use builder::Builder;
pub use element::{ModelElement, ModelType, TypedElement};
pub use model::{
    AssetAdministrationShell, Constraint, ConceptDescription, Submodel, SubmodelElement,
};
