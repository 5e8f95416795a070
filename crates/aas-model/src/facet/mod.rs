//! Facets - The orthogonal attribute groups elements are composed from
//!
//! Every facet lives in its own module and consists of three parts:
//!
//! - a storage struct (e.g. [`ReferableFacet`]) holding the facet's attributes,
//! - a contract trait (e.g. [`Referable`]) with getter/setter pairs, available
//!   to every type that implements [`HasFacet`] for the storage struct,
//! - a builder trait (e.g. [`ReferableBuilder`]) with fluent setters, available
//!   to every [`Builder`](crate::builder::Builder) whose target has the facet.
//!
//! Facets never refer to each other (except `Identifiable`, which extends
//! `Referable`), so a new facet is added without touching the others.

pub mod data_specification;
pub mod identifiable;
pub mod kind;
pub mod qualifiable;
pub mod referable;
pub mod semantics;

pub use data_specification::{DataSpecificationFacet, HasDataSpecification, HasDataSpecificationBuilder};
pub use identifiable::{Identifiable, IdentifiableBuilder, IdentifiableFacet};
pub use kind::{HasKind, HasKindBuilder, KindFacet};
pub use qualifiable::{Qualifiable, QualifiableBuilder, QualifiableFacet};
pub use referable::{Referable, ReferableBuilder, ReferableFacet};
pub use semantics::{HasSemantics, HasSemanticsBuilder, SemanticsFacet};

use core::fmt::Debug;
use core::hash::Hash;

/// Storage of one facet's attributes
///
/// Implementors derive equality and hashing over their fields in declared
/// order; elements embedding them inherit that order.
pub trait FacetData: Debug + Clone + Default + PartialEq + Eq + Hash {
    /// IRIs of the facet's attributes, in field order
    const ATTRIBUTE_IRIS: &'static [&'static str];
}

/// An element that carries the storage of facet `F`
pub trait HasFacet<F: FacetData> {
    fn facet(&self) -> &F;
    fn facet_mut(&mut self) -> &mut F;
}

/// Expands to the full IRI of a metamodel attribute
macro_rules! attribute_iri {
    ($path:literal) => {
        concat!("https://admin-shell.io/aas/3/0/RC01/", $path)
    };
}
pub(crate) use attribute_iri;

/// Namespace shared by every attribute IRI
pub const IRI_BASE: &str = attribute_iri!("");

/// Whether `iri` names an attribute of this metamodel version
pub fn is_model_iri(iri: &str) -> bool {
    iri.starts_with(IRI_BASE)
}
