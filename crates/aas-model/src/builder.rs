//! Builder - The generic core every concrete builder plugs into
//!
//! A concrete builder only has to say which type it builds (`Target`) and
//! where it keeps the instance under construction. Everything else comes from
//! this trait and from the facet builder traits in [`crate::facet`], which are
//! blanket-implemented for every `Builder` whose target has the facet.
//!
//! Because the facet setters are defined on the builder's own `Self`, each of
//! them returns the concrete builder, so facets can be chained in any order:
//!
//! ```
//! use aas_model::prelude::*;
//! use aas_model::model::BasicEvent;
//! use aas_types::{Key, KeyElements, KeyType, LangString, ModelingKind, Reference};
//!
//! let observed = Reference::from_key(Key::new(KeyElements::Property, "temp", KeyType::IdShort));
//!
//! let event = BasicEvent::builder()
//!     .kind(ModelingKind::Instance)          // HasKind
//!     .observed(observed.clone())            // BasicEvent itself
//!     .id_short("overheat")                  // Referable
//!     .description(LangString::new("en", "Raised when too hot"))
//!     .build();
//!
//! assert_eq!(event.id_short(), Some("overheat"));
//! assert_eq!(event.observed(), Some(&observed));
//! ```
//!
//! ## Lifecycle
//!
//! A builder is either not yet materialized or materialized. The first setter
//! (or the first `build()`) creates the bare instance through
//! [`Builder::new_building_instance`]; later calls write onto that same
//! instance. There is no consumed state: `build()` can be called repeatedly
//! and setters may follow it.

/// Core of every concrete builder
pub trait Builder: Sized {
    /// The concrete element this builder produces
    type Target: Default;

    /// Slot holding the instance under construction
    fn instance_slot(&self) -> &Option<Self::Target>;

    /// Mutable access to the slot holding the instance under construction
    fn instance_slot_mut(&mut self) -> &mut Option<Self::Target>;

    /// Factory for the bare instance, with every attribute defaulted
    fn new_building_instance() -> Self::Target {
        Self::Target::default()
    }

    /// Whether the bare instance has been created yet
    fn is_materialized(&self) -> bool {
        self.instance_slot().is_some()
    }

    /// The instance under construction, created on first use
    fn building_instance(&mut self) -> &mut Self::Target {
        self.instance_slot_mut().get_or_insert_with(|| {
            tracing::trace!(
                target_type = core::any::type_name::<Self::Target>(),
                "materializing building instance"
            );
            Self::new_building_instance()
        })
    }

    /// Hand out the built element
    ///
    /// The builder keeps its instance, so calling `build()` again without
    /// intervening setters yields an equal element and never re-materializes.
    fn build(&mut self) -> Self::Target
    where
        Self::Target: Clone,
    {
        let built = self.building_instance().clone();
        tracing::trace!(
            target_type = core::any::type_name::<Self::Target>(),
            "built element"
        );
        built
    }

    /// Consume the builder and move the instance out
    fn finish(mut self) -> Self::Target {
        self.instance_slot_mut()
            .take()
            .unwrap_or_else(Self::new_building_instance)
    }
}
