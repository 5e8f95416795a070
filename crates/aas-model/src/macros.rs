/// Wires a concrete element into the facet and builder framework.
///
/// Given the element type, its builder name, the facet fields it embeds and
/// the IRIs of its own attributes, this generates:
///
/// - `HasFacet` impls (which in turn unlock the facet contract traits and,
///   for the builder, the facet builder traits),
/// - the `TypedElement` impl with the attribute IRIs in field order
///   (own attributes first, then facets in the listed order),
/// - the concrete builder struct and its `Builder` impl,
/// - `new()` and `builder()` on the element.
///
/// The element struct must declare its own attributes first and then the
/// facet fields in the order listed here, so that the derived equality and
/// hash and `attribute_iris()` follow the same order.
macro_rules! model_element {
    (
        $ty:ident => $builder:ident,
        facets { $($field:ident: $facet:ty),* $(,)? },
        attributes [$($iri:expr),* $(,)?] $(,)?
    ) => {
        $(
            impl $crate::facet::HasFacet<$facet> for $ty {
                fn facet(&self) -> &$facet {
                    &self.$field
                }

                fn facet_mut(&mut self) -> &mut $facet {
                    &mut self.$field
                }
            }
        )*

        impl $crate::element::TypedElement for $ty {
            const MODEL_TYPE: $crate::element::ModelType = $crate::element::ModelType::$ty;

            #[allow(unused_mut)]
            fn attribute_iris() -> Vec<&'static str> {
                let mut iris: Vec<&'static str> = vec![$($iri),*];
                $(
                    iris.extend_from_slice(<$facet as $crate::facet::FacetData>::ATTRIBUTE_IRIS);
                )*
                iris
            }
        }

        #[doc = concat!("Builder for [`", stringify!($ty), "`]")]
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            instance: Option<$ty>,
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl $crate::builder::Builder for $builder {
            type Target = $ty;

            fn instance_slot(&self) -> &Option<$ty> {
                &self.instance
            }

            fn instance_slot_mut(&mut self) -> &mut Option<$ty> {
                &mut self.instance
            }
        }

        impl $ty {
            #[doc = concat!("A bare [`", stringify!($ty), "`] with every attribute defaulted")]
            pub fn new() -> Self {
                Self::default()
            }

            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    };
}

/// Inherent setter on a concrete builder for one of the element's own attributes.
///
/// `opt` attributes take the bare value and store `Some`, `list` attributes
/// get an append setter and a replace setter.
macro_rules! builder_setters {
    ($builder:ident { $($rest:tt)* }) => {
        impl $builder {
            builder_setters!(@each $($rest)*);
        }
    };
    (@each) => {};
    (@each opt $name:ident: $arg:ty => $setter:ident; $($rest:tt)*) => {
        pub fn $name(&mut self, $name: $arg) -> &mut Self {
            use $crate::builder::Builder;
            self.building_instance().$setter(Some($name.into()));
            self
        }
        builder_setters!(@each $($rest)*);
    };
    (@each list $one:ident, $all:ident: $item:ty => $getter_mut:ident, $setter:ident; $($rest:tt)*) => {
        pub fn $one(&mut self, $one: impl Into<$item>) -> &mut Self {
            use $crate::builder::Builder;
            self.building_instance().$getter_mut().push($one.into());
            self
        }

        pub fn $all(&mut self, $all: Vec<$item>) -> &mut Self {
            use $crate::builder::Builder;
            self.building_instance().$setter($all);
            self
        }
        builder_setters!(@each $($rest)*);
    };
}
