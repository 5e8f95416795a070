//! Property tests for structural equality and hashing.
//!
//! Run with: `cargo test -p aas-model --test properties`

use aas_model::model::{Capability, Constraint, Property, Qualifier, Submodel, SubmodelElement};
use aas_model::prelude::*;
use aas_types::{Key, KeyElements, KeyType, LangString, ModelingKind, Reference};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Raw attribute values a property is built from
#[derive(Debug, Clone)]
struct PropertyInput {
    id_short: Option<String>,
    descriptions: Vec<(String, String)>,
    categories: Vec<String>,
    semantic_id: Option<String>,
    kind: Option<ModelingKind>,
    qualifier_types: Vec<String>,
    value: Option<String>,
}

fn property_input() -> impl Strategy<Value = PropertyInput> {
    (
        proptest::option::of("[a-zA-Z][a-zA-Z0-9_]{0,8}"),
        proptest::collection::vec(("(en|de|fr)", "[a-z ]{0,12}"), 0..3),
        proptest::collection::vec("(CONSTANT|PARAMETER|VARIABLE)", 0..3),
        proptest::option::of("urn:example:[a-z]{1,6}"),
        proptest::option::of(prop_oneof![
            Just(ModelingKind::Template),
            Just(ModelingKind::Instance)
        ]),
        proptest::collection::vec("[A-Z][a-z]{0,6}", 0..3),
        proptest::option::of("[0-9]{1,4}"),
    )
        .prop_map(
            |(id_short, descriptions, categories, semantic_id, kind, qualifier_types, value)| {
                PropertyInput {
                    id_short,
                    descriptions,
                    categories,
                    semantic_id,
                    kind,
                    qualifier_types,
                    value,
                }
            },
        )
}

fn reference(iri: &str) -> Reference {
    Reference::from_key(Key::new(KeyElements::GlobalReference, iri, KeyType::Iri))
}

/// Builds the property, calling the facet setters front to back or back to front
fn build_property(input: &PropertyInput, reversed: bool) -> Property {
    let mut builder = Property::builder();
    let mut steps: Vec<Box<dyn Fn(&mut aas_model::model::PropertyBuilder)>> = Vec::new();

    if let Some(id_short) = input.id_short.clone() {
        steps.push(Box::new(move |b| {
            b.id_short(id_short.clone());
        }));
    }
    let descriptions: Vec<LangString> = input
        .descriptions
        .iter()
        .map(|(lang, text)| LangString::new(lang.as_str(), text.as_str()))
        .collect();
    steps.push(Box::new(move |b| {
        b.descriptions(descriptions.clone());
    }));
    let categories = input.categories.clone();
    steps.push(Box::new(move |b| {
        b.referable_categories(categories.clone());
    }));
    if let Some(semantic_id) = input.semantic_id.clone() {
        steps.push(Box::new(move |b| {
            b.semantic_id(reference(&semantic_id));
        }));
    }
    if let Some(kind) = input.kind {
        steps.push(Box::new(move |b| {
            b.kind(kind);
        }));
    }
    let qualifiers: Vec<Constraint> = input
        .qualifier_types
        .iter()
        .map(|t| Qualifier::builder().qualifier_type(t.as_str()).build().into())
        .collect();
    steps.push(Box::new(move |b| {
        b.qualifiers(qualifiers.clone());
    }));
    if let Some(value) = input.value.clone() {
        steps.push(Box::new(move |b| {
            b.value(value.clone());
        }));
    }

    if reversed {
        steps.reverse();
    }
    for step in &steps {
        step(&mut builder);
    }
    builder.build()
}

/// Builds the same property as `build_property`, through the element's own
/// setters instead of a builder
fn set_property(input: &PropertyInput) -> Property {
    let mut property = Property::new();
    property.set_id_short(input.id_short.clone());
    property.set_descriptions(
        input
            .descriptions
            .iter()
            .map(|(lang, text)| LangString::new(lang.as_str(), text.as_str()))
            .collect(),
    );
    property.set_referable_categories(input.categories.clone());
    property.set_semantic_id(input.semantic_id.as_deref().map(reference));
    property.set_kind(input.kind);
    property.set_qualifiers(
        input
            .qualifier_types
            .iter()
            .map(|t| {
                let mut qualifier = Qualifier::new();
                qualifier.set_qualifier_type(Some(t.clone()));
                Constraint::from(qualifier)
            })
            .collect(),
    );
    property.set_value(input.value.clone());
    property
}

/// Narrow inputs, so that independently drawn properties are often equal
fn small_property_input() -> impl Strategy<Value = PropertyInput> {
    (
        proptest::option::of("[ab]"),
        proptest::option::of(prop_oneof![
            Just(ModelingKind::Template),
            Just(ModelingKind::Instance)
        ]),
        proptest::option::of("[01]"),
    )
        .prop_map(|(id_short, kind, value)| PropertyInput {
            id_short,
            descriptions: Vec::new(),
            categories: Vec::new(),
            semantic_id: None,
            kind,
            qualifier_types: Vec::new(),
            value,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Equality is reflexive and agrees with hashing.
    #[test]
    fn property_equality_is_reflexive(input in property_input()) {
        let p = build_property(&input, false);
        prop_assert_eq!(&p, &p.clone());
        prop_assert_eq!(hash_of(&p), hash_of(&p.clone()));
    }

    /// PROPERTY: Equality is symmetric, and equal elements hash equally.
    #[test]
    fn property_equality_is_symmetric_and_hash_consistent(
        a in property_input(),
        b in property_input(),
    ) {
        let a = build_property(&a, false);
        let b = build_property(&b, false);
        prop_assert_eq!(a == b, b == a);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    /// PROPERTY: Equality is transitive across construction paths.
    #[test]
    fn property_equality_is_transitive(input in property_input()) {
        let built = build_property(&input, false);
        let set = set_property(&input);
        let reversed = build_property(&input, true);
        prop_assert_eq!(&built, &set);
        prop_assert_eq!(&set, &reversed);
        prop_assert_eq!(&built, &reversed);
        prop_assert_eq!(hash_of(&built), hash_of(&set));
    }

    /// PROPERTY: Equality is transitive over independently drawn elements.
    #[test]
    fn property_equality_is_transitive_for_independent_values(
        a in small_property_input(),
        b in small_property_input(),
        c in small_property_input(),
    ) {
        let a = build_property(&a, false);
        let b = set_property(&b);
        let c = build_property(&c, true);
        if a == b && b == c {
            prop_assert_eq!(&a, &c);
        }
        if a == b && a != c {
            prop_assert_ne!(&b, &c);
        }
    }

    /// PROPERTY: The order of setter calls does not change the result.
    #[test]
    fn property_setter_order_is_irrelevant(input in property_input()) {
        let forward = build_property(&input, false);
        let backward = build_property(&input, true);
        prop_assert_eq!(hash_of(&forward), hash_of(&backward));
        prop_assert_eq!(forward, backward);
    }

    /// PROPERTY: Changing any one attribute breaks equality.
    #[test]
    fn property_differing_value_breaks_equality(input in property_input(), suffix in "[a-z]{1,3}") {
        let original = build_property(&input, false);
        let mut changed = original.clone();
        let value = original.value().map(|v| format!("{v}{suffix}")).unwrap_or(suffix);
        changed.set_value(Some(value));
        prop_assert_ne!(original, changed);
    }

    /// PROPERTY: Elements of different types never compare equal, even with the same facets.
    #[test]
    fn property_types_never_cross_compare(id_short in "[a-z]{1,8}", kind in any::<bool>()) {
        let kind = if kind { ModelingKind::Instance } else { ModelingKind::Template };
        let property = Property::builder().id_short(id_short.clone()).kind(kind).build();
        let capability = Capability::builder().id_short(id_short).kind(kind).build();

        let p: &dyn ModelElement = &property;
        let c: &dyn ModelElement = &capability;
        prop_assert!(p != c);
        prop_assert!(SubmodelElement::from(property.clone()) != SubmodelElement::from(capability.clone()));
    }

    /// PROPERTY: Building twice without setters in between returns equal elements.
    #[test]
    fn property_build_is_idempotent(id_short in "[a-z]{1,8}", elements in 0usize..4) {
        let mut builder = Submodel::builder();
        builder.id_short(id_short);
        for i in 0..elements {
            builder.submodel_element(Property::builder().id_short(format!("p{i}")).build());
        }
        let first = builder.build();
        let second = builder.build();
        prop_assert_eq!(first.submodel_elements().len(), elements);
        prop_assert_eq!(first, second);
    }
}
