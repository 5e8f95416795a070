//! Constraints - Qualifiers and formulas attached to qualifiable elements

use crate::element::{ModelElement, ModelType};
use crate::facet::{attribute_iri, SemanticsFacet};
use aas_types::Reference;
use serde::{Deserialize, Serialize};

/// A type-value pair that makes additional statements about an element
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualifier {
    /// The qualifier type, e.g. `ExpressionSemantic`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    qualifier_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_id: Option<Reference>,

    #[serde(flatten)]
    semantics: SemanticsFacet,
}

model_element! {
    Qualifier => QualifierBuilder,
    facets { semantics: SemanticsFacet },
    attributes [
        attribute_iri!("Qualifier/type"),
        attribute_iri!("Qualifier/valueType"),
        attribute_iri!("Qualifier/value"),
        attribute_iri!("Qualifier/valueId"),
    ],
}

impl Qualifier {
    pub fn qualifier_type(&self) -> Option<&str> {
        self.qualifier_type.as_deref()
    }

    pub fn set_qualifier_type(&mut self, qualifier_type: Option<String>) {
        self.qualifier_type = qualifier_type;
    }

    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }

    pub fn set_value_type(&mut self, value_type: Option<String>) {
        self.value_type = value_type;
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub fn value_id(&self) -> Option<&Reference> {
        self.value_id.as_ref()
    }

    pub fn set_value_id(&mut self, value_id: Option<Reference>) {
        self.value_id = value_id;
    }
}

builder_setters!(QualifierBuilder {
    opt qualifier_type: impl Into<String> => set_qualifier_type;
    opt value_type: impl Into<String> => set_value_type;
    opt value: impl Into<String> => set_value;
    opt value_id: Reference => set_value_id;
});

/// A logical expression; the element it qualifies is valid only while it holds
///
/// The expression itself is opaque here, only its dependencies are modeled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formula {
    /// Elements the formula reads
    #[serde(default)]
    depends_ons: Vec<Reference>,
}

model_element! {
    Formula => FormulaBuilder,
    facets {},
    attributes [attribute_iri!("Formula/dependsOn")],
}

impl Formula {
    pub fn depends_ons(&self) -> &[Reference] {
        &self.depends_ons
    }

    pub fn depends_ons_mut(&mut self) -> &mut Vec<Reference> {
        &mut self.depends_ons
    }

    pub fn set_depends_ons(&mut self, depends_ons: Vec<Reference>) {
        self.depends_ons = depends_ons;
    }
}

builder_setters!(FormulaBuilder {
    list depends_on, depends_ons: Reference => depends_ons_mut, set_depends_ons;
});

/// Anything that can sit in a qualifiable element's qualifier list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "modelType")]
pub enum Constraint {
    Qualifier(Qualifier),
    Formula(Formula),
}

impl Constraint {
    pub fn model_type(&self) -> ModelType {
        self.as_element().model_type()
    }

    pub fn as_element(&self) -> &dyn ModelElement {
        match self {
            Constraint::Qualifier(q) => q,
            Constraint::Formula(f) => f,
        }
    }

    pub fn as_qualifier(&self) -> Option<&Qualifier> {
        match self {
            Constraint::Qualifier(q) => Some(q),
            Constraint::Formula(_) => None,
        }
    }

    pub fn as_formula(&self) -> Option<&Formula> {
        match self {
            Constraint::Formula(f) => Some(f),
            Constraint::Qualifier(_) => None,
        }
    }
}

impl From<Qualifier> for Constraint {
    fn from(qualifier: Qualifier) -> Self {
        Constraint::Qualifier(qualifier)
    }
}

impl From<Formula> for Constraint {
    fn from(formula: Formula) -> Self {
        Constraint::Formula(formula)
    }
}
