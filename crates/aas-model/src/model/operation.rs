//! Operation - A callable function with typed in/out parameters

use super::SubmodelElement;
use crate::facet::{
    attribute_iri, DataSpecificationFacet, KindFacet, QualifiableFacet, ReferableFacet,
    SemanticsFacet,
};
use serde::{Deserialize, Serialize};

/// A parameter of an operation, described by a submodel element
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationVariable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<SubmodelElement>,
}

model_element! {
    OperationVariable => OperationVariableBuilder,
    facets {},
    attributes [attribute_iri!("OperationVariable/value")],
}

impl OperationVariable {
    pub fn value(&self) -> Option<&SubmodelElement> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Option<SubmodelElement>) {
        self.value = value;
    }
}

impl From<SubmodelElement> for OperationVariable {
    fn from(value: SubmodelElement) -> Self {
        Self { value: Some(value) }
    }
}

builder_setters!(OperationVariableBuilder {
    opt value: impl Into<SubmodelElement> => set_value;
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    input_variables: Vec<OperationVariable>,

    #[serde(default)]
    output_variables: Vec<OperationVariable>,

    /// Parameters that are both read and written
    #[serde(default)]
    inoutput_variables: Vec<OperationVariable>,

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
    Operation => OperationBuilder,
    facets {
        referable: ReferableFacet,
        qualifiable: QualifiableFacet,
        semantics: SemanticsFacet,
        kind: KindFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [
        attribute_iri!("Operation/inputVariable"),
        attribute_iri!("Operation/outputVariable"),
        attribute_iri!("Operation/inoutputVariable"),
    ],
}

impl Operation {
    pub fn input_variables(&self) -> &[OperationVariable] {
        &self.input_variables
    }

    pub fn input_variables_mut(&mut self) -> &mut Vec<OperationVariable> {
        &mut self.input_variables
    }

    pub fn set_input_variables(&mut self, input_variables: Vec<OperationVariable>) {
        self.input_variables = input_variables;
    }

    pub fn output_variables(&self) -> &[OperationVariable] {
        &self.output_variables
    }

    pub fn output_variables_mut(&mut self) -> &mut Vec<OperationVariable> {
        &mut self.output_variables
    }

    pub fn set_output_variables(&mut self, output_variables: Vec<OperationVariable>) {
        self.output_variables = output_variables;
    }

    pub fn inoutput_variables(&self) -> &[OperationVariable] {
        &self.inoutput_variables
    }

    pub fn inoutput_variables_mut(&mut self) -> &mut Vec<OperationVariable> {
        &mut self.inoutput_variables
    }

    pub fn set_inoutput_variables(&mut self, inoutput_variables: Vec<OperationVariable>) {
        self.inoutput_variables = inoutput_variables;
    }
}

builder_setters!(OperationBuilder {
    list input_variable, input_variables: OperationVariable => input_variables_mut, set_input_variables;
    list output_variable, output_variables: OperationVariable => output_variables_mut, set_output_variables;
    list inoutput_variable, inoutput_variables: OperationVariable => inoutput_variables_mut, set_inoutput_variables;
});
