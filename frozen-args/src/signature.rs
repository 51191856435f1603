use super::parameter::Parameter;
use algtype::{FieldSpecification, TypeTag};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Signature {
    parameters: Vec<Parameter>,
}

impl Signature {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    // Parameters without annotations are declared as `Any`.
    pub fn to_specification(&self) -> FieldSpecification {
        self.parameters
            .iter()
            .fold(FieldSpecification::new(), |specification, parameter| {
                specification.field(
                    parameter.name(),
                    Some(parameter.annotation().cloned().unwrap_or(TypeTag::Any)),
                    parameter.default().cloned(),
                )
            })
    }
}
