use algtype::{TypeTag, Value};

#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    name: String,
    annotation: Option<TypeTag>,
    default: Option<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            default: None,
        }
    }

    pub fn with_annotation(mut self, annotation: TypeTag) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotation(&self) -> Option<&TypeTag> {
        self.annotation.as_ref()
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}
