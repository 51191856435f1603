use crate::types::{TypeTag, Value};

// Redeclared names keep their first position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldSpecification {
    entries: Vec<FieldEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FieldEntry {
    name: String,
    type_: Option<TypeTag>,
    default: Option<Value>,
}

impl FieldEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_(&self) -> Option<&TypeTag> {
        self.type_.as_ref()
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

impl FieldSpecification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_maps<N: Into<String>, V: Into<Value>, M: Into<String>>(
        defaults: impl IntoIterator<Item = (N, V)>,
        types: impl IntoIterator<Item = (M, TypeTag)>,
    ) -> Self {
        let mut specification = Self::new();

        for (name, default) in defaults {
            specification.declare(name.into(), None, Some(default.into()));
        }

        for (name, type_) in types {
            specification.declare(name.into(), Some(type_), None);
        }

        specification
    }

    pub fn required(self, name: impl Into<String>) -> Self {
        self.field(name, None, None)
    }

    pub fn typed(self, name: impl Into<String>, type_: TypeTag) -> Self {
        self.field(name, Some(type_), None)
    }

    pub fn defaulted(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.field(name, None, Some(default.into()))
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        type_: Option<TypeTag>,
        default: Option<Value>,
    ) -> Self {
        self.declare(name.into(), type_, default);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(FieldEntry::name)
    }

    pub(crate) fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    fn declare(&mut self, name: String, type_: Option<TypeTag>, default: Option<Value>) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
            if type_.is_some() {
                entry.type_ = type_;
            }

            if default.is_some() {
                entry.default = default;
            }
        } else {
            self.entries.push(FieldEntry {
                name,
                type_,
                default,
            });
        }
    }
}
