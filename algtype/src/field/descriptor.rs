use crate::types::{TypeTag, Value};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Field {
    name: Arc<str>,
    type_: TypeTag,
    default: Option<Value>,
}

impl Field {
    pub(crate) fn new(name: impl Into<Arc<str>>, type_: TypeTag, default: Option<Value>) -> Self {
        Self {
            name: name.into(),
            type_,
            default,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_(&self) -> &TypeTag {
        &self.type_
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    pub(crate) fn shared_name(&self) -> &Arc<str> {
        &self.name
    }

    // The other field's type always wins. Its default wins only if it has one.
    pub(crate) fn overridden_by(&self, other: &Self) -> Self {
        Self::new(
            self.name.clone(),
            other.type_.clone(),
            other.default.clone().or_else(|| self.default.clone()),
        )
    }
}

impl Display for Field {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}: {}", self.name, self.type_)?;

        if let Some(default) = &self.default {
            write!(formatter, " = {}", default)?;
        }

        Ok(())
    }
}
