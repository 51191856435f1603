use crate::error::ConstructionError;
use crate::record_type::RecordType;
use crate::types::Value;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

// Equal records hash equally regardless of field order.
#[derive(Clone)]
pub struct Record {
    type_: RecordType,
    values: Arc<[Value]>,
}

impl Record {
    // Values must be in the field order of the type.
    pub(crate) fn new(type_: RecordType, values: Vec<Value>) -> Self {
        Self {
            type_,
            values: values.into(),
        }
    }

    pub fn record_type(&self) -> &RecordType {
        &self.type_
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.type_.position(name).map(|index| &self.values[index])
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.type_.field_names().zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_pairs(&self) -> Vec<(String, Value)> {
        self.iter()
            .map(|(name, value)| (name.into(), value.clone()))
            .collect()
    }

    pub fn replace(&self, name: &str, value: impl Into<Value>) -> Result<Self, ConstructionError> {
        let index = self
            .type_
            .position(name)
            .ok_or_else(|| ConstructionError::UnknownField {
                record: self.type_.name().into(),
                field: name.into(),
            })?;
        let mut values = self.values.to_vec();

        values[index] = value.into();

        Ok(Self::new(self.type_.clone(), values))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.type_ == other.type_
            && self
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for index in self.type_.canonical_order() {
            self.type_.fields()[*index].name().hash(state);
            self.values[*index].hash(state);
        }
    }
}

impl Debug for Record {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let mut debug = formatter.debug_struct(self.type_.name());

        for (name, value) in self.iter() {
            debug.field(name, value);
        }

        debug.finish()
    }
}

impl Display for Record {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "{}({})",
            self.type_.name(),
            self.iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
