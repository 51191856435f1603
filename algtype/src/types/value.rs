use super::type_tag::TypeTag;
use crate::instance::Record;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

// Floats compare by bits with -0.0 and NaN folded.
#[derive(Clone, Debug)]
pub enum Value {
    Boolean(bool),
    Bytes(Arc<[u8]>),
    Float(f64),
    Integer(i64),
    Record(Record),
    String(Arc<str>),
    Tuple(Arc<[Value]>),
    Unit,
}

impl Value {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Self::Boolean(_) => TypeTag::Boolean,
            Self::Bytes(_) => TypeTag::Bytes,
            Self::Float(_) => TypeTag::Float,
            Self::Integer(_) => TypeTag::Integer,
            Self::Record(_) => TypeTag::Record,
            Self::String(_) => TypeTag::String,
            Self::Tuple(_) => TypeTag::Tuple,
            Self::Unit => TypeTag::Unit,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(float) => Some(*float),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(integer) => Some(*integer),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }
}

fn float_bits(float: f64) -> u64 {
    if float == 0.0 {
        0.0f64.to_bits()
    } else if float.is_nan() {
        f64::NAN.to_bits()
    } else {
        float.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(one), Self::Boolean(other)) => one == other,
            (Self::Bytes(one), Self::Bytes(other)) => one == other,
            (Self::Float(one), Self::Float(other)) => float_bits(*one) == float_bits(*other),
            (Self::Integer(one), Self::Integer(other)) => one == other,
            (Self::Record(one), Self::Record(other)) => one == other,
            (Self::String(one), Self::String(other)) => one == other,
            (Self::Tuple(one), Self::Tuple(other)) => one == other,
            (Self::Unit, Self::Unit) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::Boolean(boolean) => boolean.hash(state),
            Self::Bytes(bytes) => bytes.hash(state),
            Self::Float(float) => float_bits(*float).hash(state),
            Self::Integer(integer) => integer.hash(state),
            Self::Record(record) => record.hash(state),
            Self::String(string) => string.hash(state),
            Self::Tuple(elements) => elements.hash(state),
            Self::Unit => {}
        }
    }
}

impl Display for Value {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Boolean(boolean) => write!(formatter, "{}", boolean),
            Self::Bytes(bytes) => write!(formatter, "{:?}", bytes),
            Self::Float(float) => write!(formatter, "{:?}", float),
            Self::Integer(integer) => write!(formatter, "{}", integer),
            Self::Record(record) => write!(formatter, "{}", record),
            Self::String(string) => write!(formatter, "{:?}", string),
            Self::Tuple(elements) => write!(
                formatter,
                "({})",
                elements
                    .iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::Unit => write!(formatter, "()"),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Boolean(boolean)
    }
}

impl From<i32> for Value {
    fn from(integer: i32) -> Self {
        Self::Integer(integer.into())
    }
}

impl From<i64> for Value {
    fn from(integer: i64) -> Self {
        Self::Integer(integer)
    }
}

impl From<f64> for Value {
    fn from(float: f64) -> Self {
        Self::Float(float)
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::String(string.into())
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Self::String(string.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Self::Tuple(elements.into())
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}
