use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeTag {
    Any,
    Boolean,
    Bytes,
    Float,
    Integer,
    Named(Arc<str>),
    Record,
    String,
    Tuple,
    Unit,
}

impl TypeTag {
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::Named(name.into())
    }

    pub fn to_id(&self) -> String {
        match self {
            Self::Any => "Any".into(),
            Self::Boolean => "Boolean".into(),
            Self::Bytes => "Bytes".into(),
            Self::Float => "Float".into(),
            Self::Integer => "Integer".into(),
            Self::Named(name) => name.to_string(),
            Self::Record => "Record".into(),
            Self::String => "String".into(),
            Self::Tuple => "Tuple".into(),
            Self::Unit => "Unit".into(),
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.to_id())
    }
}
