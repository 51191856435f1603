use super::RecordType;

#[derive(Clone, Debug, PartialEq)]
pub enum Base {
    Opaque(String),
    Record(RecordType),
}

impl Base {
    pub fn opaque(label: impl Into<String>) -> Self {
        Self::Opaque(label.into())
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Opaque(label) => label,
            Self::Record(record_type) => record_type.name(),
        }
    }
}

impl From<RecordType> for Base {
    fn from(record_type: RecordType) -> Self {
        Self::Record(record_type)
    }
}
