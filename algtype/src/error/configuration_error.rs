use crate::types::TypeTag;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigurationError {
    ConflictingField {
        record: String,
        field: String,
        left: TypeTag,
        right: TypeTag,
    },
    InvalidName {
        record: String,
        field: String,
    },
    RecordBase {
        record: String,
        base: String,
    },
    ReservedName {
        record: String,
        field: String,
    },
}

impl Display for ConfigurationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::ConflictingField {
                record,
                field,
                left,
                right,
            } => write!(
                formatter,
                "field \"{}\" of {} is declared as both {} and {}",
                field, record, left, right
            ),
            Self::InvalidName { record, field } => {
                write!(formatter, "field name {:?} of {} is not an identifier", field, record)
            }
            Self::RecordBase { record, base } => write!(
                formatter,
                "record type {} cannot be used as a base of {}",
                base, record
            ),
            Self::ReservedName { record, field } => {
                write!(formatter, "field name \"{}\" of {} is reserved", field, record)
            }
        }
    }
}

impl Error for ConfigurationError {}
