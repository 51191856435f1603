use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, PartialEq)]
pub enum ConstructionError {
    MissingField { record: String, field: String },
    MultipleValues { record: String, field: String },
    TooManyPositional {
        record: String,
        expected: usize,
        given: usize,
    },
    UnknownField { record: String, field: String },
}

impl Display for ConstructionError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::MissingField { record, field } => {
                write!(formatter, "missing required field \"{}\" of {}", field, record)
            }
            Self::MultipleValues { record, field } => write!(
                formatter,
                "multiple values for field \"{}\" of {}",
                field, record
            ),
            Self::TooManyPositional {
                record,
                expected,
                given,
            } => write!(
                formatter,
                "too many positional values for {}: expected at most {}, got {}",
                record, expected, given
            ),
            Self::UnknownField { record, field } => {
                write!(formatter, "unknown field \"{}\" of {}", field, record)
            }
        }
    }
}

impl Error for ConstructionError {}
