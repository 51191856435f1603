use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, PartialEq)]
pub enum ProjectionError {
    DuplicateField { record: String, field: String },
    UnknownField { record: String, field: String },
}

impl Display for ProjectionError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::DuplicateField { record, field } => write!(
                formatter,
                "field \"{}\" of {} is selected more than once",
                field, record
            ),
            Self::UnknownField { record, field } => {
                write!(formatter, "{} has no field \"{}\"", record, field)
            }
        }
    }
}

impl Error for ProjectionError {}
