mod configuration_error;
mod construction_error;
mod projection_error;

pub use configuration_error::ConfigurationError;
pub use construction_error::ConstructionError;
pub use projection_error::ProjectionError;
use std::error;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    Configuration(ConfigurationError),
    Construction(ConstructionError),
    Projection(ProjectionError),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Configuration(error) => write!(formatter, "{}", error),
            Self::Construction(error) => write!(formatter, "{}", error),
            Self::Projection(error) => write!(formatter, "{}", error),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Configuration(error) => Some(error),
            Self::Construction(error) => Some(error),
            Self::Projection(error) => Some(error),
        }
    }
}

impl From<ConfigurationError> for Error {
    fn from(error: ConfigurationError) -> Self {
        Self::Configuration(error)
    }
}

impl From<ConstructionError> for Error {
    fn from(error: ConstructionError) -> Self {
        Self::Construction(error)
    }
}

impl From<ProjectionError> for Error {
    fn from(error: ProjectionError) -> Self {
        Self::Projection(error)
    }
}
