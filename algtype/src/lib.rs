mod error;
pub mod field;
pub mod instance;
pub mod record_type;
pub mod types;

pub use error::*;
pub use field::{Field, FieldSpecification};
pub use instance::{Arguments, Record};
pub use record_type::{Base, RecordType, Selection};
pub use types::{TypeTag, Value};
