mod descriptor;
mod resolve;
mod specification;

pub use descriptor::Field;
pub use resolve::{resolve, Resolution, RESERVED_PREFIX};
pub use specification::FieldSpecification;
