mod type_tag;
mod value;

pub use type_tag::*;
pub use value::*;
