mod arguments;
mod binder;
mod record;

pub use arguments::Arguments;
pub(crate) use binder::bind;
pub use record::Record;
