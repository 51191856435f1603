mod frozen_arguments;
mod memo;
mod parameter;
mod signature;

pub use frozen_arguments::{frozen_arguments_type, FrozenArguments};
pub use memo::Memo;
pub use parameter::Parameter;
pub use signature::Signature;
