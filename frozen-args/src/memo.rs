use super::frozen_arguments::FrozenArguments;
use algtype::{Arguments, ConstructionError, Record, Value};
use std::collections::HashMap;
use tracing::trace;

pub struct Memo<F> {
    arguments: FrozenArguments,
    function: F,
    cache: HashMap<Record, Value>,
}

impl<F: FnMut(&Record) -> Value> Memo<F> {
    pub fn new(arguments: FrozenArguments, function: F) -> Self {
        Self {
            arguments,
            function,
            cache: HashMap::new(),
        }
    }

    pub fn call(&mut self, arguments: Arguments) -> Result<Value, ConstructionError> {
        let record = self.arguments.freeze(arguments)?;

        if let Some(value) = self.cache.get(&record) {
            trace!(record = %record, "memo hit");
            return Ok(value.clone());
        }

        let value = (self.function)(&record);

        self.cache.insert(record, value.clone());

        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
