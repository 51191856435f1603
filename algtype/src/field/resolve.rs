use super::descriptor::Field;
use super::specification::{FieldEntry, FieldSpecification};
use crate::error::ConfigurationError;
use crate::types::TypeTag;
use tracing::trace;

pub const RESERVED_PREFIX: &str = "_";

#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Void,
    Fields(Vec<Field>),
}

pub fn resolve(
    record: &str,
    specification: &FieldSpecification,
) -> Result<Resolution, ConfigurationError> {
    if specification.is_empty() {
        return Ok(Resolution::Void);
    }

    let fields = specification
        .entries()
        .iter()
        .map(|entry| resolve_entry(record, entry))
        .collect::<Result<Vec<_>, _>>()?;

    trace!(record, fields = fields.len(), "resolved field specification");

    Ok(Resolution::Fields(fields))
}

fn resolve_entry(record: &str, entry: &FieldEntry) -> Result<Field, ConfigurationError> {
    validate_name(record, entry.name())?;

    Ok(Field::new(
        entry.name(),
        entry
            .type_()
            .cloned()
            .or_else(|| entry.default().map(|default| default.type_tag()))
            .unwrap_or(TypeTag::Any),
        entry.default().cloned(),
    ))
}

fn validate_name(record: &str, name: &str) -> Result<(), ConfigurationError> {
    if name.starts_with(RESERVED_PREFIX) {
        Err(ConfigurationError::ReservedName {
            record: record.into(),
            field: name.into(),
        })
    } else if !is_identifier(name) {
        Err(ConfigurationError::InvalidName {
            record: record.into(),
            field: name.into(),
        })
    } else {
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut characters = name.chars();

    matches!(characters.next(), Some(character) if character.is_ascii_alphabetic() || character == '_')
        && characters.all(|character| character.is_ascii_alphanumeric() || character == '_')
}
