use super::arguments::Arguments;
use super::record::Record;
use crate::error::ConstructionError;
use crate::record_type::RecordType;
use crate::types::Value;

pub(crate) fn bind(
    record_type: &RecordType,
    arguments: Arguments,
) -> Result<Record, ConstructionError> {
    let (positional, named) = arguments.into_parts();
    let fields = record_type.fields();

    if positional.len() > fields.len() {
        return Err(ConstructionError::TooManyPositional {
            record: record_type.name().into(),
            expected: fields.len(),
            given: positional.len(),
        });
    }

    let mut slots = vec![None::<Value>; fields.len()];

    for (slot, value) in slots.iter_mut().zip(positional) {
        *slot = Some(value);
    }

    for (name, value) in named {
        let index = record_type
            .position(&name)
            .ok_or_else(|| ConstructionError::UnknownField {
                record: record_type.name().into(),
                field: name.clone(),
            })?;

        if slots[index].is_some() {
            return Err(ConstructionError::MultipleValues {
                record: record_type.name().into(),
                field: name,
            });
        }

        slots[index] = Some(value);
    }

    let values = slots
        .into_iter()
        .zip(fields)
        .map(|(slot, field)| {
            slot.or_else(|| field.default().cloned())
                .ok_or_else(|| ConstructionError::MissingField {
                    record: record_type.name().into(),
                    field: field.name().into(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Record::new(record_type.clone(), values))
}
