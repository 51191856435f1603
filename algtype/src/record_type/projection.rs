use super::selection::Selection;
use super::RecordType;
use crate::error::ProjectionError;
use crate::field::Field;

impl RecordType {
    pub fn project(&self, selection: impl Into<Selection>) -> Result<Self, ProjectionError> {
        let selection = selection.into();
        let mut fields = Vec::<Field>::with_capacity(selection.names().len());

        for name in selection.names() {
            let field = self
                .field(name)
                .ok_or_else(|| ProjectionError::UnknownField {
                    record: self.name().into(),
                    field: name.clone(),
                })?;

            if fields.iter().any(|existing| existing.name() == name) {
                return Err(ProjectionError::DuplicateField {
                    record: self.name().into(),
                    field: name.clone(),
                });
            }

            fields.push(field.clone());
        }

        Ok(self.restrict(fields))
    }

    pub fn contains(&self, selection: impl Into<Selection>) -> bool {
        selection
            .into()
            .names()
            .iter()
            .all(|name| self.position(name).is_some())
    }

    // Fields must be a subset of this type's fields without duplicates.
    pub(super) fn restrict(&self, fields: Vec<Field>) -> Self {
        if fields.is_empty() {
            Self::void()
        } else if fields.len() == self.len()
            && fields
                .iter()
                .map(Field::name)
                .eq(self.field_names())
        {
            self.clone()
        } else {
            Self::from_fields(self.name(), fields)
        }
    }
}
