use super::RecordType;
use crate::error::ConfigurationError;
use std::ops::Add;
use tracing::debug;

impl RecordType {
    /// Categorical product. Shared fields keep their position in `self` and
    /// take the type and default of `other`.
    pub fn product(&self, other: &Self) -> Self {
        if other.is_void() {
            return self.clone();
        } else if self.is_void() {
            return other.clone();
        }

        let mut fields = self.fields().to_vec();

        for field in other.fields() {
            match self.position(field.name()) {
                Some(index) => {
                    debug!(
                        record = self.name(),
                        other = other.name(),
                        field = field.name(),
                        "field overridden in product"
                    );
                    fields[index] = fields[index].overridden_by(field);
                }
                None => fields.push(field.clone()),
            }
        }

        Self::from_fields(format!("{}{}", self.name(), other.name()), fields)
    }

    pub fn strict_product(&self, other: &Self) -> Result<Self, ConfigurationError> {
        for field in other.fields() {
            if let Some(existing) = self.field(field.name()) {
                if existing.type_() != field.type_() {
                    return Err(ConfigurationError::ConflictingField {
                        record: format!("{}{}", self.name(), other.name()),
                        field: field.name().into(),
                        left: existing.type_().clone(),
                        right: field.type_().clone(),
                    });
                }
            }
        }

        Ok(self.product(other))
    }
}

impl Add for RecordType {
    type Output = RecordType;

    fn add(self, other: Self) -> Self::Output {
        self.product(&other)
    }
}

impl Add for &RecordType {
    type Output = RecordType;

    fn add(self, other: Self) -> Self::Output {
        self.product(other)
    }
}
