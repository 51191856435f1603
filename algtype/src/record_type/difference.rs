use super::RecordType;
use std::ops::Sub;

impl RecordType {
    pub fn difference(&self, other: &Self) -> Self {
        self.restrict(
            self.fields()
                .iter()
                .filter(|field| other.position(field.name()).is_none())
                .cloned()
                .collect(),
        )
    }
}

impl Sub for RecordType {
    type Output = RecordType;

    fn sub(self, other: Self) -> Self::Output {
        self.difference(&other)
    }
}

impl Sub for &RecordType {
    type Output = RecordType;

    fn sub(self, other: Self) -> Self::Output {
        self.difference(other)
    }
}
