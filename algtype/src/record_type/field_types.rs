use super::RecordType;

#[derive(Clone, Debug)]
pub struct FieldTypes<'a> {
    record_type: &'a RecordType,
    index: usize,
}

impl<'a> FieldTypes<'a> {
    pub(super) fn new(record_type: &'a RecordType) -> Self {
        Self {
            record_type,
            index: 0,
        }
    }
}

impl Iterator for FieldTypes<'_> {
    type Item = RecordType;

    fn next(&mut self) -> Option<Self::Item> {
        let field = self.record_type.fields().get(self.index)?;

        self.index += 1;

        Some(self.record_type.restrict(vec![field.clone()]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.record_type.len() - self.index;

        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FieldTypes<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldSpecification;
    use pretty_assertions::assert_eq;

    fn ab_type() -> RecordType {
        RecordType::construct(
            "Ab",
            &FieldSpecification::new().defaulted("a", 1).required("b"),
        )
        .unwrap()
    }

    #[test]
    fn iterate_fields() {
        let type_ = ab_type();

        assert_eq!(
            type_.iter().collect::<Vec<_>>(),
            vec![type_.project("a").unwrap(), type_.project("b").unwrap()]
        );
    }

    #[test]
    fn restart_iteration() {
        let type_ = ab_type();
        let mut one = type_.iter();
        let mut other = (&type_).into_iter();

        assert_eq!(one.next(), Some(type_.project("a").unwrap()));
        assert_eq!(one.len(), 1);
        assert_eq!(other.next(), Some(type_.project("a").unwrap()));
        assert_eq!(one.next(), Some(type_.project("b").unwrap()));
        assert_eq!(one.next(), None);
        assert_eq!(other.next(), Some(type_.project("b").unwrap()));
        assert_eq!(type_.iter().count(), 2);
    }

    #[test]
    fn iterate_single_field() {
        let type_ = RecordType::construct("A", &FieldSpecification::new().required("a")).unwrap();

        for field_type in &type_ {
            assert!(RecordType::ptr_eq(&field_type, &type_));
        }
    }

    #[test]
    fn iterate_void() {
        assert_eq!(RecordType::void().iter().next(), None);
    }
}
