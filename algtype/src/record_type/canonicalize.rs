use crate::field::Field;

// Field indices sorted by name.
pub(super) fn canonical_order(fields: &[Field]) -> Vec<usize> {
    let mut indices = (0..fields.len()).collect::<Vec<_>>();

    indices.sort_by(|one, other| fields[*one].name().cmp(fields[*other].name()));

    indices
}
