use super::RecordType;
use once_cell::sync::Lazy;

pub const VOID_NAME: &str = "Void";

// Established once and never replaced. Every empty record type in the process
// is this object.
static VOID: Lazy<RecordType> = Lazy::new(|| RecordType::from_fields(VOID_NAME, vec![]));

impl RecordType {
    pub fn void() -> Self {
        RecordType::clone(&VOID)
    }

    pub fn is_void(&self) -> bool {
        Self::ptr_eq(self, &VOID)
    }
}
