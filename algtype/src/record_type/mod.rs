mod base;
mod canonicalize;
mod difference;
mod field_types;
mod product;
mod projection;
mod selection;
mod void;

pub use base::Base;
pub use field_types::FieldTypes;
pub use selection::Selection;
pub use void::VOID_NAME;

use crate::error::{ConfigurationError, ConstructionError};
use crate::field::{resolve, Field, FieldSpecification, Resolution};
use crate::instance::{bind, Arguments, Record};
use crate::types::{TypeTag, Value};
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::warn;

/// Record type as a value. Equality is structural and ignores field order and
/// name. Only the empty type is compared by identity.
#[derive(Clone)]
pub struct RecordType {
    inner: Arc<Inner>,
}

struct Inner {
    name: Arc<str>,
    fields: Vec<Field>,
    indices: HashMap<Arc<str>, usize>,
    canonical_order: Vec<usize>,
}

impl RecordType {
    pub fn construct(
        name: impl Into<String>,
        specification: &FieldSpecification,
    ) -> Result<Self, ConfigurationError> {
        Self::construct_with_bases(name, &[], specification)
    }

    pub fn from_maps<N: Into<String>, V: Into<Value>, M: Into<String>>(
        name: impl Into<String>,
        defaults: impl IntoIterator<Item = (N, V)>,
        types: impl IntoIterator<Item = (M, TypeTag)>,
    ) -> Result<Self, ConfigurationError> {
        Self::construct(name, &FieldSpecification::from_maps(defaults, types))
    }

    pub fn construct_with_bases(
        name: impl Into<String>,
        bases: &[Base],
        specification: &FieldSpecification,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();

        if let Some(base) = bases.iter().find(|base| base.is_record()) {
            return Err(ConfigurationError::RecordBase {
                record: name,
                base: base.label().into(),
            });
        }

        for base in bases {
            warn!(
                record = %name,
                base = base.label(),
                "bases of record types are ignored"
            );
        }

        Ok(match resolve(&name, specification)? {
            Resolution::Void => Self::void(),
            Resolution::Fields(fields) => Self::from_fields(name, fields),
        })
    }

    // Fields must have unique names.
    pub(crate) fn from_fields(name: impl Into<Arc<str>>, fields: Vec<Field>) -> Self {
        let indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.shared_name().clone(), index))
            .collect();
        let canonical_order = canonicalize::canonical_order(&fields);

        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                fields,
                indices,
                canonical_order,
            }),
        }
    }

    pub fn ptr_eq(one: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&one.inner, &other.inner)
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.inner.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.position(name).map(|index| &self.inner.fields[index])
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.inner.indices.get(name).copied()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.inner.fields.iter().map(Field::name)
    }

    pub fn field_defaults(&self) -> Vec<(&str, &Value)> {
        self.inner
            .fields
            .iter()
            .filter_map(|field| field.default().map(|default| (field.name(), default)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.fields.is_empty()
    }

    pub fn instantiate(&self, arguments: Arguments) -> Result<Record, ConstructionError> {
        bind(self, arguments)
    }

    pub fn call(
        &self,
        positional: Vec<Value>,
        named: Vec<(String, Value)>,
    ) -> Result<Record, ConstructionError> {
        self.instantiate(Arguments::from_parts(positional, named))
    }

    pub fn make<V: Into<Value>>(
        &self,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Record, ConstructionError> {
        self.instantiate(Arguments::from_parts(
            values.into_iter().map(Into::into).collect(),
            vec![],
        ))
    }

    pub fn iter(&self) -> FieldTypes<'_> {
        FieldTypes::new(self)
    }

    pub(crate) fn canonical_order(&self) -> &[usize] {
        &self.inner.canonical_order
    }

    fn canonical_fields(&self) -> impl Iterator<Item = &Field> {
        self.inner
            .canonical_order
            .iter()
            .map(move |index| &self.inner.fields[*index])
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
            || (self.len() == other.len()
                && self.canonical_fields().eq(other.canonical_fields()))
    }
}

impl Eq for RecordType {}

impl Hash for RecordType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);

        for field in self.canonical_fields() {
            field.hash(state);
        }
    }
}

impl Debug for RecordType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter
            .debug_struct("RecordType")
            .field("name", &self.name())
            .field("fields", &self.fields())
            .finish()
    }
}

impl Display for RecordType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "{}({})",
            self.name(),
            self.fields()
                .iter()
                .map(|field| field.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl<'a> IntoIterator for &'a RecordType {
    type Item = RecordType;
    type IntoIter = FieldTypes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::hash_map::DefaultHasher;
    use std::io;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buffer);
            Ok(buffer.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs<T>(run: impl FnOnce() -> T) -> (T, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, run);
        let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();

        (result, logs)
    }

    fn hash(type_: &RecordType) -> u64 {
        let mut hasher = DefaultHasher::new();
        type_.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn construct() {
        let type_ = RecordType::construct(
            "Foo",
            &FieldSpecification::new().defaulted("a", 42).required("b"),
        )
        .unwrap();

        assert_eq!(type_.name(), "Foo");
        assert_eq!(type_.field_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(type_.position("b"), Some(1));
        assert_eq!(type_.field("a").unwrap().type_(), &TypeTag::Integer);
        assert_eq!(type_.field_defaults(), vec![("a", &Value::from(42))]);
    }

    #[test]
    fn construct_void_from_empty_specification() {
        let type_ = RecordType::construct("Empty", &FieldSpecification::new()).unwrap();

        assert!(type_.is_void());
        assert_eq!(type_.name(), VOID_NAME);
    }

    #[test]
    fn construct_from_maps() {
        assert_eq!(
            RecordType::from_maps("B", vec![("bttr", 51)], vec![("bttr", TypeTag::Float)])
                .unwrap()
                .fields(),
            &[Field::new("bttr", TypeTag::Float, Some(51.into()))]
        );
    }

    #[test]
    fn fail_to_construct_with_record_base() {
        let base = RecordType::from_maps("A", vec![("attr", 42)], Vec::<(&str, _)>::new())
            .unwrap();

        assert_eq!(
            RecordType::construct_with_bases(
                "B",
                &[Base::opaque("object"), base.into()],
                &FieldSpecification::new().required("bttr"),
            ),
            Err(ConfigurationError::RecordBase {
                record: "B".into(),
                base: "A".into(),
            })
        );
    }

    #[test]
    fn construct_with_opaque_base() {
        assert_eq!(
            RecordType::construct_with_bases(
                "B",
                &[Base::opaque("object")],
                &FieldSpecification::new().required("bttr"),
            )
            .unwrap()
            .field_names()
            .collect::<Vec<_>>(),
            vec!["bttr"]
        );
    }

    #[test]
    fn warn_about_opaque_base() {
        let (result, logs) = capture_logs(|| {
            RecordType::construct_with_bases(
                "B",
                &[Base::opaque("object")],
                &FieldSpecification::new().required("bttr"),
            )
        });

        assert!(result.is_ok());
        assert_eq!(logs.lines().filter(|line| line.contains("WARN")).count(), 1);
        assert!(logs.contains("bases of record types are ignored"));
        assert!(logs.contains("record=B"));
        assert!(logs.contains("base=\"object\""));
    }

    #[test]
    fn reject_record_base_without_warning() {
        let base = RecordType::construct("A", &FieldSpecification::new().defaulted("attr", 42))
            .unwrap();

        let (result, logs) = capture_logs(|| {
            RecordType::construct_with_bases(
                "B",
                &[Base::opaque("object"), base.into()],
                &FieldSpecification::new().required("bttr"),
            )
        });

        assert!(matches!(result, Err(ConfigurationError::RecordBase { .. })));
        assert_eq!(logs, "");
    }

    #[test]
    fn compare_structurally() {
        let one = RecordType::construct(
            "One",
            &FieldSpecification::new().defaulted("a", 42).required("b"),
        )
        .unwrap();
        let other = RecordType::construct(
            "Other",
            &FieldSpecification::new().required("b").defaulted("a", 42),
        )
        .unwrap();

        assert_eq!(one, other);
        assert_eq!(hash(&one), hash(&other));
        assert!(!RecordType::ptr_eq(&one, &other));
    }

    #[test]
    fn distinguish_defaults_and_types() {
        let type_ = RecordType::construct("A", &FieldSpecification::new().defaulted("a", 42))
            .unwrap();

        assert_ne!(
            type_,
            RecordType::construct("A", &FieldSpecification::new().defaulted("a", 51)).unwrap()
        );
        assert_ne!(
            type_,
            RecordType::construct(
                "A",
                &FieldSpecification::new().field("a", Some(TypeTag::Float), Some(42.into()))
            )
            .unwrap()
        );
        assert_ne!(
            type_,
            RecordType::construct("A", &FieldSpecification::new().typed("a", TypeTag::Integer))
                .unwrap()
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            &RecordType::construct(
                "Foo",
                &FieldSpecification::new().defaulted("a", 42).required("b"),
            )
            .unwrap()
            .to_string(),
            "Foo(a: Integer = 42, b: Any)"
        );
    }
}
