use super::signature::Signature;
use algtype::{Arguments, ConfigurationError, ConstructionError, Record, RecordType};
use tracing::trace;

pub fn frozen_arguments_type(
    name: impl Into<String>,
    signature: &Signature,
) -> Result<RecordType, ConfigurationError> {
    RecordType::construct(name, &signature.to_specification())
}

#[derive(Clone, Debug)]
pub struct FrozenArguments {
    record_type: RecordType,
}

impl FrozenArguments {
    pub fn new(name: impl Into<String>, signature: &Signature) -> Result<Self, ConfigurationError> {
        Ok(Self {
            record_type: frozen_arguments_type(name, signature)?,
        })
    }

    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    pub fn freeze(&self, arguments: Arguments) -> Result<Record, ConstructionError> {
        let record = self.record_type.instantiate(arguments)?;

        trace!(record = %record, "froze arguments");

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::Parameter;
    use algtype::{Field, FieldSpecification, TypeTag, Value};
    use pretty_assertions::assert_eq;

    fn signature() -> Signature {
        Signature::new(vec![
            Parameter::new("a").with_annotation(TypeTag::Integer),
            Parameter::new("b")
                .with_annotation(TypeTag::Float)
                .with_default(42.0),
            Parameter::new("c").with_default(51),
        ])
    }

    #[test]
    fn build_type() {
        let type_ = frozen_arguments_type("TypeTest", &signature()).unwrap();
        let expected = RecordType::construct(
            "MyFunArgs",
            &FieldSpecification::new()
                .typed("a", TypeTag::Integer)
                .field("b", Some(TypeTag::Float), Some(42.0.into()))
                .field("c", Some(TypeTag::Any), Some(51.into())),
        )
        .unwrap();

        assert_eq!(type_.name(), "TypeTest");
        assert_eq!(type_, expected);
        assert_eq!(
            type_.field_names().collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert_eq!(
            type_.field_defaults(),
            vec![("b", &Value::from(42.0)), ("c", &Value::from(51))]
        );
        assert_eq!(type_.field("c").map(Field::type_), Some(&TypeTag::Any));
    }

    #[test]
    fn build_void_for_empty_signature() {
        assert!(frozen_arguments_type("Nothing", &Signature::default())
            .unwrap()
            .is_void());
    }

    #[test]
    fn fail_to_build_with_reserved_parameter() {
        assert_eq!(
            frozen_arguments_type("Bad", &Signature::new(vec![Parameter::new("_private")])),
            Err(ConfigurationError::ReservedName {
                record: "Bad".into(),
                field: "_private".into(),
            })
        );
    }

    #[test]
    fn freeze_arguments() {
        let arguments = FrozenArguments::new("TypeTest", &signature()).unwrap();

        let record = arguments
            .freeze(Arguments::new().positional(1).positional(2).positional(3))
            .unwrap();

        assert_eq!(
            record.values(),
            &[Value::from(1), Value::from(2), Value::from(3)]
        );

        let record = arguments.freeze(Arguments::new().positional(1)).unwrap();

        assert_eq!(
            record.values(),
            &[Value::from(1), Value::from(42.0), Value::from(51)]
        );
    }

    #[test]
    fn freeze_equal_calls_equally() {
        let arguments = FrozenArguments::new("TypeTest", &signature()).unwrap();

        assert_eq!(
            arguments.freeze(Arguments::new().positional(1)).unwrap(),
            arguments
                .freeze(Arguments::new().named("c", 51).named("a", 1))
                .unwrap()
        );
    }

    #[test]
    fn fail_to_freeze_without_required_argument() {
        assert_eq!(
            FrozenArguments::new("TypeTest", &signature())
                .unwrap()
                .freeze(Arguments::new().named("b", 1.0)),
            Err(ConstructionError::MissingField {
                record: "TypeTest".into(),
                field: "a".into(),
            })
        );
    }
}
