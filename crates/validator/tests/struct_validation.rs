//! End-to-end validation of derived config structs.

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::sync::{Arc, Mutex};

use envconfig_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Clone, Default, Describe)]
pub struct TestStruct {
    #[validate(required)]
    pub required_field: String,
    pub optional_field: String,
    #[validate(min = 3)]
    pub min_field: String,
    #[validate(max = 10)]
    pub max_field: String,
    #[validate(pattern = "alphanumeric")]
    pub pattern_field: String,
    #[validate(required, min = 2, max = 5)]
    pub combo_field: String,
}

fn valid() -> TestStruct {
    TestStruct {
        required_field: "required".into(),
        optional_field: "optional".into(),
        min_field: "min".into(),
        max_field: "max".into(),
        pattern_field: "abc123".into(),
        combo_field: "combo".into(),
    }
}

fn messages(result: Result<(), ConfigError>) -> Vec<String> {
    match result {
        Err(ConfigError::Invalid(errors)) => errors.iter().map(ToString::to_string).collect(),
        other => panic!("expected field violations, got {other:?}"),
    }
}

// ============================================================================
// INPUT SHAPE
// ============================================================================

#[test]
fn nil_config_is_rejected() {
    let err = StructValidator::new().validate_struct(None).unwrap_err();
    assert_eq!(err, ConfigError::Nil);
    assert_eq!(err.to_string(), "configuration cannot be nil");
    assert!(err.is_input_error());
}

#[test]
fn nil_pointer_is_rejected() {
    let config: Option<TestStruct> = None;
    let err = validate(&config).unwrap_err();
    assert_eq!(err, ConfigError::NilPointer);
    assert_eq!(err.to_string(), "configuration pointer cannot be nil");
}

#[rstest]
#[case::string(validate(&"not a struct"), ShapeKind::String)]
#[case::integer(validate(&42_u16), ShapeKind::Scalar)]
#[case::sequence(validate(&vec![valid()]), ShapeKind::Sequence)]
#[case::double_pointer(validate(&Some(Box::new(valid()))), ShapeKind::Pointer)]
fn non_struct_is_rejected(#[case] result: Result<(), ConfigError>, #[case] found: ShapeKind) {
    let err = result.unwrap_err();
    assert_eq!(err, ConfigError::NotStruct { found });
    assert_eq!(err.to_string(), "configuration must be a struct");
    assert!(err.violations().is_none());
}

#[test]
fn one_pointer_level_is_followed() {
    assert_eq!(validate(&valid()), Ok(()));
    assert_eq!(validate(&Some(valid())), Ok(()));
    assert_eq!(validate(&Box::new(valid())), Ok(()));
    assert_eq!(validate(&Arc::new(valid())), Ok(()));
}

// ============================================================================
// DIRECTIVES
// ============================================================================

#[rstest]
#[case::missing_required(
    TestStruct { required_field: String::new(), ..valid() },
    "required_field is required"
)]
#[case::too_short(
    TestStruct { min_field: "ab".into(), ..valid() },
    "min_field minimum length is 3, got 2"
)]
#[case::too_long(
    TestStruct { max_field: "this is way too long".into(), ..valid() },
    "max_field maximum length is 10, got 20"
)]
#[case::pattern_mismatch(
    TestStruct { pattern_field: "abc@123".into(), ..valid() },
    "pattern_field does not match required pattern: alphanumeric"
)]
#[case::combo_too_short(
    TestStruct { combo_field: "a".into(), ..valid() },
    "combo_field minimum length is 2, got 1"
)]
fn single_directive_failures(#[case] config: TestStruct, #[case] expected: &str) {
    let errors = validate(&config).unwrap_err();
    let violations = errors.violations().unwrap();

    assert_eq!(violations.len(), 1);
    assert_eq!(&*violations.errors()[0].message, expected);
    assert!(errors.to_string().contains(expected));
}

#[test]
fn unchecked_fields_accept_anything() {
    let config = TestStruct {
        optional_field: String::new(),
        min_field: String::new(),
        pattern_field: String::new(),
        ..valid()
    };

    // empty strings are shorter than `min` too
    let messages = messages(validate(&config));
    assert_eq!(
        messages,
        ["validation error for field 'min_field': min_field minimum length is 3, got 0"]
    );
}

#[test]
fn violations_follow_field_then_directive_order() {
    let config = TestStruct {
        required_field: String::new(),
        optional_field: String::new(),
        min_field: "a".into(),
        max_field: "abcdefghijk".into(),
        pattern_field: "no spaces".into(),
        combo_field: String::new(),
    };

    let err = validate(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation failed with 6 error(s): \
         validation error for field 'required_field': required_field is required; \
         validation error for field 'min_field': min_field minimum length is 3, got 1; \
         validation error for field 'max_field': max_field maximum length is 10, got 11; \
         validation error for field 'pattern_field': pattern_field does not match required pattern: alphanumeric; \
         validation error for field 'combo_field': combo_field is required; \
         validation error for field 'combo_field': combo_field minimum length is 2, got 0"
    );
}

#[test]
fn repeated_runs_report_the_same_violations() {
    let config = TestStruct::default();
    assert_eq!(validate(&config), validate(&config));
}

// ============================================================================
// EMPTINESS
// ============================================================================

#[derive(Debug, Default, Describe)]
pub struct Collections {
    #[validate(required)]
    pub tags: Vec<String>,
    #[validate(required)]
    pub ports: [u16; 0],
    #[validate(required)]
    pub labels: HashMap<String, String>,
    #[validate(required)]
    pub ordered: BTreeMap<String, u32>,
    #[validate(required)]
    pub timeout: Option<u64>,
    #[validate(required)]
    pub retries: u32,
    #[validate(required)]
    pub verbose: bool,
    #[validate(required)]
    pub marker: Marker,
}

#[derive(Debug, Default, Describe)]
pub struct Marker;

#[test]
fn required_checks_emptiness_by_shape() {
    let fields: Vec<String> = validate(&Collections::default())
        .unwrap_err()
        .violations()
        .unwrap()
        .iter()
        .map(|e| e.field.to_string())
        .collect();

    // numbers, booleans and structs are never empty
    assert_eq!(fields, ["tags", "ports", "labels", "ordered", "timeout"]);
}

#[test]
fn populated_collections_satisfy_required() {
    let config = Collections {
        tags: vec!["a".into()],
        labels: HashMap::from([("k".into(), "v".into())]),
        ordered: BTreeMap::from([("k".into(), 1)]),
        timeout: Some(0),
        ..Collections::default()
    };

    let fields: Vec<String> = validate(&config)
        .unwrap_err()
        .violations()
        .unwrap()
        .iter()
        .map(|e| e.field.to_string())
        .collect();
    assert_eq!(fields, ["ports"]);
}

#[derive(Debug, Default, Describe)]
pub struct Limits {
    #[validate(min = 2, max = 3)]
    pub hosts: Vec<String>,
    #[validate(pattern = "alphanumeric")]
    pub port: u16,
    #[validate(min = 0, max = -5)]
    pub name: String,
}

#[test]
fn length_and_pattern_ignore_non_strings() {
    let config = Limits {
        hosts: vec!["a".into(); 10],
        port: 8080,
        name: "anything goes".into(),
    };
    assert_eq!(validate(&config), Ok(()));
}

// ============================================================================
// NESTING
// ============================================================================

#[derive(Debug, Clone, Default, Describe)]
pub struct NestedStruct {
    #[validate(required)]
    pub nested_required: String,
    pub nested_optional: String,
}

#[derive(Debug, Default, Describe)]
pub struct WithNested {
    #[validate(required)]
    pub required_field: String,
    pub nested: NestedStruct,
}

#[rstest]
#[case::valid(
    WithNested {
        required_field: "required".into(),
        nested: NestedStruct { nested_required: "nested_required".into(), nested_optional: "x".into() },
    },
    &[]
)]
#[case::missing_nested(
    WithNested {
        required_field: "required".into(),
        nested: NestedStruct { nested_required: String::new(), nested_optional: "x".into() },
    },
    &["nested.nested_required"]
)]
#[case::missing_top_level(
    WithNested {
        required_field: String::new(),
        nested: NestedStruct { nested_required: "nested_required".into(), nested_optional: String::new() },
    },
    &["required_field"]
)]
fn nested_structs_are_walked(#[case] config: WithNested, #[case] expected: &[&str]) {
    let fields: Vec<String> = match validate(&config) {
        Ok(()) => Vec::new(),
        Err(err) => err
            .violations()
            .unwrap()
            .iter()
            .map(|e| e.field.to_string())
            .collect(),
    };
    assert_eq!(fields, expected);
}

#[derive(Debug, Default, Describe)]
pub struct WithPointer {
    #[validate(required)]
    pub required_field: String,
    pub nested_ptr: Option<NestedStruct>,
    pub boxed: Option<Box<NestedStruct>>,
}

#[test]
fn nil_pointer_fields_are_not_descended() {
    let config = WithPointer {
        required_field: "required".into(),
        nested_ptr: None,
        boxed: None,
    };
    assert_eq!(validate(&config), Ok(()));
}

#[test]
fn present_pointer_fields_are_descended() {
    let config = WithPointer {
        required_field: "required".into(),
        nested_ptr: Some(NestedStruct::default()),
        boxed: None,
    };

    assert_eq!(
        messages(validate(&config)),
        ["validation error for field 'nested_ptr.nested_required': nested_ptr.nested_required is required"]
    );
}

#[test]
fn pointer_to_pointer_fields_are_not_descended() {
    let config = WithPointer {
        required_field: "required".into(),
        nested_ptr: Some(NestedStruct {
            nested_required: "ok".into(),
            nested_optional: String::new(),
        }),
        boxed: Some(Box::new(NestedStruct::default())),
    };
    assert_eq!(validate(&config), Ok(()));
}

#[derive(Debug, Default, Describe)]
pub struct Deep {
    pub middle: WithNested,
}

#[test]
fn paths_accumulate_through_every_level() {
    let err = validate(&Deep::default()).unwrap_err();
    let fields: Vec<&str> = err.violations().unwrap().iter().map(|e| &*e.field).collect();
    assert_eq!(
        fields,
        ["middle.required_field", "middle.nested.nested_required"]
    );
}

// ============================================================================
// FIELD NAMES AND VISIBILITY
// ============================================================================

#[derive(Debug, Default, Describe)]
pub struct WithPrivate {
    #[validate(required)]
    pub exported_field: String,
    #[validate(required)]
    unexported_field: String,
}

#[test]
fn private_fields_are_skipped() {
    let config = WithPrivate::default();
    assert!(config.unexported_field.is_empty());

    let err = validate(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation failed with 1 error(s): \
         validation error for field 'exported_field': exported_field is required"
    );
    assert!(!err.to_string().contains("unexported_field"));
}

#[allow(non_snake_case)]
#[derive(Debug, Default, serde::Deserialize, Describe)]
pub struct Aliased {
    #[validate(required, alias = "db_host")]
    pub host: String,
    #[serde(rename = "custom_name")]
    #[validate(required)]
    pub test_field: String,
    #[validate(required)]
    pub Mixed_Case: String,
    #[validate(required)]
    pub r#type: String,
    pub inner: Option<AliasedInner>,
}

#[derive(Debug, Default, serde::Deserialize, Describe)]
pub struct AliasedInner {
    #[serde(rename = "PORT")]
    #[validate(required)]
    pub port: String,
}

#[test]
fn aliases_and_lowercased_idents_name_fields() {
    let config = Aliased {
        inner: Some(AliasedInner::default()),
        ..Aliased::default()
    };

    let err = validate(&config).unwrap_err();
    let fields: Vec<&str> = err.violations().unwrap().iter().map(|e| &*e.field).collect();
    assert_eq!(
        fields,
        ["db_host", "custom_name", "mixed_case", "type", "inner.PORT"]
    );
}

#[test]
fn descriptors_expose_directives() {
    let config = valid();
    let fields = config.fields();

    assert_eq!(config.type_name(), "TestStruct");
    assert_eq!(fields.len(), 6);
    assert_eq!(fields[0].name(), "required_field");
    assert!(fields[0].directives.is_required());
    assert!(!fields[1].directives.is_required());
    assert_eq!(fields[5].directives.min, Some("2"));
    assert_eq!(fields[5].directives.max, Some("5"));
    assert_eq!(fields[4].directives.pattern, Some("alphanumeric"));
}

#[derive(Debug, Default, Describe)]
pub struct ExplicitFlags {
    #[validate(required = "true")]
    pub on: String,
    #[validate(required = false)]
    pub off: String,
    #[validate(required = "yes")]
    pub not_true: String,
}

#[test]
fn only_the_true_flag_enables_required() {
    let fields: Vec<String> = validate(&ExplicitFlags::default())
        .unwrap_err()
        .violations()
        .unwrap()
        .iter()
        .map(|e| e.field.to_string())
        .collect();
    assert_eq!(fields, ["on"]);
}

// ============================================================================
// REPORTING
// ============================================================================

#[cfg(feature = "serde")]
#[test]
fn violations_serialize_as_a_list() {
    let err = validate(&WithPrivate::default()).unwrap_err();
    let json = serde_json::to_value(err.violations().unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            { "field": "exported_field", "message": "exported_field is required" }
        ])
    );
}

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn walk_emits_trace_events() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer({
            let logs = logs.clone();
            move || logs.clone()
        })
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let _ = validate(&WithPrivate::default());
        let _ = validate(&WithPointer::default());
        let _ = validate(&"not a struct");
    });

    let output = logs.contents();
    assert!(output.contains("skipping unexported field"), "{output}");
    assert!(output.contains("nil pointer, not descending"), "{output}");
    assert!(output.contains("checking field"), "{output}");
    assert!(output.contains("configuration failed validation"), "{output}");
    assert!(output.contains("configuration is not a struct"), "{output}");
}

#[test]
fn validator_is_usable_as_a_trait_object() {
    let validator: Box<dyn Validator> = Box::new(StructValidator::new());
    let config = valid();

    assert_eq!(validator.validate_struct(Some(&config)), Ok(()));
    assert_eq!(validator.validate_struct(None), Err(ConfigError::Nil));
}
