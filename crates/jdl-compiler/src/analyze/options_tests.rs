use crate::ErrorKind;
use crate::test_utils::{doc, render, validate_sql};

fn option_result(option: &str) -> crate::Result<()> {
    let document = doc(&format!(
        r#"{{
            "entities": [{{"name": "A"}}, {{"name": "B"}}],
            "options": [{option}]
        }}"#
    ));
    validate_sql(&document).map(|_| ())
}

fn option_error(option: &str) -> String {
    render(&option_result(option).unwrap_err())
}

#[test]
fn accepts_known_options() {
    for option in [
        r#"{"name": "skipClient", "list": ["A"]}"#,
        r#"{"name": "noFluentMethod", "list": ["*"], "excluded": ["B"]}"#,
        r#"{"name": "service", "value": "serviceImpl", "list": ["A", "B"]}"#,
        r#"{"name": "pagination", "value": "pager", "list": ["*"]}"#,
        r#"{"name": "microservice", "value": "my-service_2", "list": ["A"]}"#,
        r#"{"name": "angularSuffix", "value": "mySuffix", "list": ["B"]}"#,
    ] {
        assert!(option_result(option).is_ok(), "{option}");
    }
}

#[test]
fn wildcard_mixed_with_names() {
    assert!(option_result(r#"{"name": "dto", "value": "mapstruct", "list": ["A", "*"]}"#).is_ok());
}

#[test]
fn unknown_option() {
    insta::assert_snapshot!(
        option_error(r#"{"name": "paginate", "value": "pager", "list": ["A"]}"#),
        @"InvalidArgument: `paginate` is not an option"
    );
}

#[test]
fn unknown_value() {
    insta::assert_snapshot!(
        option_error(r#"{"name": "pagination", "value": "endless", "list": ["A"]}"#),
        @"InvalidArgument: `endless` is not a value of option `pagination` (expected pager, pagination, infinite-scroll)"
    );
}

#[test]
fn free_value_must_be_a_word() {
    insta::assert_snapshot!(
        option_error(r#"{"name": "microservice", "value": "my service", "list": ["A"]}"#),
        @"InvalidArgument: `my service` is not a value of option `microservice` (expected a single word)"
    );
}

#[test]
fn unary_with_value() {
    insta::assert_snapshot!(
        option_error(r#"{"name": "skipServer", "value": "yes", "list": ["A"]}"#),
        @"InvalidArgument: option `skipServer` takes no value, got `yes`"
    );
}

#[test]
fn binary_without_value() {
    insta::assert_snapshot!(
        option_error(r#"{"name": "dto", "list": ["A"]}"#),
        @"NullArgument: value of option `dto` must be provided"
    );
}

#[test]
fn no_targets() {
    let err = option_result(r#"{"name": "skipClient", "list": []}"#).unwrap_err();
    assert!(err.is(ErrorKind::InvalidArgument));
}

#[test]
fn undeclared_target() {
    insta::assert_snapshot!(
        option_error(r#"{"name": "skipClient", "list": ["A", "C"]}"#),
        @"UndeclaredEntity: undeclared entity: `C` is targeted by option `skipClient` but not declared"
    );
}

#[test]
fn undeclared_exclusion() {
    insta::assert_snapshot!(
        option_error(r#"{"name": "skipClient", "list": ["*"], "excluded": ["C"]}"#),
        @"UndeclaredEntity: undeclared entity: `C` is excluded from option `skipClient` but not declared"
    );
}

#[test]
fn option_before_entities() {
    let document = doc(r#"{
        "options": [{"name": "skipClient", "list": ["Late"]}],
        "entities": [{"name": "Late"}]
    }"#);
    assert!(validate_sql(&document).is_ok());
}
