use crate::ErrorKind;
use crate::test_utils::{doc, render, validate_sql};

fn relationship_error(cardinality: &str, from: &str, to: &str) -> String {
    let document = doc(&format!(
        r#"{{
            "entities": [{{"name": "A"}}, {{"name": "B"}}],
            "relationships": [{{
                "cardinality": "{cardinality}",
                "from": {{"name": "{from}"}},
                "to": {{"name": "{to}"}}
            }}]
        }}"#
    ));
    render(&validate_sql(&document).unwrap_err())
}

#[test]
fn endpoints_declared_anywhere() {
    let document = doc(r#"{
        "relationships": [{
            "cardinality": "many-to-one",
            "from": {"name": "B", "injectedField": "a"},
            "to": {"name": "A"}
        }],
        "entities": [{"name": "A"}, {"name": "B"}]
    }"#);
    assert!(validate_sql(&document).is_ok());
}

#[test]
fn self_reference() {
    let document = doc(r#"{
        "entities": [{"name": "Employee"}],
        "relationships": [{
            "cardinality": "ManyToOne",
            "from": {"name": "Employee", "injectedField": "manager"},
            "to": {"name": "Employee"}
        }]
    }"#);
    assert!(validate_sql(&document).is_ok());
}

#[test]
fn undeclared_target() {
    insta::assert_snapshot!(
        relationship_error("one-to-one", "A", "C"),
        @"UndeclaredEntity: undeclared entity: in the relationship between `A` and `C`, `C` is not declared"
    );
}

#[test]
fn undeclared_source() {
    insta::assert_snapshot!(
        relationship_error("one-to-many", "C", "B"),
        @"UndeclaredEntity: undeclared entity: in the relationship between `C` and `B`, `C` is not declared"
    );
}

#[test]
fn unknown_cardinality() {
    insta::assert_snapshot!(
        relationship_error("few-to-some", "A", "B"),
        @"InvalidArgument: `few-to-some` is not a relationship cardinality"
    );
}

#[test]
fn empty_endpoint() {
    let err = relationship_error("one-to-one", "A", "");
    assert!(err.starts_with("NullArgument: "));
}

#[test]
fn enumeration_is_not_an_endpoint() {
    let document = doc(r#"{
        "entities": [{"name": "A"}],
        "enums": [{"name": "Kind", "values": ["X"]}],
        "relationships": [{
            "cardinality": "one-to-one",
            "from": {"name": "A"},
            "to": {"name": "Kind"}
        }]
    }"#);
    let err = validate_sql(&document).unwrap_err();
    assert!(err.is(ErrorKind::UndeclaredEntity));
}
