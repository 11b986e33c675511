use crate::ErrorKind;
use crate::analyze::collect_names;
use crate::test_utils::{doc, render};

#[test]
fn collects_names_in_declaration_order() {
    let document = doc(r#"{
        "entities": [{"name": "B"}, {"name": "A"}, {"name": "B"}],
        "enums": [{"name": "Kind", "values": ["X"]}]
    }"#);

    let names = collect_names(&document).unwrap();

    let entities: Vec<_> = names.entities().iter().copied().collect();
    assert_eq!(entities, ["B", "A"]);
    assert!(names.is_enum("Kind"));
    assert!(!names.is_entity("Kind"));
    assert!(!names.is_enum("A"));
}

#[test]
fn empty_document_declares_nothing() {
    let document = doc("{}");
    let names = collect_names(&document).unwrap();
    assert!(names.entities().is_empty());
    assert!(names.enums().is_empty());
}

#[test]
fn entity_without_name() {
    let document = doc(r#"{"entities": [{"body": []}]}"#);
    let err = collect_names(&document).unwrap_err();
    insta::assert_snapshot!(render(&err), @"NullArgument: entity name must be provided");
}

#[test]
fn enum_without_values() {
    let document = doc(r#"{"enums": [{"name": "Kind", "values": []}]}"#);
    let err = collect_names(&document).unwrap_err();
    assert!(err.is(ErrorKind::InvalidArgument));
    insta::assert_snapshot!(err, @"enumeration `Kind` has no values");
}

#[test]
fn enum_with_repeated_value() {
    let document = doc(r#"{"enums": [{"name": "Kind", "values": ["A", "B", "A"]}]}"#);
    let err = collect_names(&document).unwrap_err();
    insta::assert_snapshot!(err, @"value `A` appears twice in enumeration `Kind`");
}

#[test]
fn enum_with_empty_value() {
    let document = doc(r#"{"enums": [{"name": "Kind", "values": ["A", ""]}]}"#);
    let err = collect_names(&document).unwrap_err();
    assert!(err.is(ErrorKind::InvalidArgument));
}

#[test]
fn enum_without_name() {
    let document = doc(r#"{"enums": [{"values": ["A"]}]}"#);
    let err = collect_names(&document).unwrap_err();
    insta::assert_snapshot!(err, @"enumeration name must be provided");
}
