use indoc::indoc;

use crate::{RawDocument, ValidationValue, parse_document};

const SAMPLE_JSON: &str = indoc! {r#"
    {
        "entities": [
            {
                "name": "A",
                "tableName": "a_table",
                "javadoc": "An entity.",
                "body": [
                    {
                        "name": "email",
                        "type": "String",
                        "validations": [
                            {"key": "required"},
                            {"key": "maxlength", "value": 42},
                            {"key": "pattern", "value": "^.+@.+$"}
                        ]
                    },
                    {"name": "kind", "type": "Kind"}
                ]
            },
            {"name": "B"}
        ],
        "enums": [
            {"name": "Kind", "values": ["ONE", "TWO"]}
        ],
        "relationships": [
            {
                "cardinality": "one-to-many",
                "from": {"name": "A", "injectedField": "b"},
                "to": {"name": "B", "required": true}
            }
        ],
        "options": [
            {"name": "skipClient", "list": ["*"], "excluded": ["B"]},
            {"name": "dto", "value": "mapstruct", "list": ["A"]}
        ]
    }
"#};

#[test]
fn parse_raw_document() {
    let doc = parse_document(SAMPLE_JSON).unwrap().unwrap();
    assert_eq!(doc.entities.len(), 2);
    assert_eq!(doc.enums.len(), 1);
    assert_eq!(doc.relationships.len(), 1);
    assert_eq!(doc.options.len(), 2);

    let a = &doc.entities[0];
    assert_eq!(a.table_name.as_deref(), Some("a_table"));
    assert_eq!(a.javadoc.as_deref(), Some("An entity."));
    assert_eq!(a.body[0].type_name, "String");
    assert_eq!(a.body[0].validations[0].value, None);
    assert_eq!(
        a.body[0].validations[1].value,
        Some(ValidationValue::Integer(42))
    );
    assert_eq!(
        a.body[0].validations[2].value,
        Some(ValidationValue::Text("^.+@.+$".to_owned()))
    );

    let b = &doc.entities[1];
    assert!(b.table_name.is_none());
    assert!(b.body.is_empty());

    let rel = &doc.relationships[0];
    assert_eq!(rel.from.injected_field.as_deref(), Some("b"));
    assert!(!rel.from.required);
    assert!(rel.to.required);

    assert_eq!(doc.options[0].list, ["*"]);
    assert_eq!(doc.options[0].excluded, ["B"]);
    assert_eq!(doc.options[0].value, None);
    assert_eq!(doc.options[1].value.as_deref(), Some("mapstruct"));
}

#[test]
fn parse_null_document() {
    assert_eq!(parse_document("null").unwrap(), None);
}

#[test]
fn parse_empty_object() {
    let doc = parse_document("{}").unwrap().unwrap();
    assert!(doc.is_empty());
}

#[test]
fn parse_malformed_document() {
    assert!(parse_document(r#"{"entities": 3}"#).is_err());
    assert!(parse_document("{").is_err());
}

#[test]
fn merge_keeps_declaration_order() {
    let first = parse_document(r#"{"entities": [{"name": "A"}], "enums": [{"name": "E", "values": ["X"]}]}"#)
        .unwrap()
        .unwrap();
    let second = parse_document(r#"{"entities": [{"name": "B"}, {"name": "C"}]}"#)
        .unwrap()
        .unwrap();

    let merged: RawDocument = [first, second].into_iter().collect();

    assert_eq!(merged.entity_names().collect::<Vec<_>>(), ["A", "B", "C"]);
    assert_eq!(merged.enum_names().collect::<Vec<_>>(), ["E"]);
}

#[test]
fn parse_any_scalar_validation_value() {
    let doc = parse_document(
        r#"{"entities": [{"name": "A", "body": [{"name": "x", "type": "Double", "validations": [
            {"key": "max", "value": 1.5},
            {"key": "required", "value": true},
            {"key": "maxlength", "value": 18446744073709551615},
            {"key": "min", "value": null}
        ]}]}]}"#,
    )
    .unwrap()
    .unwrap();

    let values: Vec<_> = doc.entities[0].body[0]
        .validations
        .iter()
        .map(|v| v.value.as_ref().map(ToString::to_string))
        .collect();
    assert_eq!(
        values,
        [
            Some("1.5".to_owned()),
            Some("true".to_owned()),
            Some("18446744073709551615".to_owned()),
            None,
        ]
    );
    assert_eq!(
        doc.entities[0].body[0].validations[1].value,
        Some(ValidationValue::Boolean(true))
    );
}
