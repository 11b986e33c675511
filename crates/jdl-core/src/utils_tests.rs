use crate::utils::to_pascal_case;

#[test]
fn pascal_case_from_kebab() {
    assert_eq!(to_pascal_case("one-to-one"), "OneToOne");
    assert_eq!(to_pascal_case("many-to-many"), "ManyToMany");
}

#[test]
fn pascal_case_from_screaming_snake() {
    assert_eq!(to_pascal_case("ONE_TO_MANY"), "OneToMany");
    assert_eq!(to_pascal_case("MANY"), "Many");
}

#[test]
fn pascal_case_idempotent() {
    assert_eq!(to_pascal_case("ManyToOne"), "ManyToOne");
    assert_eq!(to_pascal_case("Q"), "Q");
}

#[test]
fn pascal_case_trims_separators() {
    assert_eq!(to_pascal_case("_one"), "One");
    assert_eq!(to_pascal_case("one-"), "One");
}
