use super::*;
use crate::core::parse::ParseError;
use serde_json::json;

#[test]
fn string_accepts_strings_only() {
    assert_eq!(string().parse(json!("a")).unwrap(), json!("a"));
    assert_eq!(
        string().parse(json!(1)).unwrap_err(),
        ParseError::mismatch("string", &json!(1)),
    );
}

#[test]
fn number_accepts_any_json_number() {
    assert_eq!(number().parse(json!(1.5)).unwrap(), json!(1.5));
    assert!(number().parse(json!("1.5")).is_err());
}

#[test]
fn integer_rejects_fractional_numbers() {
    assert_eq!(integer().parse(json!(7)).unwrap(), json!(7));
    assert_eq!(
        integer().parse(json!(1.5)).unwrap_err(),
        ParseError::mismatch("integer", &json!(1.5)),
    );
}

#[test]
fn boolean_and_null_match_their_kinds() {
    assert_eq!(boolean().parse(json!(true)).unwrap(), json!(true));
    assert!(boolean().parse(json!(0)).is_err());
    assert_eq!(null().parse(json!(null)).unwrap(), json!(null));
    assert!(null().parse(json!(false)).is_err());
}

#[test]
fn literal_matches_exact_values() {
    let parser = literal(json!("product"));

    assert_eq!(parser.parse(json!("product")).unwrap(), json!("product"));
    assert!(parser.parse(json!("article")).is_err());
}

#[test]
fn object_and_array_match_their_kinds() {
    assert!(object().parse(json!({})).is_ok());
    assert!(object().parse(json!([])).is_err());
    assert!(array().parse(json!([])).is_ok());
    assert!(array().parse(json!({})).is_err());
}

#[test]
fn array_of_validates_each_element() {
    let parser = array_of(string());

    assert_eq!(
        parser.parse(json!(["a", "b"])).unwrap(),
        json!(["a", "b"]),
    );

    let err = parser.parse(json!(["a", 2])).unwrap_err();
    assert_eq!(err, ParseError::mismatch("string", &json!(2)).at("[1]"));
}

#[test]
fn nullable_passes_null_and_delegates_the_rest() {
    let parser = nullable(string());

    assert_eq!(parser.parse(json!(null)).unwrap(), json!(null));
    assert_eq!(parser.parse(json!("a")).unwrap(), json!("a"));
    assert!(parser.parse(json!(1)).is_err());
}

#[test]
fn datetime_requires_rfc3339() {
    let parser = datetime();

    assert_eq!(
        parser.parse(json!("2024-03-01T12:00:00Z")).unwrap(),
        json!("2024-03-01T12:00:00Z"),
    );
    assert!(parser.parse(json!("yesterday")).is_err());
    assert!(parser.parse(json!(12)).is_err());
}

#[test]
fn slug_reshapes_to_the_current_string() {
    let parser = slug();

    assert_eq!(
        parser.parse(json!({"_type": "slug", "current": "a-b"})).unwrap(),
        json!("a-b"),
    );
    assert_eq!(
        parser.parse(json!({})).unwrap_err(),
        ParseError::invalid("slug object has no `current` field"),
    );
    assert_eq!(
        parser.parse(json!({"current": 3})).unwrap_err(),
        ParseError::mismatch("string", &json!(3)).at("current"),
    );
}
