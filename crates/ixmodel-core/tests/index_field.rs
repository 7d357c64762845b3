use ixmodel_core::{IndexField, IndexType};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn legal_values() -> Vec<Value> {
    vec![
        json!(1),
        json!(-1),
        json!("2dsphere"),
        json!("2d"),
        json!("geoHaystack"),
        json!("text"),
        json!("hashed"),
    ]
}

#[test]
fn accepts_every_legal_value() {
    for value in legal_values() {
        let field = IndexField::new("x", &value).unwrap();
        assert_eq!(field.field(), "x");
        assert_eq!(field.value().to_json(), value);
    }
}

#[test]
fn legal_set_matches_index_type_all() {
    let all: Vec<Value> = IndexType::ALL.iter().map(|ty| ty.to_json()).collect();
    assert_eq!(all, legal_values());
}

#[test]
fn is_geo_exactly_for_geo_markers() {
    let geo: Vec<bool> = legal_values()
        .iter()
        .map(|value| IndexField::new("loc", value).unwrap().is_geo())
        .collect();
    assert_eq!(geo, [false, false, true, true, true, false, false]);
}

#[test]
fn accepts_float_spelled_directions() {
    assert_eq!(
        IndexField::new("a", &json!(1.0)).unwrap().value(),
        IndexType::Ascending
    );
    assert_eq!(
        IndexField::new("a", &json!(-1.0)).unwrap().value(),
        IndexType::Descending
    );
}

#[test]
fn accepts_dotted_field_names() {
    let field = IndexField::new("address.city", &json!(1)).unwrap();
    assert_eq!(field.field(), "address.city");
}

#[test]
fn rejects_arbitrary_values() {
    for value in [
        json!("someStrangeValue"),
        json!("2DSPHERE"),
        json!("2ds"),
        json!("Hashed"),
        json!(" text"),
        json!(0),
        json!(2),
        json!(-1.5),
        json!(true),
        json!(null),
        json!([1]),
        json!({ "$numberInt": "1" }),
    ] {
        let err = IndexField::new("foo", &value).unwrap_err();
        assert!(err.is_invalid_field_value(), "{value} should be rejected");
        assert_eq!(err.offending_value(), Some(&value));
    }
}

#[test]
fn error_names_legal_set_and_value() {
    let err = IndexField::new("foo", &json!(5)).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"index types must be one of [1,-1,"2dsphere","2d","geoHaystack","text","hashed"] - got '5' for field 'foo'"#
    );
}

#[test]
fn serializes_with_wire_marker() {
    let field = IndexField::new("loc", &json!("2dsphere")).unwrap();
    assert_eq!(
        serde_json::to_value(&field).unwrap(),
        json!({ "field": "loc", "value": "2dsphere" })
    );

    let field = IndexField::from_type("last_login", IndexType::Descending);
    assert_eq!(
        serde_json::to_value(&field).unwrap(),
        json!({ "field": "last_login", "value": -1 })
    );
}

#[test]
fn display_uses_wire_spelling() {
    assert_eq!(IndexType::GeoHaystack.to_string(), "geoHaystack");
    assert_eq!(IndexType::Descending.to_string(), "-1");
    assert!(IndexType::Ascending.is_direction());
    assert!(!IndexType::Hashed.is_direction());
}
