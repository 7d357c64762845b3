use serde_json::Value;

/// Truthiness of an option value as the index-listing command reports it.
///
/// `null`, `false`, `0` and `""` are false. Every other value is true,
/// including empty objects and arrays.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::is_truthy;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(Some(&value)), "{value} should be falsy");
        }
        assert!(!is_truthy(None));
    }

    #[test]
    fn truthy_values() {
        for value in [
            json!(true),
            json!(1),
            json!(-3600),
            json!(0.5),
            json!("en"),
            json!([]),
            json!({}),
            json!({ "age": { "$gt": 50 } }),
        ] {
            assert!(is_truthy(Some(&value)), "{value} should be truthy");
        }
    }
}
