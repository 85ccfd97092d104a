use serde_json::Value;

/// Convert a JSON field into the optional string the statistics accumulator
/// consumes.
///
/// `Null` (and an absent field, which callers pass as `None`) is a missing
/// value. Scalars are stringified the way they appear in the source document;
/// arrays and objects fall back to compact JSON so no input is silently
/// dropped.
pub fn field_to_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_absent_are_missing() {
        assert_eq!(field_to_string(None), None);
        assert_eq!(field_to_string(Some(&Value::Null)), None);
    }

    #[test]
    fn scalars_stringify() {
        assert_eq!(field_to_string(Some(&json!("a"))), Some("a".to_string()));
        assert_eq!(field_to_string(Some(&json!(3.5))), Some("3.5".to_string()));
        assert_eq!(field_to_string(Some(&json!(true))), Some("true".to_string()));
    }

    #[test]
    fn compound_values_fall_back_to_json() {
        assert_eq!(field_to_string(Some(&json!([1, 2]))), Some("[1,2]".to_string()));
    }
}
