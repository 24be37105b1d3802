//! Declaration bodies and property value formatting

use serde_json::Value;

/// Declaration body: property or nested key to value, in declaration order
pub type Style = serde_json::Map<String, Value>;

/// Format a property value as CSS text.
///
/// Returns `None` for values that never render as a property: `null`,
/// `false`, empty arrays and nested objects.
pub fn format_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) | Value::Object(_) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            // `[["1px", "solid"], ["red"]]` renders as `1px solid, red`
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::Array(inner) => {
                        let words: Vec<String> = inner.iter().filter_map(format_value).collect();
                        (!words.is_empty()).then(|| words.join(" "))
                    }
                    other => format_value(other),
                })
                .collect();

            (!parts.is_empty()).then(|| parts.join(", "))
        }
    }
}

/// Iterate the renderable declarations of a body, in order
pub fn declarations(style: &Style) -> impl Iterator<Item = (&str, String)> + '_ {
    style
        .iter()
        .filter_map(|(prop, value)| format_value(value).map(|v| (prop.as_str(), v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_values() {
        assert_eq!(format_value(&json!("red")), Some("red".to_string()));
        assert_eq!(format_value(&json!(10)), Some("10".to_string()));
        assert_eq!(format_value(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(format_value(&json!(null)), None);
        assert_eq!(format_value(&json!(false)), None);
    }

    #[test]
    fn test_array_values() {
        assert_eq!(
            format_value(&json!(["Helvetica", "sans-serif"])),
            Some("Helvetica, sans-serif".to_string())
        );
        assert_eq!(
            format_value(&json!([["1px", "solid", "red"], ["2px", "dashed", "blue"]])),
            Some("1px solid red, 2px dashed blue".to_string())
        );
        assert_eq!(format_value(&json!([])), None);
    }

    #[test]
    fn test_nested_objects_are_not_declarations() {
        let style = json!({
            "float": "left",
            "@global": { "span": { "color": "red" } },
            "margin": 0
        });
        let decls: Vec<(&str, String)> = declarations(style.as_object().unwrap()).collect();

        assert_eq!(
            decls,
            vec![("float", "left".to_string()), ("margin", "0".to_string())]
        );
    }
}
