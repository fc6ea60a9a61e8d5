//! Script-style value helpers shared by the exception constructors.

use serde_json::{Number, Value};
use std::borrow::Cow;

/// String conversion following script `String(value)` rules, except that
/// `null` renders as the empty string.
pub(crate) fn to_display_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Number(number) => Cow::Owned(number_to_string(number)),
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(to_display_string)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

fn number_to_string(number: &Number) -> String {
    if let Some(value) = number.as_i64() {
        return value.to_string();
    }
    if let Some(value) = number.as_u64() {
        return value.to_string();
    }
    number.as_f64().map_or_else(String::new, float_to_string)
}

/// Script number formatting: exponent form outside `[1e-6, 1e21)`, and
/// negative zero prints as `0`.
fn float_to_string(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        // f64 `Display` drops the fractional part of integral values (`3`, not `3.0`).
        return value.to_string();
    }
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Numeric value of `value`, if it is a number.
pub(crate) fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_string_follows_script_rules() {
        assert_eq!(to_display_string(&Value::Null), "");
        assert_eq!(to_display_string(&json!(true)), "true");
        assert_eq!(to_display_string(&json!(42)), "42");
        assert_eq!(to_display_string(&json!(-7)), "-7");
        assert_eq!(to_display_string(&json!(3.0)), "3");
        assert_eq!(to_display_string(&json!(2.5)), "2.5");
        assert_eq!(to_display_string(&json!("text")), "text");
        assert_eq!(to_display_string(&json!([1, "a", null])), "1,a,");
        assert_eq!(to_display_string(&json!({"k": 1})), "[object Object]");
    }

    #[test]
    fn display_string_uses_script_number_edges() {
        assert_eq!(to_display_string(&json!(-0.0)), "0");
        assert_eq!(to_display_string(&json!(1e21)), "1e+21");
        assert_eq!(to_display_string(&json!(1.5e22)), "1.5e+22");
        assert_eq!(to_display_string(&json!(-2e21)), "-2e+21");
        assert_eq!(to_display_string(&json!(1e20)), "100000000000000000000");
        assert_eq!(to_display_string(&json!(1.5e-7)), "1.5e-7");
        assert_eq!(to_display_string(&json!(0.000001)), "0.000001");
    }

    #[test]
    fn numeric_detection_accepts_any_number() {
        assert_eq!(as_f64(&json!(3)), Some(3.0));
        assert_eq!(as_f64(&json!(2.5)), Some(2.5));
        assert_eq!(as_f64(&json!("3")), None);
        assert_eq!(as_f64(&Value::Null), None);
    }
}
