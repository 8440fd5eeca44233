//! Loose numeric coercion for backend JSON.

use serde_json::Value;

/// Parses a JSON value into a finite `f64`, or `None`.
///
/// Accepts numbers and numeric strings (surrounding whitespace allowed).
/// Empty strings, booleans, null, arrays and objects are treated as absent.
pub fn to_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };

    n.is_finite().then_some(n)
}
