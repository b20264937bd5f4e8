//! Lenient request field decoding.
//!
//! Cart payloads come from loosely typed clients. A field of the wrong type is
//! decoded as absent so the handler answers with its own validation message.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A string field; any other JSON type counts as missing.
pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(_) | None => None,
    })
}

/// An integral quantity. `2` and `2.0` are both accepted; `1.5`, `"2"` and
/// out-of-range numbers count as missing.
pub(super) fn quantity<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(integral))
}

fn integral(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };

    if let Some(qty) = number.as_i64() {
        return Some(qty);
    }

    let decimal = Decimal::try_from(number.as_f64()?).ok()?;

    if !decimal.fract().is_zero() {
        return None;
    }

    i64::try_from(decimal).ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn integral_accepts_whole_numbers() {
        assert_eq!(integral(&json!(2)), Some(2));
        assert_eq!(integral(&json!(2.0)), Some(2));
        assert_eq!(integral(&json!(-3)), Some(-3));
    }

    #[test]
    fn integral_rejects_fractions_and_other_types() {
        assert_eq!(integral(&json!(1.5)), None);
        assert_eq!(integral(&json!("2")), None);
        assert_eq!(integral(&json!(true)), None);
        assert_eq!(integral(&json!(1e300)), None);
    }
}
