//! Lenient decoding of the loosely-typed fields found in stored person records.
//!
//! Ids arrive as numbers, numeric strings, empty strings or `null` depending on
//! which form or migration wrote the record. Everything is folded to
//! `Option<PersonId>`; anything that is not a finite number is unresolved.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::PersonId;

/// Normalize a raw JSON value to a person id.
///
/// `null`, `""`, non-numeric strings, booleans, arrays and objects are
/// unresolved. Finite numbers (or strings holding one) are truncated toward
/// zero.
pub fn normalize_id(value: &Value) -> Option<PersonId> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => parse_id(s),
        _ => None,
    }
}

/// Normalize a raw string (e.g. a path segment or CLI argument) to a person id.
pub fn parse_id(raw: &str) -> Option<PersonId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(id) = trimmed.parse::<PersonId>() {
        return Some(id);
    }
    trimmed.parse::<f64>().ok().and_then(truncate)
}

fn truncate(n: f64) -> Option<PersonId> {
    if n.is_finite() {
        Some(n.trunc() as PersonId)
    } else {
        None
    }
}

/// Anything that can be normalized into a person id.
pub trait ToPersonId {
    fn to_person_id(&self) -> Option<PersonId>;
}

impl ToPersonId for PersonId {
    fn to_person_id(&self) -> Option<PersonId> {
        Some(*self)
    }
}

impl ToPersonId for Option<PersonId> {
    fn to_person_id(&self) -> Option<PersonId> {
        *self
    }
}

impl ToPersonId for str {
    fn to_person_id(&self) -> Option<PersonId> {
        parse_id(self)
    }
}

impl ToPersonId for String {
    fn to_person_id(&self) -> Option<PersonId> {
        parse_id(self)
    }
}

impl ToPersonId for Value {
    fn to_person_id(&self) -> Option<PersonId> {
        normalize_id(self)
    }
}

/// Remove and return the first of `names` present in `fields`.
///
/// Stored documents may carry both the canonical name and a generic one
/// (e.g. `serNo` and a driver-generated string `id`); the earlier name wins
/// and the later one stays in `fields` untouched.
pub(crate) fn take_field(fields: &mut Map<String, Value>, names: &[&str]) -> Option<Value> {
    let name = names.iter().find(|name| fields.contains_key(**name))?;
    fields.remove(*name)
}

/// Id lists drop entries that do not normalize; a non-array value is an empty list.
pub(crate) fn id_list(value: Option<Value>) -> Vec<PersonId> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(normalize_id).collect(),
        _ => Vec::new(),
    }
}

/// `null` and non-string scalars decode as `""`.
pub(crate) fn string_or_empty(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

pub(crate) fn deserialize_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_or_empty(Some(Value::deserialize(deserializer)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_numbers() {
        assert_eq!(normalize_id(&json!(12)), Some(12));
        assert_eq!(normalize_id(&json!(-3)), Some(-3));
        assert_eq!(normalize_id(&json!(7.9)), Some(7));
        assert_eq!(normalize_id(&json!(-7.9)), Some(-7));
    }

    #[test]
    fn test_normalize_strings() {
        assert_eq!(normalize_id(&json!("42")), Some(42));
        assert_eq!(normalize_id(&json!(" 42 ")), Some(42));
        assert_eq!(normalize_id(&json!("4.5")), Some(4));
        assert_eq!(normalize_id(&json!("")), None);
        assert_eq!(normalize_id(&json!("abc")), None);
        assert_eq!(normalize_id(&json!("inf")), None);
    }

    #[test]
    fn test_normalize_non_scalars() {
        assert_eq!(normalize_id(&Value::Null), None);
        assert_eq!(normalize_id(&json!(true)), None);
        assert_eq!(normalize_id(&json!([1])), None);
        assert_eq!(normalize_id(&json!({"serNo": 1})), None);
    }

    #[test]
    fn test_to_person_id_impls() {
        assert_eq!(5i64.to_person_id(), Some(5));
        assert_eq!(None::<PersonId>.to_person_id(), None);
        assert_eq!("9".to_person_id(), Some(9));
        assert_eq!(String::from("x9").to_person_id(), None);
        assert_eq!(json!("3").to_person_id(), Some(3));
    }

    #[test]
    fn test_take_field_prefers_earlier_name() {
        let mut fields = json!({"serNo": 1, "id": "64ab"}).as_object().cloned().unwrap();
        assert_eq!(take_field(&mut fields, &["serNo", "id"]), Some(json!(1)));
        assert_eq!(fields.get("id"), Some(&json!("64ab")));

        let mut fields = json!({"id": 7}).as_object().cloned().unwrap();
        assert_eq!(take_field(&mut fields, &["serNo", "id"]), Some(json!(7)));
        assert!(fields.is_empty());
        assert_eq!(take_field(&mut fields, &["serNo", "id"]), None);
    }

    #[test]
    fn test_lenient_list_and_string() {
        assert_eq!(id_list(Some(json!([1, "2", null, "x"]))), vec![1, 2]);
        assert!(id_list(Some(json!("1,2"))).is_empty());
        assert!(id_list(None).is_empty());
        assert_eq!(string_or_empty(Some(json!("Male"))), "Male");
        assert_eq!(string_or_empty(Some(json!(1))), "");
        assert_eq!(string_or_empty(None), "");
    }
}
