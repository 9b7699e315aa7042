use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_string(v: &Value) -> Option<String> {
    match v {
        Value::Bool(value) => Some(value.to_string()),
        Value::Number(value) => Some(value.to_string()),
        Value::String(value) => Some(value.to_string()),
        _ => None,
    }
}

/// Text field that tolerates `null` (empty) and other scalars (their JSON text).
pub fn deserialize_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::String(s) => s.to_string(),
        Value::Null => String::new(),
        _ => value.to_string(),
    })
}

/// List of scalars as text. Anything that is not an array is an empty list.
pub fn deserialize_as_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| match v {
        Value::Array(values) => values.iter().filter_map(value_to_string).collect(),
        _ => Vec::new(),
    })
}

/// Flag that is on unless explicitly `false`.
pub fn deserialize_as_flag_unless_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| !matches!(v, Value::Bool(false)))
}
