//! Load person and relation-rule collections from JSON exports.
//!
//! A collection is either a bare JSON array or an object wrapping the array
//! under `members` (people) or `rules` (relation rules).

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::path::Path;

use crate::error::{FamtreeError, Result};
use crate::model::{Person, RelationRule};

/// Parse a person collection from JSON text.
pub fn parse_persons(content: &str) -> Result<Vec<Person>> {
    parse_collection(content, "members")
}

/// Parse a relation rule collection from JSON text.
pub fn parse_rules(content: &str) -> Result<Vec<RelationRule>> {
    parse_collection(content, "rules")
}

/// Read and parse a person collection file.
pub fn load_persons(path: &Path) -> Result<Vec<Person>> {
    let persons = parse_persons(&read(path)?)?;
    log::info!("Loaded {} person records from {}", persons.len(), path.display());
    Ok(persons)
}

/// Read and parse a relation rule collection file.
pub fn load_rules(path: &Path) -> Result<Vec<RelationRule>> {
    let rules = parse_rules(&read(path)?)?;
    log::info!("Loaded {} relation rules from {}", rules.len(), path.display());
    Ok(rules)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        FamtreeError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })
}

fn parse_collection<T: DeserializeOwned>(content: &str, wrapper_key: &str) -> Result<Vec<T>> {
    let json_value: JsonValue = serde_json::from_str(content)?;

    let items = match json_value {
        JsonValue::Array(items) => JsonValue::Array(items),
        JsonValue::Object(mut map) => map.remove(wrapper_key).ok_or_else(|| {
            FamtreeError::InvalidInput(format!(
                "expected a JSON array or an object with a \"{}\" array",
                wrapper_key
            ))
        })?,
        other => {
            return Err(FamtreeError::InvalidInput(format!(
                "expected a JSON array, found {}",
                kind(&other)
            )))
        }
    };

    if !items.is_array() {
        return Err(FamtreeError::InvalidInput(format!(
            "\"{}\" must be an array, found {}",
            wrapper_key,
            kind(&items)
        )));
    }

    Ok(serde_json::from_value(items)?)
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
