//! State lookup capability
//!
//! Variable directives (`{{$key}}`) resolve against a [`Memory`]. Keys are
//! flat strings; scoped names such as `temp.input` or `conversation.topic`
//! are just keys that happen to contain a dot.

use crate::error::{PromptError, PromptResult};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

/// Key/value state that templates read from
pub trait Memory: Send + Sync {
    /// Look up a value; `None` when the key is absent
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a value, replacing any previous one
    fn set(&self, key: &str, value: Value);

    /// Remove a value
    fn delete(&self, key: &str);

    /// Check whether a key is present
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory [`Memory`] backed by a hash map
#[derive(Debug, Default)]
pub struct MemoryMap {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value (builder style)
    pub fn with_value(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.write().insert(key.into(), value.into());
        self
    }

    /// Build a memory from a JSON object; each top-level field becomes a key
    pub fn from_json(value: Value) -> PromptResult<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                values: RwLock::new(map.into_iter().collect()),
            }),
            other => Err(PromptError::config(format!(
                "Memory must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Parse JSON text into a memory; malformed JSON is a `Json` error
    pub fn from_json_str(text: &str) -> PromptResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(value)
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// Sorted list of the keys currently stored
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.values.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Memory for MemoryMap {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.values.write().insert(key.to_string(), value);
    }

    fn delete(&self, key: &str) {
        self.values.write().remove(key);
    }

    fn has(&self, key: &str) -> bool {
        self.values.read().contains_key(key)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_delete() {
        let memory = MemoryMap::new();
        assert!(memory.get("temp.input").is_none());

        memory.set("temp.input", json!("hello"));
        assert!(memory.has("temp.input"));
        assert_eq!(memory.get("temp.input"), Some(json!("hello")));

        memory.delete("temp.input");
        assert!(!memory.has("temp.input"));
        assert!(memory.is_empty());
    }

    #[test]
    fn test_builder() {
        let memory = MemoryMap::new()
            .with_value("name", "Ada")
            .with_value("count", 3);
        assert_eq!(memory.len(), 2);
        assert_eq!(memory.keys(), vec!["count", "name"]);
    }

    #[test]
    fn test_from_json_object() {
        let memory = MemoryMap::from_json(json!({"user": {"name": "Ada"}, "n": 1})).unwrap();
        assert_eq!(memory.get("user"), Some(json!({"name": "Ada"})));
        assert_eq!(memory.get("n"), Some(json!(1)));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = MemoryMap::from_json(json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_from_json_str() {
        let memory = MemoryMap::from_json_str(r#"{"city": "Oslo"}"#).unwrap();
        assert_eq!(memory.get("city"), Some(json!("Oslo")));

        let err = MemoryMap::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, PromptError::Json { .. }));
        assert_eq!(err.error_code(), "PROMPT_JSON");
    }
}
