//! Stringification of memory values and function results
//!
//! Variables and function calls both render through [`to_display_string`]:
//! - `null` renders as an empty string
//! - strings render verbatim, numbers and booleans as their literal form
//! - arrays and objects render as compact JSON or YAML, whichever costs fewer
//!   tokens (JSON wins ties)

use crate::tokenizer::{Tokenizer, count_tokens};
use serde_json::Value;

/// Render a value as prompt text
pub async fn to_display_string(value: &Value, tokenizer: &dyn Tokenizer) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => structured_display(value, tokenizer).await,
    }
}

async fn structured_display(value: &Value, tokenizer: &dyn Tokenizer) -> String {
    let as_json = serde_json::to_string(value).unwrap_or_default();
    let as_yaml = match serde_yaml::to_string(value) {
        Ok(yaml) => yaml,
        Err(_) => return as_json,
    };

    let json_tokens = count_tokens(tokenizer, &as_json).await;
    let yaml_tokens = count_tokens(tokenizer, &as_yaml).await;
    if yaml_tokens < json_tokens {
        as_yaml
    } else {
        as_json
    }
}
