//! From trait implementations for PromptError conversions

use super::types::PromptError;

impl From<serde_json::Error> for PromptError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}
