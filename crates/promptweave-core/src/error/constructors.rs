//! Constructor methods for PromptError

use super::types::{OpenConstruct, PromptError};

impl PromptError {
    /// Create a malformed template error
    pub fn malformed(state: OpenConstruct, offset: usize) -> Self {
        Self::MalformedTemplate { state, offset }
    }

    /// Create an unknown function error
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }

    /// Create a function invocation error
    pub fn function(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FunctionInvocation {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate function error
    pub fn duplicate_function(name: impl Into<String>) -> Self {
        Self::DuplicateFunction { name: name.into() }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    /// Create an IO error with the offending path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}
