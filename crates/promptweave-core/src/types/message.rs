//! Message and render output types shared by sections and layouts

use serde::{Deserialize, Serialize};

/// A single chat message produced by rendering a section
///
/// The role is a free-form label ("system", "user", "assistant", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: String,
    /// Content of the message
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// Output of rendering a section, with its token length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedSection<T> {
    /// Rendered output: a message list or a block of text
    pub output: T,
    /// Length of the output in tokenizer units
    pub length: usize,
    /// Whether the output exceeds the budget it was rendered against
    pub too_long: bool,
}

impl<T: Default> RenderedSection<T> {
    /// An empty result that fits any budget
    pub fn empty() -> Self {
        Self {
            output: T::default(),
            length: 0,
            too_long: false,
        }
    }
}
