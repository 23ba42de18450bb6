//! Core error types for Promptweave

use std::fmt;
use thiserror::Error;

/// Result type alias for Promptweave operations
pub type PromptResult<T> = Result<T, PromptError>;

/// The construct a template scan left open when input ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenConstruct {
    /// A `{{` with no matching `}}`
    Directive,
    /// A quote inside a directive with no matching closing quote
    QuotedString,
}

impl fmt::Display for OpenConstruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenConstruct::Directive => write!(f, "directive"),
            OpenConstruct::QuotedString => write!(f, "quoted string"),
        }
    }
}

/// Main error type for Promptweave
#[derive(Error, Debug, Clone)]
pub enum PromptError {
    /// Template could not be compiled
    #[error("Malformed template: unterminated {state} starting at byte {offset}")]
    MalformedTemplate { state: OpenConstruct, offset: usize },

    /// A function directive named a function the registry does not know
    #[error("Unknown function: {name}")]
    UnknownFunction { name: String },

    /// A registered function failed
    #[error("Function error: {name}: {message}")]
    FunctionInvocation { name: String, message: String },

    /// A function was registered twice under the same name
    #[error("Function already registered: {name}")]
    DuplicateFunction { name: String },

    /// The render was cancelled by its caller
    #[error("Render was cancelled")]
    Cancelled,

    /// A required section did not fit in the remaining token budget
    #[error("Required section {index} needs {length} tokens but only {budget} remain")]
    RequiredSectionTooLong {
        index: usize,
        length: usize,
        budget: usize,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl PromptError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedTemplate { .. } => "PROMPT_MALFORMED_TEMPLATE",
            Self::UnknownFunction { .. } => "PROMPT_UNKNOWN_FUNCTION",
            Self::FunctionInvocation { .. } => "PROMPT_FUNCTION",
            Self::DuplicateFunction { .. } => "PROMPT_DUPLICATE_FUNCTION",
            Self::Cancelled => "PROMPT_CANCELLED",
            Self::RequiredSectionTooLong { .. } => "PROMPT_SECTION_TOO_LONG",
            Self::Config { .. } => "PROMPT_CONFIG",
            Self::Json { .. } => "PROMPT_JSON",
            Self::Io { .. } => "PROMPT_IO",
        }
    }

    /// Additional context attached to the error, if any
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }

    /// Whether this error happened while compiling a template
    pub fn is_compile_error(&self) -> bool {
        matches!(self, Self::MalformedTemplate { .. })
    }
}
