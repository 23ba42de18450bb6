//! Promptweave Core Library
//!
//! Compiles prompt templates containing variable references and function
//! calls, and renders them into token-budgeted messages or text.
//!
//! ```text
//! "Hi {{$name}}, it is {{date.now}}"
//!        │ compile (once)
//!        ▼
//! [Text, Variable, Text, FunctionCall]
//!        │ render (any number of times, against a RenderContext)
//!        ▼
//! [{ role: "user", content: "Hi Ada, it is 2026-10-19" }]
//! ```

pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod functions;
pub mod memory;
pub mod section;
pub mod template_engine;
pub mod tokenizer;
pub mod types;

// Re-export commonly used types
pub use config::{PromptConfig, SectionConfig};
pub use context::RenderContext;
pub use error::{PromptError, PromptResult};
pub use functions::{BuiltinFunctions, FunctionRegistry, PromptFunction, PromptFunctions};
pub use memory::{Memory, MemoryMap};
pub use section::{PromptLayout, PromptSection, SectionBudget, TemplateSection};
pub use template_engine::{CompiledTemplate, Directive};
pub use tokenizer::{CharTokenizer, Tokenizer};
pub use types::{Message, RenderedSection};
