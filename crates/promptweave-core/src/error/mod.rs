//! Error types for Promptweave
//!
//! Every fallible operation in the crate returns [`PromptResult`]. Errors fall
//! into two groups:
//! - construction errors (malformed templates, bad config, duplicate functions)
//!   that prevent an object from ever existing
//! - render errors (unknown or failing functions, cancellation, budget
//!   violations) that abort a single render call

mod constructors;
mod conversions;
mod types;

pub use types::{OpenConstruct, PromptError, PromptResult};
