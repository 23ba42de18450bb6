//! Template engine
//!
//! A small embedded template language for prompts:
//! - Literal text: everything outside `{{ ... }}`
//! - Variables: `{{$key}}` looks `key` up in memory
//! - Function calls: `{{name arg 'quoted arg' "another" `third`}}`
//!
//! Templates compile once into a list of [`Directive`]s and render any
//! number of times, concurrently, against a [`RenderContext`].
//!
//! # Example
//!
//! ```rust,ignore
//! use promptweave_core::template_engine::{CompiledTemplate, PartRenderer};
//!
//! let template = CompiledTemplate::compile("Hello {{$name}}, today is {{date.now}}")?;
//! let parts = PartRenderer::new(&ctx).render_all(template.directives()).await?;
//! let text = parts.concat();
//! ```
//!
//! [`RenderContext`]: crate::context::RenderContext

mod arguments;
mod lexer;
mod renderer;
mod types;

pub use arguments::parse_function_body;
pub use lexer::compile;
pub use renderer::PartRenderer;
pub use types::{CompiledTemplate, Directive};
