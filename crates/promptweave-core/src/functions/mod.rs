//! Function registry capability
//!
//! Function directives (`{{name arg1 'arg two'}}`) are dispatched through a
//! [`PromptFunctions`] implementation. [`FunctionRegistry`] is the bundled
//! one: a name-keyed table of [`PromptFunction`]s.

mod builtin;
mod registry;

pub use builtin::BuiltinFunctions;
pub use registry::FunctionRegistry;

use crate::context::RenderContext;
use crate::error::PromptResult;
use async_trait::async_trait;
use serde_json::Value;

/// A single function callable from a template
#[async_trait]
pub trait PromptFunction: Send + Sync {
    /// Run the function with the raw string arguments from the directive
    async fn call(&self, ctx: &RenderContext, args: &[String]) -> PromptResult<Value>;
}

/// Dispatches function directives by name
#[async_trait]
pub trait PromptFunctions: Send + Sync {
    /// Check if a function is registered
    fn has_function(&self, name: &str) -> bool;

    /// Invoke a function by name.
    ///
    /// Fails with `UnknownFunction` when `name` is not registered; errors
    /// returned by the function itself are passed through unchanged.
    async fn invoke(
        &self,
        name: &str,
        ctx: &RenderContext,
        args: &[String],
    ) -> PromptResult<Value>;
}

/// Adapter turning a synchronous closure into a [`PromptFunction`]
pub struct FnFunction<F> {
    func: F,
}

impl<F> FnFunction<F>
where
    F: Fn(&RenderContext, &[String]) -> PromptResult<Value> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F> PromptFunction for FnFunction<F>
where
    F: Fn(&RenderContext, &[String]) -> PromptResult<Value> + Send + Sync,
{
    async fn call(&self, ctx: &RenderContext, args: &[String]) -> PromptResult<Value> {
        (self.func)(ctx, args)
    }
}
