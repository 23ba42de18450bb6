//! Part renderer
//!
//! Evaluates compiled directives against a render context. All directives of
//! one template are evaluated concurrently and joined positionally, so the
//! output order always matches the template order regardless of which
//! function finishes first.

use super::types::Directive;
use crate::context::RenderContext;
use crate::display::to_display_string;
use crate::error::{PromptError, PromptResult};
use futures::future::try_join_all;
use serde_json::Value;
use tracing::{debug, trace};

/// Renders directives against one render context
pub struct PartRenderer<'a> {
    context: &'a RenderContext,
}

impl<'a> PartRenderer<'a> {
    pub fn new(context: &'a RenderContext) -> Self {
        Self { context }
    }

    /// Render every directive, returning the parts in directive order.
    ///
    /// The first failing directive aborts the whole render; in-flight
    /// evaluations of the other directives are dropped.
    pub async fn render_all(&self, directives: &[Directive]) -> PromptResult<Vec<String>> {
        if self.context.is_cancelled() {
            return Err(PromptError::Cancelled);
        }

        let parts = try_join_all(directives.iter().map(|d| self.render_part(d))).await?;
        debug!(parts = parts.len(), "rendered template parts");
        Ok(parts)
    }

    /// Render a single directive
    pub async fn render_part(&self, directive: &Directive) -> PromptResult<String> {
        match directive {
            Directive::Text(text) => Ok(text.clone()),
            Directive::Variable(key) => Ok(self.render_variable(key).await),
            Directive::FunctionCall { name, args } => self.render_function(name, args).await,
        }
    }

    /// Render a variable reference; missing keys render as empty text
    async fn render_variable(&self, key: &str) -> String {
        match self.context.memory().get(key) {
            Some(value) => to_display_string(&value, self.context.tokenizer()).await,
            None => {
                trace!(key, "variable not found in memory");
                String::new()
            }
        }
    }

    /// Render a function call
    async fn render_function(&self, name: &str, args: &[String]) -> PromptResult<String> {
        let value = self.invoke(name, args).await?;
        Ok(to_display_string(&value, self.context.tokenizer()).await)
    }

    /// Invoke a function, abandoning it if the render is cancelled
    async fn invoke(&self, name: &str, args: &[String]) -> PromptResult<Value> {
        let cancel_token = self.context.cancel_token();
        if cancel_token.is_cancelled() {
            return Err(PromptError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => {
                debug!(function = name, "function call abandoned on cancellation");
                Err(PromptError::Cancelled)
            }
            result = self.context.functions().invoke(name, self.context, args) => result,
        }
    }
}
