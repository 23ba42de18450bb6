//! Prompt sections
//!
//! A section renders to either a message list or a block of text, measured
//! in tokens and held to a budget:
//! - [`SectionBudget`]: fixed token budget, required flag, text separator and prefix
//! - [`TemplateSection`]: a compiled template rendered as one message
//! - [`PromptLayout`]: several sections sharing one budget

mod base;
mod layout;
mod template;

pub use base::SectionBudget;
pub use layout::PromptLayout;
pub use template::TemplateSection;

use crate::context::RenderContext;
use crate::error::PromptResult;
use crate::types::{Message, RenderedSection};
use async_trait::async_trait;

/// A renderable piece of a prompt
#[async_trait]
pub trait PromptSection: Send + Sync {
    /// Budget settings for this section
    fn budget(&self) -> &SectionBudget;

    /// Render the section as chat messages
    async fn render_as_messages(
        &self,
        ctx: &RenderContext,
        max_tokens: usize,
    ) -> PromptResult<RenderedSection<Vec<Message>>>;

    /// Render the section as a single block of text
    async fn render_as_text(
        &self,
        ctx: &RenderContext,
        max_tokens: usize,
    ) -> PromptResult<RenderedSection<String>> {
        let messages = self.render_as_messages(ctx, max_tokens).await?;
        Ok(self
            .budget()
            .messages_to_text(messages, ctx.tokenizer(), max_tokens)
            .await)
    }

    /// Whether the prompt is unusable without this section
    fn required(&self) -> bool {
        self.budget().required
    }
}
