//! Template section
//!
//! Renders a compiled template as a single message with a configured role.

use super::{PromptSection, SectionBudget};
use crate::config::SectionConfig;
use crate::context::RenderContext;
use crate::error::PromptResult;
use crate::template_engine::{CompiledTemplate, PartRenderer};
use crate::tokenizer::count_tokens;
use crate::types::{Message, RenderedSection};
use async_trait::async_trait;
use tracing::debug;

/// A section whose content comes from a template
#[derive(Debug, Clone)]
pub struct TemplateSection {
    template: CompiledTemplate,
    role: String,
    budget: SectionBudget,
}

impl TemplateSection {
    /// Compile `template` into a section with the default budget.
    ///
    /// Fails with `MalformedTemplate` if the template is unbalanced.
    pub fn new(template: &str, role: impl Into<String>) -> PromptResult<Self> {
        Ok(Self {
            template: CompiledTemplate::compile(template)?,
            role: role.into(),
            budget: SectionBudget::default(),
        })
    }

    /// Build a section from its configuration
    pub fn from_config(config: &SectionConfig) -> PromptResult<Self> {
        Ok(Self::new(&config.template, config.role.clone())?.with_budget(config.budget()))
    }

    /// Replace the budget settings
    pub fn with_budget(mut self, budget: SectionBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn template(&self) -> &CompiledTemplate {
        &self.template
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

#[async_trait]
impl PromptSection for TemplateSection {
    fn budget(&self) -> &SectionBudget {
        &self.budget
    }

    async fn render_as_messages(
        &self,
        ctx: &RenderContext,
        max_tokens: usize,
    ) -> PromptResult<RenderedSection<Vec<Message>>> {
        let parts = PartRenderer::new(ctx)
            .render_all(self.template.directives())
            .await?;
        let text = parts.concat();
        let length = count_tokens(ctx.tokenizer(), &text).await;

        debug!(role = %self.role, length, max_tokens, "rendered template section");

        let messages = if text.is_empty() {
            Vec::new()
        } else {
            vec![Message::new(self.role.clone(), text)]
        };

        Ok(self
            .budget
            .return_messages(messages, length, ctx.tokenizer(), max_tokens)
            .await)
    }
}
