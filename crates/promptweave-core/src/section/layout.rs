//! Prompt layout
//!
//! Renders sections in declaration order against one shared token budget.
//! Optional sections that do not fit in what is left are dropped; a required
//! section that does not fit fails the whole prompt.

use super::PromptSection;
use crate::context::RenderContext;
use crate::error::{PromptError, PromptResult};
use crate::tokenizer::count_tokens;
use crate::types::{Message, RenderedSection};
use tracing::{debug, warn};

/// An ordered group of sections sharing a token budget
pub struct PromptLayout {
    sections: Vec<Box<dyn PromptSection>>,
    separator: String,
}

impl PromptLayout {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            separator: "\n\n".to_string(),
        }
    }

    /// Add a section (builder style)
    pub fn with_section(mut self, section: impl PromptSection + 'static) -> Self {
        self.push(section);
        self
    }

    /// Set the separator used between sections when rendering as text
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Append a section
    pub fn push(&mut self, section: impl PromptSection + 'static) {
        self.sections.push(Box::new(section));
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Render all sections as one message list
    pub async fn render_as_messages(
        &self,
        ctx: &RenderContext,
        max_tokens: usize,
    ) -> PromptResult<RenderedSection<Vec<Message>>> {
        let mut output = Vec::new();
        let mut length = 0;

        for (index, section) in self.sections.iter().enumerate() {
            let budget = section.budget().token_budget(max_tokens.saturating_sub(length));
            let rendered = section.render_as_messages(ctx, budget).await?;

            if rendered.too_long {
                Self::reject(index, section.as_ref(), rendered.length, budget)?;
                continue;
            }

            length += rendered.length;
            output.extend(rendered.output);
        }

        debug!(
            sections = self.sections.len(),
            messages = output.len(),
            length,
            max_tokens,
            "rendered prompt layout"
        );

        Ok(RenderedSection {
            output,
            length,
            too_long: false,
        })
    }

    /// Render all sections as one block of text
    pub async fn render_as_text(
        &self,
        ctx: &RenderContext,
        max_tokens: usize,
    ) -> PromptResult<RenderedSection<String>> {
        let separator_length = count_tokens(ctx.tokenizer(), &self.separator).await;
        let mut blocks: Vec<String> = Vec::new();
        let mut length = 0;

        for (index, section) in self.sections.iter().enumerate() {
            let overhead = if blocks.is_empty() { 0 } else { separator_length };
            let budget = section
                .budget()
                .token_budget(max_tokens.saturating_sub(length + overhead));
            let rendered = section.render_as_text(ctx, budget).await?;

            if rendered.too_long {
                Self::reject(index, section.as_ref(), rendered.length, budget)?;
                continue;
            }
            if rendered.output.is_empty() {
                continue;
            }

            length += overhead + rendered.length;
            blocks.push(rendered.output);
        }

        Ok(RenderedSection {
            output: blocks.join(&self.separator),
            length,
            too_long: false,
        })
    }

    /// Fail on a required section that overflowed; log and skip an optional one
    fn reject(
        index: usize,
        section: &dyn PromptSection,
        length: usize,
        budget: usize,
    ) -> PromptResult<()> {
        if section.required() {
            return Err(PromptError::RequiredSectionTooLong {
                index,
                length,
                budget,
            });
        }
        warn!(
            section = index,
            length, budget, "dropping optional section that exceeds the remaining budget"
        );
        Ok(())
    }
}

impl std::fmt::Debug for PromptLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptLayout")
            .field("sections", &self.sections.len())
            .field("separator", &self.separator)
            .finish()
    }
}

impl Default for PromptLayout {
    fn default() -> Self {
        Self::new()
    }
}
