//! Section and prompt configuration types

use crate::error::{PromptError, PromptResult};
use crate::section::{PromptLayout, SectionBudget, TemplateSection};
use serde::{Deserialize, Serialize};

/// Default total token budget for a prompt
pub const DEFAULT_MAX_TOKENS: usize = 4096;

/// Configuration for one template section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// Template text
    pub template: String,
    /// Role of the produced message
    pub role: String,
    /// Fixed token budget; values at or below 1.0 mean none
    pub tokens: f64,
    /// Whether the prompt fails when this section does not fit
    pub required: bool,
    /// Separator between messages when rendering as text
    pub separator: String,
    /// Prefix prepended when rendering as text
    pub text_prefix: String,
}

impl Default for SectionConfig {
    fn default() -> Self {
        let budget = SectionBudget::default();
        Self {
            template: String::new(),
            role: "system".to_string(),
            tokens: budget.tokens,
            required: budget.required,
            separator: budget.separator,
            text_prefix: budget.text_prefix,
        }
    }
}

impl SectionConfig {
    pub fn new(template: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            role: role.into(),
            ..Self::default()
        }
    }

    /// Budget settings described by this config
    pub fn budget(&self) -> SectionBudget {
        SectionBudget {
            tokens: self.tokens,
            required: self.required,
            separator: self.separator.clone(),
            text_prefix: self.text_prefix.clone(),
        }
    }
}

/// Configuration for a whole prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Total token budget shared by all sections
    pub max_tokens: usize,
    /// Separator between sections when rendering as text
    pub separator: String,
    /// Sections in render order
    pub sections: Vec<SectionConfig>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            separator: "\n\n".to_string(),
            sections: Vec::new(),
        }
    }
}

impl PromptConfig {
    /// Check the config for values that cannot render
    pub fn validate(&self) -> PromptResult<()> {
        if self.max_tokens == 0 {
            return Err(PromptError::config("max_tokens must be greater than zero"));
        }
        if self.sections.is_empty() {
            return Err(PromptError::config("prompt has no sections"));
        }
        for (index, section) in self.sections.iter().enumerate() {
            if section.role.trim().is_empty() {
                return Err(PromptError::config_with_context(
                    "section role must not be empty",
                    format!("section {}", index),
                ));
            }
        }
        Ok(())
    }

    /// Compile every section into a layout
    pub fn build_layout(&self) -> PromptResult<PromptLayout> {
        self.validate()?;
        let mut layout = PromptLayout::new().with_separator(self.separator.clone());
        for section in &self.sections {
            layout.push(TemplateSection::from_config(section)?);
        }
        Ok(layout)
    }
}
