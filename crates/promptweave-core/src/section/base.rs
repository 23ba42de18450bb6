//! Section budgeting
//!
//! A section either has a fixed token budget (`tokens > 1.0`) or takes
//! whatever the caller offers. Fixed-budget output is truncated from the end;
//! anything else is only flagged `too_long` when it exceeds `max_tokens`.

use crate::tokenizer::{Tokenizer, count_tokens};
use crate::types::{Message, RenderedSection};
use serde::{Deserialize, Serialize};

/// Token budget and text layout settings for a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionBudget {
    /// Fixed budget in tokens; values at or below 1.0 mean "no fixed budget"
    pub tokens: f64,
    /// Whether the prompt fails when this section does not fit
    pub required: bool,
    /// Separator between messages when rendering as text
    pub separator: String,
    /// Prefix prepended when rendering as text
    pub text_prefix: String,
}

impl Default for SectionBudget {
    fn default() -> Self {
        Self {
            tokens: -1.0,
            required: true,
            separator: "\n".to_string(),
            text_prefix: String::new(),
        }
    }
}

impl SectionBudget {
    pub fn new(tokens: f64, required: bool) -> Self {
        Self {
            tokens,
            required,
            ..Self::default()
        }
    }

    /// Set the text separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the text prefix
    pub fn with_text_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.text_prefix = prefix.into();
        self
    }

    /// The fixed budget in whole tokens, if any
    pub fn fixed_tokens(&self) -> Option<usize> {
        (self.tokens > 1.0).then(|| self.tokens as usize)
    }

    /// Tokens this section may use out of `max_tokens`
    pub fn token_budget(&self, max_tokens: usize) -> usize {
        match self.fixed_tokens() {
            Some(tokens) => tokens.min(max_tokens),
            None => max_tokens,
        }
    }

    /// Truncate rendered messages to the fixed budget and flag overflow.
    ///
    /// Messages are dropped from the end until the output fits; the last
    /// dropped message is re-added truncated when part of it still fits.
    pub async fn return_messages(
        &self,
        mut output: Vec<Message>,
        mut length: usize,
        tokenizer: &dyn Tokenizer,
        max_tokens: usize,
    ) -> RenderedSection<Vec<Message>> {
        if let Some(budget) = self.fixed_tokens() {
            while length > budget {
                let Some(message) = output.pop() else {
                    break;
                };
                let encoded = tokenizer.encode(&message.content).await;
                length = length.saturating_sub(encoded.len());
                if length < budget {
                    let delta = budget - length;
                    let keep = delta.min(encoded.len());
                    let truncated = tokenizer.decode(&encoded[..keep]).await;
                    length += delta;
                    output.push(Message::new(message.role, truncated));
                }
            }
        }

        RenderedSection {
            output,
            length,
            too_long: length > max_tokens,
        }
    }

    /// Join rendered messages into text with this section's separator and prefix
    pub async fn messages_to_text(
        &self,
        rendered: RenderedSection<Vec<Message>>,
        tokenizer: &dyn Tokenizer,
        max_tokens: usize,
    ) -> RenderedSection<String> {
        if rendered.output.is_empty() {
            return RenderedSection::empty();
        }

        let count = rendered.output.len();
        let body = rendered
            .output
            .into_iter()
            .map(|m| m.content)
            .collect::<Vec<_>>()
            .join(&self.separator);

        let prefix_length = count_tokens(tokenizer, &self.text_prefix).await;
        let separator_length = count_tokens(tokenizer, &self.separator).await;
        let mut length = prefix_length + rendered.length + (count - 1) * separator_length;
        let mut text = format!("{}{}", self.text_prefix, body);

        if let Some(budget) = self.fixed_tokens() {
            if length > budget {
                let encoded = tokenizer.encode(&text).await;
                text = tokenizer.decode(&encoded[..budget.min(encoded.len())]).await;
                length = budget;
            }
        }

        RenderedSection {
            output: text,
            length,
            too_long: length > max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::CharTokenizer;

    #[test]
    fn test_token_budget() {
        assert_eq!(SectionBudget::default().token_budget(100), 100);
        assert_eq!(SectionBudget::new(50.0, true).token_budget(100), 50);
        assert_eq!(SectionBudget::new(500.0, true).token_budget(100), 100);
        // Values at or below 1.0 are not fixed budgets
        assert_eq!(SectionBudget::new(0.5, true).token_budget(100), 100);
    }

    #[tokio::test]
    async fn test_unbudgeted_messages_pass_through() {
        let tokenizer = CharTokenizer::new();
        let budget = SectionBudget::default();
        let result = budget
            .return_messages(vec![Message::user("hello")], 5, &tokenizer, 10)
            .await;
        assert_eq!(result.output, vec![Message::user("hello")]);
        assert_eq!(result.length, 5);
        assert!(!result.too_long);
    }

    #[tokio::test]
    async fn test_unbudgeted_messages_flag_overflow() {
        let tokenizer = CharTokenizer::new();
        let budget = SectionBudget::default();
        let result = budget
            .return_messages(vec![Message::user("hello")], 5, &tokenizer, 4)
            .await;
        assert_eq!(result.output.len(), 1);
        assert!(result.too_long);
    }

    #[tokio::test]
    async fn test_fixed_budget_truncates_last_message() {
        let tokenizer = CharTokenizer::new();
        let budget = SectionBudget::new(3.0, true);
        let result = budget
            .return_messages(vec![Message::system("abcdef")], 6, &tokenizer, 100)
            .await;
        assert_eq!(result.output, vec![Message::system("abc")]);
        assert_eq!(result.length, 3);
        assert!(!result.too_long);
    }

    #[tokio::test]
    async fn test_fixed_budget_drops_whole_messages() {
        let tokenizer = CharTokenizer::new();
        let budget = SectionBudget::new(4.0, true);
        let messages = vec![Message::user("abcd"), Message::user("efgh")];
        let result = budget.return_messages(messages, 8, &tokenizer, 100).await;
        // Dropping "efgh" lands exactly on the budget, nothing is re-added
        assert_eq!(result.output, vec![Message::user("abcd")]);
        assert_eq!(result.length, 4);
    }

    #[tokio::test]
    async fn test_fixed_budget_larger_than_max_is_too_long() {
        let tokenizer = CharTokenizer::new();
        let budget = SectionBudget::new(10.0, true);
        let result = budget
            .return_messages(vec![Message::user("abcdefgh")], 8, &tokenizer, 5)
            .await;
        assert_eq!(result.length, 8);
        assert!(result.too_long);
    }

    #[tokio::test]
    async fn test_messages_to_text() {
        let tokenizer = CharTokenizer::new();
        let budget = SectionBudget::default().with_text_prefix("> ");
        let rendered = RenderedSection {
            output: vec![Message::user("ab"), Message::user("cd")],
            length: 4,
            too_long: false,
        };
        let text = budget.messages_to_text(rendered, &tokenizer, 100).await;
        assert_eq!(text.output, "> ab\ncd");
        assert_eq!(text.length, 7);
    }

    #[tokio::test]
    async fn test_messages_to_text_truncates_to_fixed_budget() {
        let tokenizer = CharTokenizer::new();
        let budget = SectionBudget::new(4.0, false).with_separator(" | ");
        let rendered = RenderedSection {
            output: vec![Message::user("ab"), Message::user("cd")],
            length: 4,
            too_long: false,
        };
        let text = budget.messages_to_text(rendered, &tokenizer, 100).await;
        assert_eq!(text.output, "ab |");
        assert_eq!(text.length, 4);
    }

    #[tokio::test]
    async fn test_messages_to_text_empty() {
        let tokenizer = CharTokenizer::new();
        let text = SectionBudget::default()
            .messages_to_text(RenderedSection::empty(), &tokenizer, 100)
            .await;
        assert_eq!(text.output, "");
        assert_eq!(text.length, 0);
    }
}
