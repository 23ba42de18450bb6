//! Tokenizer capability
//!
//! Sections measure and truncate their output in tokenizer units. The real
//! model tokenizer lives outside this crate; anything that can encode text to
//! token ids and decode them back plugs in through [`Tokenizer`].

use async_trait::async_trait;

/// Encodes text to token ids and back
#[async_trait]
pub trait Tokenizer: Send + Sync {
    /// Encode text into a sequence of token ids
    async fn encode(&self, text: &str) -> Vec<u32>;

    /// Decode a sequence of token ids back into text
    async fn decode(&self, tokens: &[u32]) -> String;
}

/// Count the tokens in a string
pub async fn count_tokens(tokenizer: &dyn Tokenizer, text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    tokenizer.encode(text).await.len()
}

/// Tokenizer that maps every Unicode scalar value to one token
///
/// Lossless, deterministic and dependency free. Useful for tests and for
/// budgets expressed in characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharTokenizer;

impl CharTokenizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tokenizer for CharTokenizer {
    async fn encode(&self, text: &str) -> Vec<u32> {
        text.chars().map(u32::from).collect()
    }

    async fn decode(&self, tokens: &[u32]) -> String {
        tokens.iter().filter_map(|&t| char::from_u32(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_char_tokenizer_round_trip() {
        let tokenizer = CharTokenizer::new();
        let tokens = tokenizer.encode("héllo ✓").await;
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokenizer.decode(&tokens).await, "héllo ✓");
    }

    #[tokio::test]
    async fn test_decode_prefix() {
        let tokenizer = CharTokenizer::new();
        let tokens = tokenizer.encode("abcdef").await;
        assert_eq!(tokenizer.decode(&tokens[..3]).await, "abc");
    }

    #[tokio::test]
    async fn test_count_tokens() {
        let tokenizer = CharTokenizer::new();
        assert_eq!(count_tokens(&tokenizer, "").await, 0);
        assert_eq!(count_tokens(&tokenizer, "four").await, 4);
    }
}
