//! Render context
//!
//! The bundle of capabilities a single render call runs against. A compiled
//! template never stores one; callers pass a context per render, and may pass
//! a different one each time.

use crate::functions::PromptFunctions;
use crate::memory::Memory;
use crate::tokenizer::Tokenizer;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Capabilities supplied to one render call
#[derive(Clone)]
pub struct RenderContext {
    memory: Arc<dyn Memory>,
    functions: Arc<dyn PromptFunctions>,
    tokenizer: Arc<dyn Tokenizer>,
    cancel_token: CancellationToken,
}

impl RenderContext {
    pub fn new(
        memory: Arc<dyn Memory>,
        functions: Arc<dyn PromptFunctions>,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        Self {
            memory,
            functions,
            tokenizer,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Use a caller-owned cancellation token
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    pub fn memory(&self) -> &dyn Memory {
        self.memory.as_ref()
    }

    pub fn functions(&self) -> &dyn PromptFunctions {
        self.functions.as_ref()
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("cancelled", &self.is_cancelled())
            .finish_non_exhaustive()
    }
}
