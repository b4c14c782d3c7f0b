//! Token counting against the cl100k_base encoding.
//!
//! The DeepSeek endpoint bills and limits by tokens under the same BPE tables
//! OpenAI publishes for cl100k_base, so prompt sizing here uses that encoding.

use thiserror::Error;
use tiktoken_rs::CoreBPE;

/// Errors from loading or using the tokenizer.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The encoding tables could not be loaded.
    #[error("tokenizer unavailable: {0}")]
    Unavailable(String),
}

/// Token counter backed by the cl100k_base BPE tables.
pub struct TokenCounter {
    bpe: CoreBPE,
}

impl TokenCounter {
    /// Loads the cl100k_base encoding.
    pub fn cl100k() -> Result<Self, TokenError> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| TokenError::Unavailable(e.to_string()))?;
        Ok(TokenCounter { bpe })
    }

    /// Counts the tokens `text` encodes to.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }

    /// Name of the encoding scheme in use.
    pub fn encoding_name(&self) -> &'static str {
        "cl100k_base"
    }
}
