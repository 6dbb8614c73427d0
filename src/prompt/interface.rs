//! Pure interfaces for prompting without external dependencies
//!
//! These interfaces are independent of any specific UI library implementation.

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    /// Whether a blank answer is returned instead of re-asking.
    pub allow_empty: bool,
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}
