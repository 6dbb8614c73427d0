//! Dialoguer-based implementation of the prompt interface

use super::interface::{TextPromptConfig, TextPrompter};
use crate::error::Result;
use dialoguer::Input;

/// Terminal prompter backed by dialoguer
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(&config.prompt)
            .allow_empty(config.allow_empty)
            .interact_text()?)
    }
}
