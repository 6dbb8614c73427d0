//! Interactive prompting for the answers a template needs
//!
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library

use crate::{error::Result, validation::ValidationError};

pub mod dialoguer;
pub mod interface;

pub use interface::*;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> dialoguer::DialoguerPrompter {
    dialoguer::DialoguerPrompter::new()
}

/// Asks until `validate` accepts the answer, printing the validation message
/// after each rejected one.
pub fn ask_until_valid<T, F>(
    prompter: &dyn TextPrompter,
    config: &TextPromptConfig,
    validate: F,
) -> Result<T>
where
    F: Fn(&str) -> std::result::Result<T, ValidationError>,
{
    loop {
        let answer = prompter.prompt_text(config)?;
        match validate(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => println!("{err}"),
        }
    }
}
