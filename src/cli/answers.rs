use crate::{
    constants::{prompts, STDIN_INDICATOR},
    error::{Error, Result},
    ioutils::read_from,
    prompt::{ask_until_valid, TextPromptConfig, TextPrompter},
    validation::{validate_name, validate_output_dir},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Answers supplied up front with `--answers`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PresetAnswers {
    pub name: Option<String>,
    pub output_dir: Option<String>,
}

impl PresetAnswers {
    /// Parses a JSON object, or reads one from stdin when given `-`.
    pub fn parse(cli_answers: Option<&str>) -> Result<Self> {
        match cli_answers {
            None => Ok(Self::default()),
            Some(STDIN_INDICATOR) => Self::from_json(&read_from(std::io::stdin())?),
            Some(json) => Self::from_json(json),
        }
    }

    fn from_json(buf: &str) -> Result<Self> {
        if buf.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(buf)?)
    }
}

/// The validated answers a run needs.
#[derive(Debug, PartialEq)]
pub struct Answers {
    pub name: String,
    pub output_dir: PathBuf,
}

/// Collects answers from presets first, then from the user.
pub struct AnswerCollector<'a> {
    prompter: &'a dyn TextPrompter,
    non_interactive: bool,
}

impl<'a> AnswerCollector<'a> {
    pub fn new(prompter: &'a dyn TextPrompter, non_interactive: bool) -> Self {
        Self { prompter, non_interactive }
    }

    /// Collects the library name and the output directory.
    ///
    /// Presets are validated like typed answers, but an invalid preset is an
    /// error instead of a new prompt.
    pub fn collect_answers(
        &self,
        preset: PresetAnswers,
        default_output_dir: &Path,
    ) -> Result<Answers> {
        let name = self.collect_name(preset.name)?;
        let output_dir = self.collect_output_dir(preset.output_dir, default_output_dir)?;
        log::debug!("Answers: name={name}, output_dir={}", output_dir.display());
        Ok(Answers { name, output_dir })
    }

    fn collect_name(&self, preset: Option<String>) -> Result<String> {
        if let Some(name) = preset {
            validate_name(&name).map_err(|e| Error::ValidationError(e.to_string()))?;
            return Ok(name);
        }
        if self.non_interactive {
            return Err(Error::ValidationError(
                "a name is required when running non-interactively".to_string(),
            ));
        }

        let config =
            TextPromptConfig { prompt: prompts::NAME.to_string(), allow_empty: false };
        ask_until_valid(self.prompter, &config, |answer| {
            validate_name(answer).map(|_| answer.to_string())
        })
    }

    fn collect_output_dir(
        &self,
        preset: Option<String>,
        default_output_dir: &Path,
    ) -> Result<PathBuf> {
        if let Some(output_dir) = preset {
            return validate_output_dir(&output_dir, default_output_dir)
                .map_err(|e| Error::ValidationError(e.to_string()));
        }
        if self.non_interactive {
            return Ok(default_output_dir.to_path_buf());
        }

        let config = TextPromptConfig {
            prompt: format!("{} ({})", prompts::OUTPUT_DIR, default_output_dir.display()),
            allow_empty: true,
        };
        ask_until_valid(self.prompter, &config, |answer| {
            validate_output_dir(answer, default_output_dir)
        })
    }
}
