use std::fs;
use std::path::PathBuf;

use crate::collector::TemplateEntry;
use crate::config::TemplateConfig;
use crate::encoding::decode_text;
use crate::error::{Error, Result};
use crate::params::Parameters;
use crate::token::{substitute_content, substitute_path};

use super::operation::TemplateOperation;

/// Decides what to produce for each collected template file.
pub struct TemplateProcessor<'a> {
    config: &'a TemplateConfig,
    params: &'a Parameters,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(config: &'a TemplateConfig, params: &'a Parameters) -> Self {
        Self { config, params }
    }

    /// Constructs the target path for a template entry: the relative path with
    /// its tokens substituted, below the project directory.
    ///
    /// # Arguments
    /// * `entry` - The collected template entry
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The target path in the output directory
    ///
    pub fn get_target_path(&self, entry: &TemplateEntry) -> Result<PathBuf> {
        let relative = substitute_path(&entry.relative, self.params)?;
        Ok(self.params.project_dir().join(relative))
    }

    /// Processes a template entry and determines the operation to perform.
    ///
    /// The target path is computed first, then the content is read and
    /// substituted. Nothing is written here.
    ///
    /// # Arguments
    /// * `entry` - The template entry to process
    ///
    /// # Returns
    /// * `Result<TemplateOperation>` - The operation to perform
    ///
    pub fn process(&self, entry: &TemplateEntry) -> Result<TemplateOperation> {
        let target = self.get_target_path(entry)?;
        let target_exists = target.exists();

        if self.config.is_binary(&target) {
            return Ok(TemplateOperation::Copy {
                source: entry.source.clone(),
                target,
                target_exists,
            });
        }

        let bytes = fs::read(&entry.source).map_err(|e| Error::ProcessError {
            source_path: entry.source.display().to_string(),
            e: e.to_string(),
        })?;

        let text = match decode_text(bytes) {
            Ok(text) => text,
            Err(encoding) => {
                return Ok(TemplateOperation::Skip { source: entry.source.clone(), encoding })
            }
        };

        Ok(TemplateOperation::Write {
            source: entry.source.clone(),
            executable: self.config.is_executable(&target),
            content: substitute_content(&text, self.params),
            target,
            target_exists,
        })
    }
}
