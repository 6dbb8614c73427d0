use std::path::PathBuf;

use crate::encoding::TextEncoding;

#[derive(Debug)]
pub enum TemplateOperation {
    /// Binary asset copied byte-for-byte.
    Copy { source: PathBuf, target: PathBuf, target_exists: bool },
    /// Text file written with its tokens substituted.
    Write {
        source: PathBuf,
        target: PathBuf,
        content: String,
        target_exists: bool,
        executable: bool,
    },
    /// File left out because its content is not UTF-8 compatible.
    Skip { source: PathBuf, encoding: TextEncoding },
}

impl TemplateOperation {
    /// Returns a brief description of this operation for error messages.
    pub fn error_context(&self) -> String {
        match self {
            TemplateOperation::Copy { source, target, .. } => {
                format!("copy '{}' -> '{}'", source.display(), target.display())
            }
            TemplateOperation::Write { source, target, .. } => {
                format!("write '{}' -> '{}'", source.display(), target.display())
            }
            TemplateOperation::Skip { source, .. } => {
                format!("skip '{}'", source.display())
            }
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::Copy { source, target, target_exists } => {
                let suffix = if *target_exists { " (overwriting existing file)" } else { "" };
                format!(
                    "{}Copying '{}' to '{}'{}",
                    prefix,
                    source.display(),
                    target.display(),
                    suffix
                )
            }

            TemplateOperation::Write { target, target_exists, executable, .. } => {
                let mut notes = Vec::new();
                if *target_exists {
                    notes.push("overwriting existing file");
                }
                if *executable {
                    notes.push("executable");
                }
                let suffix = if notes.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", notes.join(", "))
                };
                format!("{}Writing to '{}'{}", prefix, target.display(), suffix)
            }

            TemplateOperation::Skip { source, encoding } => {
                format!(
                    "{}Skipping '{}' (unsupported encoding: {})",
                    prefix,
                    source.display(),
                    encoding
                )
            }
        }
    }
}
