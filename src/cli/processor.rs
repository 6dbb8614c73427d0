use crate::{
    collector::TemplateEntry,
    error::Result,
    ioutils::{copy_file, set_executable, write_file},
    template::{operation::TemplateOperation, processor::TemplateProcessor},
};
use std::fmt::Display;
use std::path::PathBuf;

/// What happened to each template file during a run.
#[derive(Debug, Default, PartialEq)]
pub struct GenerationReport {
    /// Targets written with substituted content.
    pub written: Vec<PathBuf>,
    /// Targets copied byte-for-byte.
    pub copied: Vec<PathBuf>,
    /// Template files (relative) left out for their encoding.
    pub skipped: Vec<PathBuf>,
    /// Template files (relative) that could not be generated.
    pub failed: Vec<PathBuf>,
}

impl Display for GenerationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} written, {} copied, {} skipped, {} failed",
            self.written.len(),
            self.copied.len(),
            self.skipped.len(),
            self.failed.len()
        )
    }
}

/// Executes the operation of every template file, one file at a time.
///
/// A failing file is logged and recorded; it never stops the others.
pub struct FileProcessor<'a> {
    processor: TemplateProcessor<'a>,
    dry_run: bool,
}

impl<'a> FileProcessor<'a> {
    pub fn new(processor: TemplateProcessor<'a>, dry_run: bool) -> Self {
        Self { processor, dry_run }
    }

    /// Processes all collected template files
    pub fn process_all_files(&self, entries: &[TemplateEntry]) -> GenerationReport {
        let mut report = GenerationReport::default();

        for entry in entries {
            log::info!("Generate file: {}", entry.relative.display());

            let file_operation = match self.processor.process(entry) {
                Ok(file_operation) => file_operation,
                Err(e) => {
                    log::warn!("Generate file failed: {e}");
                    report.failed.push(entry.relative.clone());
                    continue;
                }
            };

            if let Err(e) = self.handle_file_operation(&file_operation) {
                log::warn!(
                    "Generate file failed: {}. Original error: {e}",
                    file_operation.error_context()
                );
                report.failed.push(entry.relative.clone());
                continue;
            }

            let message = file_operation.get_message(self.dry_run);
            match file_operation {
                TemplateOperation::Write { target, .. } => {
                    log::info!("{message}");
                    report.written.push(target);
                }
                TemplateOperation::Copy { target, .. } => {
                    log::info!("{message}");
                    report.copied.push(target);
                }
                TemplateOperation::Skip { .. } => {
                    log::warn!("{message}");
                    report.skipped.push(entry.relative.clone());
                }
            }
        }

        report
    }

    /// Handles a single file operation (write, copy or skip)
    fn handle_file_operation(&self, file_operation: &TemplateOperation) -> Result<()> {
        log::debug!("Handling file operation: {}", file_operation.error_context());
        if self.dry_run {
            return Ok(());
        }

        match file_operation {
            TemplateOperation::Write { target, content, executable, .. } => {
                write_file(content, target)?;
                if *executable {
                    if let Err(e) = set_executable(target) {
                        log::warn!("Cannot make '{}' executable: {e}", target.display());
                    }
                }
                Ok(())
            }
            TemplateOperation::Copy { source, target, .. } => copy_file(source, target),
            TemplateOperation::Skip { .. } => Ok(()),
        }
    }
}
