use crate::{
    author::{AuthorProvider, GitConfigAuthor},
    cli::{
        answers::{AnswerCollector, Answers, PresetAnswers},
        processor::{FileProcessor, GenerationReport},
        Args,
    },
    collector::{Collector, FsLister},
    config::TemplateConfig,
    error::{Error, Result},
    ignore::parse_stampignore_file,
    loader::get_template,
    params::Parameters,
    prompt::get_prompt_provider,
    template::processor::TemplateProcessor,
};
use std::path::{Path, PathBuf};

/// Main CLI runner that orchestrates the entire generation workflow
pub struct Runner {
    args: Args,
    author_provider: Box<dyn AuthorProvider>,
}

impl Runner {
    /// Creates a runner that reads the author from git configuration.
    pub fn new(args: Args) -> Self {
        Self { args, author_provider: Box::new(GitConfigAuthor::new(current_dir())) }
    }

    /// Replaces the source of the `%username%` value.
    pub fn with_author_provider(mut self, author_provider: Box<dyn AuthorProvider>) -> Self {
        self.author_provider = author_provider;
        self
    }

    /// Executes the complete generation workflow
    pub fn run(self) -> Result<()> {
        let template_root = get_template(self.args.template.as_str())?;

        let config = TemplateConfig::load(&template_root)?;
        log::debug!("Template configuration: {config:?}");

        let answers = self.collect_answers(&template_root, &config)?;

        let author = self.author_provider.current_author();
        let params = Parameters::derive(
            &answers.name,
            answers.output_dir,
            author,
            chrono::Local::now().date_naive(),
        );
        log::debug!("Parameters: {params:?}");

        let report = generate(&template_root, &config, &params, self.args.dry_run)?;

        let prefix = if self.args.dry_run { "[DRY RUN] " } else { "" };
        println!(
            "{prefix}Generated '{}' in {} ({report}).",
            params.name,
            params.project_dir().display()
        );
        Ok(())
    }

    /// Collects answers from the `--answers` preset and the prompt
    fn collect_answers(&self, template_root: &Path, config: &TemplateConfig) -> Result<Answers> {
        let preset = PresetAnswers::parse(self.args.answers.as_deref())?;
        let prompter = get_prompt_provider();
        let collector = AnswerCollector::new(&prompter, self.args.non_interactive);
        collector.collect_answers(preset, &config.default_output_dir(template_root))
    }
}

/// Generates the project described by `params` from the template at
/// `template_root`.
///
/// Collecting the template tree is all-or-nothing; after that every file is
/// generated on its own and the outcome is recorded in the returned report.
/// A project directory at or below the template root is rejected before
/// anything is read.
pub fn generate(
    template_root: &Path,
    config: &TemplateConfig,
    params: &Parameters,
    dry_run: bool,
) -> Result<GenerationReport> {
    ensure_outside_template(template_root, params)?;

    let ignored = parse_stampignore_file(template_root)?;

    let entries = Collector::new(FsLister, config, &ignored).collect(template_root)?;

    let processor = TemplateProcessor::new(config, params);
    let file_processor = FileProcessor::new(processor, dry_run);
    Ok(file_processor.process_all_files(&entries))
}

/// Fails when the project directory is the template root or lies inside it.
fn ensure_outside_template(template_root: &Path, params: &Parameters) -> Result<()> {
    let template_root = template_root.canonicalize()?;
    let project_dir = resolve_existing_prefix(&params.project_dir());

    if project_dir.starts_with(&template_root) {
        return Err(Error::OutputInsideTemplate {
            project_dir: project_dir.display().to_string(),
            template_dir: template_root.display().to_string(),
        });
    }
    Ok(())
}

/// Canonicalizes the longest existing prefix of `path` and appends the rest.
fn resolve_existing_prefix(path: &Path) -> PathBuf {
    for ancestor in path.ancestors() {
        if let (Ok(resolved), Ok(rest)) = (ancestor.canonicalize(), path.strip_prefix(ancestor)) {
            return resolved.join(rest);
        }
    }
    path.to_path_buf()
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
