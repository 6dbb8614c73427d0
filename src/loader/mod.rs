use crate::error::Result;
use std::path::PathBuf;

pub mod local;

pub use local::LocalLoader;

/// Trait for loading templates from a source.
pub trait TemplateLoader {
    /// Resolves the template and returns the absolute path of its root directory.
    fn load(&self) -> Result<PathBuf>;
}

/// Loads the template rooted at `s`.
///
/// # Returns
/// * `Result<PathBuf>` - Absolute path to the template root
pub fn get_template(s: &str) -> Result<PathBuf> {
    let template_root = LocalLoader::new(PathBuf::from(s)).load()?;
    log::debug!("Using template from '{}'", template_root.display());
    Ok(template_root)
}
