use crate::error::{Error, Result};
use crate::loader::TemplateLoader;
use std::path::{Path, PathBuf};

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// Loads a template from the local filesystem.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Canonical path to the template directory
    fn load(&self) -> Result<PathBuf> {
        let path = self.path.as_ref();
        if !path.exists() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }
        if !path.is_dir() {
            return Err(Error::TemplateNotADirectoryError {
                template_dir: path.display().to_string(),
            });
        }
        Ok(path.canonicalize()?)
    }
}
