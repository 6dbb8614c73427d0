//! Author attribution for the `%username%` token.

use log::debug;
use std::path::{Path, PathBuf};

/// Source of the current author's name.
pub trait AuthorProvider {
    /// Returns the author's name, or `None` when it cannot be determined.
    fn current_author(&self) -> Option<String>;
}

/// Reads `user.name` from git configuration.
///
/// Inside a repository the repository configuration is consulted (it layers
/// local over global and system settings); otherwise the default global and
/// system configuration is used.
pub struct GitConfigAuthor {
    cwd: PathBuf,
}

impl GitConfigAuthor {
    pub fn new<P: AsRef<Path>>(cwd: P) -> Self {
        Self { cwd: cwd.as_ref().to_path_buf() }
    }

    fn open_config(&self) -> Result<git2::Config, git2::Error> {
        match git2::Repository::discover(&self.cwd) {
            Ok(repo) => repo.config(),
            Err(_) => git2::Config::open_default(),
        }
    }
}

impl AuthorProvider for GitConfigAuthor {
    fn current_author(&self) -> Option<String> {
        let name = self
            .open_config()
            .and_then(|config| config.get_string("user.name"))
            .map_err(|e| debug!("Cannot read git user.name: {e}"))
            .ok()?;
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

/// Provider with a fixed answer, for runs that must not consult git.
pub struct FixedAuthor(pub Option<String>);

impl AuthorProvider for FixedAuthor {
    fn current_author(&self) -> Option<String> {
        self.0.clone()
    }
}
