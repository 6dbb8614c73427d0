//! Configuration loading and management

use crate::constants::{
    CONFIG_FILENAMES, DEFAULT_BINARY_EXTENSIONS, DEFAULT_DENY,
    DEFAULT_EXECUTABLE_EXTENSIONS, DEFAULT_KEEP,
};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Per-template settings read from `stamp.yaml`, `stamp.yml` or `stamp.json`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    /// Entry names never collected.
    #[serde(default = "get_default_deny")]
    pub deny: Vec<String>,
    /// Dotfiles collected although their stem is empty.
    #[serde(default = "get_default_keep")]
    pub keep: Vec<String>,
    #[serde(default = "get_default_binary_extensions")]
    pub binary_extensions: Vec<String>,
    #[serde(default = "get_default_executable_extensions")]
    pub executable_extensions: Vec<String>,
    /// Where a blank output directory answer resolves to, relative to the
    /// template root.
    #[serde(default)]
    pub default_output_dir: Option<PathBuf>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            deny: get_default_deny(),
            keep: get_default_keep(),
            binary_extensions: get_default_binary_extensions(),
            executable_extensions: get_default_executable_extensions(),
            default_output_dir: None,
        }
    }
}

impl TemplateConfig {
    /// Loads the first configuration file found in `template_root`, or the
    /// defaults when there is none.
    pub fn load<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let template_root = template_root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = template_root.join(config_file_name);

            if config_file_path.is_file() {
                log::debug!("Loading configuration from {}", config_file_path.display());
                let content = std::fs::read_to_string(&config_file_path)?;
                let config: TemplateConfig = if config_file_name.ends_with(".json") {
                    serde_json::from_str(&content)?
                } else {
                    serde_yaml::from_str(&content)?
                };
                let config = config.normalized();
                config.validate()?;
                return Ok(config);
            }
        }

        log::debug!(
            "No configuration file in '{}', using defaults. Tried: {}",
            template_root.display(),
            CONFIG_FILENAMES.join(", ")
        );
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        let extensions = self.binary_extensions.iter().chain(&self.executable_extensions);
        for extension in extensions {
            if extension.is_empty() {
                return Err(Error::ConfigValidation("extensions must not be empty".into()));
            }
        }
        for name in self.deny.iter().chain(&self.keep) {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(Error::ConfigValidation(format!(
                    "'{name}' must be a single entry name"
                )));
            }
        }
        Ok(())
    }

    /// Strips leading dots from extensions and lowercases them.
    fn normalized(mut self) -> Self {
        let normalize = |extensions: Vec<String>| -> Vec<String> {
            extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect()
        };
        self.binary_extensions = normalize(self.binary_extensions);
        self.executable_extensions = normalize(self.executable_extensions);
        self
    }

    pub fn is_denied(&self, name: &str) -> bool {
        self.deny.iter().any(|denied| denied == name)
    }

    pub fn is_kept(&self, name: &str) -> bool {
        self.keep.iter().any(|kept| kept == name)
    }

    /// Whether `path` is copied byte-for-byte.
    pub fn is_binary<P: AsRef<Path>>(&self, path: P) -> bool {
        has_extension(path.as_ref(), &self.binary_extensions)
    }

    /// Whether `path` is made executable after writing.
    pub fn is_executable<P: AsRef<Path>>(&self, path: P) -> bool {
        has_extension(path.as_ref(), &self.executable_extensions)
    }

    /// The directory a blank output directory answer resolves to.
    pub fn default_output_dir<P: AsRef<Path>>(&self, template_root: P) -> PathBuf {
        let template_root = template_root.as_ref();
        match &self.default_output_dir {
            Some(dir) => template_root.join(dir),
            None => template_root
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| template_root.to_path_buf()),
        }
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|known| known.eq_ignore_ascii_case(e)))
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn get_default_deny() -> Vec<String> {
    to_strings(DEFAULT_DENY)
}

fn get_default_keep() -> Vec<String> {
    to_strings(DEFAULT_KEEP)
}

fn get_default_binary_extensions() -> Vec<String> {
    to_strings(DEFAULT_BINARY_EXTENSIONS)
}

fn get_default_executable_extensions() -> Vec<String> {
    to_strings(DEFAULT_EXECUTABLE_EXTENSIONS)
}
