//! Discovery of template files.
//!
//! The [`Collector`] walks the template root through a [`DirectoryLister`] and
//! returns every file that should be generated, sorted by path. Listing is a
//! trait so the filtering rules can be exercised without a real filesystem.

use globset::GlobSet;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::TemplateConfig;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Lists the direct children of a directory.
pub trait DirectoryLister {
    fn list(&self, dir: &Path) -> Result<Vec<ListedEntry>>;
}

/// Lists directories on disk. Symlinks are followed.
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> Result<Vec<ListedEntry>> {
        let mut entries = Vec::new();
        for dir_entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let dir_entry = dir_entry?;
            let file_type = dir_entry.file_type();
            let kind = if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            };
            entries.push(ListedEntry { path: dir_entry.into_path(), kind });
        }
        Ok(entries)
    }
}

/// A file to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Absolute path inside the template root.
    pub source: PathBuf,
    /// Path relative to the template root.
    pub relative: PathBuf,
}

pub struct Collector<'a, L: DirectoryLister> {
    lister: L,
    config: &'a TemplateConfig,
    ignored: &'a GlobSet,
}

impl<'a, L: DirectoryLister> Collector<'a, L> {
    pub fn new(lister: L, config: &'a TemplateConfig, ignored: &'a GlobSet) -> Self {
        Self { lister, config, ignored }
    }

    /// Collects every file below `template_root`.
    ///
    /// Any listing failure aborts the walk.
    pub fn collect<P: AsRef<Path>>(&self, template_root: P) -> Result<Vec<TemplateEntry>> {
        let template_root = template_root.as_ref();
        let mut entries = Vec::new();
        self.collect_dir(template_root, template_root, &mut entries)?;
        entries.sort_by(|a, b| a.source.cmp(&b.source));
        debug!("Collected {} template files", entries.len());
        Ok(entries)
    }

    fn collect_dir(
        &self,
        template_root: &Path,
        dir: &Path,
        entries: &mut Vec<TemplateEntry>,
    ) -> Result<()> {
        for listed in self.lister.list(dir)? {
            let name = listed
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let relative = listed
                .path
                .strip_prefix(template_root)
                .unwrap_or(&listed.path)
                .to_path_buf();

            if self.config.is_denied(&name) {
                debug!("Skipping denied entry '{}'", relative.display());
                continue;
            }
            if stem(&name).is_empty() && !self.config.is_kept(&name) {
                debug!("Skipping placeholder entry '{}'", relative.display());
                continue;
            }
            if self.ignored.is_match(&relative) {
                debug!("Ignoring '{}' (matches ignore pattern)", relative.display());
                continue;
            }

            match listed.kind {
                EntryKind::File => {
                    entries.push(TemplateEntry { source: listed.path, relative })
                }
                EntryKind::Directory => {
                    self.collect_dir(template_root, &listed.path, entries)?
                }
                EntryKind::Other => {
                    debug!("Skipping '{}' (not a file or directory)", relative.display())
                }
            }
        }
        Ok(())
    }
}

/// The name without its last extension: `.gitkeep` has an empty stem,
/// `.eslintrc.json` has `.eslintrc`.
fn stem(name: &str) -> &str {
    name.rfind('.').map_or(name, |dot| &name[..dot])
}
