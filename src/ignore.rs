use crate::constants::{CONFIG_FILENAMES, IGNORE_FILE};
use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Patterns always ignored, relative to the template root
const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git",
    ".git/**",
    ".hg",
    ".hg/**",
    ".svn",
    ".svn/**",
    IGNORE_FILE,
];

/// Reads the .stampignore file and builds the set of ignore globs.
///
/// Patterns are matched against paths relative to the template root.
pub fn parse_stampignore_file<P: AsRef<Path>>(template_root: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let stampignore_path = template_root.as_ref().join(IGNORE_FILE);

    let mut patterns: Vec<String> = DEFAULT_IGNORE_PATTERNS
        .iter()
        .chain(CONFIG_FILENAMES.iter())
        .map(|pattern| pattern.to_string())
        .collect();

    if let Ok(contents) = read_to_string(stampignore_path) {
        patterns.extend(parse_patterns(&contents));
    } else {
        debug!("No {IGNORE_FILE} file found, using default patterns.");
    }

    for pattern in &patterns {
        debug!("Adding ignore pattern: {pattern} to globset");
        builder.add(Glob::new(pattern)?);
    }
    debug!("Loaded ignore patterns: {patterns:?}");
    Ok(builder.build()?)
}

fn parse_patterns(contents: &str) -> impl Iterator<Item = String> + '_ {
    contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.trim_start_matches("./").trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_patterns_without_file() {
        let template_root = TempDir::new().unwrap();
        let ignored = parse_stampignore_file(template_root.path()).unwrap();

        assert!(ignored.is_match(".git"));
        assert!(ignored.is_match(".git/HEAD"));
        assert!(ignored.is_match("stamp.yaml"));
        assert!(ignored.is_match(".stampignore"));
        assert!(!ignored.is_match("src/stamp.yaml"));
        assert!(!ignored.is_match("src/main.cc"));
    }

    #[test]
    fn reads_patterns_from_file() {
        let template_root = TempDir::new().unwrap();
        fs::write(
            template_root.path().join(IGNORE_FILE),
            "# generated\n\n*.log\n./docs/\nthird_party/**\n",
        )
        .unwrap();
        let ignored = parse_stampignore_file(template_root.path()).unwrap();

        assert!(ignored.is_match("app.log"));
        assert!(ignored.is_match("sub/dir/app.log"));
        assert!(ignored.is_match("docs"));
        assert!(ignored.is_match("third_party/zlib/zlib.h"));
        assert!(!ignored.is_match("src/sharedlib_name.cc"));
    }

    #[test]
    fn invalid_glob_is_an_error() {
        let template_root = TempDir::new().unwrap();
        fs::write(template_root.path().join(IGNORE_FILE), "src/[unclosed\n").unwrap();
        assert!(parse_stampignore_file(template_root.path()).is_err());
    }
}
