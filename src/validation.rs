//! Answer validators

use regex::Regex;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::constants::validation::{INVALID_NAME, INVALID_OUTPUT_DIR, NAME_PATTERN};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("NAME_PATTERN is a valid regex"));

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    Name,
    OutputDir,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Name => write!(f, "{INVALID_NAME} ({NAME_PATTERN})"),
            ValidationError::OutputDir => write!(f, "{INVALID_OUTPUT_DIR}"),
        }
    }
}

/// Lowercase letters and underscores, starting and ending with a letter.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::Name)
    }
}

/// Resolves an output directory answer.
///
/// A blank answer means `default`; anything else must be an existing directory.
pub fn validate_output_dir(input: &str, default: &Path) -> Result<PathBuf, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default.to_path_buf());
    }
    let path = Path::new(input);
    if !path.is_dir() {
        return Err(ValidationError::OutputDir);
    }
    path.canonicalize().map_err(|_| ValidationError::OutputDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn accepts_valid_names() {
        for name in ["my_lib", "ab", "sharedlib", "ffmpeg_wrapper", "a_b_c"] {
            assert_eq!(validate_name(name), Ok(()), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_invalid_names() {
        for name in ["1abc", "ABC", "_abc_", "abc_", "_abc", "a", "", "my-lib", "my lib", "myLib"]
        {
            assert_eq!(validate_name(name), Err(ValidationError::Name), "{name} should be invalid");
        }
    }

    #[test]
    fn name_error_message_shows_pattern() {
        assert_eq!(
            ValidationError::Name.to_string(),
            "Please input a valid library name (^[a-z][_a-z]*[a-z]+$)"
        );
    }

    #[test]
    fn blank_output_dir_resolves_to_default() {
        let default = Path::new("/srv/generated");
        assert_eq!(validate_output_dir("", default), Ok(default.to_path_buf()));
        assert_eq!(validate_output_dir("   ", default), Ok(default.to_path_buf()));
    }

    #[test]
    fn existing_directory_is_accepted() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().to_str().unwrap();
        assert_eq!(
            validate_output_dir(input, Path::new("/unused")),
            Ok(dir.path().canonicalize().unwrap())
        );
    }

    #[test]
    fn regular_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "").unwrap();
        assert_eq!(
            validate_output_dir(file.to_str().unwrap(), Path::new("/unused")),
            Err(ValidationError::OutputDir)
        );
    }

    #[test]
    fn missing_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert_eq!(
            validate_output_dir(missing.to_str().unwrap(), Path::new("/unused")),
            Err(ValidationError::OutputDir)
        );
    }
}
