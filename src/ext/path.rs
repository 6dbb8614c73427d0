use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide checked string conversion
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use stamp::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("sharedlib_name");
    /// assert_eq!(path.to_str_checked().unwrap(), "sharedlib_name");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str()
            .ok_or_else(|| Error::InvalidUnicodePath { path: self.display().to_string() })
    }
}
