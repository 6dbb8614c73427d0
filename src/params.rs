//! The values substituted into a template.
//!
//! [`Parameters`] is derived once per run from the answered name, the output
//! directory, the author and the current date, and is then only read.

use chrono::NaiveDate;
use cruet::case::{camel::to_camel_case, pascal::to_pascal_case};
use std::path::PathBuf;

use crate::constants::{DATE_FORMAT, FALLBACK_AUTHOR, YEAR_FORMAT};
use crate::token::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Name as answered, e.g. `my_lib`.
    pub name: String,
    /// `MY_LIB`
    pub upper_name: String,
    /// `mylib`
    pub shrink_name: String,
    /// `MyLib`
    pub hump_name: String,
    /// `myLib`
    pub little_hump_name: String,
    /// `my-lib`
    pub dash_name: String,
    pub author: String,
    /// `YYYY/MM/DD`
    pub date: String,
    pub year: String,
    /// Directory the project directory is created in.
    pub output_root: PathBuf,
}

impl Parameters {
    /// Derives every casing variant of `name`.
    ///
    /// A missing or blank `author` falls back to [`FALLBACK_AUTHOR`].
    pub fn derive<P: Into<PathBuf>>(
        name: &str,
        output_root: P,
        author: Option<String>,
        today: NaiveDate,
    ) -> Self {
        let author = author
            .map(|author| author.trim().to_string())
            .filter(|author| !author.is_empty())
            .unwrap_or_else(|| FALLBACK_AUTHOR.to_string());

        Self {
            name: name.to_string(),
            upper_name: name.to_uppercase(),
            shrink_name: name.replace('_', ""),
            hump_name: to_pascal_case(name),
            little_hump_name: to_camel_case(name),
            dash_name: name.replace('_', "-"),
            author,
            date: today.format(DATE_FORMAT).to_string(),
            year: today.format(YEAR_FORMAT).to_string(),
            output_root: output_root.into(),
        }
    }

    /// Root of the generated tree: `<output_root>/<name>`.
    pub fn project_dir(&self) -> PathBuf {
        self.output_root.join(&self.name)
    }

    /// The value a token bound to `field` is replaced with.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::UpperName => &self.upper_name,
            Field::ShrinkName => &self.shrink_name,
            Field::HumpName => &self.hump_name,
            Field::LittleHumpName => &self.little_hump_name,
            Field::DashName => &self.dash_name,
            Field::Author => &self.author,
            Field::Date => &self.date,
            Field::Year => &self.year,
        }
    }
}
