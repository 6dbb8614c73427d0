#![allow(dead_code)]

use chrono::NaiveDate;
use log::debug;
use stamp::cli::{generate, GenerationReport};
use stamp::config::TemplateConfig;
use stamp::params::Parameters;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const TEMPLATE: &str = "tests/templates/qt_lib";
pub const EXPECTED: &str = "tests/expected/my_lib";

/// Parameters the expected output was produced with.
pub fn fixture_params(output_root: &Path, author: Option<&str>) -> Parameters {
    Parameters::derive(
        "my_lib",
        output_root,
        author.map(str::to_string),
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
    )
}

/// Relative paths of every file below `dir`.
pub fn relative_files(dir: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `actual` - The generated project.
/// * `expected` - The expected project.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = relative_files(actual);
    let expected_files = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {actual:?}");
    println!("Expected output: {expected:?}");
    println!();

    for file in actual_files.difference(&expected_files) {
        println!("  + {file:?}");
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - {file:?}");
    }

    for file in actual_files.intersection(&expected_files) {
        let actual_content = fs::read(actual.join(file)).unwrap();
        let expected_content = fs::read(expected.join(file)).unwrap();
        if actual_content != expected_content {
            println!("\n  File: {file:?}");
            println!("  --- Actual content:");
            println!("{}", String::from_utf8_lossy(&actual_content));
            println!("  --- Expected content:");
            println!("{}", String::from_utf8_lossy(&expected_content));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directories hold the same files with the same bytes,
/// printing the differences first when they do not.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    match dir_diff::is_different(actual, expected) {
        Ok(false) => {}
        Ok(true) => {
            print_dir_diff(actual, expected);
            panic!("Directories differ. See above for details.");
        }
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            print_dir_diff(actual, expected);
            panic!("Cannot compare directories.");
        }
    }
}

/// Generates the fixture template into `output_root` and compares the
/// project with the expected output.
pub fn generate_and_assert(output_root: &Path) -> GenerationReport {
    let template_root = Path::new(TEMPLATE);
    let config = TemplateConfig::load(template_root).unwrap();
    let params = fixture_params(output_root, Some("Jane Doe"));

    let report = generate(template_root, &config, &params, false).unwrap();
    assert_same_tree(&params.project_dir(), Path::new(EXPECTED));
    report
}
