use stamp::error::Error;
use stamp::loader::{get_template, LocalLoader, TemplateLoader};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_local_loader_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("test_template");
    fs::create_dir(&template_path).unwrap();
    fs::write(template_path.join("README.md"), "# SharedlibName").unwrap();

    let loader = LocalLoader::new(&template_path);
    let result = loader.load();
    assert_eq!(result.unwrap(), template_path.canonicalize().unwrap());
}

#[test]
fn test_local_loader_non_existing_directory() {
    let non_existing_path = PathBuf::from("/path/that/does/not/exist");
    let loader = LocalLoader::new(&non_existing_path);
    match loader.load() {
        Err(Error::TemplateDoesNotExistsError { template_dir }) => {
            assert_eq!(template_dir, "/path/that/does/not/exist");
        }
        other => panic!("Expected TemplateDoesNotExistsError, got {other:?}"),
    }
}

#[test]
fn test_local_loader_regular_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("template.txt");
    fs::write(&file_path, "not a directory").unwrap();

    let result = LocalLoader::new(&file_path).load();
    assert!(matches!(result, Err(Error::TemplateNotADirectoryError { .. })));
}

#[test]
fn test_get_template_returns_absolute_path() {
    let template_root = get_template("tests/templates/qt_lib").unwrap();
    assert!(template_root.is_absolute());
    assert!(template_root.ends_with("tests/templates/qt_lib"));
}
