use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;
use crate::CheckTreeError;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            config_dir: Some(PathBuf::from("/home/user/.config/check-tree")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new(), Path::new("/repo"));

    let config = loader.load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn loads_local_config_from_repository_root() {
    let fs = MockFileSystem::new().with_file(
        "/repo/.check-tree.toml",
        r#"
[selection]
trunk_branch = "main"
"#,
    );
    let loader = FileConfigLoader::with_fs(fs, Path::new("/repo"));

    let config = loader.load().unwrap();

    assert_eq!(config.selection.trunk_branch, "main");
    assert_eq!(config.selection.extensions, vec!["go".to_string()]);
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/check-tree/config.toml",
        r#"
[lint]
exe = "golangci-lint"
"#,
    );
    let loader = FileConfigLoader::with_fs(fs, Path::new("/repo"));

    let config = loader.load().unwrap();

    assert_eq!(config.lint.exe, "golangci-lint");
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/repo/.check-tree.toml", "[lint]\nexe = \"local\"\n")
        .with_file(
            "/home/user/.config/check-tree/config.toml",
            "[lint]\nexe = \"user\"\n",
        );
    let loader = FileConfigLoader::with_fs(fs, Path::new("/repo"));

    assert_eq!(loader.load().unwrap().lint.exe, "local");
}

#[test]
fn missing_config_dir_falls_back_to_default() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let loader = FileConfigLoader::with_fs(fs, Path::new("/repo"));

    assert_eq!(loader.load().unwrap(), Config::default());
}

#[test]
fn load_from_missing_path_is_file_access_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new(), Path::new("/repo"));

    let result = loader.load_from_path(Path::new("/elsewhere/custom.toml"));

    assert!(matches!(result, Err(CheckTreeError::FileAccess { .. })));
}

#[test]
fn syntax_error_is_toml_error() {
    let fs = MockFileSystem::new().with_file("/repo/.check-tree.toml", "[selection\n");
    let loader = FileConfigLoader::with_fs(fs, Path::new("/repo"));

    assert!(matches!(loader.load(), Err(CheckTreeError::TomlParse(_))));
}

#[test]
fn invalid_values_are_rejected_after_parsing() {
    let fs = MockFileSystem::new().with_file(
        "/repo/.check-tree.toml",
        r#"
[[tools.check]]
name = "broken"
command = []
"#,
    );
    let loader = FileConfigLoader::with_fs(fs, Path::new("/repo"));

    assert!(matches!(loader.load(), Err(CheckTreeError::Config(_))));
}
