use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CheckTreeError, Result};

use super::Config;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

const LOCAL_CONFIG_NAME: &str = ".check-tree.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the platform-specific configuration directory for check-tree.
    ///
    /// - Windows: `%APPDATA%\check-tree`
    /// - macOS: `~/Library/Application Support/check-tree`
    /// - Linux: `~/.config/check-tree` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "check-tree")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.check-tree.toml` in the repository root
/// 2. `config.toml` in the platform-specific user config directory
/// 3. `Config::default()` if no config found
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
    root: PathBuf,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self::with_fs(RealFileSystem, root)
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub fn with_fs(fs: F, root: &Path) -> Self {
        Self {
            fs,
            root: root.to_path_buf(),
        }
    }

    fn local_config_path(&self) -> PathBuf {
        self.root.join(LOCAL_CONFIG_NAME)
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(CheckTreeError::from)?;
        config.validate()?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let local_path = self.local_config_path();
        if self.fs.exists(&local_path) {
            return self.load_from_path(&local_path);
        }

        if let Some(user_path) = self.user_config_path()
            && self.fs.exists(&user_path)
        {
            return self.load_from_path(&user_path);
        }

        debug!("no config file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        debug!("loading config from {}", path.display());
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| CheckTreeError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_config(&content)
    }
}
