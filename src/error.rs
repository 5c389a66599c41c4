use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckTreeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid usage: {0}")]
    Usage(String),

    #[error("Failed to read file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Not a git repository: {0}")]
    GitRepoNotFound(String),
}

impl CheckTreeError {
    /// Short category label used as the heading of an error report.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::Usage(_) => "Usage",
            Self::FileAccess { .. } | Self::Io(_) => "FileAccess",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Walk(_) => "Walk",
            Self::JsonSerialize(_) => "Output",
            Self::Git(_) | Self::GitRepoNotFound(_) => "Git",
        }
    }

    /// The primary message, without the category prefix used by `Display`.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::Usage(msg) | Self::Git(msg) => msg.clone(),
            Self::GitRepoNotFound(path) => format!("no git repository found at {path}"),
            Self::FileAccess { path, .. } => format!("cannot read {}", path.display()),
            Self::InvalidPattern { pattern, .. } => format!("invalid glob pattern '{pattern}'"),
            Self::Walk(e) => e
                .path()
                .map_or_else(|| "directory walk failed".to_string(), |p| {
                    format!("cannot walk {}", p.display())
                }),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.kind().to_string()),
            Self::Walk(e) => e.io_error().map(ToString::to_string),
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Usage(_) => {
                Some("pass --all, --staged, or a list of files (see --help)")
            }
            Self::FileAccess { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Some("check that the file exists and the path is relative to the repository root")
            }
            Self::InvalidPattern { .. } => {
                Some("ignore files use gitignore glob syntax: *, **, ?, and [...] classes")
            }
            Self::Git(_) => Some("check that git is installed and the references exist"),
            Self::GitRepoNotFound(_) => {
                Some("run inside a git working tree, or run 'git init' first")
            }
            Self::TomlParse(_) | Self::Config(_) => {
                Some("run with --no-config to check whether the config file is at fault")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckTreeError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
