mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{Config, LintConfig, SelectionConfig, ToolsConfig};

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
