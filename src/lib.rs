pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod path_utils;
pub mod runner;
pub mod scanner;

pub use error::{CheckTreeError, Result};

pub const EXIT_SUCCESS: i32 = 0;
/// At least one tool failed or could not run.
pub const EXIT_CHECKS_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
