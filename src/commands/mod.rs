//! Subcommand entry points. Each returns the process exit code.

mod check;
mod context;
mod lint;

pub use check::run_check;
pub use context::RunContext;
pub use lint::run_lint;
