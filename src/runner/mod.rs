//! Tool execution and verdict aggregation.
//!
//! Each external tool is described by a [`ToolSpec`]; [`ToolRunner`] runs the
//! table in order against the selected [`Targets`](crate::scanner::Targets)
//! and folds the per-tool [`Verdict`]s into a [`RunResult`].

mod execute;
mod process;
mod spec;
mod verdict;

pub use execute::{RunResult, ToolOutcome, ToolRunner};
pub use process::{CommandRunner, ProcessRunner, ToolOutput};
pub use spec::{
    Channel, Granularity, PATHS_PLACEHOLDER, Signal, ToolSpec, aggregate_linter,
    builtin_check_tools,
};
pub use verdict::{Verdict, indent, interpret};
