//! Source selection, filtering, and reduction to tool arguments.

mod filter;
mod reduce;
mod selection;
mod selector;

pub use filter::{IgnoreSet, PathFilter};
pub use reduce::{Targets, reduce, reduce_with_dirs};
pub use selection::{SelectionMode, SelectionRequest, ci_from_env};
pub use selector::SourceSelector;




#[cfg(test)]
#[path = "reduce_tests.rs"]
mod reduce_tests;
