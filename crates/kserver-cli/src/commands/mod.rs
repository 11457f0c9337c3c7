//! Command implementations for kserver-cli

pub mod libraries;
pub mod options;
pub mod plan;

pub use libraries::run_libraries;
pub use options::run_options;
pub use plan::{PlanArgs, run_plan};
