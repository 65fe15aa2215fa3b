//! Command-line interface for runviz.
//!
//! Provides commands for inspecting CSV run artifacts and resolving run
//! status records.

mod commands;

pub use commands::{parse_cli, run, run_with_cli};
