//! Pipeline run state resolution.
//!
//! The API returns a run's lifecycle as an unordered list of timestamped
//! state events. [`resolve_run_state`] orders an owned copy of that list
//! and derives the run's current status, start time, completion time and
//! humanized duration; everything else on the run passes through
//! unchanged.

pub mod resolver;
pub mod types;

pub use resolver::{compare_created_at, humanize_duration, resolve_run_state};
pub use types::{PipelineRun, ResolvedRun, RunState, RunStateEvent};
