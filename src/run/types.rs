//! Pipeline run records and their derived projection.

use std::collections::HashMap;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a pipeline run.
///
/// Wire values outside the five known states deserialize to [`Unknown`]
/// instead of being coerced to a known one.
///
/// [`Unknown`]: RunState::Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    /// Queued, not yet picked up by a worker.
    Pending,
    /// Currently executing.
    Running,
    /// Finished successfully.
    Completed,
    /// Finished with an error.
    Failed,
    /// Stopped by a user.
    Canceled,
    /// Any unrecognized wire value.
    #[serde(other)]
    Unknown,
}

impl RunState {
    /// Returns true for states that end a run.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunState::Completed | RunState::Failed | RunState::Canceled
        )
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Pending => write!(f, "PENDING"),
            RunState::Running => write!(f, "RUNNING"),
            RunState::Completed => write!(f, "COMPLETED"),
            RunState::Failed => write!(f, "FAILED"),
            RunState::Canceled => write!(f, "CANCELED"),
            RunState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One timestamped state transition, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStateEvent {
    /// The state the run transitioned to.
    pub state: RunState,
    /// When the transition was recorded (UTC on the wire).
    pub created_at: DateTime<Utc>,
}

impl RunStateEvent {
    /// Creates a new state event.
    pub fn new(state: RunState, created_at: DateTime<Utc>) -> Self {
        Self { state, created_at }
    }
}

/// A pipeline run as fetched from the API: its state transitions plus
/// whatever other fields the server sent, passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineRun {
    /// State transitions, append-only from the server's perspective.
    #[serde(default)]
    pub states: Vec<RunStateEvent>,
    /// Unrelated run metadata, carried through unchanged.
    #[serde(flatten)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// A run augmented with derived status and timing fields.
///
/// Read-only projection: recomputed on every fetch, never persisted
/// independently of its source events.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedRun {
    /// State of the chronologically last event, if any.
    pub status: Option<RunState>,
    /// First RUNNING transition, in local time.
    pub started_at: Option<DateTime<Local>>,
    /// First terminal transition, in local time.
    pub completed_at: Option<DateTime<Local>>,
    /// Humanized elapsed time, present only when both timestamps are.
    pub duration: Option<String>,
    /// The run's state transitions, sorted by `created_at`.
    pub states: Vec<RunStateEvent>,
    /// Unrelated run metadata, carried through unchanged.
    #[serde(flatten)]
    pub metadata: HashMap<String, serde_json::Value>,
}
