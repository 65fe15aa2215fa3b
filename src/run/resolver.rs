//! Deriving a run's status and timing from its state events.

use std::cmp::Ordering;

use chrono::{Duration, Local};

use super::types::{PipelineRun, ResolvedRun, RunState, RunStateEvent};

/// Orders state events ascending by `created_at`.
///
/// Used with a stable sort, so events sharing a timestamp keep their
/// original relative order. Exposed so callers can order run lists the
/// same way the resolver orders events.
pub fn compare_created_at(a: &RunStateEvent, b: &RunStateEvent) -> Ordering {
    a.created_at.cmp(&b.created_at)
}

/// Computes a run's current status, start time, completion time and
/// duration from its state events.
///
/// Operates on an owned copy; the caller's view of the run is never
/// aliased. A run without events comes back with every derived field
/// unset. The result is identical no matter what order the events were
/// supplied in.
pub fn resolve_run_state(run: PipelineRun) -> ResolvedRun {
    let PipelineRun {
        mut states,
        metadata,
    } = run;

    if states.is_empty() {
        return ResolvedRun {
            status: None,
            started_at: None,
            completed_at: None,
            duration: None,
            states,
            metadata,
        };
    }

    states.sort_by(compare_created_at);

    let status = states.last().map(|event| event.state);
    let started_at = states
        .iter()
        .find(|event| event.state == RunState::Running)
        .map(|event| event.created_at);
    let completed_at = states
        .iter()
        .find(|event| event.state.is_terminal())
        .map(|event| event.created_at);

    // Operand order is start minus end; the humanizer reads the magnitude
    // only, so the sign shows up solely in the raw difference.
    let duration = match (started_at, completed_at) {
        (Some(start), Some(end)) => Some(humanize_duration(start - end)),
        _ => None,
    };

    ResolvedRun {
        status,
        started_at: started_at.map(|instant| instant.with_timezone(&Local)),
        completed_at: completed_at.map(|instant| instant.with_timezone(&Local)),
        duration,
        states,
        metadata,
    }
}

/// Coarse humanized rendering of a duration's magnitude, bucketed the way
/// moment.js buckets `duration.humanize()`: 45 s to a minute, 45 min to
/// an hour, 22 h to a day, 26 d to a month, 11 months to a year.
pub fn humanize_duration(duration: Duration) -> String {
    let seconds = duration.num_seconds().unsigned_abs();
    let minutes = div_round(seconds, 60);
    let hours = div_round(minutes, 60);
    let days = div_round(hours, 24);
    let months = div_round(days * 100, 3044);
    let years = div_round(months, 12);

    if seconds <= 44 {
        "a few seconds".to_string()
    } else if seconds <= 89 {
        "a minute".to_string()
    } else if minutes <= 44 {
        format!("{} minutes", minutes)
    } else if minutes <= 89 {
        "an hour".to_string()
    } else if hours <= 21 {
        format!("{} hours", hours)
    } else if hours <= 35 {
        "a day".to_string()
    } else if days <= 25 {
        format!("{} days", days)
    } else if days <= 45 {
        "a month".to_string()
    } else if months <= 10 {
        format!("{} months", months)
    } else if months <= 17 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    }
}

/// Rounded integer division.
fn div_round(value: u64, divisor: u64) -> u64 {
    (value + divisor / 2) / divisor
}
