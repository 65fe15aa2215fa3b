//! Chart-side data shaping: downsampling and axis presentation.
//!
//! A parsed dataset flows through [`downsample`] to cap the number of
//! renderable points, [`graph_interval`] picks how many axis ticks to
//! keep, and [`format_axis_value`] renders a single tick label at draw
//! time. All three are pure, total functions.

pub mod axis;
pub mod downsample;
pub mod interval;

pub use axis::format_axis_value;
pub use downsample::{downsample, DEFAULT_GRAPH_POINTS};
pub use interval::{graph_interval, TickInterval};
