//! Timeline layout for Gantt-style charts.
//!
//! Maps a set of dated tasks onto a 0..1 chart axis: bucket labels for the
//! time header at day/week/month granularity, and per-task fractional bar
//! positions clamped to the chart. Pure data out; painting is the caller's
//! problem.

mod buckets;
mod layout;

pub use buckets::{generate_buckets, Granularity};
pub use layout::{layout, BarPosition, LayoutError, TimelineLayout};
