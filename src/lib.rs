//! Critical-path analysis and Gantt timeline layout for project schedules.
//!
//! Two independent, pure components over immutable snapshots of task data:
//!
//! - [`critical_path`]: CPM analysis of a task-dependency DAG — earliest and
//!   latest start/finish times, slack, and a deterministic critical path.
//! - [`timeline`]: layout of already-dated tasks onto a chart axis — timeline
//!   bucket labels at day/week/month granularity plus fractional bar
//!   positions clamped to the chart.
//!
//! Neither component performs I/O, caches across calls, or reads the wall
//! clock; the same input always produces the same output.

pub mod config;
pub mod critical_path;
pub mod dates;
pub mod logging;
mod models;
pub mod timeline;

pub use config::{AnalysisConfig, LayoutConfig, ValidationMode};
pub use critical_path::{analyze, AnalysisError, AnalysisResult, TaskTiming};
pub use models::{TaskNode, TaskPriority, TimedTask};
pub use timeline::{layout, BarPosition, Granularity, LayoutError, TimelineLayout};
