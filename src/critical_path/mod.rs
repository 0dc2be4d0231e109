//! Critical path analysis (CPM) over a task-dependency graph.
//!
//! Computes earliest/latest start and finish times, slack, and a
//! deterministic critical path via forward and backward passes over the DAG.
//! The analyzer is a pure function: it validates the graph, never mutates
//! input, and reports structural problems as errors before any pass runs.

mod calculation;
mod types;

pub use calculation::{analyze, AnalysisError};
pub use types::{AnalysisResult, TaskTiming};
