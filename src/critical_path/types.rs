//! Types for critical path analysis.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Per-task timing information computed by the analyzer.
///
/// All values are whole days from project start. Recomputed fresh on every
/// `analyze` call; never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTiming {
    /// Earliest possible start (from forward pass).
    pub earliest_start: u32,
    /// Earliest possible finish (earliest_start + duration).
    pub earliest_finish: u32,
    /// Latest allowable start (from backward pass).
    pub latest_start: u32,
    /// Latest allowable finish (from backward pass).
    pub latest_finish: u32,
    /// Scheduling flexibility: latest_finish - earliest_finish.
    pub slack: u32,
}

impl TaskTiming {
    /// A task is critical when it has no scheduling flexibility at all.
    /// Integer day arithmetic, so the test is exact.
    pub fn is_critical(&self) -> bool {
        self.slack == 0
    }
}

/// Result of one critical path analysis call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Timing for every task, keyed by task id.
    pub timings: FxHashMap<String, TaskTiming>,
    /// One critical path, source to sink; ties broken by smallest id.
    pub critical_path: Vec<String>,
    /// Minimum total project duration (max earliest finish over all tasks).
    pub project_duration: u32,
    /// Sum of all task durations.
    pub total_work: u32,
}

impl AnalysisResult {
    /// Timing for a single task, if it was part of the analyzed graph.
    pub fn timing(&self, task_id: &str) -> Option<&TaskTiming> {
        self.timings.get(task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_timing_critical() {
        let timing = TaskTiming {
            earliest_start: 0,
            earliest_finish: 5,
            latest_start: 0,
            latest_finish: 5,
            slack: 0,
        };
        assert!(timing.is_critical());

        let timing_with_slack = TaskTiming {
            earliest_start: 0,
            earliest_finish: 5,
            latest_start: 2,
            latest_finish: 7,
            slack: 2,
        };
        assert!(!timing_with_slack.is_critical());
    }
}
