//! Core data types for the scheduling engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A task in a dependency graph, prior to any scheduling.
///
/// Durations are whole days; dependency ids must refer to other nodes in the
/// same analysis call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNode {
    pub id: String,
    pub name: String,
    pub duration_days: u32,
    /// Ids of direct predecessors (this task cannot start before they finish).
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl TaskNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration_days: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration_days,
            depends_on: Vec::new(),
        }
    }

    /// Add a single predecessor id.
    pub fn with_dependency(mut self, dep: impl Into<String>) -> Self {
        self.depends_on.push(dep.into());
        self
    }

    /// Replace the predecessor list.
    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = deps.into_iter().map(Into::into).collect();
        self
    }
}

/// Priority classification for display purposes (color/legend only).
///
/// Never consulted by layout math.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// A task with concrete dates, ready for timeline layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedTask {
    pub id: String,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Completion percentage, 0-100.
    pub percent_complete: u8,
    pub priority: TaskPriority,
    pub project_id: String,
}

impl TimedTask {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start,
            end,
            percent_complete: 0,
            priority: TaskPriority::default(),
            project_id: project_id.into(),
        }
    }

    pub fn with_progress(mut self, percent_complete: u8) -> Self {
        self.percent_complete = percent_complete.min(100);
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_node_builder() {
        let node = TaskNode::new("b", "Build", 3)
            .with_dependency("a")
            .with_dependency("c");
        assert_eq!(node.depends_on, vec!["a", "c"]);
        assert_eq!(node.duration_days, 3);
    }

    #[test]
    fn test_timed_task_builders() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let task = TimedTask::new("t", "Task", start, end, "p1")
            .with_progress(150)
            .with_priority(TaskPriority::High);
        assert_eq!(task.percent_complete, 100);
        assert_eq!(task.priority, TaskPriority::High);
    }

    #[test]
    fn test_task_node_serde_round_trip() {
        let node = TaskNode::new("a", "Analysis", 5).with_dependency("kickoff");
        let json = serde_json::to_string(&node).unwrap();
        let back: TaskNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_task_node_deps_default_to_empty() {
        let node: TaskNode =
            serde_json::from_str(r#"{"id":"a","name":"A","duration_days":2}"#).unwrap();
        assert!(node.depends_on.is_empty());
    }

    #[test]
    fn test_priority_serde_names() {
        assert_eq!(
            serde_json::to_string(&TaskPriority::High).unwrap(),
            "\"high\""
        );
    }
}
