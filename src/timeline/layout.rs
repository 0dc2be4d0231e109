//! Span discovery and fractional bar positioning.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{LayoutConfig, ValidationMode};
use crate::dates::days_between;
use crate::log_summary;
use crate::models::TimedTask;

use super::buckets::{generate_buckets, Granularity};

/// Per-task validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Task {task} ends ({end}) before it starts ({start})")]
    InvalidDateRange {
        task: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Bar placement as fractions of the full chart width.
///
/// Both fractions are clamped so the bar never extends past either chart
/// edge, whatever the input dates were.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BarPosition {
    /// Offset of the bar's left edge from the chart's left edge, 0..=1.
    pub left_fraction: f64,
    /// Bar width; left_fraction + width_fraction never exceeds 1.
    pub width_fraction: f64,
}

/// Result of one timeline layout call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    /// Earliest task start (or the configured fallback for empty input).
    pub span_start: NaiveDate,
    /// Latest task end (or the configured fallback for empty input).
    pub span_end: NaiveDate,
    /// Whole days across the span, floored at 1 to keep division safe.
    pub total_days: i64,
    /// Axis labels covering the span at the requested granularity.
    pub buckets: Vec<String>,
    /// Bar positions keyed by task id.
    pub positions: FxHashMap<String, BarPosition>,
    /// Ids of tasks dropped under lenient validation.
    pub skipped: Vec<String>,
}

impl TimelineLayout {
    /// Position computed during layout for a task id, if it survived.
    pub fn position(&self, task_id: &str) -> Option<BarPosition> {
        self.positions.get(task_id).copied()
    }

    /// Recompute a clamped position for `task` against this layout's span.
    ///
    /// Safe for tasks that were not part of the layout call (or were mutated
    /// since): the clamps guarantee the bar stays on the chart even when the
    /// task's dates fall outside the discovered span.
    pub fn position_for(&self, task: &TimedTask) -> BarPosition {
        position_in_span(self.span_start, self.total_days, task)
    }
}

fn position_in_span(span_start: NaiveDate, total_days: i64, task: &TimedTask) -> BarPosition {
    let total = total_days.max(1) as f64;
    let left = (days_between(span_start, task.start) as f64 / total).clamp(0.0, 1.0);
    let width = days_between(task.start, task.end).max(1) as f64 / total;
    BarPosition {
        left_fraction: left,
        width_fraction: width.min(1.0 - left),
    }
}

/// Lay out `tasks` on a 0..1 axis with bucket labels at `granularity`.
///
/// The span is rediscovered from the tasks on every call; nothing is cached.
/// An empty task list is not an error: it produces the configured single-day
/// fallback span, one bucket, and no positions.
///
/// # Errors
/// In strict mode, the first task whose end date precedes its start fails
/// the call. Lenient mode instead skips such tasks and lists them in
/// [`TimelineLayout::skipped`].
pub fn layout(
    tasks: &[TimedTask],
    granularity: Granularity,
    config: &LayoutConfig,
) -> Result<TimelineLayout, LayoutError> {
    let mut valid: Vec<&TimedTask> = Vec::with_capacity(tasks.len());
    let mut skipped: Vec<String> = Vec::new();

    for task in tasks {
        if task.end < task.start {
            match config.mode {
                ValidationMode::Strict => {
                    return Err(LayoutError::InvalidDateRange {
                        task: task.id.clone(),
                        start: task.start,
                        end: task.end,
                    });
                }
                ValidationMode::Lenient => skipped.push(task.id.clone()),
            }
        } else {
            valid.push(task);
        }
    }

    let span_start = valid.iter().map(|t| t.start).min();
    let span_end = valid.iter().map(|t| t.end).max();
    let (span_start, span_end) = match (span_start, span_end) {
        (Some(start), Some(end)) => (start, end),
        _ => (config.fallback_start, config.fallback_start),
    };

    let total_days = days_between(span_start, span_end).max(1);
    let buckets = generate_buckets(span_start, span_end, granularity);

    let positions: FxHashMap<String, BarPosition> = valid
        .iter()
        .map(|task| (task.id.clone(), position_in_span(span_start, total_days, task)))
        .collect();

    log_summary!(
        config.verbosity,
        "layout complete: span {span_start}..{span_end}, {} buckets, {} tasks, {} skipped",
        buckets.len(),
        positions.len(),
        skipped.len()
    );

    Ok(TimelineLayout {
        span_start,
        span_end,
        total_days,
        buckets,
        positions,
        skipped,
    })
}
