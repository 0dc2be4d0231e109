//! Configuration types for analysis and layout calls.

use chrono::NaiveDate;

/// Configuration for critical path analysis.
#[derive(Clone, Debug, Default)]
pub struct AnalysisConfig {
    /// Verbosity level: 0=silent, 1=summary, 2=passes, 3=debug.
    pub verbosity: u8,
}

/// How the layout engine treats a task whose end date precedes its start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Fail the whole layout call on the first invalid task.
    #[default]
    Strict,
    /// Skip invalid tasks and record their ids in the result.
    Lenient,
}

/// Configuration for timeline layout.
///
/// There is no `Default` impl: the fallback date used when the task list is
/// empty must come from the caller, never from the wall clock, so layouts
/// stay reproducible under arbitrary test clocks.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    pub mode: ValidationMode,
    /// Anchor for the single-day fallback span when no tasks are given.
    pub fallback_start: NaiveDate,
    /// Verbosity level: 0=silent, 1=summary, 2=passes, 3=debug.
    pub verbosity: u8,
}

impl LayoutConfig {
    /// Strict-mode config anchored at `reference_date`.
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            mode: ValidationMode::Strict,
            fallback_start: reference_date,
            verbosity: 0,
        }
    }

    /// Switch to lenient validation (skip invalid tasks instead of failing).
    pub fn lenient(mut self) -> Self {
        self.mode = ValidationMode::Lenient;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_default_is_silent() {
        assert_eq!(AnalysisConfig::default().verbosity, 0);
    }

    #[test]
    fn test_layout_config_defaults_to_strict() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let config = LayoutConfig::new(date);
        assert_eq!(config.mode, ValidationMode::Strict);
        assert_eq!(config.fallback_start, date);
        assert_eq!(LayoutConfig::new(date).lenient().mode, ValidationMode::Lenient);
    }
}
