//! Fill-accuracy bookkeeping for one test session.
//!
//! A [`ResultsAggregator`] is created once at session start and owned by
//! the session controller; callers get a reference to it rather than
//! reaching a global. Only [`ResultsAggregator::record`] and
//! [`ResultsAggregator::visit_tab`] mutate it, and both take `&mut self`, so
//! there is never more than one writer.
//!
//! Invariant: `total_filled <= total_attempted`. `record` rejects attempts
//! that would break it.

use crate::clock::{Clock, SystemClock};
use crate::result::{ProbeError, ProbeResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{info, warn};

/// One reported fill attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillAttemptRecord {
    /// Fields successfully filled
    pub filled_count: u64,
    /// Fields attempted
    pub total_count: u64,
    /// `filled / total * 100`, 0 when nothing was attempted
    pub accuracy_pct: f64,
    /// When the attempt was recorded
    pub timestamp_ms: u64,
}

/// Mutable session state behind the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsState {
    /// Visits per tab id
    pub tab_visit_counts: BTreeMap<String, u64>,
    /// Sum of filled counts across all attempts
    pub total_filled: u64,
    /// Sum of attempted counts across all attempts
    pub total_attempted: u64,
    /// Overall accuracy percentage
    pub accuracy_pct: f64,
    /// Attempts per form, in the order they were recorded
    pub per_form_history: BTreeMap<String, Vec<FillAttemptRecord>>,
    /// Session start time
    pub session_start_ms: u64,
}

impl ResultsState {
    fn new(session_start_ms: u64) -> Self {
        Self {
            tab_visit_counts: BTreeMap::new(),
            total_filled: 0,
            total_attempted: 0,
            accuracy_pct: 0.0,
            per_form_history: BTreeMap::new(),
            session_start_ms,
        }
    }
}

/// Read-only view of the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    /// Number of distinct tabs visited at least once
    pub distinct_tabs_visited: usize,
    /// Sum of filled counts
    pub total_filled: u64,
    /// Sum of attempted counts
    pub total_attempted: u64,
    /// Overall accuracy percentage
    pub accuracy_pct: f64,
    /// Milliseconds since the session started
    pub elapsed_ms: u64,
    /// Most recent attempt per form
    pub latest_per_form: BTreeMap<String, FillAttemptRecord>,
}

impl ResultsSummary {
    /// Performance band for the overall accuracy
    #[must_use]
    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::from_accuracy(self.accuracy_pct)
    }
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

/// Session-wide accounting of fill attempts and tab visits
#[derive(Debug)]
pub struct ResultsAggregator<C: Clock = SystemClock> {
    clock: C,
    state: ResultsState,
}

impl ResultsAggregator<SystemClock> {
    /// Start a session on the system clock
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ResultsAggregator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ResultsAggregator<C> {
    /// Start a session on the given clock
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        let start = clock.now_ms();
        Self {
            clock,
            state: ResultsState::new(start),
        }
    }

    /// Record a fill attempt for `form_id`.
    ///
    /// Rejects `filled > total` without touching the state.
    pub fn record(&mut self, filled: u64, total: u64, form_id: &str) -> ProbeResult<()> {
        if filled > total {
            warn!(form_id, filled, total, "rejected inconsistent fill attempt");
            return Err(ProbeError::FilledExceedsTotal {
                filled,
                total,
                form_id: form_id.to_string(),
            });
        }

        self.state.total_filled += filled;
        self.state.total_attempted += total;
        self.state.accuracy_pct = percentage(self.state.total_filled, self.state.total_attempted);

        let record = FillAttemptRecord {
            filled_count: filled,
            total_count: total,
            accuracy_pct: percentage(filled, total),
            timestamp_ms: self.clock.now_ms(),
        };
        self.state
            .per_form_history
            .entry(form_id.to_string())
            .or_default()
            .push(record);

        info!(
            form_id,
            filled,
            total,
            accuracy = self.state.accuracy_pct,
            "recorded fill attempt"
        );
        Ok(())
    }

    /// Count a visit to `tab_id`
    pub fn visit_tab(&mut self, tab_id: &str) {
        let count = self
            .state
            .tab_visit_counts
            .entry(tab_id.to_string())
            .or_insert(0);
        *count += 1;
        info!(tab_id, visits = *count, "tab visited");
    }

    /// Current totals, accuracy and latest attempt per form
    #[must_use]
    pub fn summary(&self) -> ResultsSummary {
        ResultsSummary {
            distinct_tabs_visited: self.state.tab_visit_counts.len(),
            total_filled: self.state.total_filled,
            total_attempted: self.state.total_attempted,
            accuracy_pct: self.state.accuracy_pct,
            elapsed_ms: self
                .clock
                .now_ms()
                .saturating_sub(self.state.session_start_ms),
            latest_per_form: self
                .state
                .per_form_history
                .iter()
                .filter_map(|(form, history)| {
                    history.last().map(|latest| (form.clone(), latest.clone()))
                })
                .collect(),
        }
    }

    /// Attempts recorded for a form, oldest first
    #[must_use]
    pub fn history(&self, form_id: &str) -> &[FillAttemptRecord] {
        self.state
            .per_form_history
            .get(form_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Visits recorded for a tab
    #[must_use]
    pub fn tab_visits(&self, tab_id: &str) -> u64 {
        self.state
            .tab_visit_counts
            .get(tab_id)
            .copied()
            .unwrap_or(0)
    }

    /// Raw session state
    #[must_use]
    pub fn state(&self) -> &ResultsState {
        &self.state
    }
}

/// Qualitative banding of an accuracy percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceBand {
    /// 90% and above
    Excellent,
    /// 75% up to 90%
    Good,
    /// 50% up to 75%
    Fair,
    /// Below 50%
    Poor,
}

impl PerformanceBand {
    /// Band an accuracy percentage
    #[must_use]
    pub fn from_accuracy(accuracy_pct: f64) -> Self {
        if accuracy_pct >= 90.0 {
            Self::Excellent
        } else if accuracy_pct >= 75.0 {
            Self::Good
        } else if accuracy_pct >= 50.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Short label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    /// Operator-facing sentence
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! The extension is working perfectly.",
            Self::Good => "Good performance. Some minor improvements possible.",
            Self::Fair => "Fair performance. Consider reviewing field mappings.",
            Self::Poor => "Poor performance. Field detection needs improvement.",
        }
    }
}

impl fmt::Display for PerformanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Band label for an accuracy percentage
#[must_use]
pub fn qualitative_message(accuracy_pct: f64) -> &'static str {
    PerformanceBand::from_accuracy(accuracy_pct).label()
}
