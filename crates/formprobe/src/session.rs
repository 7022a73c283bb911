//! Test-session controller.
//!
//! [`TestSession`] owns the aggregator and hands out references to it. It
//! wires field sources through the classifier and the fill simulator and
//! reports fill outcomes into the aggregator in the order they happen.

use crate::aggregator::{ResultsAggregator, ResultsSummary};
use crate::classifier::{DetectionResult, FieldClassifier};
use crate::clock::{Clock, SystemClock};
use crate::config::ProbeConfig;
use crate::descriptor::FieldSource;
use crate::fill::{FillOutcome, FillSimulator};
use crate::monitor::FieldMonitor;
use crate::report::DetectionReport;
use crate::result::ProbeResult;
use tracing::info;

/// One operator session against a set of sample forms
#[derive(Debug)]
pub struct TestSession<C: Clock + Clone = SystemClock> {
    config: ProbeConfig,
    clock: C,
    classifier: FieldClassifier,
    simulator: FillSimulator,
    monitor: FieldMonitor,
    results: ResultsAggregator<C>,
}

impl TestSession<SystemClock> {
    /// Start a session on the system clock
    #[must_use]
    pub fn new(config: ProbeConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock + Clone> TestSession<C> {
    /// Start a session on the given clock
    #[must_use]
    pub fn with_clock(config: ProbeConfig, clock: C) -> Self {
        info!(top_fields = config.top_fields, "starting test session");
        Self {
            simulator: FillSimulator::new(config.profile.clone()),
            monitor: FieldMonitor::new(config.fill_event_capacity),
            results: ResultsAggregator::with_clock(clock.clone()),
            classifier: FieldClassifier::new(),
            clock,
            config,
        }
    }

    /// Session configuration
    #[must_use]
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Analyze every field of a source
    #[must_use]
    pub fn detect<S: FieldSource + ?Sized>(&self, source: &S) -> Vec<DetectionResult> {
        self.classifier.analyze_source(source)
    }

    /// Analyze a source and summarize the run
    #[must_use]
    pub fn detection_report<S: FieldSource + ?Sized>(&self, source: &S) -> DetectionReport {
        DetectionReport::from_results(&self.detect(source), self.config.top_fields)
    }

    /// Fill a form synthetically and record the attempt
    pub fn run_fill<S: FieldSource + ?Sized>(
        &mut self,
        form_id: &str,
        source: &S,
    ) -> ProbeResult<FillOutcome> {
        let fields = source.list_fields();
        let outcome = self.simulator.fill(form_id, &fields);

        for assignment in &outcome.assignments {
            if let Some(descriptor) = fields.get(assignment.index) {
                self.monitor
                    .track(&self.clock, descriptor, &assignment.applied.as_text());
            }
        }

        self.results
            .record(outcome.filled, outcome.total, &outcome.form_id)?;
        Ok(outcome)
    }

    /// Report an externally observed fill attempt
    pub fn record(&mut self, filled: u64, total: u64, form_id: &str) -> ProbeResult<()> {
        self.results.record(filled, total, form_id)
    }

    /// Count a tab visit
    pub fn visit_tab(&mut self, tab_id: &str) {
        self.results.visit_tab(tab_id);
    }

    /// Current session summary
    #[must_use]
    pub fn summary(&self) -> ResultsSummary {
        self.results.summary()
    }

    /// The session's aggregator
    #[must_use]
    pub fn results(&self) -> &ResultsAggregator<C> {
        &self.results
    }

    /// Recent fill events
    #[must_use]
    pub fn monitor(&self) -> &FieldMonitor {
        &self.monitor
    }
}
