//! Reporting views over detection results and session state.
//!
//! Nothing here is stored; every view is recomputed from its inputs.

use crate::aggregator::ResultsSummary;
use crate::classifier::DetectionResult;
use crate::purpose::PurposeTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate view of one detection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    /// Fields analyzed
    pub total_fields: usize,
    /// Mean detection score, 0 for an empty run
    pub average_score: f64,
    /// Fields with a known purpose
    pub purposes_detected: usize,
    /// `purposes_detected / total_fields * 100`, 0 for an empty run
    pub purpose_detection_pct: f64,
    /// Fields per purpose tag
    pub purpose_counts: BTreeMap<String, usize>,
    /// Highest-scoring fields, best first; ties keep input order
    pub top_fields: Vec<DetectionResult>,
}

impl DetectionReport {
    /// Summarize `results`, listing the `top_n` best fields
    #[must_use]
    pub fn from_results(results: &[DetectionResult], top_n: usize) -> Self {
        let total_fields = results.len();
        let purposes_detected = results.iter().filter(|r| r.purpose.is_known()).count();

        let (average_score, purpose_detection_pct) = if total_fields == 0 {
            (0.0, 0.0)
        } else {
            let score_sum: u32 = results.iter().map(|r| r.score).sum();
            (
                f64::from(score_sum) / total_fields as f64,
                purposes_detected as f64 * 100.0 / total_fields as f64,
            )
        };

        let mut purpose_counts = BTreeMap::new();
        for result in results {
            *purpose_counts
                .entry(result.purpose.as_str().to_string())
                .or_insert(0) += 1;
        }

        let mut top_fields = results.to_vec();
        top_fields.sort_by(|a, b| b.score.cmp(&a.score));
        top_fields.truncate(top_n);

        Self {
            total_fields,
            average_score,
            purposes_detected,
            purpose_detection_pct,
            purpose_counts,
            top_fields,
        }
    }

    /// Number of fields tagged with `purpose`
    #[must_use]
    pub fn count_of(&self, purpose: PurposeTag) -> usize {
        self.purpose_counts
            .get(purpose.as_str())
            .copied()
            .unwrap_or(0)
    }
}

/// Format a duration as `1h 2m 3s`, `2m 3s` or `3s`
#[must_use]
pub fn format_duration(ms: u64) -> String {
    let seconds = (ms / 1000) % 60;
    let minutes = (ms / 60_000) % 60;
    let hours = ms / 3_600_000;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Plain-text rendering of a detection report
#[must_use]
pub fn render_detection_report(report: &DetectionReport) -> String {
    let mut out = String::new();
    out.push_str("Field Detection Analysis\n");
    out.push_str("========================\n");
    out.push_str(&format!("Total fields analyzed: {}\n", report.total_fields));
    out.push_str(&format!(
        "Average detection score: {:.1}/100\n",
        report.average_score
    ));
    out.push_str(&format!(
        "Purpose detected: {}/{} ({:.1}%)\n",
        report.purposes_detected, report.total_fields, report.purpose_detection_pct
    ));

    if !report.top_fields.is_empty() {
        out.push_str("\nTop Scoring Fields\n");
        for field in &report.top_fields {
            let kind = field.descriptor.element_kind.tag_name();
            let type_suffix = if field.descriptor.input_type.is_empty() {
                String::new()
            } else {
                format!("[{}]", field.descriptor.input_type)
            };
            out.push_str(&format!(
                "  - {kind}{type_suffix} {} - Score: {} - Purpose: {}\n",
                field.descriptor.display_name(),
                field.score,
                field.purpose
            ));
        }
    }
    out
}

/// Plain-text rendering of a session summary
#[must_use]
pub fn render_summary(summary: &ResultsSummary) -> String {
    let band = summary.band();
    let mut out = String::new();
    out.push_str("Session Results\n");
    out.push_str("===============\n");
    out.push_str(&format!("Tabs visited: {}\n", summary.distinct_tabs_visited));
    out.push_str(&format!("Fields filled: {}\n", summary.total_filled));
    out.push_str(&format!("Fields tested: {}\n", summary.total_attempted));
    out.push_str(&format!("Overall accuracy: {:.1}%\n", summary.accuracy_pct));
    out.push_str(&format!(
        "Test duration: {}\n",
        format_duration(summary.elapsed_ms)
    ));

    if !summary.latest_per_form.is_empty() {
        out.push_str("\nForm Test Results\n");
        for (form_id, latest) in &summary.latest_per_form {
            out.push_str(&format!(
                "  {form_id}: {}/{} fields ({:.1}% accuracy)\n",
                latest.filled_count, latest.total_count, latest.accuracy_pct
            ));
        }
    }

    out.push_str(&format!("\nScore: {band} - {}\n", band.message()));
    out
}
