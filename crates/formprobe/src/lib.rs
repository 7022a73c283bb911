//! Formprobe: Field Detection and Fill-Accuracy Scoring for Autofill Testing
//!
//! Formprobe is the engine behind a test harness for third-party form
//! autofill tools. It classifies form fields into semantic purposes, scores
//! how discoverable each field is, simulates fills from a synthetic identity
//! and keeps running accuracy figures for a test session.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐      ┌─────────────────┐      ┌──────────────────┐
//! │ FieldSource   │─────►│ FieldClassifier │─────►│ DetectionReport  │
//! │ (fixture or   │      │ purpose + score │      └──────────────────┘
//! │  FormDocument)│      └─────────────────┘
//! │               │      ┌─────────────────┐      ┌──────────────────┐
//! │               │─────►│ FillSimulator   │─────►│ ResultsAggregator│
//! └───────────────┘      └─────────────────┘      └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use formprobe::{FieldDescriptor, ProbeConfig, TestSession};
//!
//! let fields = vec![
//!     FieldDescriptor::default().with_name("email"),
//!     FieldDescriptor::default().with_name("favorite_color"),
//! ];
//!
//! let mut session = TestSession::new(ProbeConfig::default());
//! let report = session.detection_report(&fields);
//! assert_eq!(report.purposes_detected, 1);
//!
//! session.run_fill("newsletter", &fields).unwrap();
//! assert_eq!(session.summary().accuracy_pct, 50.0);
//! ```

#![warn(missing_docs)]

mod aggregator;
mod classifier;
mod clock;
mod config;
mod descriptor;
mod fill;
mod form;
mod monitor;
mod purpose;
mod report;
mod result;
mod selectors;
mod session;
mod test_data;

/// Input validators for email, phone, URL and password fields
pub mod validators;

pub use aggregator::{
    qualitative_message, FillAttemptRecord, PerformanceBand, ResultsAggregator, ResultsState,
    ResultsSummary,
};
pub use classifier::{score, weights, DetectionResult, FieldClassifier, MAX_SCORE};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ProbeConfig, DEFAULT_TOP_FIELDS};
pub use descriptor::{ElementKind, FieldDescriptor, FieldFixture, FieldSource};
pub use fill::{AppliedValue, FieldAssignment, FillOutcome, FillSimulator};
pub use form::{FormDocument, FormNode, NodeId};
pub use monitor::{FieldMonitor, FillEvent, DEFAULT_EVENT_CAPACITY};
pub use purpose::{
    classify_indicators, detect_purpose, indicator_string, rules, PurposeRule, PurposeTag,
};
pub use report::{format_duration, render_detection_report, render_summary, DetectionReport};
pub use result::{ProbeError, ProbeResult};
pub use selectors::candidate_selectors;
pub use session::TestSession;
pub use test_data::{find_test_data_value, TestProfile, TestValue, PROFILE_KEYS};
