//! Field classification and detection scoring.
//!
//! ```rust
//! use formprobe::{ElementKind, FieldClassifier, FieldDescriptor, PurposeTag};
//!
//! let field = FieldDescriptor::new(ElementKind::Input)
//!     .with_id("email_address")
//!     .with_name("email")
//!     .with_input_type("email")
//!     .with_visible(true)
//!     .with_autocomplete(true);
//!
//! let result = FieldClassifier::new().analyze(&field);
//! assert_eq!(result.score, 70);
//! assert_eq!(result.purpose, PurposeTag::Email);
//! ```

use crate::descriptor::{FieldDescriptor, FieldSource};
use crate::purpose::{detect_purpose, PurposeTag};
use crate::selectors::candidate_selectors;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weight of each identifying signal. The weights sum to [`MAX_SCORE`].
pub mod weights {
    /// Non-empty `id`
    pub const ID: u32 = 20;
    /// Non-empty `name`
    pub const NAME: u32 = 15;
    /// `type` present and not plain `text`
    pub const SPECIFIC_TYPE: u32 = 10;
    /// Associated label text
    pub const LABEL: u32 = 15;
    /// Non-empty placeholder
    pub const PLACEHOLDER: u32 = 10;
    /// At least one CSS class
    pub const CLASSES: u32 = 5;
    /// Rendered and visible
    pub const VISIBLE: u32 = 10;
    /// `autocomplete` hint present
    pub const AUTOCOMPLETE: u32 = 15;
}

/// Highest attainable detection score
pub const MAX_SCORE: u32 = weights::ID
    + weights::NAME
    + weights::SPECIFIC_TYPE
    + weights::LABEL
    + weights::PLACEHOLDER
    + weights::CLASSES
    + weights::VISIBLE
    + weights::AUTOCOMPLETE;

/// Outcome of analyzing one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// The analyzed field
    pub descriptor: FieldDescriptor,
    /// Detection score, 0..=100
    pub score: u32,
    /// Inferred purpose
    pub purpose: PurposeTag,
    /// Selectors that would locate the field
    pub candidate_selectors: Vec<String>,
}

/// Heuristic 0-100 measure of how identifiable a field is
#[must_use]
pub fn score(descriptor: &FieldDescriptor) -> u32 {
    let signals = [
        (!descriptor.id.is_empty(), weights::ID),
        (!descriptor.name.is_empty(), weights::NAME),
        (
            !descriptor.input_type.is_empty() && descriptor.input_type != "text",
            weights::SPECIFIC_TYPE,
        ),
        (!descriptor.associated_label_text.is_empty(), weights::LABEL),
        (!descriptor.placeholder.is_empty(), weights::PLACEHOLDER),
        (!descriptor.css_classes.is_empty(), weights::CLASSES),
        (descriptor.is_visible, weights::VISIBLE),
        (descriptor.has_autocomplete_hint, weights::AUTOCOMPLETE),
    ];

    signals
        .into_iter()
        .filter(|&(present, _)| present)
        .map(|(_, weight)| weight)
        .sum()
}

/// Infers field purposes and detection scores
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldClassifier;

impl FieldClassifier {
    /// Create a classifier
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Analyze a single field
    #[must_use]
    pub fn analyze(&self, descriptor: &FieldDescriptor) -> DetectionResult {
        let result = DetectionResult {
            descriptor: descriptor.clone(),
            score: score(descriptor),
            purpose: detect_purpose(descriptor),
            candidate_selectors: candidate_selectors(descriptor),
        };
        debug!(
            field = descriptor.display_name(),
            score = result.score,
            purpose = %result.purpose,
            "analyzed field"
        );
        result
    }

    /// Analyze every field, preserving input order
    #[must_use]
    pub fn analyze_all(&self, descriptors: &[FieldDescriptor]) -> Vec<DetectionResult> {
        descriptors.iter().map(|d| self.analyze(d)).collect()
    }

    /// Analyze every field a source lists
    #[must_use]
    pub fn analyze_source<S: FieldSource + ?Sized>(&self, source: &S) -> Vec<DetectionResult> {
        self.analyze_all(&source.list_fields())
    }
}
