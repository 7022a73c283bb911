//! Session configuration

use crate::monitor::DEFAULT_EVENT_CAPACITY;
use crate::result::ProbeResult;
use crate::test_data::TestProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of top-scoring fields listed in a detection report
pub const DEFAULT_TOP_FIELDS: usize = 5;

/// Tunables for a test session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProbeConfig {
    /// How many top-scoring fields a detection report lists
    pub top_fields: usize,
    /// How many fill events the monitor retains
    pub fill_event_capacity: usize,
    /// Identity used for synthetic fills
    pub profile: TestProfile,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            top_fields: DEFAULT_TOP_FIELDS,
            fill_event_capacity: DEFAULT_EVENT_CAPACITY,
            profile: TestProfile::default(),
        }
    }
}

impl ProbeConfig {
    /// Create default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of top fields reported
    #[must_use]
    pub const fn with_top_fields(mut self, top_fields: usize) -> Self {
        self.top_fields = top_fields;
        self
    }

    /// Set the fill event capacity
    #[must_use]
    pub const fn with_fill_event_capacity(mut self, capacity: usize) -> Self {
        self.fill_event_capacity = capacity;
        self
    }

    /// Set the fill profile
    #[must_use]
    pub fn with_profile(mut self, profile: TestProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Parse configuration from JSON; missing keys take defaults
    pub fn from_json(json: &str) -> ProbeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> ProbeResult<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}
