//! Recent fill events, for inspecting what an autofill tool touched.

use crate::clock::Clock;
use crate::descriptor::FieldDescriptor;
use crate::selectors::candidate_selectors;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of retained events
pub const DEFAULT_EVENT_CAPACITY: usize = 100;

/// A field received input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillEvent {
    /// When the input happened
    pub timestamp_ms: u64,
    /// `name`, else `id`, else `"unnamed"`
    pub field_name: String,
    /// `type`, else the tag name
    pub field_type: String,
    /// Value after the input
    pub value: String,
    /// Whether the value is non-empty
    pub filled: bool,
    /// Selectors that locate the field
    pub selectors: Vec<String>,
}

/// Bounded log of fill events, oldest dropped first
#[derive(Debug, Clone)]
pub struct FieldMonitor {
    capacity: usize,
    events: VecDeque<FillEvent>,
}

impl Default for FieldMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl FieldMonitor {
    /// Create a monitor retaining at most `capacity` events
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            events: VecDeque::new(),
        }
    }

    /// Record that `descriptor` now holds `value`
    pub fn track<C: Clock>(&mut self, clock: &C, descriptor: &FieldDescriptor, value: &str) {
        let event = FillEvent {
            timestamp_ms: clock.now_ms(),
            field_name: descriptor.display_name().to_string(),
            field_type: descriptor.effective_type().to_string(),
            value: value.to_string(),
            filled: !value.is_empty(),
            selectors: candidate_selectors(descriptor),
        };
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Retained events, oldest first
    #[must_use]
    pub fn events(&self) -> Vec<FillEvent> {
        self.events.iter().cloned().collect()
    }

    /// Number of retained events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// No events retained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
