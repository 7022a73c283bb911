//! Synthetic form filling.
//!
//! The simulator plays the part of an autofill tool with perfect knowledge
//! of the [`TestProfile`]: every field whose name maps to a profile value is
//! filled, every other field is left alone. The resulting counts feed
//! [`crate::ResultsAggregator::record`].

use crate::descriptor::{ElementKind, FieldDescriptor};
use crate::test_data::{find_test_data_value, TestProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What was put into a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum AppliedValue {
    /// Text written into the control
    Text(String),
    /// Checked state of a checkbox or radio
    Checked(bool),
    /// A value was found but the control cannot be set programmatically
    Skipped,
}

impl AppliedValue {
    /// Text the control holds afterwards
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Checked(b) => b.to_string(),
            Self::Skipped => String::new(),
        }
    }
}

/// One field touched by a fill or clear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAssignment {
    /// Index of the field in the input sequence
    pub index: usize,
    /// Lookup name of the field
    pub field_name: String,
    /// Value applied
    pub applied: AppliedValue,
}

/// Result of filling one form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillOutcome {
    /// Form identifier
    pub form_id: String,
    /// Fields a value was found for
    pub filled: u64,
    /// Fields attempted
    pub total: u64,
    /// Per-field assignments, in field order
    pub assignments: Vec<FieldAssignment>,
}

/// Fills forms from a [`TestProfile`]
#[derive(Debug, Clone, Default)]
pub struct FillSimulator {
    profile: TestProfile,
}

impl FillSimulator {
    /// Create a simulator using `profile`
    #[must_use]
    pub fn new(profile: TestProfile) -> Self {
        Self { profile }
    }

    /// Profile in use
    #[must_use]
    pub fn profile(&self) -> &TestProfile {
        &self.profile
    }

    /// Fill every field of a form
    #[must_use]
    pub fn fill(&self, form_id: &str, descriptors: &[FieldDescriptor]) -> FillOutcome {
        let mut assignments = Vec::new();

        for (index, descriptor) in descriptors.iter().enumerate() {
            let Some(name) = descriptor.lookup_name() else {
                debug!(index, "field has no lookup name");
                continue;
            };
            let Some(value) = find_test_data_value(name, &self.profile) else {
                debug!(field = name, "no test value");
                continue;
            };

            let applied = if descriptor.is_file() {
                AppliedValue::Skipped
            } else if descriptor.is_checkable() {
                AppliedValue::Checked(value.as_flag())
            } else {
                AppliedValue::Text(value.as_text())
            };
            debug!(field = name, ?applied, "filled field");

            assignments.push(FieldAssignment {
                index,
                field_name: name.to_string(),
                applied,
            });
        }

        FillOutcome {
            form_id: form_id.to_string(),
            filled: assignments.len() as u64,
            total: descriptors.len() as u64,
            assignments,
        }
    }

    /// Assignments that reset every field of a form.
    ///
    /// Checkables are unchecked and editable regions get their placeholder
    /// text back; everything else is emptied.
    #[must_use]
    pub fn clear(&self, descriptors: &[FieldDescriptor]) -> Vec<FieldAssignment> {
        descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| FieldAssignment {
                index,
                field_name: descriptor.display_name().to_string(),
                applied: if descriptor.is_checkable() {
                    AppliedValue::Checked(false)
                } else if descriptor.element_kind == ElementKind::Editable {
                    AppliedValue::Text(descriptor.placeholder.clone())
                } else {
                    AppliedValue::Text(String::new())
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ElementKind;

    fn contact_form() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::default().with_name("first_name"),
            FieldDescriptor::default().with_id("email").with_input_type("email"),
            FieldDescriptor::default()
                .with_name("newsletter")
                .with_input_type("checkbox"),
            FieldDescriptor::default()
                .with_name("resume_upload_bio")
                .with_input_type("file"),
            FieldDescriptor::default().with_name("favorite_color"),
            FieldDescriptor::new(ElementKind::Textarea),
        ]
    }

    #[test]
    fn test_fill_counts() {
        let outcome = FillSimulator::default().fill("contact", &contact_form());
        assert_eq!(outcome.form_id, "contact");
        assert_eq!(outcome.total, 6);
        assert_eq!(outcome.filled, 4);
    }

    #[test]
    fn test_fill_assignments() {
        let outcome = FillSimulator::default().fill("contact", &contact_form());
        let applied: Vec<&AppliedValue> = outcome.assignments.iter().map(|a| &a.applied).collect();
        assert_eq!(
            applied,
            vec![
                &AppliedValue::Text("John".to_string()),
                &AppliedValue::Text("john.doe@example.com".to_string()),
                &AppliedValue::Checked(true),
                &AppliedValue::Skipped,
            ]
        );
        assert_eq!(outcome.assignments[1].field_name, "email");
        assert_eq!(outcome.assignments[3].index, 3);
    }

    #[test]
    fn test_custom_profile() {
        let profile = TestProfile {
            first_name: "Ada".to_string(),
            ..TestProfile::default()
        };
        let outcome = FillSimulator::new(profile).fill("f", &contact_form()[..1]);
        assert_eq!(
            outcome.assignments[0].applied,
            AppliedValue::Text("Ada".to_string())
        );
    }

    #[test]
    fn test_empty_form() {
        let outcome = FillSimulator::default().fill("empty", &[]);
        assert_eq!(outcome.filled, 0);
        assert_eq!(outcome.total, 0);
    }

    #[test]
    fn test_clear() {
        let cleared = FillSimulator::default().clear(&contact_form());
        assert_eq!(cleared.len(), 6);
        assert_eq!(cleared[2].applied, AppliedValue::Checked(false));
        assert_eq!(cleared[0].applied, AppliedValue::Text(String::new()));
        assert_eq!(cleared[5].field_name, "unnamed");
    }

    #[test]
    fn test_clear_restores_editable_placeholder() {
        let fields = vec![
            FieldDescriptor::new(ElementKind::Editable)
                .with_id("bio-editor")
                .with_placeholder("Tell us about yourself"),
            FieldDescriptor::new(ElementKind::Editable).with_id("notes"),
            FieldDescriptor::default()
                .with_name("city")
                .with_placeholder("City"),
        ];
        let cleared = FillSimulator::default().clear(&fields);
        assert_eq!(
            cleared[0].applied,
            AppliedValue::Text("Tell us about yourself".to_string())
        );
        assert_eq!(cleared[1].applied, AppliedValue::Text(String::new()));
        assert_eq!(cleared[2].applied, AppliedValue::Text(String::new()));
    }

    #[test]
    fn test_applied_value_json() {
        let json = serde_json::to_value(AppliedValue::Checked(true)).unwrap();
        assert_eq!(json["kind"], "checked");
        assert_eq!(json["value"], true);
    }
}
