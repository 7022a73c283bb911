//! Field descriptors and the sources that produce them.
//!
//! A [`FieldDescriptor`] is a static snapshot of one form control's
//! identifying attributes. Nothing in the classifier or aggregator touches a
//! live UI object; they only see descriptors handed over by a
//! [`FieldSource`].
//!
//! ```rust
//! use formprobe::{ElementKind, FieldDescriptor};
//!
//! let field = FieldDescriptor::new(ElementKind::Input)
//!     .with_input_type("email")
//!     .with_id("email_address")
//!     .with_name("email");
//! assert_eq!(field.lookup_name(), Some("email"));
//! ```

use crate::result::{ProbeError, ProbeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Kind of form control a descriptor was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// `<input>` of any type
    #[default]
    Input,
    /// `<select>`
    Select,
    /// `<textarea>`
    Textarea,
    /// `contenteditable` region standing in for a rich-text editor
    Editable,
}

impl ElementKind {
    /// Lower-case tag name used in reports
    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Editable => "div",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// Immutable snapshot of a single form control.
///
/// Absent attributes are empty strings or `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldDescriptor {
    /// Control kind
    pub element_kind: ElementKind,
    /// `type` attribute (`email`, `tel`, `checkbox`, ...)
    pub input_type: String,
    /// `id` attribute
    pub id: String,
    /// `name` attribute
    pub name: String,
    /// Class list, in document order
    pub css_classes: Vec<String>,
    /// `placeholder` attribute
    pub placeholder: String,
    /// Text of the label associated with the control
    pub associated_label_text: String,
    /// Whether the control is rendered and has a non-zero box
    pub is_visible: bool,
    /// Whether the control carries an `autocomplete` hint
    pub has_autocomplete_hint: bool,
    /// `data-field` attribute
    pub data_field: String,
    /// `data-name` attribute
    pub data_name: String,
}

impl FieldDescriptor {
    /// Create an empty descriptor of the given kind
    #[must_use]
    pub fn new(element_kind: ElementKind) -> Self {
        Self {
            element_kind,
            ..Self::default()
        }
    }

    /// Set the `type` attribute
    #[must_use]
    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    /// Set the `id` attribute
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the `name` attribute
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a CSS class
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.css_classes.push(class.into());
        self
    }

    /// Set the placeholder
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the associated label text
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.associated_label_text = label.into();
        self
    }

    /// Set visibility
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }

    /// Set whether an autocomplete hint is present
    #[must_use]
    pub const fn with_autocomplete(mut self, hint: bool) -> Self {
        self.has_autocomplete_hint = hint;
        self
    }

    /// Set the `data-field` attribute
    #[must_use]
    pub fn with_data_field(mut self, value: impl Into<String>) -> Self {
        self.data_field = value.into();
        self
    }

    /// Set the `data-name` attribute
    #[must_use]
    pub fn with_data_name(mut self, value: impl Into<String>) -> Self {
        self.data_name = value.into();
        self
    }

    /// Name used to look up fill values: `name`, then `id`, then `data-field`
    #[must_use]
    pub fn lookup_name(&self) -> Option<&str> {
        [&self.name, &self.id, &self.data_field]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(String::as_str)
    }

    /// Name used when reporting events: `name`, then `id`, then `"unnamed"`
    #[must_use]
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if !self.id.is_empty() {
            &self.id
        } else {
            "unnamed"
        }
    }

    /// `type` attribute, falling back to the tag name
    #[must_use]
    pub fn effective_type(&self) -> &str {
        if self.input_type.is_empty() {
            self.element_kind.tag_name()
        } else {
            &self.input_type
        }
    }

    /// Checkbox or radio control
    #[must_use]
    pub fn is_checkable(&self) -> bool {
        matches!(self.input_type.as_str(), "checkbox" | "radio")
    }

    /// File picker control
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.input_type == "file"
    }
}

/// Capability to enumerate the fields of a target UI environment.
pub trait FieldSource {
    /// Snapshot every form control currently present
    fn list_fields(&self) -> Vec<FieldDescriptor>;
}

impl FieldSource for [FieldDescriptor] {
    fn list_fields(&self) -> Vec<FieldDescriptor> {
        self.to_vec()
    }
}

impl FieldSource for Vec<FieldDescriptor> {
    fn list_fields(&self) -> Vec<FieldDescriptor> {
        self.clone()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureFile {
    Form {
        #[serde(rename = "formId")]
        form_id: String,
        fields: Vec<FieldDescriptor>,
    },
    Fields(Vec<FieldDescriptor>),
}

/// Field source backed by a JSON fixture.
///
/// Accepts either a bare array of descriptors or an object
/// `{ "formId": "...", "fields": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFixture {
    /// Form identifier, `"unknown"` when the fixture does not name one
    pub form_id: String,
    /// Descriptors in fixture order
    pub fields: Vec<FieldDescriptor>,
}

impl FieldFixture {
    /// Parse a fixture from JSON text
    pub fn from_json(json: &str) -> ProbeResult<Self> {
        let file: FixtureFile = serde_json::from_str(json)?;
        let fixture = match file {
            FixtureFile::Form { form_id, fields } => Self {
                form_id: if form_id.is_empty() {
                    "unknown".to_string()
                } else {
                    form_id
                },
                fields,
            },
            FixtureFile::Fields(fields) => Self {
                form_id: "unknown".to_string(),
                fields,
            },
        };
        if fixture.fields.is_empty() {
            return Err(ProbeError::invalid_field_source("fixture contains no fields"));
        }
        Ok(fixture)
    }

    /// Read and parse a fixture file
    pub fn from_path(path: impl AsRef<Path>) -> ProbeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

impl FieldSource for FieldFixture {
    fn list_fields(&self) -> Vec<FieldDescriptor> {
        self.fields.clone()
    }
}
