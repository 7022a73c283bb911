//! Field purpose inference.
//!
//! The purpose of a field is inferred from its *indicator string*: the
//! lower-cased id, name, classes, placeholder and label text joined by
//! single spaces. Rules are tried in a fixed order and the first match
//! wins, so a field that mentions both a first name and an email is a
//! first-name field.

use crate::descriptor::FieldDescriptor;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Semantic role of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PurposeTag {
    /// Given name
    FirstName,
    /// Family name
    LastName,
    /// Email address
    Email,
    /// Telephone number
    Phone,
    /// Street address
    Address,
    /// City
    City,
    /// State or region
    State,
    /// ZIP or postal code
    ZipCode,
    /// Country
    Country,
    /// Password
    Password,
    /// Date of birth
    BirthDate,
    /// Company or organization
    Company,
    /// Website URL
    Website,
    /// No rule matched
    #[default]
    Unknown,
}

impl PurposeTag {
    /// Every tag, in rule order, followed by `Unknown`
    pub const ALL: [Self; 14] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::City,
        Self::State,
        Self::ZipCode,
        Self::Country,
        Self::Password,
        Self::BirthDate,
        Self::Company,
        Self::Website,
        Self::Unknown,
    ];

    /// camelCase name, as used in reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
            Self::Country => "country",
            Self::Password => "password",
            Self::BirthDate => "birthDate",
            Self::Company => "company",
            Self::Website => "website",
            Self::Unknown => "unknown",
        }
    }

    /// Whether a rule matched
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for PurposeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordered detection rule
#[derive(Debug)]
pub struct PurposeRule {
    /// Tag assigned when the pattern matches
    pub tag: PurposeTag,
    /// Pattern tested against the indicator string
    pub pattern: Regex,
}

const RULE_SOURCES: [(PurposeTag, &str); 13] = [
    (PurposeTag::FirstName, r"first.*name|fname"),
    (PurposeTag::LastName, r"last.*name|lname"),
    (PurposeTag::Email, r"email|mail"),
    (PurposeTag::Phone, r"phone|tel"),
    (PurposeTag::Address, r"address|street"),
    (PurposeTag::City, r"city"),
    (PurposeTag::State, r"state|region"),
    (PurposeTag::ZipCode, r"zip|postal"),
    (PurposeTag::Country, r"country"),
    (PurposeTag::Password, r"password|pwd"),
    (PurposeTag::BirthDate, r"birth|dob"),
    (PurposeTag::Company, r"company|organization"),
    (PurposeTag::Website, r"website|url"),
];

static RULES: LazyLock<Vec<PurposeRule>> = LazyLock::new(|| {
    RULE_SOURCES
        .iter()
        .map(|&(tag, source)| PurposeRule {
            tag,
            pattern: Regex::new(source).expect("purpose pattern is valid"),
        })
        .collect()
});

/// The detection rules, in evaluation order
#[must_use]
pub fn rules() -> &'static [PurposeRule] {
    &RULES
}

/// Build the lower-cased indicator string for a descriptor
#[must_use]
pub fn indicator_string(descriptor: &FieldDescriptor) -> String {
    [
        descriptor.id.to_lowercase(),
        descriptor.name.to_lowercase(),
        descriptor.css_classes.join(" ").to_lowercase(),
        descriptor.placeholder.to_lowercase(),
        descriptor.associated_label_text.to_lowercase(),
    ]
    .join(" ")
}

/// Classify an indicator string by the first matching rule.
///
/// Patterns are lower-case literals, so `indicators` must already be
/// lower-cased (see [`indicator_string`]).
#[must_use]
pub fn classify_indicators(indicators: &str) -> PurposeTag {
    rules()
        .iter()
        .find(|rule| rule.pattern.is_match(indicators))
        .map_or(PurposeTag::Unknown, |rule| rule.tag)
}

/// Infer the purpose of a field
#[must_use]
pub fn detect_purpose(descriptor: &FieldDescriptor) -> PurposeTag {
    classify_indicators(&indicator_string(descriptor))
}
