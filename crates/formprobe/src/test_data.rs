//! Synthetic identity used for test fills, and the field-name matcher that
//! picks a value for a field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value the filler can put into a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestValue {
    /// Free text
    Text(String),
    /// Checkbox/radio state
    Flag(bool),
    /// Multi-valued selection
    List(Vec<String>),
}

impl TestValue {
    /// Value as it would appear in a text control
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Flag(b) => b.to_string(),
            Self::List(items) => items.join(","),
        }
    }

    /// Truthiness, as used for checkable controls
    #[must_use]
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Flag(b) => *b,
            Self::List(items) => !items.is_empty(),
        }
    }
}

impl fmt::Display for TestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// Identity the filler uses for every form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestProfile {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Telephone number
    pub phone: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// State or region
    pub state: String,
    /// ZIP or postal code
    pub zip_code: String,
    /// Country
    pub country: String,
    /// Website URL
    pub website: String,
    /// Company name
    pub company: String,
    /// Job title
    pub job_title: String,
    /// Birth date, `YYYY-MM-DD`
    pub birth_date: String,
    /// Age in years
    pub age: String,
    /// Free-text biography
    pub bio: String,
    /// Interests for multi-selects
    pub interests: Vec<String>,
    /// Gender
    pub gender: String,
    /// Newsletter opt-in
    pub newsletter: bool,
    /// Terms acceptance
    pub terms: bool,
}

impl Default for TestProfile {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1-555-123-4567".to_string(),
            address: "123 Main Street".to_string(),
            city: "Anytown".to_string(),
            state: "CA".to_string(),
            zip_code: "12345".to_string(),
            country: "United States".to_string(),
            website: "https://johndoe.com".to_string(),
            company: "Test Company Inc.".to_string(),
            job_title: "Software Developer".to_string(),
            birth_date: "1990-01-15".to_string(),
            age: "33".to_string(),
            bio: "This is a test biography for form filling validation.".to_string(),
            interests: vec![
                "technology".to_string(),
                "sports".to_string(),
                "reading".to_string(),
            ],
            gender: "male".to_string(),
            newsletter: true,
            terms: true,
        }
    }
}

/// Profile keys, in camelCase
pub const PROFILE_KEYS: [&str; 19] = [
    "firstName",
    "lastName",
    "email",
    "phone",
    "address",
    "city",
    "state",
    "zipCode",
    "country",
    "website",
    "company",
    "jobTitle",
    "birthDate",
    "age",
    "bio",
    "interests",
    "gender",
    "newsletter",
    "terms",
];

/// Substring fragments mapped to profile keys, tried in order
const NAME_PATTERNS: [(&[&str], &str); 18] = [
    (&["first", "fname"], "firstName"),
    (&["last", "lname"], "lastName"),
    (&["email", "mail"], "email"),
    (&["phone", "tel"], "phone"),
    (&["address"], "address"),
    (&["city"], "city"),
    (&["state", "region"], "state"),
    (&["zip", "postal"], "zipCode"),
    (&["country"], "country"),
    (&["website", "url"], "website"),
    (&["company", "organization"], "company"),
    (&["job", "position", "title"], "jobTitle"),
    (&["birth", "dob"], "birthDate"),
    (&["age"], "age"),
    (&["bio", "about", "description"], "bio"),
    (&["gender"], "gender"),
    (&["newsletter", "subscribe"], "newsletter"),
    (&["terms", "agree"], "terms"),
];

impl TestProfile {
    /// Value stored under a camelCase key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<TestValue> {
        let text = |s: &String| Some(TestValue::Text(s.clone()));
        match key {
            "firstName" => text(&self.first_name),
            "lastName" => text(&self.last_name),
            "email" => text(&self.email),
            "phone" => text(&self.phone),
            "address" => text(&self.address),
            "city" => text(&self.city),
            "state" => text(&self.state),
            "zipCode" => text(&self.zip_code),
            "country" => text(&self.country),
            "website" => text(&self.website),
            "company" => text(&self.company),
            "jobTitle" => text(&self.job_title),
            "birthDate" => text(&self.birth_date),
            "age" => text(&self.age),
            "bio" => text(&self.bio),
            "interests" => Some(TestValue::List(self.interests.clone())),
            "gender" => text(&self.gender),
            "newsletter" => Some(TestValue::Flag(self.newsletter)),
            "terms" => Some(TestValue::Flag(self.terms)),
            _ => None,
        }
    }

    /// Resolve a field name to the profile key it should be filled from.
    ///
    /// An exact (case-insensitive) key match wins, then the first substring
    /// pattern that occurs in the lower-cased name.
    #[must_use]
    pub fn key_for(field_name: &str) -> Option<&'static str> {
        let field = field_name.to_lowercase();

        if let Some(key) = PROFILE_KEYS
            .iter()
            .find(|key| key.to_lowercase() == field)
        {
            return Some(*key);
        }

        NAME_PATTERNS
            .iter()
            .find(|(fragments, _)| fragments.iter().any(|f| field.contains(f)))
            .map(|&(_, key)| key)
    }
}

/// Value to fill into a field with the given name, if any
#[must_use]
pub fn find_test_data_value(field_name: &str, profile: &TestProfile) -> Option<TestValue> {
    TestProfile::key_for(field_name).and_then(|key| profile.get(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<TestValue> {
        find_test_data_value(name, &TestProfile::default())
    }

    fn text(s: &str) -> Option<TestValue> {
        Some(TestValue::Text(s.to_string()))
    }

    mod lookup_tests {
        use super::*;

        #[test]
        fn test_direct_key_match() {
            assert_eq!(lookup("email"), text("john.doe@example.com"));
            assert_eq!(lookup("ZipCode"), text("12345"));
            assert_eq!(
                lookup("interests"),
                Some(TestValue::List(vec![
                    "technology".to_string(),
                    "sports".to_string(),
                    "reading".to_string()
                ]))
            );
        }

        #[test]
        fn test_pattern_matches() {
            assert_eq!(lookup("user_fname"), text("John"));
            assert_eq!(lookup("surname_last"), text("Doe"));
            assert_eq!(lookup("contact-mail"), text("john.doe@example.com"));
            assert_eq!(lookup("telephone"), text("+1-555-123-4567"));
            assert_eq!(lookup("postal_code"), text("12345"));
            assert_eq!(lookup("home_url"), text("https://johndoe.com"));
            assert_eq!(lookup("job_position"), text("Software Developer"));
            assert_eq!(lookup("dob"), text("1990-01-15"));
            assert_eq!(lookup("about_me"), text(
                "This is a test biography for form filling validation."
            ));
            assert_eq!(lookup("subscribe"), Some(TestValue::Flag(true)));
            assert_eq!(lookup("agree_tos"), Some(TestValue::Flag(true)));
        }

        #[test]
        fn test_first_pattern_wins() {
            assert_eq!(lookup("first_email"), text("John"));
            assert_eq!(lookup("email_city"), text("john.doe@example.com"));
        }

        #[test]
        fn test_no_match() {
            assert_eq!(lookup("favorite_color"), None);
            assert_eq!(lookup(""), None);
        }

        #[test]
        fn test_false_flag_is_still_a_value() {
            let profile = TestProfile {
                newsletter: false,
                ..TestProfile::default()
            };
            assert_eq!(
                find_test_data_value("newsletter", &profile),
                Some(TestValue::Flag(false))
            );
        }
    }

    mod value_tests {
        use super::*;

        #[test]
        fn test_as_text_and_flag() {
            assert_eq!(TestValue::Flag(true).as_text(), "true");
            assert_eq!(
                TestValue::List(vec!["a".to_string(), "b".to_string()]).as_text(),
                "a,b"
            );
            assert!(TestValue::Text("x".to_string()).as_flag());
            assert!(!TestValue::Text(String::new()).as_flag());
        }

        #[test]
        fn test_profile_from_partial_json() {
            let profile: TestProfile =
                serde_json::from_str(r#"{"firstName":"Ada","newsletter":false}"#).unwrap();
            assert_eq!(profile.first_name, "Ada");
            assert!(!profile.newsletter);
            assert_eq!(profile.last_name, "Doe");
        }

        #[test]
        fn test_every_key_resolves() {
            let profile = TestProfile::default();
            for key in PROFILE_KEYS {
                assert!(profile.get(key).is_some(), "missing key {key}");
            }
        }
    }
}
