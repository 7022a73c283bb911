//! Candidate CSS selectors for a field.
//!
//! Autofill tooling usually locates a field by one of a handful of
//! selectors; listing them shows which handles a field actually offers.

use crate::descriptor::FieldDescriptor;

/// Attribute selectors, in the order they are emitted
const ATTRIBUTE_SELECTORS: [&str; 3] = ["data-field", "data-name", "placeholder"];

/// Every selector that could locate the field, most specific first
#[must_use]
pub fn candidate_selectors(descriptor: &FieldDescriptor) -> Vec<String> {
    let mut selectors = Vec::new();

    if !descriptor.id.is_empty() {
        selectors.push(format!("#{}", descriptor.id));
    }
    if !descriptor.name.is_empty() {
        selectors.push(format!("[name=\"{}\"]", descriptor.name));
    }
    if !descriptor.css_classes.is_empty() {
        selectors.push(format!(".{}", descriptor.css_classes.join(".")));
    }

    for attr in ATTRIBUTE_SELECTORS {
        let value = attribute(descriptor, attr);
        if !value.is_empty() {
            selectors.push(format!("[{attr}=\"{value}\"]"));
        }
    }

    selectors
}

fn attribute<'a>(descriptor: &'a FieldDescriptor, attr: &str) -> &'a str {
    match attr {
        "data-field" => &descriptor.data_field,
        "data-name" => &descriptor.data_name,
        "placeholder" => &descriptor.placeholder,
        _ => "",
    }
}
