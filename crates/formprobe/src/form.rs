//! Minimal in-memory form model with label discovery.
//!
//! [`FormDocument`] holds just enough structure (labels, containers and
//! controls in a tree) to resolve which label belongs to which control.
//! Label resolution tries, in order:
//!
//! 1. a label whose `for` attribute names the control's id,
//! 2. the nearest ancestor label wrapping the control,
//! 3. the nearest preceding sibling label.
//!
//! The first hit wins and its text is trimmed; no hit yields an empty string.
//!
//! ```rust
//! use formprobe::{FieldDescriptor, FieldSource, FormDocument};
//!
//! let mut doc = FormDocument::new();
//! doc.add_label(None, Some("email"), " Email address ").unwrap();
//! doc.add_control(None, FieldDescriptor::default().with_id("email")).unwrap();
//!
//! let fields = doc.list_fields();
//! assert_eq!(fields[0].associated_label_text, "Email address");
//! ```

use crate::descriptor::{FieldDescriptor, FieldSource};
use crate::result::{ProbeError, ProbeResult};

/// Handle of a node inside a [`FormDocument`]
pub type NodeId = usize;

/// Node kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormNode {
    /// `<label>`
    Label {
        /// `for` attribute
        for_id: Option<String>,
        /// Own text
        text: String,
    },
    /// Any grouping element (`div`, `fieldset`, ...)
    Container {
        /// Own text
        text: String,
    },
    /// A form control
    Control(FieldDescriptor),
}

#[derive(Debug, Clone)]
struct Entry {
    node: FormNode,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Tree of labels, containers and controls
#[derive(Debug, Clone, Default)]
pub struct FormDocument {
    entries: Vec<Entry>,
    roots: Vec<NodeId>,
}

impl FormDocument {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, parent: Option<NodeId>, node: FormNode) -> ProbeResult<NodeId> {
        let id = self.entries.len();
        match parent {
            Some(p) => {
                let entry = self
                    .entries
                    .get_mut(p)
                    .ok_or_else(|| ProbeError::invalid_document(format!("no node {p}")))?;
                if matches!(entry.node, FormNode::Control(_)) {
                    return Err(ProbeError::invalid_document(format!(
                        "node {p} is a control and cannot have children"
                    )));
                }
                entry.children.push(id);
            }
            None => self.roots.push(id),
        }
        self.entries.push(Entry {
            node,
            parent,
            children: Vec::new(),
        });
        Ok(id)
    }

    /// Append a label under `parent` (or at the top level)
    pub fn add_label(
        &mut self,
        parent: Option<NodeId>,
        for_id: Option<&str>,
        text: &str,
    ) -> ProbeResult<NodeId> {
        self.insert(
            parent,
            FormNode::Label {
                for_id: for_id.map(str::to_string),
                text: text.to_string(),
            },
        )
    }

    /// Append a grouping element
    pub fn add_container(&mut self, parent: Option<NodeId>, text: &str) -> ProbeResult<NodeId> {
        self.insert(
            parent,
            FormNode::Container {
                text: text.to_string(),
            },
        )
    }

    /// Append a form control
    pub fn add_control(
        &mut self,
        parent: Option<NodeId>,
        descriptor: FieldDescriptor,
    ) -> ProbeResult<NodeId> {
        self.insert(parent, FormNode::Control(descriptor))
    }

    /// Node by handle
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&FormNode> {
        self.entries.get(id).map(|e| &e.node)
    }

    /// Every node in document (pre-)order
    fn document_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.entries.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.entries[id].children.iter().rev().copied());
        }
        order
    }

    /// Concatenated text of a node and its descendants
    fn text_content(&self, id: NodeId) -> String {
        let entry = &self.entries[id];
        let mut text = match &entry.node {
            FormNode::Label { text, .. } | FormNode::Container { text } => text.clone(),
            FormNode::Control(_) => String::new(),
        };
        for &child in &entry.children {
            text.push_str(&self.text_content(child));
        }
        text
    }

    fn is_label(&self, id: NodeId) -> bool {
        matches!(self.entries[id].node, FormNode::Label { .. })
    }

    fn label_for(&self, control_id: &str) -> Option<NodeId> {
        self.document_order().into_iter().find(|&id| {
            matches!(
                &self.entries[id].node,
                FormNode::Label { for_id: Some(f), .. } if f == control_id
            )
        })
    }

    fn wrapping_label(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.entries[id].parent;
        while let Some(ancestor) = current {
            if self.is_label(ancestor) {
                return Some(ancestor);
            }
            current = self.entries[ancestor].parent;
        }
        None
    }

    fn preceding_sibling_label(&self, id: NodeId) -> Option<NodeId> {
        let siblings = match self.entries[id].parent {
            Some(parent) => &self.entries[parent].children,
            None => &self.roots,
        };
        let position = siblings.iter().position(|&s| s == id)?;
        siblings[..position]
            .iter()
            .rev()
            .copied()
            .find(|&s| self.is_label(s))
    }

    /// Text of the label associated with a control, or empty
    pub fn find_label(&self, id: NodeId) -> ProbeResult<String> {
        let entry = self
            .entries
            .get(id)
            .ok_or_else(|| ProbeError::invalid_document(format!("no node {id}")))?;
        let FormNode::Control(descriptor) = &entry.node else {
            return Err(ProbeError::invalid_document(format!(
                "node {id} is not a control"
            )));
        };

        let explicit = if descriptor.id.is_empty() {
            None
        } else {
            self.label_for(&descriptor.id)
        };

        Ok(explicit
            .or_else(|| self.wrapping_label(id))
            .or_else(|| self.preceding_sibling_label(id))
            .map(|label| self.text_content(label).trim().to_string())
            .unwrap_or_default())
    }
}

impl FieldSource for FormDocument {
    fn list_fields(&self) -> Vec<FieldDescriptor> {
        self.document_order()
            .into_iter()
            .filter_map(|id| match &self.entries[id].node {
                FormNode::Control(descriptor) => {
                    let mut field = descriptor.clone();
                    field.associated_label_text = self.find_label(id).unwrap_or_default();
                    Some(field)
                }
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(id: &str) -> FieldDescriptor {
        FieldDescriptor::default().with_id(id)
    }

    mod resolution_tests {
        use super::*;

        #[test]
        fn test_explicit_label_anywhere_in_document() {
            let mut doc = FormDocument::new();
            let group = doc.add_container(None, "").unwrap();
            let input = doc.add_control(Some(group), control("city")).unwrap();
            doc.add_label(None, Some("city"), "  City  ").unwrap();
            assert_eq!(doc.find_label(input).unwrap(), "City");
        }

        #[test]
        fn test_explicit_beats_wrapping() {
            let mut doc = FormDocument::new();
            doc.add_label(None, Some("zip"), "ZIP code").unwrap();
            let wrapper = doc.add_label(None, None, "Postal").unwrap();
            let input = doc.add_control(Some(wrapper), control("zip")).unwrap();
            assert_eq!(doc.find_label(input).unwrap(), "ZIP code");
        }

        #[test]
        fn test_wrapping_label() {
            let mut doc = FormDocument::new();
            let wrapper = doc.add_label(None, None, "Company ").unwrap();
            let span = doc.add_container(Some(wrapper), "(optional)").unwrap();
            let input = doc.add_control(Some(span), control("")).unwrap();
            assert_eq!(doc.find_label(input).unwrap(), "Company (optional)");
        }

        #[test]
        fn test_nearest_preceding_sibling_label() {
            let mut doc = FormDocument::new();
            let row = doc.add_container(None, "").unwrap();
            doc.add_label(Some(row), None, "First").unwrap();
            doc.add_label(Some(row), None, "Second").unwrap();
            doc.add_container(Some(row), "hint").unwrap();
            let input = doc.add_control(Some(row), control("")).unwrap();
            doc.add_label(Some(row), None, "After").unwrap();
            assert_eq!(doc.find_label(input).unwrap(), "Second");
        }

        #[test]
        fn test_unmatched_for_falls_through() {
            let mut doc = FormDocument::new();
            doc.add_label(None, Some("other"), "Other").unwrap();
            doc.add_label(None, None, "Phone").unwrap();
            let input = doc.add_control(None, control("tel")).unwrap();
            assert_eq!(doc.find_label(input).unwrap(), "Phone");
        }

        #[test]
        fn test_no_label() {
            let mut doc = FormDocument::new();
            let input = doc.add_control(None, control("x")).unwrap();
            doc.add_label(None, None, "Later").unwrap();
            assert_eq!(doc.find_label(input).unwrap(), "");
        }
    }

    mod document_tests {
        use super::*;

        #[test]
        fn test_unknown_parent_rejected() {
            let mut doc = FormDocument::new();
            assert!(doc.add_label(Some(9), None, "x").is_err());
        }

        #[test]
        fn test_control_cannot_have_children() {
            let mut doc = FormDocument::new();
            let input = doc.add_control(None, control("a")).unwrap();
            assert!(doc.add_label(Some(input), None, "x").is_err());
        }

        #[test]
        fn test_find_label_on_non_control() {
            let mut doc = FormDocument::new();
            let label = doc.add_label(None, None, "x").unwrap();
            assert!(doc.find_label(label).is_err());
            assert!(doc.find_label(42).is_err());
        }

        #[test]
        fn test_list_fields_in_document_order() {
            let mut doc = FormDocument::new();
            let outer = doc.add_container(None, "").unwrap();
            doc.add_label(Some(outer), Some("b"), "Bee").unwrap();
            let inner = doc.add_container(Some(outer), "").unwrap();
            doc.add_control(Some(inner), control("a")).unwrap();
            doc.add_control(Some(outer), control("b")).unwrap();
            doc.add_control(None, control("c")).unwrap();

            let fields = doc.list_fields();
            let ids: Vec<&str> = fields.iter().map(|f| f.id.as_str()).collect();
            assert_eq!(ids, vec!["a", "b", "c"]);
            assert_eq!(fields[1].associated_label_text, "Bee");
            assert_eq!(fields[0].associated_label_text, "");
            assert_eq!(fields[2].associated_label_text, "");
            assert_eq!(doc.node(0), Some(&FormNode::Container { text: String::new() }));
        }
    }
}
