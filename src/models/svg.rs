//! SVG markup tree
//!
//! A minimal element tree describing the markup an icon component hands to
//! the host renderer. Attribute order is preserved so that serialization is
//! deterministic.

use serde::{Deserialize, Serialize};

/// A single `name="value"` attribute on an element
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An element in the SVG markup tree
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SvgElement {
    /// Element name (`svg`, `path`, ...)
    pub tag: String,

    /// Attributes in the order they were added
    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Child elements in document order
    #[serde(default)]
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: append an attribute, replacing an existing one with the same name
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
        self
    }

    /// Builder: append a child element
    pub fn with_child(mut self, child: SvgElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// All descendants (excluding self) with the given tag, in document order
    pub fn descendants_by_tag(&self, tag: &str) -> Vec<&SvgElement> {
        let mut found = Vec::new();
        self.collect_by_tag(tag, &mut found);
        found
    }

    fn collect_by_tag<'a>(&'a self, tag: &str, out: &mut Vec<&'a SvgElement>) {
        for child in &self.children {
            if child.tag == tag {
                out.push(child);
            }
            child.collect_by_tag(tag, out);
        }
    }
}
