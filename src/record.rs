//! Generic record tree produced by parsing and consumed by serialization

use indexmap::IndexMap;

/// A generic in-memory element tree, shape-free: any record can hold any
/// combination of text, attributes, and named child lists, regardless of
/// which schema produced it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    name: String,
    text: String,
    attributes: IndexMap<String, String>,
    subnodes: IndexMap<String, Vec<Record>>,
}

impl Record {
    /// Create an empty record with the given element name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Element name this record represents
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the record
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Text content; empty means no text present
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    /// Iterate attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Child records under the given tag, in document order; empty when the
    /// tag is absent (zero children is not an error)
    pub fn subnodes(&self, tag: &str) -> &[Self] {
        self.subnodes.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Append a child record under its own name
    pub fn push_subnode(&mut self, child: Self) {
        self.subnodes
            .entry(child.name.clone())
            .or_default()
            .push(child);
    }

    /// Iterate tags that currently have at least one child record
    pub fn subnode_tags(&self) -> impl Iterator<Item = &str> {
        self.subnodes.keys().map(String::as_str)
    }
}
