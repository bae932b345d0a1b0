//! XML data model

use indexmap::IndexMap;

/// XML document
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    /// Create a document around a root element
    pub const fn new(root: Element) -> Self {
        Self { root }
    }
}

/// XML element
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

/// XML content node
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// First child element with the given tag name
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children_by_name(name).next()
    }

    /// All child elements with the given tag name, in document order
    pub fn children_by_name<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a Self> + use<'a, 'n> {
        self.children.iter().filter_map(move |content| match content {
            Content::Element(child) if child.name == name => Some(child),
            _ => None,
        })
    }

    /// Attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Concatenation of the element's own text children; empty if none
    pub fn text(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            if let Content::Text(value) = child {
                text.push_str(value);
            }
        }
        text
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Set the element's text content, replacing existing text children
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.children
            .retain(|content| !matches!(content, Content::Text(_)));
        let value = value.into();
        if !value.is_empty() {
            self.children.push(Content::Text(value));
        }
    }

    /// Append a child element
    pub fn append_child(&mut self, child: Self) {
        self.children.push(Content::Element(child));
    }
}
