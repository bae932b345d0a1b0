//! Schema descriptors and their composition API
//!
//! A schema is a tree of descriptor values built once at configuration time
//! and never mutated afterwards: each builder method consumes and returns
//! the descriptor, so a finished tree is plain immutable data that can be
//! shared across calls and threads.
//!
//! ```
//! use xmlbind::{attribute, element, list, text};
//!
//! let schema = element("root")
//!     .with(attribute("key").required())
//!     .with(attribute("client_id"))
//!     .with(list(
//!         element("data")
//!             .with(attribute("id").required())
//!             .with(text().required()),
//!     ));
//! assert_eq!(schema.name(), "root");
//! ```

/// A composed schema node: one expected part of the document shape
#[derive(Clone, Debug, PartialEq)]
pub enum Descriptor {
    Element(Element),
    Attribute(Attribute),
    Text(Text),
    List(List),
}

/// Describes a named element with an ordered set of child descriptors
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    name: String,
    required: bool,
    children: Vec<Descriptor>,
}

/// Describes a single string attribute keyed by name
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    name: String,
    required: bool,
}

/// Describes the element's own text content
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    required: bool,
}

/// Describes zero-or-more repetitions of an element shape
///
/// Required-ness applies per occurrence, never to cardinality: an empty
/// group is always valid, but every occurrence that is present must satisfy
/// the wrapped element's own required parts.
#[derive(Clone, Debug, PartialEq)]
pub struct List {
    item: Element,
}

/// Describe an element with the given tag name
pub fn element(name: impl Into<String>) -> Element {
    Element {
        name: name.into(),
        required: false,
        children: Vec::new(),
    }
}

/// Describe an attribute with the given name
pub fn attribute(name: impl Into<String>) -> Attribute {
    Attribute {
        name: name.into(),
        required: false,
    }
}

/// Describe the element's text content
pub fn text() -> Text {
    Text::default()
}

/// Describe zero-or-more repetitions of the given element shape
pub fn list(item: Element) -> List {
    List { item }
}

impl Element {
    /// Mark this element as required: absence becomes a structural error
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Append a child descriptor; declaration order is both the parse
    /// dispatch order and the serialize emission order
    pub fn with(mut self, child: impl Into<Descriptor>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn children(&self) -> &[Descriptor] {
        &self.children
    }
}

impl Attribute {
    /// Mark this attribute as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

impl Text {
    /// Mark text content as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

impl List {
    /// The element shape each occurrence must match
    pub fn item(&self) -> &Element {
        &self.item
    }
}

impl From<Element> for Descriptor {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<Attribute> for Descriptor {
    fn from(value: Attribute) -> Self {
        Self::Attribute(value)
    }
}

impl From<Text> for Descriptor {
    fn from(value: Text) -> Self {
        Self::Text(value)
    }
}

impl From<List> for Descriptor {
    fn from(value: List) -> Self {
        Self::List(value)
    }
}
