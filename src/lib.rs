//! xmlbind - Schema-driven XML binder
//!
//! Declare the expected shape of a document once as a tree of composable
//! descriptors, then use the same tree to parse document text into a
//! generic [`Record`] and to serialize a record back to text, with the
//! declared structure enforced in both directions.
//!
//! # Quick Start
//!
//! ```
//! use xmlbind::{attribute, element, list, parse, serialize, text};
//! # fn main() -> Result<(), xmlbind::Error> {
//! let schema = element("root")
//!     .with(attribute("key").required())
//!     .with(attribute("client_id"))
//!     .with(list(
//!         element("data")
//!             .with(attribute("id").required())
//!             .with(text().required()),
//!     ));
//!
//! let record = parse(
//!     "<root key=\"mykey\"><data id=\"1\">D1</data><data id=\"2\">D2</data></root>",
//!     &schema,
//! )?;
//! assert_eq!(record.attribute("key"), Some("mykey"));
//! assert_eq!(record.subnodes("data").len(), 2);
//!
//! let output = serialize(&record, &schema)?;
//! assert_eq!(parse(&output, &schema)?, record);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod record;
pub use record::Record;

pub mod descriptor;
pub use descriptor::{attribute, element, list, text, Attribute, Descriptor, Element, List, Text};

pub mod bind;
pub use bind::{parse, serialize};

pub mod xml;
pub use xml::{
    Content as XmlContent, Document as XmlDocument, Element as XmlElement, Parser as XmlParser,
};
