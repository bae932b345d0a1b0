//! XML engine: document model, parser, and printer
//!
//! The binder consumes this module only through the model's navigation and
//! building methods plus [`Parser::parse`] and [`write`].

pub mod cursor;
pub mod model;
pub mod parser;
pub mod writer;

pub use cursor::Cursor;
pub use model::{Content, Document, Element};
pub use parser::Parser;
pub use writer::write;
