//! Traversal engine: walks a descriptor tree in lock-step with a parsed
//! document (parse) or a record (serialize)
//!
//! Both directions share the same contract per descriptor: locate the part
//! of the current context the descriptor is responsible for, check presence
//! against the required flag, then copy data across. Any violation aborts
//! the whole call; no partial record or document is ever returned.

use crate::descriptor::{Attribute, Descriptor, Element, Text};
use crate::error::{Error, ErrorKind, Result};
use crate::record::Record;
use crate::xml;

/// Parse document text against a schema, producing a record
///
/// Fails if the text is not well-formed, if the root tag does not match the
/// schema's name, or if any part marked required is absent.
pub fn parse(input: &str, schema: &Element) -> Result<Record> {
    let mut parser = xml::Parser::new(input.as_bytes());
    let doc = parser.parse()?;
    parse_element(schema, &doc.root)
}

/// Serialize a record against a schema, producing document text
///
/// The freshly built document is re-validated level by level, so a record
/// mutated out from under its schema (a required attribute removed, the
/// root renamed) fails here instead of producing invalid output.
pub fn serialize(record: &Record, schema: &Element) -> Result<String> {
    let root = build_element(schema, record)?;
    Ok(xml::write(&xml::Document::new(root)))
}

fn parse_element(desc: &Element, node: &xml::Element) -> Result<Record> {
    parse_element_parts(desc, node).map_err(|err| err.within(desc.name()))
}

fn parse_element_parts(desc: &Element, node: &xml::Element) -> Result<Record> {
    // A present element whose tag differs from the descriptor's name is
    // never silently skipped, required or not.
    if node.name != desc.name() {
        return Err(Error::structural(ErrorKind::NameMismatch {
            expected: desc.name().to_string(),
            found: node.name.clone(),
        }));
    }

    let mut record = Record::new(desc.name());
    for child in desc.children() {
        match child {
            Descriptor::Attribute(attr) => parse_attribute(attr, node, &mut record)?,
            Descriptor::Text(content) => parse_text(content, node, &mut record)?,
            Descriptor::Element(sub) => match node.child(sub.name()) {
                Some(subnode) => record.push_subnode(parse_element(sub, subnode)?),
                None if sub.is_required() => {
                    return Err(Error::structural(ErrorKind::MissingElement {
                        name: sub.name().to_string(),
                    }));
                }
                None => {}
            },
            Descriptor::List(group) => {
                for subnode in node.children_by_name(group.item().name()) {
                    record.push_subnode(parse_element(group.item(), subnode)?);
                }
            }
        }
    }
    Ok(record)
}

fn parse_attribute(attr: &Attribute, node: &xml::Element, record: &mut Record) -> Result<()> {
    match node.attribute(attr.name()) {
        Some(value) => {
            record.set_attribute(attr.name(), value);
            Ok(())
        }
        None if attr.is_required() => Err(Error::structural(ErrorKind::MissingAttribute {
            name: attr.name().to_string(),
        })),
        None => Ok(()),
    }
}

fn parse_text(content: &Text, node: &xml::Element, record: &mut Record) -> Result<()> {
    let value = node.text();
    if value.is_empty() {
        if content.is_required() {
            return Err(Error::structural(ErrorKind::MissingText));
        }
        return Ok(());
    }
    record.set_text(value);
    Ok(())
}

fn build_element(desc: &Element, record: &Record) -> Result<xml::Element> {
    build_element_parts(desc, record).map_err(|err| err.within(desc.name()))
}

fn build_element_parts(desc: &Element, record: &Record) -> Result<xml::Element> {
    let mut node = xml::Element::new(record.name());
    for child in desc.children() {
        match child {
            Descriptor::Attribute(attr) => {
                if let Some(value) = record.attribute(attr.name()) {
                    node.set_attribute(attr.name(), value);
                }
            }
            Descriptor::Text(_) => {
                if !record.text().is_empty() {
                    node.set_text(record.text());
                }
            }
            Descriptor::Element(sub) => {
                if let Some(subrecord) = record.subnodes(sub.name()).first() {
                    node.append_child(build_element(sub, subrecord)?);
                }
            }
            Descriptor::List(group) => {
                for subrecord in record.subnodes(group.item().name()) {
                    node.append_child(build_element(group.item(), subrecord)?);
                }
            }
        }
    }
    validate_built(desc, &node)?;
    Ok(node)
}

/// Shallow re-validation of a freshly built element; recursion has already
/// validated deeper levels.
fn validate_built(desc: &Element, node: &xml::Element) -> Result<()> {
    if node.name != desc.name() {
        return Err(Error::structural(ErrorKind::NameMismatch {
            expected: desc.name().to_string(),
            found: node.name.clone(),
        }));
    }
    for child in desc.children() {
        match child {
            Descriptor::Attribute(attr) => {
                if attr.is_required() && node.attribute(attr.name()).is_none() {
                    return Err(Error::structural(ErrorKind::MissingAttribute {
                        name: attr.name().to_string(),
                    }));
                }
            }
            Descriptor::Text(content) => {
                if content.is_required() && node.text().is_empty() {
                    return Err(Error::structural(ErrorKind::MissingText));
                }
            }
            Descriptor::Element(sub) => {
                if sub.is_required() && node.child(sub.name()).is_none() {
                    return Err(Error::structural(ErrorKind::MissingElement {
                        name: sub.name().to_string(),
                    }));
                }
            }
            Descriptor::List(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{attribute, element, list, text};

    fn data_schema() -> Element {
        element("root")
            .with(attribute("key").required())
            .with(attribute("client_id"))
            .with(list(
                element("data")
                    .with(attribute("id").required())
                    .with(text().required()),
            ))
    }

    #[test]
    fn test_parse_minimal() -> Result<()> {
        let record = parse("<root key=\"mykey\" />", &data_schema())?;
        assert_eq!(record.name(), "root");
        assert_eq!(record.attribute("key"), Some("mykey"));
        assert_eq!(record.attribute("client_id"), None);
        assert!(record.subnodes("data").is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_missing_required_attribute() {
        let err = parse("<root />", &data_schema()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::MissingAttribute {
                name: "key".to_string()
            }
        );
        assert_eq!(err.path(), ["root"]);
    }

    #[test]
    fn test_parse_root_name_mismatch() {
        let err = parse("<wrong />", &data_schema()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::NameMismatch {
                expected: "root".to_string(),
                found: "wrong".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_list_member_missing_text() {
        let err = parse(
            "<root key=\"mykey\"><data id=\"1\" /></root>",
            &data_schema(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MissingText);
        assert_eq!(err.path(), ["root", "data"]);
    }

    #[test]
    fn test_parse_nested_element_child() -> Result<()> {
        let schema = element("root").with(element("meta").with(attribute("v")));
        let record = parse("<root><meta v=\"7\" /></root>", &schema)?;

        let meta = record.subnodes("meta");
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.first().and_then(|m| m.attribute("v")), Some("7"));
        Ok(())
    }

    #[test]
    fn test_parse_missing_required_element() {
        let schema = element("root").with(element("meta").required());
        let err = parse("<root />", &schema).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::MissingElement {
                name: "meta".to_string()
            }
        );
    }

    #[test]
    fn test_parse_optional_element_absent() -> Result<()> {
        let schema = element("root").with(element("meta"));
        let record = parse("<root />", &schema)?;
        assert!(record.subnodes("meta").is_empty());
        Ok(())
    }

    #[test]
    fn test_serialize_emission_follows_declaration_order() -> Result<()> {
        let schema = element("root")
            .with(attribute("b"))
            .with(attribute("a"))
            .with(text());
        let mut record = Record::new("root");
        record.set_attribute("a", "1");
        record.set_attribute("b", "2");
        record.set_text("t");

        assert_eq!(serialize(&record, &schema)?, "<root b=\"2\" a=\"1\">t</root>");
        Ok(())
    }

    #[test]
    fn test_serialize_skips_undeclared_parts() -> Result<()> {
        // Only declared descriptors are emitted; the record may carry more.
        let schema = element("root").with(attribute("key"));
        let mut record = Record::new("root");
        record.set_attribute("key", "k");
        record.set_attribute("stray", "x");
        record.set_text("ignored");

        assert_eq!(serialize(&record, &schema)?, "<root key=\"k\"/>");
        Ok(())
    }

    #[test]
    fn test_serialize_revalidates_cleared_required_attribute() {
        let schema = data_schema();
        let mut record = parse("<root key=\"mykey\" />", &schema).expect("parses");
        record.remove_attribute("key");

        let err = serialize(&record, &schema).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::MissingAttribute {
                name: "key".to_string()
            }
        );
    }

    #[test]
    fn test_serialize_revalidates_renamed_record() {
        let schema = element("root").with(attribute("key"));
        let mut record = Record::new("root");
        record.set_attribute("key", "k");
        record.set_name("other");

        let err = serialize(&record, &schema).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::NameMismatch {
                expected: "root".to_string(),
                found: "other".to_string(),
            }
        );
    }

    #[test]
    fn test_serialize_revalidates_list_member() {
        let schema = data_schema();
        let mut record = Record::new("root");
        record.set_attribute("key", "mykey");
        let mut member = Record::new("data");
        member.set_text("D1");
        // member is missing its required id attribute
        record.push_subnode(member);

        let err = serialize(&record, &schema).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::MissingAttribute {
                name: "id".to_string()
            }
        );
        assert_eq!(err.path(), ["root", "data"]);
    }

    #[test]
    fn test_malformed_document_is_not_structural() {
        let err = parse("<root key=", &data_schema()).unwrap_err();
        assert!(!err.kind().is_structural());
    }
}
