//! XML document printer
//!
//! Output is raw: no declaration, no indentation, elements and text emitted
//! exactly in stored order.

use crate::xml::model::{Content, Document, Element};

/// Print a document to text
pub fn write(doc: &Document) -> String {
    let mut output = String::new();
    write_element(&doc.root, &mut output);
    output
}

fn write_element(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&element.name);

    for (key, value) in element.attributes.iter() {
        output.push(' ');
        output.push_str(key);
        output.push_str("=\"");
        output.push_str(&escape(value));
        output.push('"');
    }

    if element.children.is_empty() {
        output.push_str("/>");
        return;
    }

    output.push('>');
    for child in &element.children {
        match child {
            Content::Element(child) => write_element(child, output),
            Content::Text(text) => output.push_str(&escape(text)),
        }
    }
    output.push_str("</");
    output.push_str(&element.name);
    output.push('>');
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_empty_element() {
        let doc = Document::new(Element::new("root"));
        assert_eq!(write(&doc), "<root/>");
    }

    #[test]
    fn test_write_attributes_and_children() {
        let mut root = Element::new("root");
        root.set_attribute("key", "mykey");
        let mut data = Element::new("data");
        data.set_attribute("id", "1");
        data.set_text("D1");
        root.append_child(data);
        let doc = Document::new(root);

        assert_eq!(
            write(&doc),
            "<root key=\"mykey\"><data id=\"1\">D1</data></root>"
        );
    }

    #[test]
    fn test_write_escapes() {
        let mut root = Element::new("root");
        root.set_attribute("a", "x \"&\" y");
        root.set_text("1 < 2");
        let doc = Document::new(root);

        assert_eq!(
            write(&doc),
            "<root a=\"x &quot;&amp;&quot; y\">1 &lt; 2</root>"
        );
    }

    #[test]
    fn test_write_then_parse_round_trip() {
        let mut root = Element::new("root");
        root.set_attribute("a", "v<&>");
        let mut child = Element::new("child");
        child.set_text("t & t");
        root.append_child(child);
        let doc = Document::new(root);

        let text = write(&doc);
        let mut parser = crate::xml::Parser::new(text.as_bytes());
        let reparsed = parser.parse().expect("writer output parses");
        assert_eq!(reparsed, doc);
    }
}
