//! Minimal XML element tree for doc-comment blobs.
//!
//! The indexer emits one small, single-rooted XML document per documented
//! symbol. This module parses it into an [`XmlElement`] tree that preserves
//! text exactly (no trimming, entity references decoded), which the
//! extraction layer then queries by element name.

use std::collections::HashMap;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::DocCommentError;

/// Element in a parsed doc-comment blob.
#[derive(Debug, Clone, Default)]
pub struct XmlElement {
    /// Element tag name.
    pub tag: String,
    /// Element attributes.
    pub attrs: HashMap<String, String>,
    /// Direct text content.
    pub text: String,
    /// Text after this element inside its parent.
    pub tail: String,
    /// Child elements.
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Direct child elements with the given tag, in document order.
    pub fn children_named<'a, 'b>(&'a self, tag: &'b str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    /// First direct child element with the given tag.
    #[must_use]
    pub fn first_child(&self, tag: &str) -> Option<&XmlElement> {
        self.children_named(tag).next()
    }

    /// Text content of this element and all descendants, in document order.
    ///
    /// Concatenates text nodes exactly as they appear, without inserting
    /// separators or trimming.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_text(out);
            out.push_str(&child.tail);
        }
    }
}

/// Parse a doc-comment XML blob into its root element.
///
/// # Errors
///
/// Returns an error if the blob is not well-formed XML or contains no root
/// element.
pub fn parse(xml: &str) -> Result<XmlElement, DocCommentError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let tag = decode_tag(&reader, e.name().as_ref());
                let attrs = decode_attrs(&reader, &e);
                let mut root = parse_children(&mut reader, &tag)?;
                root.tag = tag;
                root.attrs = attrs;
                return Ok(root);
            }
            Event::Empty(e) => {
                return Ok(XmlElement {
                    tag: decode_tag(&reader, e.name().as_ref()),
                    attrs: decode_attrs(&reader, &e),
                    ..Default::default()
                });
            }
            Event::Eof => return Err(DocCommentError::MissingRoot),
            _ => {}
        }
        buf.clear();
    }
}

/// Parse events until the end tag matching `parent_tag`.
fn parse_children<R: BufRead>(
    reader: &mut Reader<R>,
    parent_tag: &str,
) -> Result<XmlElement, DocCommentError> {
    let mut buf = Vec::new();
    let mut node = XmlElement::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let child_tag = decode_tag(reader, e.name().as_ref());
                let child_attrs = decode_attrs(reader, &e);
                let mut child = parse_children(reader, &child_tag)?;
                child.tag = child_tag;
                child.attrs = child_attrs;
                node.children.push(child);
            }
            Event::Empty(e) => {
                let child = XmlElement {
                    tag: decode_tag(reader, e.name().as_ref()),
                    attrs: decode_attrs(reader, &e),
                    ..Default::default()
                };
                node.children.push(child);
            }
            Event::Text(e) => {
                let text = reader.decoder().decode(&e)?.into_owned();
                append_text(&mut node, &text);
            }
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?.into_owned();
                append_text(&mut node, &decode_entity(&entity));
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                append_text(&mut node, &text);
            }
            Event::End(e) => {
                let end_tag = decode_tag(reader, e.name().as_ref());
                if end_tag == parent_tag {
                    return Ok(node);
                }
                // Mismatched end tag - continue
            }
            Event::Eof => {
                return Ok(node);
            }
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
        buf.clear();
    }
}

fn decode_tag<R: BufRead>(reader: &Reader<R>, name: &[u8]) -> String {
    reader.decoder().decode(name).map_or_else(
        |_| String::from_utf8_lossy(name).into_owned(),
        std::borrow::Cow::into_owned,
    )
}

fn decode_attrs<R: BufRead>(reader: &Reader<R>, e: &BytesStart) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    for attr in e.attributes().flatten() {
        let key = reader.decoder().decode(attr.key.as_ref()).map_or_else(
            |_| String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            std::borrow::Cow::into_owned,
        );
        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            std::borrow::Cow::into_owned,
        );
        attrs.insert(key, value);
    }
    attrs
}

/// Append text to the node's text or the last child's tail.
fn append_text(node: &mut XmlElement, text: &str) {
    if let Some(last_child) = node.children.last_mut() {
        last_child.tail.push_str(text);
    } else {
        node.text.push_str(text);
    }
}

/// Decode XML entity references to their character values.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "apos" => "'".to_owned(),
        "quot" => "\"".to_owned(),
        // Numeric character references
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        other => format!("&{other};"),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_single_element() {
        let root = parse("<Function line=\"7\" column=\"6\"/>").unwrap();
        assert_eq!(root.tag, "Function");
        assert_eq!(root.attr("line"), Some("7"));
        assert_eq!(root.attr("column"), Some("6"));
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_parse_nested_children() {
        let root = parse("<Class><Name>Foo</Name><USR>s:Foo</USR></Class>").unwrap();
        assert_eq!(root.tag, "Class");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].tag, "Name");
        assert_eq!(root.children[0].text, "Foo");
        assert_eq!(root.children[1].tag, "USR");
        assert_eq!(root.children[1].text, "s:Foo");
    }

    #[test]
    fn test_text_content_is_deep() {
        let root = parse("<Abstract><Para>Hello <b>bold</b> world</Para></Abstract>").unwrap();
        assert_eq!(root.text_content(), "Hello bold world");
    }

    #[test]
    fn test_entity_references_decoded() {
        let root = parse("<Declaration>func f&lt;T&gt;(x: T) -&gt; T</Declaration>").unwrap();
        assert_eq!(root.text_content(), "func f<T>(x: T) -> T");
    }

    #[test]
    fn test_numeric_character_reference() {
        let root = parse("<Para>caf&#233; &#x2014; open</Para>").unwrap();
        assert_eq!(root.text_content(), "caf\u{e9} \u{2014} open");
    }

    #[test]
    fn test_cdata_preserved() {
        let root = parse("<Declaration><![CDATA[if a < b { }]]></Declaration>").unwrap();
        assert_eq!(root.text_content(), "if a < b { }");
    }

    #[test]
    fn test_tail_text_attached_to_parent_content() {
        let root = parse("<Para>start <ref>mid</ref> end</Para>").unwrap();
        assert_eq!(root.text, "start ");
        assert_eq!(root.children[0].tail, " end");
        assert_eq!(root.text_content(), "start mid end");
    }

    #[test]
    fn test_children_named_filters_by_tag() {
        let root = parse(
            "<Parameters><Parameter><Name>a</Name></Parameter>\
             <Parameter><Name>b</Name></Parameter></Parameters>",
        )
        .unwrap();
        let names: Vec<String> = root
            .children_named("Parameter")
            .filter_map(|p| p.first_child("Name"))
            .map(XmlElement::text_content)
            .collect();
        assert_eq!(names, vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(parse("<Class><Name>Foo</Class>").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_whitespace_preserved() {
        let root = parse("<Para>  spaced  out  </Para>").unwrap();
        assert_eq!(root.text_content(), "  spaced  out  ");
    }
}
