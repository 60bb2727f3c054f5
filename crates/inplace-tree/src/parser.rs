//! XHTML fragment parser.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::ParseError;
use crate::node::Node;

/// Parse an XHTML fragment into its top-level nodes.
///
/// The returned nodes are detached from each other (no shared parent).
pub(crate) fn parse_nodes(input: &str) -> Result<Vec<Node>, ParseError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(false);

    let fragment = Node::new_element("#fragment");
    let mut open = vec![fragment.clone()];

    loop {
        let current = open.last().cloned().unwrap_or_else(|| fragment.clone());
        match reader.read_event()? {
            Event::Start(e) => {
                let element = decode_element(&reader, &e);
                current.append_child(&element);
                open.push(element);
            }
            Event::Empty(e) => {
                current.append_child(&decode_element(&reader, &e));
            }
            Event::Text(e) => {
                let text = reader.decoder().decode(&e)?;
                append_text(&current, &text);
            }
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?;
                append_text(&current, &decode_entity(&entity));
            }
            Event::CData(e) => {
                append_text(&current, &String::from_utf8_lossy(&e));
            }
            Event::End(_) => {
                if open.len() > 1 {
                    open.pop();
                }
            }
            Event::Eof => break,
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    let nodes = fragment.children();
    for node in &nodes {
        node.detach();
    }
    Ok(nodes)
}

fn decode_element(reader: &Reader<&[u8]>, e: &BytesStart) -> Node {
    let element = Node::new_element(decode_name(reader, e.name().as_ref()));
    for attr in e.attributes().flatten() {
        let key = decode_name(reader, attr.key.as_ref());
        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            std::borrow::Cow::into_owned,
        );
        element.set_attr(&key, value);
    }
    element
}

fn decode_name(reader: &Reader<&[u8]>, name: &[u8]) -> String {
    reader.decoder().decode(name).map_or_else(
        |_| String::from_utf8_lossy(name).into_owned(),
        std::borrow::Cow::into_owned,
    )
}

/// Append text to the last child when it is a text node, else add a new one.
fn append_text(parent: &Node, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = parent.children().last().filter(|node| node.is_text()) {
        let mut merged = last.text().unwrap_or_default();
        merged.push_str(text);
        last.set_text(merged);
    } else {
        parent.append_child(&Node::new_text(text));
    }
}

/// Decode an entity reference name (without `&` and `;`) to its text.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "apos" => "'".to_owned(),
        "quot" => "\"".to_owned(),
        "nbsp" => "\u{a0}".to_owned(),
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        // Unknown entity - preserve as-is
        _ => format!("&{entity};"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_element() {
        let nodes = parse_nodes("<p>Hello</p>").unwrap();

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tag().as_deref(), Some("p"));
        assert_eq!(nodes[0].inner_text(), "Hello");
        assert!(nodes[0].parent().is_none());
    }

    #[test]
    fn test_parse_nested_elements() {
        let nodes = parse_nodes("<p><strong>Bold</strong> text</p>").unwrap();

        let children = nodes[0].children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag().as_deref(), Some("strong"));
        assert_eq!(children[1].text().as_deref(), Some(" text"));
    }

    #[test]
    fn test_parse_attributes() {
        let nodes = parse_nodes(r#"<div class="a b" data-x="1 &amp; 2"></div>"#).unwrap();

        assert_eq!(nodes[0].classes(), vec!["a", "b"]);
        assert_eq!(nodes[0].attr("data-x").as_deref(), Some("1 & 2"));
    }

    #[test]
    fn test_parse_entities_merge_into_one_text_node() {
        let nodes = parse_nodes("<p>a &amp; b &#233;&#x41;&unknown;</p>").unwrap();

        let children = nodes[0].children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].text().as_deref(), Some("a & b éA&unknown;"));
    }

    #[test]
    fn test_parse_self_closing_elements() {
        let nodes = parse_nodes("<p>Before<br/>After</p>").unwrap();

        let children = nodes[0].children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[1].tag().as_deref(), Some("br"));
        assert_eq!(children[2].text().as_deref(), Some("After"));
    }

    #[test]
    fn test_parse_multiple_top_level_nodes() {
        let nodes = parse_nodes("lead <b>x</b> tail").unwrap();

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].text().as_deref(), Some("lead "));
        assert_eq!(nodes[2].text().as_deref(), Some(" tail"));
    }

    #[test]
    fn test_parse_fragment_empty() {
        assert!(matches!(Node::parse_fragment(""), Err(ParseError::Empty)));
    }

    #[test]
    fn test_parse_fragment_mismatched_tags() {
        assert!(matches!(
            Node::parse_fragment("<div><span></div>"),
            Err(ParseError::Xml(_))
        ));
    }

    #[test]
    fn test_decode_entity() {
        assert_eq!(decode_entity("lt"), "<");
        assert_eq!(decode_entity("#65"), "A");
        assert_eq!(decode_entity("#x263A"), "\u{263A}");
        assert_eq!(decode_entity("#xZZ"), "&#xZZ;");
        assert_eq!(decode_entity("mdash"), "&mdash;");
    }
}
