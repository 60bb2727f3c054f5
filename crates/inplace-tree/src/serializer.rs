//! HTML serializer.

use std::fmt::Write;

use crate::node::{Node, NodeKind};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub(crate) fn inner_html(node: &Node) -> String {
    let mut out = String::new();
    for child in &node.data().children {
        serialize_node(child, &mut out);
    }
    out
}

pub(crate) fn outer_html(node: &Node) -> String {
    let mut out = String::new();
    serialize_node(node, &mut out);
    out
}

fn serialize_node(node: &Node, out: &mut String) {
    let data = node.data();
    match &data.kind {
        NodeKind::Text(text) => out.push_str(&escape_text(text)),
        NodeKind::Element { tag, attrs } => {
            out.push('<');
            out.push_str(tag);
            for (key, value) in attrs {
                write!(out, r#" {}="{}""#, key, escape_attr(value)).unwrap();
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag.as_str()) && data.children.is_empty() {
                return;
            }

            for child in &data.children {
                serialize_node(child, out);
            }
            write!(out, "</{tag}>").unwrap();
        }
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\u{a0}', "&nbsp;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_nested() {
        let div = Node::new_element("div")
            .with_child(Node::new_text("text1 "))
            .with_child(
                Node::new_element("span")
                    .with_attr("class", "p1")
                    .with_child(Node::new_text("text")),
            )
            .with_child(Node::new_text(" text2"));

        assert_eq!(
            inner_html(&div),
            r#"text1 <span class="p1">text</span> text2"#
        );
        assert_eq!(
            outer_html(&div),
            r#"<div>text1 <span class="p1">text</span> text2</div>"#
        );
    }

    #[test]
    fn test_serialize_void_and_empty_elements() {
        let p = Node::new_element("p")
            .with_child(Node::new_element("br"))
            .with_child(Node::new_element("span"));

        assert_eq!(outer_html(&p), "<p><br><span></span></p>");
    }

    #[test]
    fn test_escape_text() {
        let p = Node::new_element("p").with_child(Node::new_text("a < b & c\u{a0}d"));
        assert_eq!(inner_html(&p), "a &lt; b &amp; c&nbsp;d");
    }

    #[test]
    fn test_escape_attr() {
        let a = Node::new_element("a").with_attr("title", r#"say "hi" & <go>"#);
        assert_eq!(
            outer_html(&a),
            r#"<a title="say &quot;hi&quot; &amp; &lt;go&gt;"></a>"#
        );
    }

    #[test]
    fn test_serialize_text_node() {
        assert_eq!(outer_html(&Node::new_text("x & y")), "x &amp; y");
        assert_eq!(inner_html(&Node::new_text("x")), "");
    }
}
