//! HTML Serialization
//!
//! Formats a markup tree as an HTML string. This is a value-to-string
//! formatter, not a renderer: event listeners have no string form and are
//! skipped.

use crate::attribute::Attribute;
use crate::node::{Element, Node};

/// Elements serialized without a closing tag; any children are ignored.
const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl<Msg> Node<Msg> {
    /// Serialize this subtree as an HTML string
    pub fn to_html(&self) -> String {
        tracing::trace!("serializing markup tree");
        let mut out = String::new();
        write_node(self, &mut out);
        out
    }
}

fn write_node<Msg>(node: &Node<Msg>, out: &mut String) {
    match node {
        Node::Text(t) => escape_text(t, out),
        Node::Element(e) => write_element(e, out),
    }
}

fn write_element<Msg>(el: &Element<Msg>, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    write_attrs(&el.attrs, out);
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        return;
    }
    for child in &el.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn write_attrs<Msg>(attrs: &[Attribute<Msg>], out: &mut String) {
    // An attribute name is emitted once, at the position it first appeared,
    // with the value of its last occurrence. Builders prepend their defaults
    // and append caller attributes, so a caller-supplied repeat overrides
    // the default instead of producing a duplicate the HTML parser would
    // drop.
    let mut named: Vec<&Attribute<Msg>> = Vec::new();
    let mut styles = String::new();
    for attr in attrs {
        match attr {
            Attribute::String { name, .. } | Attribute::Bool { name, .. } => {
                if let Some(slot) = named.iter_mut().find(|a| a.name() == name) {
                    *slot = attr;
                } else {
                    named.push(attr);
                }
            }
            Attribute::Style { property, value } => {
                if !styles.is_empty() {
                    styles.push_str("; ");
                }
                styles.push_str(property);
                styles.push_str(": ");
                styles.push_str(value);
            }
            Attribute::On { .. } => {}
        }
    }
    for attr in named {
        match attr {
            Attribute::String { name, value } => {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_attr(value, out);
                out.push('"');
            }
            Attribute::Bool { name, value } => {
                if *value {
                    out.push(' ');
                    out.push_str(name);
                }
            }
            Attribute::Style { .. } | Attribute::On { .. } => {}
        }
    }
    if !styles.is_empty() {
        out.push_str(" style=\"");
        escape_attr(&styles, out);
        out.push('"');
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::attribute::{NoEvent, attr, bool_attr, on, style};
    use crate::node::{node, text};
    use crate::Node;

    #[test]
    fn test_element_with_attrs_and_text() {
        let n: Node<NoEvent> =
            node("p", vec![attr("class", "intro")], vec![text("Hello")]);
        assert_eq!(n.to_html(), r#"<p class="intro">Hello</p>"#);
    }

    #[test]
    fn test_text_escaping() {
        let n: Node<NoEvent> = node("span", vec![], vec![text("a < b & c > d")]);
        assert_eq!(n.to_html(), "<span>a &lt; b &amp; c &gt; d</span>");
    }

    #[test]
    fn test_attr_escaping() {
        let n: Node<NoEvent> = node("div", vec![attr("title", r#"say "hi""#)], vec![]);
        assert_eq!(n.to_html(), r#"<div title="say &quot;hi&quot;"></div>"#);
    }

    #[test]
    fn test_void_element_drops_children() {
        let n: Node<NoEvent> = node("br", vec![], vec![text("ignored")]);
        assert_eq!(n.to_html(), "<br>");
    }

    #[test]
    fn test_styles_merge_into_one_attribute() {
        let n: Node<NoEvent> =
            node("div", vec![style("width", "1px"), style("height", "1px")], vec![]);
        assert_eq!(n.to_html(), r#"<div style="width: 1px; height: 1px"></div>"#);
    }

    #[test]
    fn test_bool_attr_rendering() {
        let checked: Node<NoEvent> = node("input", vec![bool_attr("checked", true)], vec![]);
        assert_eq!(checked.to_html(), "<input checked>");
        let unchecked: Node<NoEvent> = node("input", vec![bool_attr("checked", false)], vec![]);
        assert_eq!(unchecked.to_html(), "<input>");
    }

    #[test]
    fn test_repeated_attr_last_value_wins() {
        let n: Node<NoEvent> = node(
            "input",
            vec![attr("type", "text"), attr("value", ""), attr("value", "override")],
            vec![],
        );
        assert_eq!(n.to_html(), r#"<input type="text" value="override">"#);
    }

    #[test]
    fn test_repeated_attr_keeps_first_position() {
        let n: Node<NoEvent> = node(
            "div",
            vec![attr("id", "a"), attr("class", "x"), attr("id", "b")],
            vec![],
        );
        assert_eq!(n.to_html(), r#"<div id="b" class="x"></div>"#);
    }

    #[test]
    fn test_repeated_bool_attr_last_value_wins() {
        let n: Node<NoEvent> = node(
            "input",
            vec![bool_attr("checked", true), bool_attr("checked", false)],
            vec![],
        );
        assert_eq!(n.to_html(), "<input>");
    }

    #[test]
    fn test_listeners_have_no_string_form() {
        let n: Node<i32> = node("button", vec![on("click", 1)], vec![text("Go")]);
        assert_eq!(n.to_html(), "<button>Go</button>");
    }
}
