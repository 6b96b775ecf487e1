//! Markup Node
//!
//! Tree node: an element with tag, attributes, and children, or a text run.
//! Constructed once, immutable thereafter, owned by whoever consumes it.

use crate::attribute::Attribute;

/// Markup tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<Msg> {
    /// Element with tag, attributes, children
    Element(Element<Msg>),
    /// Text run
    Text(String),
}

/// Element data: tag name, ordered attributes, ordered children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<Msg> {
    pub tag: String,
    pub attrs: Vec<Attribute<Msg>>,
    pub children: Vec<Node<Msg>>,
}

impl<Msg> Node<Msg> {
    /// Check if this is an element
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Get element data if this is an element
    pub fn as_element(&self) -> Option<&Element<Msg>> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }

    /// Get text content if this is a text run
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Element(_) => None,
        }
    }

    /// Transform the message type carried by this subtree
    pub fn map<T>(self, f: impl Fn(Msg) -> T + Copy) -> Node<T> {
        match self {
            Self::Text(t) => Node::Text(t),
            Self::Element(e) => Node::Element(Element {
                tag: e.tag,
                attrs: e.attrs.into_iter().map(|a| a.map(f)).collect(),
                children: e.children.into_iter().map(|c| c.map(f)).collect(),
            }),
        }
    }
}

impl<Msg> Element<Msg> {
    /// Get the value of the first attribute with the given name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find_map(|a| match a {
            Attribute::String { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Check if any attribute with the given name is present
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| !a.is_listener() && a.name() == name)
    }
}

/// Build an element node
pub fn node<Msg>(
    tag: impl Into<String>,
    attrs: Vec<Attribute<Msg>>,
    children: Vec<Node<Msg>>,
) -> Node<Msg> {
    Node::Element(Element { tag: tag.into(), attrs, children })
}

/// Build a text node
pub fn text<Msg>(content: impl Into<String>) -> Node<Msg> {
    Node::Text(content.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{NoEvent, attr, on};

    #[test]
    fn test_node_construction() {
        let n: Node<NoEvent> = node("div", vec![attr("id", "main")], vec![text("hi")]);
        let el = n.as_element().unwrap();
        assert_eq!(el.tag, "div");
        assert_eq!(el.attribute("id"), Some("main"));
        assert_eq!(el.children[0].as_text(), Some("hi"));
    }

    #[test]
    fn test_map_retypes_subtree() {
        let n: Node<i32> = node(
            "div",
            vec![on("click", 1)],
            vec![node("span", vec![on("click", 2)], vec![])],
        );
        let mapped = n.map(|msg| format!("msg-{msg}"));
        let el = mapped.as_element().unwrap();
        assert_eq!(el.attrs[0], on("click", "msg-1".to_string()));
        let child = el.children[0].as_element().unwrap();
        assert_eq!(child.attrs[0], on("click", "msg-2".to_string()));
    }

    #[test]
    fn test_has_attribute_ignores_listeners() {
        let n: Node<i32> = node("div", vec![on("click", 1)], vec![]);
        assert!(!n.as_element().unwrap().has_attribute("click"));
    }
}
