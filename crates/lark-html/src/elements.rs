//! Element Builders
//!
//! One constructor per standard element. Almost everything here is
//! non-interactive: the attribute list only admits `Attribute<NoEvent>`, so
//! attaching a listener is a compile error. `button`, `select`, `textarea`,
//! and `form_with_listeners` are the interactive exceptions.

use crate::support::{passive, upgrade_attrs};
use lark_markup::{Attribute, NoEvent, Node, node};

// Sectioning and grouping content

/// `<address>`
pub fn address<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("address", attrs, children)
}

/// `<article>`
pub fn article<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("article", attrs, children)
}

/// `<aside>`
pub fn aside<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("aside", attrs, children)
}

/// `<blockquote>`
pub fn blockquote<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("blockquote", attrs, children)
}

/// `<details>`
pub fn details<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("details", attrs, children)
}

/// `<div>`
///
/// Non-interactive; a listener-carrying attribute is rejected at compile
/// time:
///
/// ```compile_fail
/// use lark_html::{div, on, text};
///
/// let _ = div(vec![on("click", ())], vec![text::<()>("nope")]);
/// ```
pub fn div<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("div", attrs, children)
}

pub fn dd<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("dd", attrs, children)
}

pub fn dl<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("dl", attrs, children)
}

pub fn dt<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("dt", attrs, children)
}

pub fn fieldset<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("fieldset", attrs, children)
}

pub fn figcaption<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("figcaption", attrs, children)
}

pub fn footer<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("footer", attrs, children)
}

pub fn header<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("header", attrs, children)
}

pub fn hr<Msg>(attrs: Vec<Attribute<NoEvent>>) -> Node<Msg> {
    passive("hr", attrs, vec![])
}

pub fn legend<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("legend", attrs, children)
}

pub fn li<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("li", attrs, children)
}

pub fn main<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("main", attrs, children)
}

pub fn menu<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("menu", attrs, children)
}

pub fn nav<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("nav", attrs, children)
}

pub fn ol<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("ol", attrs, children)
}

pub fn p<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("p", attrs, children)
}

pub fn pre<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("pre", attrs, children)
}

pub fn section<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("section", attrs, children)
}

pub fn summary<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("summary", attrs, children)
}

pub fn ul<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("ul", attrs, children)
}

// Headings

pub fn h1<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("h1", attrs, children)
}

pub fn h2<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("h2", attrs, children)
}

pub fn h3<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("h3", attrs, children)
}

pub fn h4<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("h4", attrs, children)
}

pub fn h5<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("h5", attrs, children)
}

pub fn h6<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("h6", attrs, children)
}

// Text-level semantics

/// `<a>`; navigation via `href` needs no listener
pub fn a<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("a", attrs, children)
}

pub fn abbr<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("abbr", attrs, children)
}

pub fn b<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("b", attrs, children)
}

pub fn bdi<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("bdi", attrs, children)
}

pub fn bdo<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("bdo", attrs, children)
}

pub fn br<Msg>(attrs: Vec<Attribute<NoEvent>>) -> Node<Msg> {
    passive("br", attrs, vec![])
}

pub fn cite<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("cite", attrs, children)
}

pub fn code<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("code", attrs, children)
}

pub fn del<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("del", attrs, children)
}

pub fn dfn<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("dfn", attrs, children)
}

pub fn em<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("em", attrs, children)
}

pub fn i<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("i", attrs, children)
}

pub fn ins<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("ins", attrs, children)
}

pub fn kbd<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("kbd", attrs, children)
}

pub fn mark<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("mark", attrs, children)
}

pub fn q<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("q", attrs, children)
}

pub fn rp<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("rp", attrs, children)
}

pub fn rt<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("rt", attrs, children)
}

pub fn ruby<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("ruby", attrs, children)
}

pub fn s<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("s", attrs, children)
}

pub fn samp<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("samp", attrs, children)
}

pub fn small<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("small", attrs, children)
}

pub fn span<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("span", attrs, children)
}

pub fn strong<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("strong", attrs, children)
}

pub fn sub<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("sub", attrs, children)
}

pub fn sup<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("sup", attrs, children)
}

pub fn time<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("time", attrs, children)
}

pub fn u<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("u", attrs, children)
}

pub fn var<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("var", attrs, children)
}

pub fn wbr<Msg>(attrs: Vec<Attribute<NoEvent>>) -> Node<Msg> {
    passive("wbr", attrs, vec![])
}

// Table content

pub fn caption<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("caption", attrs, children)
}

pub fn col<Msg>(attrs: Vec<Attribute<NoEvent>>) -> Node<Msg> {
    passive("col", attrs, vec![])
}

pub fn colgroup<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("colgroup", attrs, children)
}

pub fn table<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("table", attrs, children)
}

pub fn tbody<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("tbody", attrs, children)
}

pub fn td<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("td", attrs, children)
}

pub fn tfoot<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("tfoot", attrs, children)
}

pub fn th<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("th", attrs, children)
}

pub fn thead<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("thead", attrs, children)
}

pub fn tr<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("tr", attrs, children)
}

// Embedded and media content

pub fn audio<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("audio", attrs, children)
}

pub fn source<Msg>(attrs: Vec<Attribute<NoEvent>>) -> Node<Msg> {
    passive("source", attrs, vec![])
}

pub fn track<Msg>(attrs: Vec<Attribute<NoEvent>>) -> Node<Msg> {
    passive("track", attrs, vec![])
}

pub fn video<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("video", attrs, children)
}

// Form-adjacent, still non-interactive

/// `<form>` without listeners; see [`form_with_listeners`]
pub fn form<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("form", attrs, children)
}

pub fn meter<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("meter", attrs, children)
}

pub fn optgroup<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("optgroup", attrs, children)
}

pub fn option<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("option", attrs, children)
}

pub fn output<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("output", attrs, children)
}

pub fn progress<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    passive("progress", attrs, children)
}

// Interactive exceptions

/// `<button>`; interactive, attributes may carry listeners
pub fn button<Msg>(attrs: Vec<Attribute<Msg>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    node("button", attrs, children)
}

/// `<select>`; interactive, attributes may carry listeners
pub fn select<Msg>(attrs: Vec<Attribute<Msg>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    node("select", attrs, children)
}

/// `<textarea>`; interactive, attributes may carry listeners
pub fn textarea<Msg>(attrs: Vec<Attribute<Msg>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    node("textarea", attrs, children)
}

/// `<form>` that accepts listeners
///
/// The intentionally-named escape hatch for submit handling; [`form`] is the
/// restricted default.
pub fn form_with_listeners<Msg>(
    attrs: Vec<Attribute<Msg>>,
    children: Vec<Node<Msg>>,
) -> Node<Msg> {
    node("form", attrs, children)
}

/// Build an arbitrary non-interactive element by tag name
pub fn passive_node<Msg>(
    tag: impl Into<String>,
    attrs: Vec<Attribute<NoEvent>>,
    children: Vec<Node<Msg>>,
) -> Node<Msg> {
    node(tag, upgrade_attrs(attrs), children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lark_markup::{attr, on, text};

    #[test]
    fn test_passive_builder_shape() {
        let n: Node<i32> = p(vec![attr("class", "intro")], vec![text("hi")]);
        let el = n.as_element().unwrap();
        assert_eq!(el.tag, "p");
        assert_eq!(el.attribute("class"), Some("intro"));
        assert_eq!(el.children.len(), 1);
    }

    #[test]
    fn test_passive_attrs_with_interactive_children() {
        // A div cannot listen, but its children still can.
        let n: Node<i32> = div(vec![], vec![button(vec![on("click", 1)], vec![text("Go")])]);
        let inner = n.as_element().unwrap().children[0].as_element().unwrap();
        assert!(inner.attrs[0].is_listener());
    }

    #[test]
    fn test_interactive_exceptions_accept_listeners() {
        let n = form_with_listeners(vec![on("submit", 9)], Vec::<Node<i32>>::new());
        assert_eq!(n.as_element().unwrap().tag, "form");
        assert!(n.as_element().unwrap().attrs[0].is_listener());
    }

    #[test]
    fn test_void_builders_take_no_children() {
        let n: Node<i32> = br(vec![]);
        assert!(n.as_element().unwrap().children.is_empty());
    }

    #[test]
    fn test_passive_node_custom_tag() {
        let n: Node<i32> = passive_node("picture", vec![], vec![]);
        assert_eq!(n.as_element().unwrap().tag, "picture");
    }
}
