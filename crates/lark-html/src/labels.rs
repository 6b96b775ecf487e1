//! Label Pairing
//!
//! Every input needs a label. These builders make the pairing the path of
//! least resistance: the label content and the input travel together, in
//! the declared order.

use crate::support::upgrade_attrs;
use lark_a11y::invisible;
use lark_markup::{Attribute, NoEvent, Node, attr, node};

/// `<label>` wrapping label content, then the input
pub fn label_before<Msg>(
    attrs: Vec<Attribute<NoEvent>>,
    label_content: Node<Msg>,
    input: Node<Msg>,
) -> Node<Msg> {
    node("label", upgrade_attrs(attrs), vec![label_content, input])
}

/// `<label>` wrapping the input, then label content
pub fn label_after<Msg>(
    attrs: Vec<Attribute<NoEvent>>,
    label_content: Node<Msg>,
    input: Node<Msg>,
) -> Node<Msg> {
    node("label", upgrade_attrs(attrs), vec![input, label_content])
}

/// Visually hidden label next to its input
///
/// The label carries `for=<id>` and the invisible style bundle ahead of any
/// caller attributes; the caller must give the paired input `id=<id>`. The
/// pairing is not cross-checked.
pub fn label_hidden<Msg>(
    id: impl Into<String>,
    attrs: Vec<Attribute<NoEvent>>,
    label_content: Node<Msg>,
    input: Node<Msg>,
) -> Node<Msg> {
    let mut label_attrs: Vec<Attribute<NoEvent>> = vec![attr("for", id)];
    label_attrs.extend(invisible());
    label_attrs.extend(attrs);
    node(
        "span",
        vec![],
        vec![
            node("label", upgrade_attrs(label_attrs), vec![label_content]),
            input,
        ],
    )
}
