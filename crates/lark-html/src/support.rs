//! Builder Support
//!
//! Shared attribute plumbing for the element builders.

use lark_a11y::{Role, role};
use lark_markup::{Attribute, NoEvent, Node, node};

/// Re-type listener-free attributes into the caller's message world
pub(crate) fn upgrade_attrs<Msg>(attrs: Vec<Attribute<NoEvent>>) -> Vec<Attribute<Msg>> {
    attrs.into_iter().map(Attribute::upgrade).collect()
}

/// Build an element whose attributes cannot carry listeners
pub(crate) fn passive<Msg>(
    tag: &'static str,
    attrs: Vec<Attribute<NoEvent>>,
    children: Vec<Node<Msg>>,
) -> Node<Msg> {
    node(tag, upgrade_attrs(attrs), children)
}

/// Prepend a default role unless the caller already supplied one
///
/// A role attribute therefore appears at most once, and a caller-supplied
/// role wins over the builder's default.
pub(crate) fn with_default_role<Msg>(
    default: Role,
    attrs: Vec<Attribute<Msg>>,
) -> Vec<Attribute<Msg>> {
    let caller_has_role = attrs
        .iter()
        .any(|a| matches!(a, Attribute::String { name, .. } if name == "role"));
    if caller_has_role {
        return attrs;
    }
    let mut combined = Vec::with_capacity(attrs.len() + 1);
    combined.push(role(default));
    combined.extend(attrs);
    combined
}
