//! Tab Triad
//!
//! `tab_list` / `tab` / `tab_panel` builders with their roles pre-wired.
//! Callers own the cross-references between members: `aria-selected` and
//! `aria-controls` on each tab, `aria-labelledby` and `hidden` on each
//! panel. Consistency between a tab and its panel is not checked here.

use crate::support::{upgrade_attrs, with_default_role};
use lark_a11y::Role;
use lark_markup::{Attribute, NoEvent, Node, attr, node};

/// Container for tabs; role `tablist`, non-interactive
pub fn tab_list<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    node(
        "div",
        with_default_role(Role::TabList, upgrade_attrs(attrs)),
        children,
    )
}

/// A single tab; role `tab`, keyboard-focusable, interactive
pub fn tab<Msg>(attrs: Vec<Attribute<Msg>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    let mut combined = with_default_role(Role::Tab, attrs);
    combined.insert(1, attr("tabindex", "0"));
    node("div", combined, children)
}

/// Content shown for the selected tab; role `tabpanel`, non-interactive
pub fn tab_panel<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    node(
        "div",
        with_default_role(Role::TabPanel, upgrade_attrs(attrs)),
        children,
    )
}
