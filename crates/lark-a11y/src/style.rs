//! Visually Hidden Styles
//!
//! Content hidden from sighted users but kept in the accessibility tree.

use lark_markup::{Attribute, style};

/// Style bundle that removes content from visual rendering without removing
/// it from the accessibility tree
///
/// Clipping and 1px sizing keep the element laid out and readable by
/// assistive technology while making it invisible on screen.
pub fn invisible<Msg>() -> Vec<Attribute<Msg>> {
    vec![
        style("position", "absolute"),
        style("clip", "rect(1px, 1px, 1px, 1px)"),
        style("width", "1px"),
        style("height", "1px"),
        style("overflow", "hidden"),
        style("margin", "-1px"),
        style("padding", "0"),
        style("border", "0"),
    ]
}
