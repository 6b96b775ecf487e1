//! Image Builders
//!
//! Informative images demand alt text as an argument; decorative images get
//! an empty alt and the presentation role so assistive technology skips
//! them. Images never take listeners.

use crate::support::{upgrade_attrs, with_default_role};
use lark_a11y::Role;
use lark_markup::{Attribute, NoEvent, Node, attr, node};

/// `<img>` with caller-supplied alt text
///
/// The text is not checked for emptiness; an empty string is rendered as-is
/// (and logged, since an informative image without a description is almost
/// always a mistake; use [`decorative_img`] for images that carry no
/// information).
pub fn img<Msg>(alt: impl Into<String>, attrs: Vec<Attribute<NoEvent>>) -> Node<Msg> {
    let alt = alt.into();
    if alt.is_empty() {
        tracing::warn!("informative image built with empty alt text");
    }
    let mut combined = vec![attr("alt", alt)];
    combined.extend(upgrade_attrs(attrs));
    node("img", combined, vec![])
}

/// `<img>` that conveys no information: `alt=""` plus the presentation role
///
/// A caller-supplied role attribute replaces the presentation default; the
/// role attribute is never emitted twice.
pub fn decorative_img<Msg>(attrs: Vec<Attribute<NoEvent>>) -> Node<Msg> {
    let mut combined = with_default_role(Role::Presentation, upgrade_attrs(attrs));
    combined.insert(0, attr("alt", ""));
    node("img", combined, vec![])
}

/// `<figure>` with role `group`
pub fn figure<Msg>(attrs: Vec<Attribute<NoEvent>>, children: Vec<Node<Msg>>) -> Node<Msg> {
    node(
        "figure",
        with_default_role(Role::Group, upgrade_attrs(attrs)),
        children,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lark_markup::text;

    #[test]
    fn test_img_forces_alt_first() {
        let n: Node<NoEvent> = img("A kingfisher diving", vec![attr("src", "/kf.jpg")]);
        let el = n.as_element().unwrap();
        assert_eq!(el.attrs[0], attr("alt", "A kingfisher diving"));
        assert_eq!(el.attribute("src"), Some("/kf.jpg"));
    }

    #[test]
    fn test_img_accepts_empty_alt() {
        // Permissive by design; the markup is produced unchanged.
        let n: Node<NoEvent> = img("", vec![]);
        assert_eq!(n.as_element().unwrap().attribute("alt"), Some(""));
    }

    #[test]
    fn test_decorative_img_defaults() {
        let n: Node<NoEvent> = decorative_img(vec![attr("src", "/border.png")]);
        let el = n.as_element().unwrap();
        assert_eq!(el.attrs[0], attr("alt", ""));
        assert_eq!(el.attrs[1], attr("role", "presentation"));
        assert_eq!(el.attribute("src"), Some("/border.png"));
    }

    #[test]
    fn test_decorative_img_caller_role_wins() {
        let n: Node<NoEvent> = decorative_img(vec![attr("role", "none")]);
        let el = n.as_element().unwrap();
        let roles: Vec<_> = el
            .attrs
            .iter()
            .filter(|a| matches!(a, Attribute::String { name, .. } if name == "role"))
            .collect();
        assert_eq!(roles.len(), 1);
        assert_eq!(el.attribute("role"), Some("none"));
    }

    #[test]
    fn test_figure_role_group() {
        let n: Node<NoEvent> = figure(vec![], vec![text("caption")]);
        assert_eq!(n.as_element().unwrap().attribute("role"), Some("group"));
    }
}
