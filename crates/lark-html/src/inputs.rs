//! Typed Input Builders
//!
//! One constructor per HTML input type. The `type` token comes first, typed
//! arguments (`value`, `name`, `checked`, `pattern`, `multiple`) next, and
//! caller attributes last, so callers extend defaults rather than being
//! overridden by them.
//!
//! Inputs are interactive; attribute lists are unrestricted.

use crate::datetime::{date_value, datetime_local_value, month_value, time_value, week_value};
use chrono::{DateTime, FixedOffset, Utc};
use lark_a11y::aria;
use lark_markup::{Attribute, Node, attr, bool_attr, node};

fn input<Msg>(
    type_token: &'static str,
    fixed: Vec<Attribute<Msg>>,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    let mut combined = Vec::with_capacity(1 + fixed.len() + attrs.len());
    combined.push(attr("type", type_token));
    combined.extend(fixed);
    combined.extend(attrs);
    node("input", combined, vec![])
}

/// `<input type="text">`
pub fn input_text<Msg>(value: impl Into<String>, attrs: Vec<Attribute<Msg>>) -> Node<Msg> {
    input("text", vec![attr("value", value)], attrs)
}

/// `<input type="number">`
pub fn input_number<Msg>(value: f64, attrs: Vec<Attribute<Msg>>) -> Node<Msg> {
    input("number", vec![attr("value", value.to_string())], attrs)
}

/// `<input type="radio">` with its group name, submitted value, and state
pub fn radio<Msg>(
    name: impl Into<String>,
    value: impl Into<String>,
    checked: bool,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    input(
        "radio",
        vec![
            attr("name", name),
            attr("value", value),
            bool_attr("checked", checked),
        ],
        attrs,
    )
}

/// `<input type="checkbox">` with a tri-state checkedness
///
/// `Some(true)` and `Some(false)` set the native checked attribute; `None`
/// is the indeterminate state, surfaced as `aria-checked="mixed"` with no
/// native checked attribute at all.
pub fn checkbox<Msg>(
    value: impl Into<String>,
    checked: Option<bool>,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    let state = match checked {
        Some(v) => bool_attr("checked", v),
        None => aria::indeterminate(),
    };
    input("checkbox", vec![attr("value", value), state], attrs)
}

/// `<input type="color">`
pub fn input_color<Msg>(value: impl Into<String>, attrs: Vec<Attribute<Msg>>) -> Node<Msg> {
    input("color", vec![attr("value", value)], attrs)
}

/// `<input type="date">`; value formatted as `YYYY-MM-DD` in the given offset
pub fn input_date<Msg>(
    moment: DateTime<Utc>,
    offset: FixedOffset,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    input("date", vec![attr("value", date_value(moment, offset))], attrs)
}

/// `<input type="datetime-local">`; value formatted as `YYYY-MM-DDTHH:MM`
pub fn input_datetime_local<Msg>(
    moment: DateTime<Utc>,
    offset: FixedOffset,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    input(
        "datetime-local",
        vec![attr("value", datetime_local_value(moment, offset))],
        attrs,
    )
}

/// `<input type="email">`
pub fn input_email<Msg>(
    value: impl Into<String>,
    multiple: bool,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    input(
        "email",
        vec![attr("value", value), bool_attr("multiple", multiple)],
        attrs,
    )
}

/// `<input type="file">`
pub fn input_file<Msg>(
    name: impl Into<String>,
    multiple: bool,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    input(
        "file",
        vec![attr("name", name), bool_attr("multiple", multiple)],
        attrs,
    )
}

/// `<input type="hidden">`
pub fn input_hidden<Msg>(
    name: impl Into<String>,
    value: impl Into<String>,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    input("hidden", vec![attr("name", name), attr("value", value)], attrs)
}

/// `<input type="image">`; a graphical submit button, so alt text is required
pub fn input_image<Msg>(
    alt: impl Into<String>,
    src: impl Into<String>,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    input("image", vec![attr("src", src), attr("alt", alt)], attrs)
}

/// `<input type="month">`; value formatted as `YYYY-MM`
pub fn input_month<Msg>(
    moment: DateTime<Utc>,
    offset: FixedOffset,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    input("month", vec![attr("value", month_value(moment, offset))], attrs)
}

/// `<input type="password">`
pub fn input_password<Msg>(value: impl Into<String>, attrs: Vec<Attribute<Msg>>) -> Node<Msg> {
    input("password", vec![attr("value", value)], attrs)
}

/// `<input type="range">`
pub fn input_range<Msg>(value: f64, attrs: Vec<Attribute<Msg>>) -> Node<Msg> {
    input("range", vec![attr("value", value.to_string())], attrs)
}

/// `<input type="search">`
pub fn input_search<Msg>(value: impl Into<String>, attrs: Vec<Attribute<Msg>>) -> Node<Msg> {
    input("search", vec![attr("value", value)], attrs)
}

/// `<input type="tel">`
///
/// Telephone formats vary too much for a useful default, so the caller must
/// supply the validation pattern. The pattern string itself is not checked.
pub fn input_tel<Msg>(
    value: impl Into<String>,
    pattern: impl Into<String>,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    input("tel", vec![attr("value", value), attr("pattern", pattern)], attrs)
}

/// `<input type="time">`; value formatted as `HH:MM`
pub fn input_time<Msg>(
    moment: DateTime<Utc>,
    offset: FixedOffset,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    input("time", vec![attr("value", time_value(moment, offset))], attrs)
}

/// `<input type="url">`
pub fn input_url<Msg>(value: impl Into<String>, attrs: Vec<Attribute<Msg>>) -> Node<Msg> {
    input("url", vec![attr("value", value)], attrs)
}

/// `<input type="week">`; value formatted as `YYYY-W<week>`
///
/// The week number must be supplied by the caller; no ISO week arithmetic is
/// performed.
pub fn input_week<Msg>(
    moment: DateTime<Utc>,
    offset: FixedOffset,
    week: u32,
    attrs: Vec<Attribute<Msg>>,
) -> Node<Msg> {
    input(
        "week",
        vec![attr("value", week_value(moment, offset, week))],
        attrs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lark_markup::NoEvent;

    fn attrs_of(n: &Node<NoEvent>) -> &[Attribute<NoEvent>] {
        &n.as_element().unwrap().attrs
    }

    #[test]
    fn test_type_token_comes_first() {
        let n: Node<NoEvent> = input_text("hi", vec![attr("name", "greeting")]);
        let attrs = attrs_of(&n);
        assert_eq!(attrs[0], attr("type", "text"));
        assert_eq!(attrs[1], attr("value", "hi"));
        assert_eq!(attrs[2], attr("name", "greeting"));
    }

    #[test]
    fn test_caller_attrs_come_last() {
        let n: Node<NoEvent> = input_text("", vec![attr("value", "override")]);
        let attrs = attrs_of(&n);
        assert_eq!(attrs[1], attr("value", ""));
        assert_eq!(attrs[2], attr("value", "override"));
    }

    #[test]
    fn test_checkbox_checked() {
        let n: Node<NoEvent> = checkbox("v", Some(true), vec![]);
        let attrs = attrs_of(&n);
        assert!(attrs.contains(&bool_attr("checked", true)));
        assert!(!n.as_element().unwrap().has_attribute("aria-checked"));
    }

    #[test]
    fn test_checkbox_unchecked() {
        let n: Node<NoEvent> = checkbox("v", Some(false), vec![]);
        assert!(attrs_of(&n).contains(&bool_attr("checked", false)));
    }

    #[test]
    fn test_checkbox_indeterminate() {
        let n: Node<NoEvent> = checkbox("v", None, vec![]);
        let el = n.as_element().unwrap();
        assert_eq!(el.attribute("aria-checked"), Some("mixed"));
        assert!(!el.has_attribute("checked"));
    }

    #[test]
    fn test_radio_fixed_attrs() {
        let n: Node<NoEvent> = radio("flavor", "mint", true, vec![]);
        let el = n.as_element().unwrap();
        assert_eq!(el.attribute("type"), Some("radio"));
        assert_eq!(el.attribute("name"), Some("flavor"));
        assert_eq!(el.attribute("value"), Some("mint"));
        assert!(el.attrs.contains(&bool_attr("checked", true)));
    }

    #[test]
    fn test_date_inputs_at_epoch() {
        let epoch = DateTime::from_timestamp(0, 0).unwrap();
        let utc = FixedOffset::east_opt(0).unwrap();

        let date: Node<NoEvent> = input_date(epoch, utc, vec![]);
        assert_eq!(date.as_element().unwrap().attribute("value"), Some("1970-01-01"));

        let dt: Node<NoEvent> = input_datetime_local(epoch, utc, vec![]);
        assert_eq!(
            dt.as_element().unwrap().attribute("value"),
            Some("1970-01-01T00:00")
        );

        let month: Node<NoEvent> = input_month(epoch, utc, vec![]);
        assert_eq!(month.as_element().unwrap().attribute("value"), Some("1970-01"));

        let week: Node<NoEvent> = input_week(epoch, utc, 2, vec![]);
        assert_eq!(week.as_element().unwrap().attribute("value"), Some("1970-W2"));
    }

    #[test]
    fn test_tel_requires_pattern() {
        let n: Node<NoEvent> = input_tel("5551234", "[0-9]{7}", vec![]);
        assert_eq!(n.as_element().unwrap().attribute("pattern"), Some("[0-9]{7}"));
    }

    #[test]
    fn test_email_multiple_flag() {
        let n: Node<NoEvent> = input_email("a@b.c", true, vec![]);
        assert!(attrs_of(&n).contains(&bool_attr("multiple", true)));
    }
}
