//! ARIA States and Properties
//!
//! Typed constructors for the `aria-*` attributes the builder contracts ask
//! callers to wire themselves: selection and visibility in a tab triad,
//! labelling relationships, the indeterminate checkbox state.

use lark_markup::{Attribute, attr};

/// Live region politeness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Politeness {
    Off,
    Polite,
    Assertive,
}

fn flag<Msg>(name: &str, value: bool) -> Attribute<Msg> {
    attr(name, if value { "true" } else { "false" })
}

/// `aria-selected`
pub fn selected<Msg>(value: bool) -> Attribute<Msg> {
    flag("aria-selected", value)
}

/// `aria-expanded`
pub fn expanded<Msg>(value: bool) -> Attribute<Msg> {
    flag("aria-expanded", value)
}

/// `aria-hidden`
pub fn hidden<Msg>(value: bool) -> Attribute<Msg> {
    flag("aria-hidden", value)
}

/// `aria-disabled`
pub fn disabled<Msg>(value: bool) -> Attribute<Msg> {
    flag("aria-disabled", value)
}

/// `aria-checked`; `None` is the mixed (indeterminate) state
pub fn checked<Msg>(value: Option<bool>) -> Attribute<Msg> {
    match value {
        Some(v) => flag("aria-checked", v),
        None => attr("aria-checked", "mixed"),
    }
}

/// `aria-checked="mixed"`, the indeterminate checkbox state
pub fn indeterminate<Msg>() -> Attribute<Msg> {
    checked(None)
}

/// `aria-label`
pub fn label<Msg>(text: impl Into<String>) -> Attribute<Msg> {
    attr("aria-label", text)
}

/// `aria-controls`, referencing the controlled element's id
pub fn controls<Msg>(id: impl Into<String>) -> Attribute<Msg> {
    attr("aria-controls", id)
}

/// `aria-labelledby`, ids joined with spaces
pub fn labelled_by<Msg>(ids: &[&str]) -> Attribute<Msg> {
    attr("aria-labelledby", ids.join(" "))
}

/// `aria-describedby`, ids joined with spaces
pub fn described_by<Msg>(ids: &[&str]) -> Attribute<Msg> {
    attr("aria-describedby", ids.join(" "))
}

/// `aria-live`
pub fn live<Msg>(politeness: Politeness) -> Attribute<Msg> {
    let value = match politeness {
        Politeness::Off => "off",
        Politeness::Polite => "polite",
        Politeness::Assertive => "assertive",
    };
    attr("aria-live", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lark_markup::NoEvent;

    #[test]
    fn test_boolean_states() {
        assert_eq!(selected::<NoEvent>(true), attr("aria-selected", "true"));
        assert_eq!(hidden::<NoEvent>(false), attr("aria-hidden", "false"));
    }

    #[test]
    fn test_checked_tri_state() {
        assert_eq!(checked::<NoEvent>(Some(true)), attr("aria-checked", "true"));
        assert_eq!(checked::<NoEvent>(Some(false)), attr("aria-checked", "false"));
        assert_eq!(checked::<NoEvent>(None), attr("aria-checked", "mixed"));
        assert_eq!(indeterminate::<NoEvent>(), checked::<NoEvent>(None));
    }

    #[test]
    fn test_id_references() {
        assert_eq!(
            labelled_by::<NoEvent>(&["tab-1", "tab-2"]),
            attr("aria-labelledby", "tab-1 tab-2")
        );
        assert_eq!(controls::<NoEvent>("panel-1"), attr("aria-controls", "panel-1"));
    }

    #[test]
    fn test_live_region() {
        assert_eq!(live::<NoEvent>(Politeness::Polite), attr("aria-live", "polite"));
    }
}
