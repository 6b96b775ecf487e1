//! Element Attributes
//!
//! Key/value pairs, boolean-valued attributes, inline style declarations,
//! and event listeners. Attributes are composed by list concatenation;
//! order is preserved by the consumer.

/// Message type with no values.
///
/// An `Attribute<NoEvent>` provably carries no listener, so builders that
/// accept only `Attribute<NoEvent>` reject event attachment at compile time:
///
/// ```compile_fail
/// use lark_markup::{Attribute, NoEvent, on};
///
/// // There is no value to put in the listener, so this cannot type-check.
/// let _: Attribute<NoEvent> = on("click", ());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoEvent {}

/// Single attribute carried by an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute<Msg> {
    /// Plain `name="value"` pair
    String { name: String, value: String },
    /// Boolean-valued attribute with an explicit true/false
    Bool { name: String, value: bool },
    /// One inline style declaration
    Style { property: String, value: String },
    /// Event listener producing a message
    On { event: String, msg: Msg },
}

impl<Msg> Attribute<Msg> {
    /// Attribute name, or the event name for listeners
    pub fn name(&self) -> &str {
        match self {
            Self::String { name, .. } | Self::Bool { name, .. } => name,
            Self::Style { property, .. } => property,
            Self::On { event, .. } => event,
        }
    }

    /// Check if this is an event listener
    pub fn is_listener(&self) -> bool {
        matches!(self, Self::On { .. })
    }

    /// Transform the message type of a listener
    pub fn map<T>(self, f: impl Fn(Msg) -> T) -> Attribute<T> {
        match self {
            Self::String { name, value } => Attribute::String { name, value },
            Self::Bool { name, value } => Attribute::Bool { name, value },
            Self::Style { property, value } => Attribute::Style { property, value },
            Self::On { event, msg } => Attribute::On { event, msg: f(msg) },
        }
    }
}

impl Attribute<NoEvent> {
    /// Re-type a listener-free attribute into any message world
    ///
    /// Total because `NoEvent` has no values: the `On` arm can never be
    /// reached.
    pub fn upgrade<Msg>(self) -> Attribute<Msg> {
        self.map(|ev| match ev {})
    }
}

/// Build a plain `name="value"` attribute
pub fn attr<Msg>(name: impl Into<String>, value: impl Into<String>) -> Attribute<Msg> {
    Attribute::String { name: name.into(), value: value.into() }
}

/// Build a boolean-valued attribute
pub fn bool_attr<Msg>(name: impl Into<String>, value: bool) -> Attribute<Msg> {
    Attribute::Bool { name: name.into(), value }
}

/// Build one inline style declaration
pub fn style<Msg>(property: impl Into<String>, value: impl Into<String>) -> Attribute<Msg> {
    Attribute::Style { property: property.into(), value: value.into() }
}

/// Build an event listener attribute
pub fn on<Msg>(event: impl Into<String>, msg: Msg) -> Attribute<Msg> {
    Attribute::On { event: event.into(), msg }
}
