//! Lark Markup - Element construction primitive
//!
//! Immutable markup tree: tag, ordered attributes, ordered children.
//! Trees are built once per call and handed to whatever consumes them;
//! nothing here mutates after construction.
//!
//! Features:
//! - `Node<Msg>` / `Element<Msg>` / `Attribute<Msg>` value types
//! - Uninhabited `NoEvent` message type for listener-free attributes
//! - `map` for re-typing the message carried by a subtree
//! - HTML string serialization with escaping

mod attribute;
mod node;
mod render;

pub use attribute::{Attribute, NoEvent, attr, bool_attr, on, style};
pub use node::{Element, Node, node, text};
