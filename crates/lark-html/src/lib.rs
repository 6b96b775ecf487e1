//! Lark HTML - Accessible element builders
//!
//! Typed constructors for HTML elements and form inputs that nudge callers
//! toward accessible markup: mandatory alt text, required labels, canonical
//! role tokens, and element builders that refuse event listeners unless
//! interaction is actually wanted.
//!
//! Most builders accept only `Attribute<NoEvent>`, so attaching a listener
//! to a non-interactive element is a type error rather than a runtime
//! surprise. `button`, `select`, `textarea`, `tab`, and
//! `form_with_listeners` accept unrestricted attributes.
//!
//! ```
//! use lark_html::{NoEvent, Node, attr, div, img, input_text, label_before, text};
//!
//! let form: Node<NoEvent> = div(
//!     vec![attr("class", "signup")],
//!     vec![
//!         img("Company logo", vec![attr("src", "/logo.png")]),
//!         label_before(
//!             vec![],
//!             text("Email address"),
//!             input_text("", vec![attr("name", "email")]),
//!         ),
//!     ],
//! );
//! assert!(form.to_html().contains("alt=\"Company logo\""));
//! ```

mod datetime;
mod elements;
mod images;
mod inputs;
mod labels;
mod support;
mod tabs;

pub use datetime::{date_value, datetime_local_value, month_value, time_value, week_value};
pub use elements::*;
pub use images::{decorative_img, figure, img};
pub use inputs::*;
pub use labels::{label_after, label_before, label_hidden};
pub use tabs::{tab, tab_list, tab_panel};

// The markup primitive and the role/attribute catalog, re-exported so most
// callers only need this crate.
pub use lark_a11y::{Role, RoleError, aria, custom_role, invisible, role};
pub use lark_markup::{Attribute, Element, NoEvent, Node, attr, bool_attr, node, on, style, text};
