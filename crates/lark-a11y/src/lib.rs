//! Lark Accessibility
//!
//! Role and attribute catalog for accessible markup.
//!
//! Features:
//! - Closed ARIA role enumeration with canonical tokens
//! - `role` / `custom_role` attribute constructors
//! - `aria-*` state and property constructors
//! - Visually-hidden style bundle

pub mod aria;
mod role;
mod style;

pub use role::{Role, RoleError, custom_role, role};
pub use style::invisible;
