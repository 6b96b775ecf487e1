//! ARIA Roles
//!
//! Closed role enumeration and its canonical lowercase tokens.

use lark_markup::{Attribute, attr};

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    // Live region / widget roles
    Alert,
    AlertDialog,
    Button,
    Checkbox,
    ComboBox,
    Dialog,
    Grid,
    GridCell,
    Link,
    ListBox,
    Log,
    Marquee,
    Menu,
    MenuBar,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Option,
    ProgressBar,
    Radio,
    RadioGroup,
    ScrollBar,
    Separator,
    Slider,
    SpinButton,
    Status,
    Tab,
    TabList,
    TabPanel,
    TextBox,
    Timer,
    ToolTip,
    Tree,
    TreeGrid,
    TreeItem,

    // Landmark roles
    Application,
    Banner,
    Complementary,
    ContentInfo,
    Main,
    Navigation,
    Region,
    Search,

    // Document structure
    Article,
    ColumnHeader,
    Definition,
    Directory,
    Document,
    Group,
    Heading,
    Img,
    List,
    ListItem,
    Math,
    Note,
    Presentation,
    Row,
    RowGroup,
    RowHeader,
    Toolbar,
}

/// Role parsing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleError {
    #[error("Unknown ARIA role: {0}")]
    Unknown(String),
}

impl Role {
    /// Every role variant, for exhaustive iteration
    pub const ALL: [Role; 60] = [
        Role::Alert,
        Role::AlertDialog,
        Role::Button,
        Role::Checkbox,
        Role::ComboBox,
        Role::Dialog,
        Role::Grid,
        Role::GridCell,
        Role::Link,
        Role::ListBox,
        Role::Log,
        Role::Marquee,
        Role::Menu,
        Role::MenuBar,
        Role::MenuItem,
        Role::MenuItemCheckbox,
        Role::MenuItemRadio,
        Role::Option,
        Role::ProgressBar,
        Role::Radio,
        Role::RadioGroup,
        Role::ScrollBar,
        Role::Separator,
        Role::Slider,
        Role::SpinButton,
        Role::Status,
        Role::Tab,
        Role::TabList,
        Role::TabPanel,
        Role::TextBox,
        Role::Timer,
        Role::ToolTip,
        Role::Tree,
        Role::TreeGrid,
        Role::TreeItem,
        Role::Application,
        Role::Banner,
        Role::Complementary,
        Role::ContentInfo,
        Role::Main,
        Role::Navigation,
        Role::Region,
        Role::Search,
        Role::Article,
        Role::ColumnHeader,
        Role::Definition,
        Role::Directory,
        Role::Document,
        Role::Group,
        Role::Heading,
        Role::Img,
        Role::List,
        Role::ListItem,
        Role::Math,
        Role::Note,
        Role::Presentation,
        Role::Row,
        Role::RowGroup,
        Role::RowHeader,
        Role::Toolbar,
    ];

    /// Canonical lowercase token
    pub fn token(self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::AlertDialog => "alertdialog",
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::ComboBox => "combobox",
            Self::Dialog => "dialog",
            Self::Grid => "grid",
            Self::GridCell => "gridcell",
            Self::Link => "link",
            Self::ListBox => "listbox",
            Self::Log => "log",
            Self::Marquee => "marquee",
            Self::Menu => "menu",
            Self::MenuBar => "menubar",
            Self::MenuItem => "menuitem",
            Self::MenuItemCheckbox => "menuitemcheckbox",
            Self::MenuItemRadio => "menuitemradio",
            Self::Option => "option",
            Self::ProgressBar => "progressbar",
            Self::Radio => "radio",
            Self::RadioGroup => "radiogroup",
            Self::ScrollBar => "scrollbar",
            Self::Separator => "separator",
            Self::Slider => "slider",
            Self::SpinButton => "spinbutton",
            Self::Status => "status",
            Self::Tab => "tab",
            Self::TabList => "tablist",
            Self::TabPanel => "tabpanel",
            Self::TextBox => "textbox",
            Self::Timer => "timer",
            Self::ToolTip => "tooltip",
            Self::Tree => "tree",
            Self::TreeGrid => "treegrid",
            Self::TreeItem => "treeitem",
            Self::Application => "application",
            Self::Banner => "banner",
            Self::Complementary => "complementary",
            Self::ContentInfo => "contentinfo",
            Self::Main => "main",
            Self::Navigation => "navigation",
            Self::Region => "region",
            Self::Search => "search",
            Self::Article => "article",
            Self::ColumnHeader => "columnheader",
            Self::Definition => "definition",
            Self::Directory => "directory",
            Self::Document => "document",
            Self::Group => "group",
            Self::Heading => "heading",
            Self::Img => "img",
            Self::List => "list",
            Self::ListItem => "listitem",
            Self::Math => "math",
            Self::Note => "note",
            Self::Presentation => "presentation",
            Self::Row => "row",
            Self::RowGroup => "rowgroup",
            Self::RowHeader => "rowheader",
            Self::Toolbar => "toolbar",
        }
    }

    /// Parse from a token, case-insensitive
    ///
    /// Accepts `"none"` as a synonym for the presentation role.
    pub fn parse(s: &str) -> Result<Self, RoleError> {
        let lowered = s.to_lowercase();
        if lowered == "none" {
            return Ok(Self::Presentation);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.token() == lowered)
            .ok_or_else(|| RoleError::Unknown(s.to_string()))
    }

    /// Check if role is a landmark
    pub fn is_landmark(self) -> bool {
        matches!(
            self,
            Self::Application
                | Self::Banner
                | Self::Complementary
                | Self::ContentInfo
                | Self::Main
                | Self::Navigation
                | Self::Region
                | Self::Search
        )
    }
}

/// Build a `role="<token>"` attribute from the closed enumeration
pub fn role<Msg>(role: Role) -> Attribute<Msg> {
    attr("role", role.token())
}

/// Build a `role` attribute from an arbitrary token
///
/// No validation is performed; an unrecognized token is rendered as-is.
pub fn custom_role<Msg>(token: impl Into<String>) -> Attribute<Msg> {
    let token = token.into();
    if Role::parse(&token).is_err() {
        tracing::debug!(role = %token, "custom role is not a recognized ARIA token");
    }
    attr("role", token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lark_markup::NoEvent;
    use std::collections::HashSet;

    #[test]
    fn test_tokens_are_lowercase() {
        for role in Role::ALL {
            let token = role.token();
            assert_eq!(token, token.to_lowercase(), "{role:?}");
        }
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: HashSet<&str> = Role::ALL.iter().map(|r| r.token()).collect();
        assert_eq!(tokens.len(), Role::ALL.len());
    }

    #[test]
    fn test_parse_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.token()), Ok(role));
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Role::parse("TabList"), Ok(Role::TabList));
        assert_eq!(Role::parse("TREEITEM"), Ok(Role::TreeItem));
    }

    #[test]
    fn test_parse_none_synonym() {
        assert_eq!(Role::parse("none"), Ok(Role::Presentation));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Role::parse("tabs"),
            Err(RoleError::Unknown("tabs".to_string()))
        );
    }

    #[test]
    fn test_role_attribute() {
        let attr: lark_markup::Attribute<NoEvent> = role(Role::TabList);
        assert_eq!(attr, lark_markup::attr("role", "tablist"));
    }

    #[test]
    fn test_custom_role_is_unchecked() {
        let attr: lark_markup::Attribute<NoEvent> = custom_role("doc-glossary");
        assert_eq!(attr, lark_markup::attr("role", "doc-glossary"));
    }

    #[test]
    fn test_landmark_classification() {
        assert!(Role::Navigation.is_landmark());
        assert!(!Role::Tab.is_landmark());
    }
}
