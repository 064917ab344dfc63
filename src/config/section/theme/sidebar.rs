//! `[[theme.sidebar]]` groups: labelled, ordered lists of links.
//!
//! # Example
//!
//! ```toml
//! [[theme.sidebar]]
//! text = "Examples"
//! items = [
//!     { text = "Markdown Examples", link = "/markdown-examples" },
//!     { text = "Runtime API Examples", link = "/api-examples" },
//! ]
//! ```

use super::LinkItem;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// One sidebar group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,

    /// Entries, in display order.
    pub items: Vec<LinkItem>,
}

impl SidebarGroup {
    /// Validate the group at `field` and each of its items.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(field.join("text"), "group label must not be empty");
        }
        if self.items.is_empty() {
            diag.error(field.join("items"), "sidebar group has no items");
        }

        let items = field.join("items");
        for (i, item) in self.items.iter().enumerate() {
            item.validate(&items.index(i), diag);
        }
    }
}

/// Built-in sidebar.
pub fn default_sidebar() -> Vec<SidebarGroup> {
    vec![SidebarGroup {
        text: "Examples".into(),
        items: vec![
            LinkItem::new("Markdown Examples", "/markdown-examples"),
            LinkItem::new("Runtime API Examples", "/api-examples"),
        ],
    }]
}
