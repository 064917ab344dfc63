//! `[theme]` section configuration.
//!
//! Declares the nav bar, the sidebar and the social links. Serialized as the
//! framework's `themeConfig` object.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.sidebar]]
//! text = "Examples"
//! items = [{ text = "Markdown Examples", link = "/markdown-examples" }]
//!
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/vuejs/vitepress"
//! ```

mod nav;
mod sidebar;
mod social;

pub use nav::{LinkItem, default_nav};
pub use sidebar::{SidebarGroup, default_sidebar};
pub use social::{SocialLink, default_social_links};

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Top navigation bar.
    pub nav: Vec<LinkItem>,

    /// Sidebar groups.
    pub sidebar: Vec<SidebarGroup>,

    /// Social icon links.
    #[serde(rename = "socialLinks", alias = "social_links")]
    pub social_links: Vec<SocialLink>,
}

impl Default for ThemeSectionConfig {
    fn default() -> Self {
        Self {
            nav: default_nav(),
            sidebar: default_sidebar(),
            social_links: default_social_links(),
        }
    }
}

impl ThemeSectionConfig {
    const NAV: FieldPath = FieldPath::new("theme.nav");
    const SIDEBAR: FieldPath = FieldPath::new("theme.sidebar");
    const SOCIAL_LINKS: FieldPath = FieldPath::new("theme.social_links");

    /// Validate every nav entry, sidebar group and social link.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, item) in self.nav.iter().enumerate() {
            item.validate(&Self::NAV.index(i), diag);
        }
        for (i, group) in self.sidebar.iter().enumerate() {
            group.validate(&Self::SIDEBAR.index(i), diag);
        }
        for (i, social) in self.social_links.iter().enumerate() {
            social.validate(&Self::SOCIAL_LINKS.index(i), diag);
        }
    }

    /// Every link declared in nav and sidebar, in declaration order.
    pub fn page_links(&self) -> impl Iterator<Item = &LinkItem> {
        self.nav
            .iter()
            .chain(self.sidebar.iter().flat_map(|group| group.items.iter()))
    }
}
