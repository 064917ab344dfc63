//! `[[theme.nav]]` entries: top navigation bar links.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A labelled link, used by the nav bar and by sidebar group items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    /// Label shown to the reader.
    pub text: String,

    /// Site-relative target (`/guide`) or absolute http(s) URL.
    pub link: String,
}

impl LinkItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Validate label and link of the entry at `field`.
    ///
    /// # Checks
    /// - `text` must not be blank
    /// - `link` must start with `/` or be an absolute http(s) URL
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(field.join("text"), "label must not be empty");
        }

        if self.link.starts_with('/') {
            return;
        }
        match url::Url::parse(&self.link) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => diag.error_with_hint(
                field.join("link"),
                format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
                "use a site-relative link like \"/guide\"",
            ),
            Err(_) => diag.error_with_hint(
                field.join("link"),
                format!("'{}' is neither site-relative nor an absolute URL", self.link),
                "site-relative links must start with '/'",
            ),
        }
    }
}

/// Built-in navigation bar.
pub fn default_nav() -> Vec<LinkItem> {
    vec![
        LinkItem::new("Home", "/"),
        LinkItem::new("Examples", "/markdown-examples"),
    ]
}
