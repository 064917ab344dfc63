//! `[site]` metadata: title and description.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

const DEFAULT_TITLE: &str = "Stock VitePress";
const DEFAULT_DESCRIPTION: &str = "use vitepress display stock info";

/// Site metadata shown in the page title and `<meta name="description">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            description: DEFAULT_DESCRIPTION.into(),
        }
    }
}

impl SiteInfoConfig {
    const TITLE: FieldPath = FieldPath::new("site.title");

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must not be blank
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::TITLE, "site title must not be empty");
        }
    }
}
