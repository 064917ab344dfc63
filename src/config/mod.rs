//! Site configuration for the Stock VitePress docs site.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Manifest section definitions
//! │   ├── deploy     # [deploy]
//! │   ├── site       # [site]
//! │   └── theme      # [theme] nav, sidebar, social links
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── mode.rs        # DeploymentMode
//! └── mod.rs         # SiteManifest, SiteConfig (this file)
//! ```
//!
//! # Resolution
//!
//! A [`SiteManifest`] holds the static declarations. Every field has a
//! built-in default, so an absent `site.toml` yields the stock site.
//! [`SiteManifest::resolve`] turns it into the [`SiteConfig`] record handed
//! to the framework. Resolution is a pure function of the manifest and the
//! [`DeploymentMode`]; only [`resolve_from_env`] touches the environment.

mod mode;
pub mod section;
pub mod types;
mod util;

pub use mode::{DEFAULT_ENV_VAR, DeploymentMode};
pub use section::{DeployConfig, SiteInfoConfig, ThemeSectionConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, join_base};

use crate::{debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::Path,
};

/// Manifest file searched for when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "site.toml";

// ============================================================================
// resolved record
// ============================================================================

/// The configuration record consumed by the site framework.
///
/// Serializes as
/// `{ base, title, description, themeConfig: { nav, sidebar, socialLinks } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Link prefix: the deploy base in production, empty otherwise.
    pub base: String,
    pub title: String,
    pub description: String,
    pub theme_config: ThemeSectionConfig,
}

impl SiteConfig {
    /// Prefix a site-relative link with this config's base path.
    pub fn url_for(&self, link: &str) -> String {
        join_base(&self.base, link)
    }
}

/// Resolve the built-in site for `mode`.
pub fn resolve(mode: DeploymentMode) -> SiteConfig {
    SiteManifest::default().resolve(mode)
}

/// Resolve the built-in site for the mode found in `NODE_ENV`.
pub fn resolve_from_env() -> SiteConfig {
    let manifest = SiteManifest::default();
    manifest.resolve(manifest.deploy.detect_mode())
}

// ============================================================================
// manifest
// ============================================================================

/// Root manifest structure representing `site.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteManifest {
    /// Title and description
    pub site: SiteInfoConfig,

    /// Nav bar, sidebar and social links
    pub theme: ThemeSectionConfig,

    /// Mode detection, base path and data dirs
    pub deploy: DeployConfig,
}

impl SiteManifest {
    /// Build the framework record for `mode`. Never fails.
    pub fn resolve(&self, mode: DeploymentMode) -> SiteConfig {
        SiteConfig {
            base: mode.base_path(&self.deploy.base),
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            theme_config: self.theme.clone(),
        }
    }

    /// Detect the deployment mode from the environment variable this
    /// manifest names.
    pub fn detect_mode(&self) -> DeploymentMode {
        self.deploy.detect_mode()
    }

    /// Where generated data files are written in `mode`.
    pub fn data_dir(&self, mode: DeploymentMode) -> &Path {
        self.deploy.data_dir(mode)
    }

    /// Load the manifest.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_NAME`] is
    /// searched upward from cwd; `None` means none was found and the
    /// built-in site applies.
    pub fn load(path: Option<&Path>) -> Result<Option<Self>> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match find_config_file(Path::new(DEFAULT_CONFIG_NAME)) {
                Some(found) => found,
                None => {
                    debug!("config"; "no {} found, using built-in site", DEFAULT_CONFIG_NAME);
                    return Ok(None);
                }
            },
        };

        debug!("config"; "loading {}", path.display());
        Self::from_path(&path).map(Some)
    }

    /// Load manifest from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (manifest, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(manifest)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let manifest = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((manifest, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "{}", unknown_fields_message(&display_path, fields));
    }

    /// Validate every section.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.deploy.validate(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

/// One warning line listing every ignored manifest field.
fn unknown_fields_message(file: &str, fields: &[String]) -> String {
    format!("unknown fields in {}, ignoring: {}", file, fields.join(", "))
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a manifest, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_manifest(content: &str) -> SiteManifest {
    let (parsed, ignored) = SiteManifest::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test manifest has unknown fields: {:?}",
        ignored
    );
    parsed
}
