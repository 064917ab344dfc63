//! `[deploy]` section configuration.
//!
//! Controls how the deployment mode is detected and what it changes: the
//! base path links are served under, and where generated data files go.
//!
//! # Example
//!
//! ```toml
//! [deploy]
//! env_var = "NODE_ENV"                             # Variable holding the mode
//! base = "/StockVitePress/"                        # Base path in production
//! public_dir = "public"                            # Data dir otherwise
//! production_public_dir = "docs/.vitepress/public" # Data dir in production
//! ```

use crate::config::{ConfigDiagnostics, DEFAULT_ENV_VAR, DeploymentMode, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base path of the GitHub Pages project site.
const DEFAULT_BASE: &str = "/StockVitePress/";

/// Deploy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Environment variable compared against `"production"`.
    pub env_var: String,

    /// Base path used in production. Empty in every other mode.
    pub base: String,

    /// Data output directory outside production.
    pub public_dir: PathBuf,

    /// Data output directory in production.
    pub production_public_dir: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_ENV_VAR.into(),
            base: DEFAULT_BASE.into(),
            public_dir: PathBuf::from("public"),
            production_public_dir: PathBuf::from("docs/.vitepress/public"),
        }
    }
}

impl DeployConfig {
    const ENV_VAR: FieldPath = FieldPath::new("deploy.env_var");
    const BASE: FieldPath = FieldPath::new("deploy.base");

    /// Detect the deployment mode from the process environment.
    pub fn detect_mode(&self) -> DeploymentMode {
        DeploymentMode::from_env(&self.env_var)
    }

    /// Data output directory for `mode`.
    pub fn data_dir(&self, mode: DeploymentMode) -> &Path {
        if mode.is_production() {
            &self.production_public_dir
        } else {
            &self.public_dir
        }
    }

    /// Validate deploy configuration.
    ///
    /// # Checks
    /// - `env_var` must not be empty
    /// - `base` must start and end with `/` and name a subpath
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.env_var.trim().is_empty() {
            diag.error(Self::ENV_VAR, "environment variable name must not be empty");
        }

        let base = &self.base;
        if base == "/" || base.is_empty() {
            diag.error_with_hint(
                Self::BASE,
                "production base must name a subpath",
                format!("use format like \"{DEFAULT_BASE}\""),
            );
        } else if !base.starts_with('/') || !base.ends_with('/') {
            diag.error_with_hint(
                Self::BASE,
                format!("'{base}' must start and end with '/'"),
                format!("use format like \"{DEFAULT_BASE}\""),
            );
        }
    }
}
