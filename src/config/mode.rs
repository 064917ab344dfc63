//! Deployment mode detection.
//!
//! The site is either built for production (hosted under a subpath, e.g. a
//! GitHub Pages project site) or for anything else (local preview, hosted at
//! the domain root). Only the exact, case-sensitive value `"production"`
//! selects production.

use clap::ValueEnum;
use std::fmt;

/// Environment variable consulted when the manifest does not name another.
pub const DEFAULT_ENV_VAR: &str = "NODE_ENV";

/// The only value recognized as production.
const PRODUCTION: &str = "production";

/// Build context classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DeploymentMode {
    /// Hosted under the deploy base path.
    Production,

    /// Anything else: unset, empty, "development", "Production", ...
    #[default]
    #[value(name = "development", alias = "non-production")]
    NonProduction,
}

impl DeploymentMode {
    /// Classify a raw variable value. `None` means the variable is unset.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(PRODUCTION) => Self::Production,
            _ => Self::NonProduction,
        }
    }

    /// Classify the current value of `var` in the process environment.
    ///
    /// Unset and non-UTF-8 values both classify as non-production.
    pub fn from_env(var: &str) -> Self {
        Self::from_value(std::env::var(var).ok().as_deref())
    }

    #[inline]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Base path for this mode: `segment` in production, empty otherwise.
    pub fn base_path(self, segment: &str) -> String {
        if self.is_production() {
            segment.to_string()
        } else {
            String::new()
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION,
            Self::NonProduction => "development",
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_production_value() {
        assert_eq!(
            DeploymentMode::from_value(Some("production")),
            DeploymentMode::Production
        );
    }

    #[test]
    fn test_everything_else_is_non_production() {
        for value in [
            None,
            Some(""),
            Some("development"),
            Some("Production"),
            Some("PRODUCTION"),
            Some(" production"),
            Some("production "),
            Some("prod"),
        ] {
            assert_eq!(
                DeploymentMode::from_value(value),
                DeploymentMode::NonProduction,
                "value {value:?}"
            );
        }
    }

    #[test]
    fn test_unset_variable_is_non_production() {
        let mode = DeploymentMode::from_env("STOCK_VITEPRESS_TEST_SURELY_UNSET_VAR");
        assert_eq!(mode, DeploymentMode::NonProduction);
    }

    #[test]
    fn test_base_path() {
        assert_eq!(
            DeploymentMode::Production.base_path("/StockVitePress/"),
            "/StockVitePress/"
        );
        assert_eq!(DeploymentMode::NonProduction.base_path("/StockVitePress/"), "");
    }

    #[test]
    fn test_display_and_cli_names() {
        assert_eq!(DeploymentMode::Production.to_string(), "production");
        assert_eq!(DeploymentMode::NonProduction.to_string(), "development");
        assert_eq!(
            DeploymentMode::from_str("development", false).unwrap(),
            DeploymentMode::NonProduction
        );
        assert_eq!(
            DeploymentMode::from_str("non-production", false).unwrap(),
            DeploymentMode::NonProduction
        );
    }
}
