//! `[[theme.social_links]]` entries: icon links in the nav bar.
//!
//! # Example
//!
//! ```toml
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/vuejs/vitepress"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform identifiers the framework ships icons for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
}

impl SocialIcon {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Npm => "npm",
            Self::Slack => "slack",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A social platform link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

impl SocialLink {
    /// Validate the entry at `field`.
    ///
    /// # Checks
    /// - `link` must be an absolute http(s) URL with a host
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        let field = field.join("link");
        match url::Url::parse(&self.link) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        field.clone(),
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://github.com/user/repo",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        field,
                        "URL must have a valid host",
                        "use format like https://github.com/user/repo",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field,
                    format!("invalid {} URL: {}", self.icon, e),
                    "use format like https://github.com/user/repo",
                );
            }
        }
    }
}

/// Built-in social links.
pub fn default_social_links() -> Vec<SocialLink> {
    vec![SocialLink {
        icon: SocialIcon::Github,
        link: "https://github.com/vuejs/vitepress".into(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(link: &str) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        let social = SocialLink {
            icon: SocialIcon::Github,
            link: link.into(),
        };
        social.validate(&FieldPath::new("theme.social_links").index(0), &mut diag);
        diag
    }

    #[test]
    fn test_https_link_is_valid() {
        assert!(check("https://github.com/user/repo").is_empty());
    }

    #[test]
    fn test_site_relative_link_is_rejected() {
        let diag = check("/about");
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.social_links[0].link");
    }

    #[test]
    fn test_ftp_scheme_is_rejected() {
        let diag = check("ftp://example.com/file");
        assert!(diag.errors()[0].message.contains("ftp"));
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(SocialIcon::Github.to_string(), "github");
        assert_eq!(SocialIcon::X.as_str(), "x");
    }
}
