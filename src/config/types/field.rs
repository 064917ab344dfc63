//! Config field path used to point diagnostics at a manifest entry.

use crate::logger::paint;
use owo_colors::{Stream, Style};
use std::borrow::Cow;
use std::fmt;

/// A dotted path into `site.toml`, e.g. `theme.nav[1].link`.
///
/// Static section paths are built with [`FieldPath::new`]; list entries are
/// addressed by chaining [`FieldPath::index`] and [`FieldPath::join`].
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::new("theme.sidebar").index(0).join("items").index(2);
/// assert_eq!(path.as_str(), "theme.sidebar[0].items[2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Address the `index`-th entry of the list at this path.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{index}]", self.0)))
    }

    /// Address a child field of this path.
    pub fn join(&self, field: &str) -> Self {
        Self(Cow::Owned(format!("{}.{field}", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(f, "{}", paint(Stream::Stderr, quoted, Style::new().bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_path() {
        assert_eq!(FieldPath::new("site.title").as_str(), "site.title");
    }

    #[test]
    fn test_nested_list_path() {
        let path = FieldPath::new("theme.sidebar").index(0).join("items").index(2);
        assert_eq!(path.as_str(), "theme.sidebar[0].items[2]");
        assert_eq!(path.join("link").as_str(), "theme.sidebar[0].items[2].link");
    }

    #[test]
    fn test_display_without_color() {
        owo_colors::set_override(false);
        assert_eq!(FieldPath::new("deploy.base").to_string(), "`deploy.base`");
    }
}
