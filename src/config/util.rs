//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Prefix a site-relative `link` with `base`.
///
/// The separator between the two is never doubled. Absolute URLs (with a
/// scheme) and protocol-relative links (`//host/path`) are returned unchanged.
///
/// # Examples
/// ```ignore
/// join_base("", "/guide")                  -> "/guide"
/// join_base("/StockVitePress/", "/guide")  -> "/StockVitePress/guide"
/// join_base("/StockVitePress/", "/")       -> "/StockVitePress/"
/// join_base("/StockVitePress/", "https://github.com") -> "https://github.com"
/// join_base("/StockVitePress/", "//cdn.example.com/x") -> "//cdn.example.com/x"
/// ```
pub fn join_base(base: &str, link: &str) -> String {
    if base.is_empty() || link.starts_with("//") || url::Url::parse(link).is_ok() {
        return link.to_string();
    }
    let link = link.strip_prefix('/').unwrap_or(link);
    format!("{}/{}", base.trim_end_matches('/'), link)
}

/// Find config file by searching upward from current directory
///
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/   ← cwd
/// /home/user/site/site.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Search upward from `start` for `config_name`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_join_base_empty_base() {
        assert_eq!(join_base("", "/"), "/");
        assert_eq!(join_base("", "/markdown-examples"), "/markdown-examples");
    }

    #[test]
    fn test_join_base_subpath() {
        assert_eq!(join_base("/StockVitePress/", "/"), "/StockVitePress/");
        assert_eq!(
            join_base("/StockVitePress/", "/markdown-examples"),
            "/StockVitePress/markdown-examples"
        );
        assert_eq!(
            join_base("/StockVitePress/", "api-examples"),
            "/StockVitePress/api-examples"
        );
    }

    #[test]
    fn test_join_base_absolute_url_untouched() {
        assert_eq!(
            join_base("/StockVitePress/", "https://github.com/vuejs/vitepress"),
            "https://github.com/vuejs/vitepress"
        );
    }

    #[test]
    fn test_join_base_protocol_relative_untouched() {
        assert_eq!(
            join_base("/StockVitePress/", "//cdn.example.com/x"),
            "//cdn.example.com/x"
        );
        assert_eq!(join_base("", "//cdn.example.com/x"), "//cdn.example.com/x");
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guide");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("site.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("site.toml")).unwrap();
        assert_eq!(found, dir.path().join("site.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let name = Path::new("stock-vitepress-surely-missing.toml");
        assert_eq!(find_config_file_from(dir.path(), name), None);
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file_from(dir.path(), &path), None);
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(dir.path(), &path), Some(path));
    }
}
