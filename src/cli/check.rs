//! `check` command: validate the manifest and list resolved links.

use crate::config::{DeploymentMode, SiteManifest};
use crate::{debug, log};
use anyhow::Result;

/// Validate the manifest; every problem is reported at once.
pub fn run_check(manifest: &SiteManifest) -> Result<()> {
    manifest.validate()?;

    let prod = manifest.resolve(DeploymentMode::Production);
    for item in prod.theme_config.page_links() {
        debug!("check"; "{} -> {}", item.text, prod.url_for(&item.link));
    }

    let theme = &manifest.theme;
    let sidebar_items: usize = theme.sidebar.iter().map(|g| g.items.len()).sum();
    log!(
        "check";
        "ok: {} nav, {} sidebar groups ({} items), {} social links",
        theme.nav.len(),
        theme.sidebar.len(),
        sidebar_items,
        theme.social_links.len()
    );
    Ok(())
}
