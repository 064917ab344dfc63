//! `env` command: report what the environment resolves to.

use super::ModeArgs;
use crate::config::SiteManifest;
use crate::logger::paint;
use anyhow::Result;
use owo_colors::{Stream, Style};
use std::fmt::Write;

/// Print the mode variable, detected mode, base path and data directory.
pub fn run_env(manifest: &SiteManifest, args: &ModeArgs) -> Result<()> {
    let raw = std::env::var(&manifest.deploy.env_var).ok();
    print!("{}", render_env(manifest, args, raw.as_deref()));
    Ok(())
}

/// Format the report. `raw` is the variable's current value, if set.
pub fn render_env(manifest: &SiteManifest, args: &ModeArgs, raw: Option<&str>) -> String {
    let var = &manifest.deploy.env_var;
    let (mode, source) = match args.mode {
        Some(mode) => (mode, "--mode".to_string()),
        None => {
            let mode = crate::config::DeploymentMode::from_value(raw);
            let source = match raw {
                Some(value) => format!("{var}={value:?}"),
                None => format!("{var} (unset)"),
            };
            (mode, source)
        }
    };
    let base = mode.base_path(&manifest.deploy.base);

    let label = |name: &str| paint(Stream::Stdout, format!("{name:<8}"), Style::new().dimmed());
    let mut out = String::new();
    writeln!(out, "{} {}", label("source"), source).ok();
    writeln!(
        out,
        "{} {}",
        label("mode"),
        paint(Stream::Stdout, mode, Style::new().bold())
    )
    .ok();
    writeln!(out, "{} {:?}", label("base"), base).ok();
    writeln!(out, "{} {}", label("data"), manifest.data_dir(mode).display()).ok();
    out
}
