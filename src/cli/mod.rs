//! Command-line interface module.

mod args;
pub mod check;
pub mod env;
pub mod resolve;

pub use args::{Cli, Commands, ModeArgs, OutputFormat, ResolveArgs};

use crate::config::{DeploymentMode, SiteManifest};

/// The `--mode` override if given, otherwise the mode detected from the
/// manifest's environment variable.
pub fn mode_or_detect(manifest: &SiteManifest, args: &ModeArgs) -> DeploymentMode {
    args.mode.unwrap_or_else(|| manifest.detect_mode())
}
