//! `resolve` command: emit the framework config record.

use super::{ModeArgs, OutputFormat, ResolveArgs};
use crate::config::{self, SiteConfig, SiteManifest};
use crate::{debug, log};
use anyhow::{Context, Result};
use std::{fs, io::Write};

/// Resolve and write the record to stdout or `--output`.
///
/// `manifest` is `None` when no `site.toml` was found.
pub fn run_resolve(manifest: Option<&SiteManifest>, args: &ResolveArgs) -> Result<()> {
    let config = resolve_record(manifest, &args.mode)?;

    let rendered = render(&config, args.format)?;
    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("resolve"; "config written to {} (base {:?})", path.display(), config.base);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Build the record from a loaded manifest, or from the built-in site.
///
/// A loaded manifest is validated first; the built-in one is always valid.
pub fn resolve_record(manifest: Option<&SiteManifest>, args: &ModeArgs) -> Result<SiteConfig> {
    let config = match (manifest, args.mode) {
        (None, Some(mode)) => config::resolve(mode),
        (None, None) => config::resolve_from_env(),
        (Some(manifest), _) => {
            manifest.validate()?;
            manifest.resolve(super::mode_or_detect(manifest, args))
        }
    };
    debug!("resolve"; "base {:?}", config.base);
    Ok(config)
}

/// Serialize the record. Output always ends with a newline.
pub fn render(config: &SiteConfig, format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Toml => toml::to_string_pretty(config)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeploymentMode, resolve};

    #[test]
    fn test_render_json_roundtrips_record() {
        let config = resolve(DeploymentMode::Production);
        let json = render(&config, OutputFormat::Json).unwrap();

        assert!(json.ends_with('\n'));
        assert!(json.contains("\"themeConfig\""));
        assert!(json.contains("\"socialLinks\""));
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_render_toml_keeps_empty_base() {
        let config = resolve(DeploymentMode::NonProduction);
        let out = render(&config, OutputFormat::Toml).unwrap();

        assert!(out.contains("base = \"\""));
        assert!(out.contains("[themeConfig]") || out.contains("[[themeConfig.nav]]"));
        let parsed: SiteConfig = toml::from_str(&out).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_run_resolve_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs/.vitepress/site.json");
        let args = ResolveArgs {
            mode: ModeArgs {
                mode: Some(DeploymentMode::Production),
            },
            format: OutputFormat::Json,
            output: Some(path.clone()),
        };

        run_resolve(None, &args).unwrap();

        let written: SiteConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.base, "/StockVitePress/");
    }

    #[test]
    fn test_run_resolve_rejects_invalid_manifest() {
        let mut manifest = SiteManifest::default();
        manifest.deploy.base = "no-slashes".into();
        let args = ResolveArgs {
            mode: ModeArgs::default(),
            format: OutputFormat::Json,
            output: None,
        };
        assert!(run_resolve(Some(&manifest), &args).is_err());
    }

    #[test]
    fn test_builtin_site_follows_mode_override() {
        let prod = ModeArgs {
            mode: Some(DeploymentMode::Production),
        };
        let dev = ModeArgs {
            mode: Some(DeploymentMode::NonProduction),
        };
        assert_eq!(resolve_record(None, &prod).unwrap().base, "/StockVitePress/");
        assert_eq!(resolve_record(None, &dev).unwrap().base, "");
        assert_eq!(
            resolve_record(None, &prod).unwrap(),
            resolve(DeploymentMode::Production)
        );
    }

    #[test]
    fn test_builtin_site_without_override_reads_environment() {
        let expected = config::resolve_from_env();
        assert_eq!(resolve_record(None, &ModeArgs::default()).unwrap(), expected);
    }

    #[test]
    fn test_loaded_manifest_is_resolved() {
        let mut manifest = SiteManifest::default();
        manifest.deploy.base = "/watch/".into();
        let args = ModeArgs {
            mode: Some(DeploymentMode::Production),
        };
        assert_eq!(resolve_record(Some(&manifest), &args).unwrap().base, "/watch/");
    }
}
