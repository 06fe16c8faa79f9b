//! Runtime settings, layered from lowest to highest precedence:
//! defaults, `diner.toml` (or `--config`), `DINER__*` environment variables, then flags.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::model::SessionPolicy;

const DEFAULT_CONFIG_FILE: &str = "diner.toml";

/// Command-line flags.
#[derive(Debug, Default, Parser)]
#[command(name = "diner", about = "Terminal ordering kiosk")]
pub struct Args {
    /// Settings file to read instead of ./diner.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// What happens to a session once payment goes through
    #[arg(long, value_enum)]
    pub policy: Option<SessionPolicy>,

    /// TOML menu to serve instead of the house menu
    #[arg(long, value_name = "PATH")]
    pub menu: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub policy: SessionPolicy,
    /// `None` serves the built-in house menu.
    pub menu_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: SessionPolicy::LockAfterPayment,
            menu_path: None,
            log_filter: "warn".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    policy: Option<SessionPolicy>,
    menu_path: Option<PathBuf>,
    log: Option<String>,
}

/// Resolves settings against the process environment.
pub fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    resolve(args, |key| std::env::var(key).ok())
}

/// Resolves settings with `env` standing in for the process environment.
pub fn resolve(args: &Args, env: impl Fn(&str) -> Option<String>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(file) = read_file(args.config.as_deref())? {
        if let Some(v) = file.policy {
            settings.policy = v;
        }
        if let Some(v) = file.menu_path {
            settings.menu_path = Some(v);
        }
        if let Some(v) = file.log {
            settings.log_filter = v;
        }
    }

    if let Some(v) = env("DINER__POLICY") {
        settings.policy = parse_policy(&v).context("invalid DINER__POLICY")?;
    }
    if let Some(v) = env("DINER__MENU_PATH") {
        settings.menu_path = Some(PathBuf::from(v));
    }
    if let Some(v) = env("DINER__LOG") {
        settings.log_filter = v;
    }

    if let Some(v) = args.policy {
        settings.policy = v;
    }
    if let Some(v) = &args.menu {
        settings.menu_path = Some(v.clone());
    }
    if let Some(v) = &args.log {
        settings.log_filter = v.clone();
    }

    Ok(settings)
}

// An explicit path must exist; the default file is optional.
fn read_file(explicit: Option<&Path>) -> anyhow::Result<Option<FileSettings>> {
    let (path, required) = match explicit {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
    };

    let file = toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    Ok(Some(file))
}

fn parse_policy(raw: &str) -> anyhow::Result<SessionPolicy> {
    match SessionPolicy::from_str(raw.trim(), true) {
        Ok(policy) => Ok(policy),
        Err(_) => bail!(
            "unknown policy '{raw}', expected lock-after-payment or reset-after-payment"
        ),
    }
}
