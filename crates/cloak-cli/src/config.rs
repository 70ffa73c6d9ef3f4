//! Key store path resolution.
//!
//! Precedence: `--keystore` flag (or `CLOAK_KEYSTORE` env, handled by clap)
//! over the XDG data directory default.

use std::path::PathBuf;

use crate::cli::Cli;

pub fn resolve_keystore_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.keystore {
        return Ok(PathBuf::from(path));
    }
    default_keystore_path()
}

pub fn default_keystore_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("keys.json"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("cloak"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("cloak"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
