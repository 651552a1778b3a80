//! Runtime settings: built-in defaults, then an optional TOML file, then
//! `FNRECORD_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

pub const DEFAULT_STORE_PATH: &str = "functions.db";
pub const DEFAULT_EXPORT_PATH: &str = "function_report.xlsx";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
  pub store_path:  PathBuf,
  pub export_path: PathBuf,
}

impl Settings {
  pub fn load(file: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("store_path", DEFAULT_STORE_PATH)?
      .set_default("export_path", DEFAULT_EXPORT_PATH)?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("FNRECORD"))
      .build()
      .with_context(|| format!("failed to read config file {}", file.display()))?;

    let mut s: Settings = settings
      .try_deserialize()
      .context("failed to deserialise settings")?;
    s.store_path = expand_tilde(&s.store_path);
    s.export_path = expand_tilde(&s.export_path);
    Ok(s)
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
