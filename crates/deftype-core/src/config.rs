use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::path::DEFAULT_SELINUX_ROOT;

fn default_selinux_root() -> PathBuf {
    PathBuf::from(DEFAULT_SELINUX_ROOT)
}

/// Global configuration loaded from `~/.config/deftype/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeftypeConfig {
    /// SELinux configuration root holding `config` and one directory per policy.
    #[serde(default = "default_selinux_root")]
    pub selinux_root: PathBuf,
    /// Policy type (e.g. "targeted", "mls"). If missing, `SELINUXTYPE` from
    /// `<selinux_root>/config` is used.
    #[serde(default)]
    pub policy_type: Option<String>,
    /// Explicit `default_type` file; bypasses the policy layout entirely.
    #[serde(default)]
    pub default_type_file: Option<PathBuf>,
}

impl Default for DeftypeConfig {
    fn default() -> Self {
        Self {
            selinux_root: default_selinux_root(),
            policy_type: None,
            default_type_file: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("deftype")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DeftypeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DeftypeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<DeftypeConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DeftypeConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
