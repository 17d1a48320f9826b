//! Locating and opening the `default_type` file.
//!
//! The file lives under the active policy's contexts directory, e.g.
//! `/etc/selinux/targeted/contexts/default_type`. The policy type comes from
//! the `SELINUXTYPE=` line of `/etc/selinux/config` unless configured.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::config::DeftypeConfig;
use crate::resolver::{find_default_type, DefaultTypeError};

pub const DEFAULT_SELINUX_ROOT: &str = "/etc/selinux";
pub const DEFAULT_POLICY_TYPE: &str = "targeted";

/// Supplies the path of the `default_type` file for the current policy.
pub trait DefaultTypePath {
    fn default_type_path(&self) -> io::Result<PathBuf>;
}

impl DefaultTypePath for Path {
    fn default_type_path(&self) -> io::Result<PathBuf> {
        Ok(self.to_path_buf())
    }
}

impl DefaultTypePath for PathBuf {
    fn default_type_path(&self) -> io::Result<PathBuf> {
        Ok(self.clone())
    }
}

impl DefaultTypePath for DeftypeConfig {
    fn default_type_path(&self) -> io::Result<PathBuf> {
        if let Some(file) = &self.default_type_file {
            return Ok(file.clone());
        }
        let policy_type = match &self.policy_type {
            Some(t) => t.clone(),
            None => read_policy_type(&self.selinux_root.join("config"))?
                .unwrap_or_else(|| DEFAULT_POLICY_TYPE.to_string()),
        };
        Ok(policy_default_type_path(&self.selinux_root, &policy_type))
    }
}

/// `<root>/<policy_type>/contexts/default_type`.
pub fn policy_default_type_path(root: &Path, policy_type: &str) -> PathBuf {
    root.join(policy_type).join("contexts").join("default_type")
}

/// Read `SELINUXTYPE` from an SELinux config file. A missing file is `None`.
pub fn read_policy_type(config_file: &Path) -> io::Result<Option<String>> {
    let data = match fs::read_to_string(config_file) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    Ok(parse_policy_type(&data))
}

fn parse_policy_type(data: &str) -> Option<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with(';'))
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == "SELINUXTYPE")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Open the provider's `default_type` file and resolve `role` in it.
///
/// The file is closed before returning, whatever the outcome.
pub fn get_default_type<P>(provider: &P, role: &str) -> Result<String, DefaultTypeError>
where
    P: DefaultTypePath + ?Sized,
{
    let path = provider
        .default_type_path()
        .map_err(DefaultTypeError::Path)?;
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(source) => {
            tracing::debug!(path = %path.display(), "cannot open default_type file: {}", source);
            return Err(DefaultTypeError::Open { path, source });
        }
    };
    tracing::debug!(path = %path.display(), role, "resolving default type");
    find_default_type(BufReader::new(file), role)
}
