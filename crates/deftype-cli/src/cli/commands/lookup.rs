//! `deftype lookup <role>` – print the default type for a role.

use anyhow::{Context, Result};
use deftype_core::config::DeftypeConfig;
use deftype_core::{get_default_type, DefaultTypeError, ErrorKind};
use std::path::Path;

/// Resolve `role` from `file` if given, else from the configured policy.
pub fn lookup_type(cfg: &DeftypeConfig, role: &str, file: Option<&Path>) -> Result<String> {
    let result = match file {
        Some(path) => get_default_type(path, role),
        None => get_default_type(cfg, role),
    };
    result.map_err(|err| {
        let hint = match (&err, err.kind()) {
            (DefaultTypeError::EmptyRole, _) => "role argument is empty",
            (_, ErrorKind::OpenFailure) => "default_type file missing or unreadable",
            (_, ErrorKind::NotFound) => "role has no usable default_type entry",
            (_, ErrorKind::AllocationFailure) => "out of memory",
        };
        anyhow::Error::new(err).context(hint)
    })
}

pub fn run_lookup(cfg: &DeftypeConfig, role: &str, file: Option<&Path>) -> Result<()> {
    let ty = lookup_type(cfg, role, file).with_context(|| format!("lookup {role}"))?;
    tracing::info!(role, default_type = %ty, "resolved default type");
    println!("{ty}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lookup_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("default_type");
        fs::write(&file, "staff_r:staff_t\nuser_r:user_t\n").unwrap();

        let cfg = DeftypeConfig::default();
        assert_eq!(lookup_type(&cfg, "user_r", Some(file.as_path())).unwrap(), "user_t");
    }

    #[test]
    fn lookup_from_configured_policy() {
        let root = tempfile::tempdir().unwrap();
        let contexts = root.path().join("mls").join("contexts");
        fs::create_dir_all(&contexts).unwrap();
        fs::write(contexts.join("default_type"), "sysadm_r:sysadm_t\n").unwrap();

        let cfg = DeftypeConfig {
            selinux_root: root.path().to_path_buf(),
            policy_type: Some("mls".to_string()),
            default_type_file: None,
        };
        assert_eq!(lookup_type(&cfg, "sysadm_r", None).unwrap(), "sysadm_t");
    }

    #[test]
    fn missing_file_and_missing_role_read_differently() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = DeftypeConfig::default();

        let missing = dir.path().join("nope");
        let err = lookup_type(&cfg, "user_r", Some(missing.as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("missing or unreadable"));

        let file = dir.path().join("default_type");
        fs::write(&file, "staff_r:staff_t\n").unwrap();
        let err = lookup_type(&cfg, "user_r", Some(file.as_path())).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("no usable default_type entry"));
        assert!(msg.contains("user_r"));
    }

    #[test]
    fn empty_role_has_its_own_hint() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("default_type");
        fs::write(&file, ":orphan_t\n").unwrap();

        let cfg = DeftypeConfig::default();
        let err = lookup_type(&cfg, "", Some(file.as_path())).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("role argument is empty"));
        assert!(!msg.contains("no usable default_type entry"));
    }
}
