use crate::error::{EcoRankError, Result};
use crate::types::config::EcoConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "ecorank.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".ecorank/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/ecorank/config.toml";

/// Loads the layered config for `root`. An explicit file replaces `<root>/ecorank.toml`
/// and must exist.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<EcoConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<EcoConfig>> {
    let project_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(EcoRankError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => root.join(DEFAULT_CONFIG_FILE),
    };
    if !project_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: EcoConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| EcoRankError::ConfigParse(e.to_string()))?;
    tracing::debug!(path = %project_path.display(), "loaded config");
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| EcoRankError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Overlays `overlay` onto `base`. Tables merge per key, so a local
/// `[scoring.weights]` that sets only `carbon` keeps the other weights from
/// earlier layers. Any other value replaces what was there.
fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::InvalidRowPolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_project_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_rejects_missing_explicit_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config_with_global(dir.path(), Some(&missing), None)
            .expect_err("missing explicit config should fail");
        assert!(matches!(err, EcoRankError::ConfigNotFound(_)));
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[dataset]
path = "global.csv"

[classify]
eco_friendly = 0.70
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[dataset]
path = "products.csv"
on_invalid = "skip"
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".ecorank")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[dataset]
on_invalid = "reject"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(
            cfg.dataset_path(root.path()),
            Some(root.path().join("products.csv"))
        );
        assert_eq!(cfg.invalid_row_policy(), InvalidRowPolicy::Reject);
        assert_eq!(cfg.thresholds().eco_friendly, 0.70);
    }

    #[test]
    fn local_weight_override_keeps_other_project_weights() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[scoring.weights]
recyclability = 0.40
biodegradability = 0.20
carbon = 0.30
lifespan = 0.10
"#,
        )
        .expect("project config should write");
        fs::create_dir_all(root.path().join(".ecorank")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[scoring.weights]
carbon = 0.25
lifespan = 0.15
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None, None)
            .expect("load should succeed")
            .expect("merged config should exist");
        let weights = cfg.weights();

        assert_eq!(weights.recyclability, 0.40);
        assert_eq!(weights.biodegradability, 0.20);
        assert_eq!(weights.carbon, 0.25);
        assert_eq!(weights.lifespan, 0.15);
        cfg.validate().expect("merged weights should still sum to 1.0");
    }

    #[test]
    fn load_config_reports_file_in_parse_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[dataset\npath = 1")
            .expect("broken config should write");

        let err = load_config_with_global(root.path(), None, None)
            .expect_err("broken config should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
