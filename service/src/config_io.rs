use std::path::{Path, PathBuf};

use vault_writer_core::config::VaultConfig;
use vault_writer_core::path::canonicalize_lenient;

const MAX_CONFIG_BYTES: usize = 4 * 1024 * 1024;

pub const CONFIG_PATH_ENV: &str = "VAULT_WRITER_CONFIG_PATH";
pub const LEGACY_CONFIG_PATH_ENV: &str = "KG_TOOLS_CONFIG_PATH";
pub const VAULT_PATH_ENV: &str = "VAULT_WRITER_VAULT_PATH";
pub const LEGACY_VAULT_PATH_ENV: &str = "KG_TOOLS_VAULT_PATH";

const DEFAULT_CONFIG_FILE: &str = "config.yaml";
const DEFAULT_VAULT_DIR: &str = "vault";

/// Inputs for locating the vault, from the command line.
#[derive(Debug, Clone)]
pub struct VaultSources {
    /// `--vault`; beats every other source.
    pub vault_override: Option<PathBuf>,
    /// `--config`; must exist when given.
    pub config_path: Option<PathBuf>,
    /// Anchor for relative vault paths and for the default config file.
    pub project_root: PathBuf,
}

pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<VaultConfig> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    if bytes.len() > MAX_CONFIG_BYTES {
        anyhow::bail!(
            "config file is too large ({} bytes; max {} bytes)",
            bytes.len(),
            MAX_CONFIG_BYTES
        );
    }
    let raw = String::from_utf8(bytes)?;
    if raw.trim().is_empty() {
        return Ok(VaultConfig::default());
    }
    let ext = path.extension().and_then(|s| s.to_str());
    let config: VaultConfig = match ext {
        Some("yaml") | Some("yml") | None => serde_yaml::from_str(&raw)?,
        Some("toml") => toml::from_str(&raw)?,
        Some("json") => serde_json::from_str(&raw)?,
        Some(other) => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(config)
}

/// Resolves the vault directory from, in order: `--vault`, the config file's `vault_path`,
/// `VAULT_WRITER_VAULT_PATH` (or the legacy name), then `<project_root>/vault`.
pub fn resolve_vault_path(
    sources: &VaultSources,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<PathBuf> {
    let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());
    let project_root = std::path::absolute(&sources.project_root)?;

    let from_file = match locate_config(sources, &env)? {
        Some(config_path) => {
            tracing::debug!(config = %config_path.display(), "loading vault config");
            load_config(&config_path)
                .map_err(|err| anyhow::anyhow!("{}: {err}", config_path.display()))?
                .vault_path
        }
        None => None,
    };

    let vault_path = sources
        .vault_override
        .clone()
        .or(from_file)
        .or_else(|| {
            env(VAULT_PATH_ENV)
                .or_else(|| env(LEGACY_VAULT_PATH_ENV))
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| project_root.join(DEFAULT_VAULT_DIR));

    let vault_path = expand_home(&vault_path);
    let vault_path = if vault_path.is_absolute() {
        vault_path
    } else {
        project_root.join(vault_path)
    };
    Ok(canonicalize_lenient(&vault_path)?)
}

pub fn resolve_vault_path_from_env(sources: &VaultSources) -> anyhow::Result<PathBuf> {
    resolve_vault_path(sources, |key| std::env::var(key).ok())
}

fn locate_config(
    sources: &VaultSources,
    env: &impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Option<PathBuf>> {
    if let Some(explicit) = &sources.config_path {
        let explicit = expand_home(explicit);
        if !explicit.is_file() {
            anyhow::bail!("config file not found: {}", explicit.display());
        }
        return Ok(Some(explicit));
    }

    if let Some(from_env) = env(CONFIG_PATH_ENV).or_else(|| env(LEGACY_CONFIG_PATH_ENV)) {
        let from_env = std::path::absolute(expand_home(Path::new(&from_env)))?;
        if from_env.is_file() {
            return Ok(Some(from_env));
        }
        tracing::warn!(
            config = %from_env.display(),
            "config file named by environment does not exist; ignoring"
        );
        return Ok(None);
    }

    let default = std::path::absolute(&sources.project_root)?.join(DEFAULT_CONFIG_FILE);
    Ok(default.is_file().then_some(default))
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn sources(project_root: &Path) -> VaultSources {
        VaultSources {
            vault_override: None,
            config_path: None,
            project_root: project_root.to_path_buf(),
        }
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn canonical(path: &Path) -> PathBuf {
        canonicalize_lenient(&std::path::absolute(path).unwrap()).unwrap()
    }

    #[test]
    fn defaults_to_vault_under_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_vault_path(&sources(dir.path()), env_from(&[])).unwrap();
        assert_eq!(resolved, canonical(&dir.path().join("vault")));
    }

    #[test]
    fn env_vault_path_beats_default() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_vault_path(
            &sources(dir.path()),
            env_from(&[(LEGACY_VAULT_PATH_ENV, "legacy")]),
        )
        .unwrap();
        assert_eq!(resolved, canonical(&dir.path().join("legacy")));

        let resolved = resolve_vault_path(
            &sources(dir.path()),
            env_from(&[(VAULT_PATH_ENV, "new"), (LEGACY_VAULT_PATH_ENV, "legacy")]),
        )
        .unwrap();
        assert_eq!(resolved, canonical(&dir.path().join("new")));
    }

    #[test]
    fn config_file_beats_env_vault_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "vault_path: docs/vault\n").unwrap();

        let resolved = resolve_vault_path(
            &sources(dir.path()),
            env_from(&[(VAULT_PATH_ENV, "from-env")]),
        )
        .unwrap();
        assert_eq!(resolved, canonical(&dir.path().join("docs").join("vault")));
    }

    #[test]
    fn override_beats_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "vault_path: docs/vault\n").unwrap();
        let explicit = dir.path().join("explicit");

        let mut sources = sources(dir.path());
        sources.vault_override = Some(explicit.clone());
        let resolved = resolve_vault_path(&sources, env_from(&[])).unwrap();
        assert_eq!(resolved, canonical(&explicit));
    }

    #[test]
    fn config_path_from_env_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("custom.toml");
        std::fs::write(&config, "vault_path = \"/srv/vault\"\n").unwrap();

        let resolved = resolve_vault_path(
            &sources(dir.path()),
            env_from(&[(CONFIG_PATH_ENV, config.to_str().unwrap())]),
        )
        .unwrap();
        assert_eq!(resolved, canonical(Path::new("/srv/vault")));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut sources = sources(dir.path());
        sources.config_path = Some(dir.path().join("nope.yaml"));
        assert!(resolve_vault_path(&sources, env_from(&[])).is_err());
    }

    #[test]
    fn missing_env_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let resolved = resolve_vault_path(
            &sources(dir.path()),
            env_from(&[(CONFIG_PATH_ENV, missing.to_str().unwrap())]),
        )
        .unwrap();
        assert_eq!(resolved, canonical(&dir.path().join("vault")));
    }

    #[test]
    fn empty_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "\n").unwrap();
        let resolved = resolve_vault_path(&sources(dir.path()), env_from(&[])).unwrap();
        assert_eq!(resolved, canonical(&dir.path().join("vault")));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "vault_path: [unclosed\n").unwrap();
        assert!(resolve_vault_path(&sources(dir.path()), env_from(&[])).is_err());
    }

    #[test]
    fn load_config_supports_json_and_rejects_unknown_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("config.json");
        std::fs::write(&json, r#"{"vault_path": "v"}"#).unwrap();
        assert_eq!(
            load_config(&json).unwrap().vault_path,
            Some(PathBuf::from("v"))
        );

        let ini = dir.path().join("config.ini");
        std::fs::write(&ini, "vault_path=v").unwrap();
        assert!(load_config(&ini).is_err());
    }

    #[test]
    fn home_prefix_is_expanded() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_home(Path::new("~/notes")), home.join("notes"));
        assert_eq!(expand_home(Path::new("/abs/~")), PathBuf::from("/abs/~"));
    }
}
