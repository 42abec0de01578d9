use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{Error, Result, schema::StackplanConfig};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &[
    "stackplan.toml",
    "stackplan.yaml",
    "stackplan.yml",
    "stackplan.json",
];

/// Overrides `session.path` when set and non-empty.
pub const SESSION_FILE_ENV: &str = "STACKPLAN_SESSION_FILE";

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> Result<StackplanConfig> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&raw, path)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./stackplan.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/stackplan/stackplan.{toml,yaml,yml,json}` (user-global)
///
/// Returns `StackplanConfig::default()` if no config file is found or the
/// one found fails to parse.
pub fn discover_and_load() -> StackplanConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    StackplanConfig::default()
}

/// Apply environment overrides on top of a loaded config.
pub fn apply_env_overrides(config: StackplanConfig) -> StackplanConfig {
    apply_env_overrides_with(config, |name| std::env::var(name).ok())
}

fn apply_env_overrides_with(
    mut config: StackplanConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> StackplanConfig {
    if let Some(path) = lookup(SESSION_FILE_ENV).filter(|v| !v.trim().is_empty()) {
        debug!(path = %path, "session file overridden from environment");
        config.session.path = PathBuf::from(path.trim());
    }
    config
}

/// Returns the user-global config directory (`~/.config/stackplan/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "stackplan").map(|d| d.config_dir().to_path_buf())
}

/// Find the first config file in standard locations.
fn find_config_file() -> Option<PathBuf> {
    let local = CONFIG_FILENAMES.iter().map(PathBuf::from);
    let global = config_dir()
        .into_iter()
        .flat_map(|dir| CONFIG_FILENAMES.iter().map(move |name| dir.join(name)));
    local.chain(global).find(|p| p.exists())
}

fn parse_config(raw: &str, path: &Path) -> Result<StackplanConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        other => Err(Error::UnsupportedFormat(other.to_string())),
    }
}
