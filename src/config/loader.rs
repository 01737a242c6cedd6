use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;

use super::Config;

/// Default config file name, looked up in the current working directory.
pub const LOCAL_CONFIG_NAME: &str = ".codecompass.toml";

/// Environment variable that seeds the allowed-root list when set.
pub const REPO_ROOT_ENV: &str = "REPO_ROOT";

/// Load configuration from an explicit path, or discover `.codecompass.toml`
/// in the current directory. A missing discovered file is not an error; the
/// defaults are used.
///
/// # Errors
/// Returns an error if an explicitly requested file cannot be read, or if
/// any file fails to parse.
pub fn load(explicit: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(apply_env(Config::default()));
    }

    let config = match explicit {
        Some(path) => load_from_path(path)?,
        None => {
            let local = Path::new(LOCAL_CONFIG_NAME);
            if local.exists() {
                load_from_path(local)?
            } else {
                debug!("no config file found, using defaults");
                Config::default()
            }
        }
    };

    Ok(apply_env(config))
}

/// Load and parse a specific TOML config file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// `REPO_ROOT` overrides the configured root list with a single root.
fn apply_env(mut config: Config) -> Config {
    if let Ok(root) = std::env::var(REPO_ROOT_ENV)
        && !root.is_empty()
    {
        debug!(%root, "root list taken from REPO_ROOT");
        config.repositories.roots = vec![root];
    }
    config
}

/// Serialize the default configuration as a TOML document.
#[must_use]
pub fn default_config_toml() -> String {
    let config = Config::default();
    toml::to_string_pretty(&config).unwrap_or_else(|e| {
        warn!("failed to serialize default config: {e}");
        String::new()
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
