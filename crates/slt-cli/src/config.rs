//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file.
    pub database_path: PathBuf,
    /// How many nights `slt list` shows when `--limit` is not given.
    pub list_limit: u32,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_path", &self.database_path)
            .field("list_limit", &self.list_limit)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            database_path: data_dir.join("slt.db"),
            list_limit: 5,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (SLT_*)
        figment = figment.merge(Env::prefixed("SLT_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for slt.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("slt"))
}

/// Returns the platform-specific data directory for slt.
///
/// On Linux: `~/.local/share/slt`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("slt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_data_path_returns_some() {
        assert!(dirs_data_path().is_some());
    }

    #[test]
    fn test_dirs_data_path_ends_with_slt() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "slt");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_db() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.database_path, data_dir.join("slt.db"));
        assert_eq!(config.list_limit, 5);
    }

    #[test]
    fn test_config_file_overrides_default() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_file = temp.path().join("config.toml");
        std::fs::write(&config_file, "database_path = \"/custom/sleep.db\"\n").unwrap();

        let config = Config::load_from(Some(&config_file)).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/custom/sleep.db"));
        // Keys absent from the file keep their defaults
        assert_eq!(config.list_limit, 5);
    }

    #[test]
    fn test_config_file_overrides_list_limit() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_file = temp.path().join("config.toml");
        std::fs::write(&config_file, "list_limit = 20\n").unwrap();

        let config = Config::load_from(Some(&config_file)).unwrap();
        assert_eq!(config.list_limit, 20);
    }
}
