use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::package_managers::NodePackageManager;

pub const DEFAULT_PROJECT_NAME: &str = "MyApp";

const CONFIG_FILE_NAME: &str = ".quickstart-rn.toml";

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default = "default_project_name")]
    pub default_project_name: String,
    #[serde(default)]
    pub default_with_paper: bool,
    #[serde(default)]
    pub package_manager: Option<NodePackageManager>,
    #[serde(default = "default_show_emoji")]
    pub show_emoji: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file(&Self::get_config_path())
    }

    /// Loads settings from `path` (which need not exist), then applies
    /// `QUICKSTART_RN_*` environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Start with default values
            .set_default("default_project_name", DEFAULT_PROJECT_NAME)?
            .set_default("default_with_paper", false)?
            .set_default("show_emoji", true)?
            // Add config file if it exists
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("QUICKSTART_RN"))
            .build()?;

        s.try_deserialize()
    }

    fn get_config_path() -> PathBuf {
        // First check current directory
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let local_config = current_dir.join(CONFIG_FILE_NAME);

        if local_config.exists() {
            return local_config;
        }

        // Fall back to home directory
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Emoji prefixes are off when the config says so or NO_COLOR is set.
    pub fn use_emoji(&self) -> bool {
        self.show_emoji && std::env::var_os("NO_COLOR").is_none()
    }
}

fn default_project_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

fn default_show_emoji() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();

        assert_eq!(settings.default_project_name, "MyApp");
        assert!(!settings.default_with_paper);
        assert_eq!(settings.package_manager, None);
        assert!(settings.show_emoji);
    }

    #[test]
    fn test_values_from_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
default_project_name = "Shop"
default_with_paper = true
package_manager = "yarn"
show_emoji = false
"#,
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.default_project_name, "Shop");
        assert!(settings.default_with_paper);
        assert_eq!(settings.package_manager, Some(NodePackageManager::Yarn));
        assert!(!settings.show_emoji);
        assert!(!settings.use_emoji());
    }

    #[test]
    fn test_unknown_package_manager_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "package_manager = \"deno\"\n").unwrap();

        assert!(Settings::from_file(&path).is_err());
    }
}
