//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name of the user configuration inside the data directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// File name of a project configuration.
pub const PROJECT_CONFIG_FILE: &str = "roost.yaml";

/// A loaded configuration file with its precedence level.
///
/// Higher precedence values override lower ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discovers and loads every configuration file, lowest precedence first.
    ///
    /// Loads the user config at `{data_dir}/config.yaml` (precedence 1) and
    /// the nearest `roost.yaml` walking up from `working_dir` (precedence 2).
    /// When `data_dir` is `None` the default data directory is used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }
        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => match crate::database::default_data_dir() {
                Ok(dir) => dir.join(USER_CONFIG_FILE),
                // No home directory means no user config
                Err(_) => return Ok(None),
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Finds the nearest `roost.yaml` in `start_dir` or its ancestors.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Loads and parses a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        log::debug!("loading configuration from {}", path.display());
        serde_yaml::from_str(&contents).map_err(|e| {
            log::warn!("invalid configuration file {}", path.display());
            Error::Configuration(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UpdateOverlapPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let err = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml")).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "update_overlap: [unclosed").unwrap();

        let err = ConfigLoader::load_file(&config_path).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "maximum_lock_wait_seconds: 3\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.maximum_lock_wait_seconds, Some(3));
    }

    #[test]
    fn test_discover_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ConfigLoader::discover_project_config(temp_dir.path())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_discover_in_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&child).unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "update_overlap: exclude-self\n",
        )
        .unwrap();

        let source = ConfigLoader::discover_project_config(&child).unwrap().unwrap();
        assert_eq!(source.precedence, 2);
        assert_eq!(
            source.config.update_overlap,
            Some(UpdateOverlapPolicy::ExcludeSelf)
        );
    }

    #[test]
    fn test_load_all_orders_user_before_project() {
        let data_dir = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(data_dir.path().join(USER_CONFIG_FILE), "output_format: json\n").unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "output_format: csv\n").unwrap();

        let sources = ConfigLoader::load_all(project.path(), Some(data_dir.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[1].precedence, 2);
    }
}
