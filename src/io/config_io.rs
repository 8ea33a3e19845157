use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::model::config::AppConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default config location, respecting XDG_CONFIG_HOME
pub fn default_config_path() -> PathBuf {
    config_path_from(
        std::env::var("XDG_CONFIG_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

fn config_path_from(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    let config_dir = xdg_config_home
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            home.map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/"))
                .join(".config")
        });
    config_dir.join("todolist").join("config.toml")
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Load config from an explicit path (which must exist), or from the default
/// location (where a missing file just means defaults).
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "loading config");
        return read_config(path);
    }

    let path = default_config_path();
    match read_config(&path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded config");
            Ok(config)
        }
        Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
            info!("no config file, using defaults");
            Ok(AppConfig::default())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::TodoFilter;
    use tempfile::TempDir;

    #[test]
    fn test_path_prefers_xdg() {
        let path = config_path_from(Some("/xdg".into()), Some("/home/me".into()));
        assert_eq!(path, PathBuf::from("/xdg/todolist/config.toml"));
    }

    #[test]
    fn test_path_falls_back_to_home() {
        let path = config_path_from(None, Some("/home/me".into()));
        assert_eq!(path, PathBuf::from("/home/me/.config/todolist/config.toml"));
        let path = config_path_from(Some(String::new()), Some("/home/me".into()));
        assert_eq!(path, PathBuf::from("/home/me/.config/todolist/config.toml"));
    }

    #[test]
    fn test_path_without_home() {
        let path = config_path_from(None, None);
        assert_eq!(path, PathBuf::from("/.config/todolist/config.toml"));
    }

    #[test]
    fn test_read_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\ndefault_filter = \"completed\"\n").unwrap();
        let config = read_config(&path).unwrap();
        assert_eq!(config.ui.default_filter, TodoFilter::Completed);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui\nshow_key_hints = ").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
