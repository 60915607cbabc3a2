use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::CliArgs;
use crate::editor::DEFAULT_TAB_WIDTH;

pub const DEFAULT_FLASH_MILLIS: u64 = 250;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not determine the home directory")]
    NoHomeDir,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminoteConfig {
    pub notes_dir: Option<PathBuf>,
    pub tab_width: usize,
    pub flash_millis: u64,
}

impl Default for TerminoteConfig {
    fn default() -> Self {
        Self {
            notes_dir: None,
            tab_width: DEFAULT_TAB_WIDTH,
            flash_millis: DEFAULT_FLASH_MILLIS,
        }
    }
}

impl TerminoteConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `explicit` if given, else the first config file found, else the
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit.map(Path::to_path_buf).or_else(find_config_file) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Command-line values win over the file.
    pub fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(dir) = &args.notes_dir {
            self.notes_dir = Some(dir.clone());
        }
        if let Some(width) = args.tab_width {
            self.tab_width = width;
        }
    }

    pub fn resolve_notes_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.notes_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(base_dir()?.join("notes")),
        }
    }
}

/// `~/.terminote`, home of the notes directory and the log file.
pub fn base_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".terminote"))
        .ok_or(ConfigError::NoHomeDir)
}

pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("terminote"))
}

pub fn find_config_file() -> Option<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = get_config_dir() {
        paths.push(dir.join("config.toml"));
    }
    if let Ok(base) = base_dir() {
        paths.push(base.join("config.toml"));
    }
    paths.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = TerminoteConfig::default();
        assert_eq!(config.tab_width, 4);
        assert_eq!(config.flash_millis, 250);
        assert!(config.notes_dir.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "tab_width = 2\n").unwrap();
        let config = TerminoteConfig::from_file(&path).unwrap();
        assert_eq!(config.tab_width, 2);
        assert_eq!(config.flash_millis, DEFAULT_FLASH_MILLIS);
    }

    #[test]
    fn test_notes_dir_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "notes_dir = \"/tmp/my-notes\"\nflash_millis = 0\n").unwrap();
        let config = TerminoteConfig::load(Some(&path)).unwrap();
        assert_eq!(
            config.resolve_notes_dir().unwrap(),
            PathBuf::from("/tmp/my-notes")
        );
        assert_eq!(config.flash_millis, 0);
    }

    #[test]
    fn test_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "tab_width = \"wide\"").unwrap();
        assert!(matches!(
            TerminoteConfig::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            TerminoteConfig::from_file(&temp_dir.path().join("missing.toml")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = TerminoteConfig::default();
        let args = CliArgs {
            notes_dir: Some(PathBuf::from("elsewhere")),
            config: None,
            tab_width: Some(8),
        };
        config.apply_cli(&args);
        assert_eq!(config.notes_dir, Some(PathBuf::from("elsewhere")));
        assert_eq!(config.tab_width, 8);
    }
}
