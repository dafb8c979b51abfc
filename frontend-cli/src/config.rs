//! Configuration loading from an optional TOML file.

use anyhow::{Context, Result};
use backend::ChildlessPolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub prompt: String,
    /// Kill a pid that has no children instead of reporting it as not found.
    pub kill_childless: bool,
    pub show_usage: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            prompt: "> ".to_string(),
            kill_childless: false,
            show_usage: true,
        }
    }
}

impl Config {
    /// Load from `path` if given, otherwise from the per-user config file
    /// when it exists, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn policy(&self) -> ChildlessPolicy {
        if self.kill_childless {
            ChildlessPolicy::KillProcess
        } else {
            ChildlessPolicy::ReportNotFound
        }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("proctree").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kill_childless = true\nprompt = \"proctree> \"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.kill_childless);
        assert_eq!(config.prompt, "proctree> ");
        assert_eq!(config.log_level, "warn");
        assert!(config.show_usage);
        assert_eq!(config.policy(), ChildlessPolicy::KillProcess);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_usage = \"sometimes\"").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn defaults_report_childless_as_not_found() {
        assert_eq!(Config::default().policy(), ChildlessPolicy::ReportNotFound);
    }
}
