use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use log::debug;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BuildError, BuildResult};

/// Configuration file names to look for, first match wins
const CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Load site configuration from the site root.
///
/// An explicit `config_file` must exist; otherwise the first of
/// [`CONFIG_FILES`] found in `source_dir` is used, and defaults apply when
/// there is none. The site year is stamped here, once per run.
pub fn load_config<P: AsRef<Path>>(source_dir: P, config_file: Option<&Path>) -> BuildResult<Config> {
    let source_dir = source_dir.as_ref();

    let config_path = match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(BuildError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            Some(path.to_path_buf())
        }
        None => find_default_config_file(source_dir),
    };

    let mut config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.source = source_dir.to_path_buf();
    config.site.year = chrono::Local::now().year();

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

fn find_default_config_file(source_dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.join(name))
        .find(|path| path.is_file())
}

fn parse_config_file(path: &Path) -> BuildResult<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        BuildError::Config(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "toml" => parse_toml_config(&content, path),
        // Assume YAML for anything else
        _ => parse_yaml_config(&content, path),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BuildResult<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content).map_err(|e| {
        BuildError::Config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BuildResult<Config> {
    toml::from_str(content).map_err(|e| {
        BuildError::Config(format!(
            "Failed to parse TOML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.source, dir.path());
        assert_eq!(config.content_path(), dir.path().join("content"));
        assert_eq!(config.destination, PathBuf::from("build"));
        assert_eq!(config.page_template, "base.html");
        assert!(config.site.year >= 2024);
    }

    #[test]
    fn test_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "destination: out\nsite:\n  title: Notes\n  author: Jo\n  year: 1999\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.destination, PathBuf::from("out"));
        assert_eq!(config.site.title, "Notes");
        assert_eq!(config.site.author, "Jo");
        // the year always comes from the clock
        assert_ne!(config.site.year, 1999);
    }

    #[test]
    fn test_toml_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.toml"),
            "markdown_ext = \"markdown\"\n[site]\nname = \"blog\"\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.markdown_ext, "markdown");
        assert_eq!(config.site.name, "blog");
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "site: [unclosed").unwrap();

        let err = load_config(dir.path(), None).unwrap_err();
        assert_eq!(err.kind(), "ConfigError");
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("custom.yml");
        assert!(load_config(dir.path(), Some(&missing)).is_err());
    }
}
