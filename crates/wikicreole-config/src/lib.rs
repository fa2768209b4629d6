use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use wikicreole_engine::{ParseOptions, PlaceholderStyle};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub output: OutputConfig,
    pub xhtml: XhtmlConfig,
}

/// Extensions to strict Creole 1.0, both on unless switched off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub autolinks: bool,
    pub typographic_dashes: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            autolinks: true,
            typographic_dashes: true,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xhtml,
    Text,
    Events,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XhtmlConfig {
    pub placeholders: PlaceholderStyle,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/wikicreole");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Parser options described by the `[parser]` table.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            autolinks: self.parser.autolinks,
            typographic_dashes: self.parser.typographic_dashes,
        }
    }

    /// Expands `~` and environment variables in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/wikicreole/config.toml"));
    }

    #[test]
    fn test_defaults_enable_extensions() {
        let config = Config::default();

        assert_eq!(config.parse_options(), ParseOptions::default());
        assert_eq!(config.output.format, OutputFormat::Xhtml);
        assert_eq!(config.xhtml.placeholders, PlaceholderStyle::Visible);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_tables_keep_other_defaults() {
        let config_content = r#"
[parser]
autolinks = false

[output]
format = "text"
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert!(!config.parser.autolinks);
        assert!(config.parser.typographic_dashes);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.xhtml.placeholders, PlaceholderStyle::Visible);
    }

    #[test]
    fn test_placeholder_style_in_toml() {
        let config_content = r#"
[xhtml]
placeholders = "hidden"
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.xhtml.placeholders, PlaceholderStyle::Hidden);
    }

    #[test]
    fn test_parse_options_follow_parser_table() {
        let config = Config {
            parser: ParserConfig {
                autolinks: false,
                typographic_dashes: false,
            },
            ..Config::default()
        };

        let options = config.parse_options();

        assert!(!options.autolinks);
        assert!(!options.typographic_dashes);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            output: OutputConfig {
                format: OutputFormat::Events,
            },
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("WIKICREOLE_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$WIKICREOLE_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("WIKICREOLE_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[output]\nformat = \"pdf\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            parser: ParserConfig {
                autolinks: false,
                typographic_dashes: true,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
            xhtml: XhtmlConfig {
                placeholders: PlaceholderStyle::Hidden,
            },
        };

        test_config.save_to_path(&config_file).unwrap();
        assert!(config_file.exists(), "Config file should exist");

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
