//! Configuration source management for CLI

use crate::error::CliError;
use anyhow::Result;
use clap::ValueEnum;
use rubyfy_core::RubyConfig;
use std::path::PathBuf;

/// Built-in configuration presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// Braces around the word, parentheses or lenticular brackets around the reading
    #[default]
    Default,
    /// `[word]<reading>`
    AsciiBrackets,
}

impl Preset {
    /// All presets, in listing order
    pub const ALL: [Preset; 2] = [Preset::Default, Preset::AsciiBrackets];

    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::AsciiBrackets => "ascii-brackets",
        }
    }

    /// Short example of the marked-up syntax
    pub fn example(&self) -> &'static str {
        match self {
            Preset::Default => "{東京}(とう.きょう)",
            Preset::AsciiBrackets => "[東京]<とう.きょう>",
        }
    }

    /// The preset's configuration
    pub fn config(&self) -> RubyConfig {
        match self {
            Preset::Default => RubyConfig::default(),
            Preset::AsciiBrackets => RubyConfig::ascii_brackets(),
        }
    }
}

/// Source of the annotation configuration
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Built-in preset
    BuiltIn(Preset),
    /// External TOML file, loaded leniently
    External(PathBuf),
}

impl ConfigSource {
    /// Choose the source from command-line options
    pub fn from_args(preset: Option<Preset>, path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ConfigSource::External(path),
            None => ConfigSource::BuiltIn(preset.unwrap_or_default()),
        }
    }

    /// Get the display name for the configuration source
    pub fn display_name(&self) -> String {
        match self {
            ConfigSource::BuiltIn(preset) => format!("Built-in: {}", preset.as_str()),
            ConfigSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load the configuration
    pub fn load(&self) -> Result<RubyConfig> {
        match self {
            ConfigSource::BuiltIn(preset) => Ok(preset.config()),
            ConfigSource::External(path) => RubyConfig::from_file(path)
                .map_err(|e| CliError::ConfigError(e.to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_args_prefers_file() {
        let source = ConfigSource::from_args(Some(Preset::AsciiBrackets), Some("a.toml".into()));
        assert!(matches!(source, ConfigSource::External(_)));

        let source = ConfigSource::from_args(None, None);
        assert!(matches!(source, ConfigSource::BuiltIn(Preset::Default)));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            ConfigSource::BuiltIn(Preset::AsciiBrackets).display_name(),
            "Built-in: ascii-brackets"
        );
        assert_eq!(
            ConfigSource::External("rubyfy.toml".into()).display_name(),
            "External: rubyfy.toml"
        );
    }

    #[test]
    fn test_load_presets() {
        for preset in Preset::ALL {
            let config = ConfigSource::BuiltIn(preset).load().unwrap();
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_load_external() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rubyfy.toml");
        fs::write(&path, "[alignment]\nper_character = false\n").unwrap();

        let config = ConfigSource::External(path).load().unwrap();
        assert!(!config.alignment.per_character);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConfigSource::External("/nonexistent/rubyfy.toml".into())
            .load()
            .unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
