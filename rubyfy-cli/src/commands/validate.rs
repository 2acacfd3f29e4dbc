//! Validate command implementation

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use rubyfy_core::{RubyConfig, Rubyfier};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

fn chars(list: &[char]) -> String {
    list.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

impl ValidateArgs {
    /// Execute the validate command
    ///
    /// Unlike `process`, unknown keys and malformed values are errors here.
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let source = FileReader::read_text(&self.config)?;

        let compiled = RubyConfig::from_toml_str(&source)
            .map_err(rubyfy_core::RubyError::from)
            .and_then(Rubyfier::new);

        match compiled {
            Ok(rubyfier) => {
                let config = rubyfier.config();
                let delimiters = &config.delimiters;
                println!("✓ Configuration is valid!");
                println!(
                    "  Word:      {} … {}",
                    chars(&delimiters.word_opening),
                    chars(&delimiters.word_closing)
                );
                println!(
                    "  Reading:   {} … {}",
                    chars(&delimiters.reading_opening),
                    chars(&delimiters.reading_closing)
                );
                println!("  Segments:  {}", chars(&delimiters.reading_segment));
                println!("  Honorifics: {}", chars(&config.alignment.honorifics));
                println!("  Per character: {}", config.alignment.per_character);
                println!("  Excluded scopes: {}", config.scope.excluded.join(", "));
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(e.to_string()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        args.execute()
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[scope]
excluded = ["CODE"]

[delimiters]
word_opening = ["["]
word_closing = ["]"]
reading_opening = ["<"]
reading_closing = [">"]

[alignment]
per_character = false
"#;

        assert!(validate(toml_content).is_ok());
    }

    #[test]
    fn test_validate_empty_file_uses_defaults() {
        assert!(validate("").is_ok());
    }

    #[test]
    fn test_validate_conflicting_delimiters() {
        let toml_content = r#"
[delimiters]
word_opening = ["("]
"#;

        let err = validate(toml_content).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_validate_unknown_key_is_rejected() {
        assert!(validate("[alignment]\nper_char = true\n").is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/rubyfy.toml"),
        };
        assert!(args.execute().is_err());
    }
}
