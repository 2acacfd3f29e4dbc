//! Generate config command implementation

use crate::config_source::Preset;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

const TEMPLATE_HEADER: &str = r#"# rubyfy configuration
#
# [scope]
#   root            opaque label of the traversal root (optional)
#   excluded        scope labels never annotated, compared case-insensitively
#
# [delimiters]      every entry is a single character
#   word_opening    characters that open a word, e.g. {
#   word_closing    characters that close a word, e.g. }
#   reading_opening characters that open a reading, e.g. (
#   reading_closing characters that close a reading, e.g. )
#   reading_segment characters that split a reading into per-character units
#
# [alignment]
#   per_character   split unsegmented readings character by character
#   honorifics      prefixes folded into the annotation when word and
#                   reading disagree on them
#
# A character may belong to at most one boundary role.

"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Preset to start from
    #[arg(short, long, value_enum, default_value = "default")]
    pub preset: Preset,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Preset: {}", self.preset.as_str());
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the delimiters and alignment settings");
        println!("2. Validate your configuration:");
        println!("   rubyfy validate -c {}", self.output.display());
        println!("3. Use your configuration:");
        println!("   rubyfy process -i <FILES> -c {}", self.output.display());

        Ok(())
    }

    /// Generate the commented TOML template
    pub fn generate_template(&self) -> Result<String> {
        let body = self
            .preset
            .config()
            .to_toml_string()
            .context("Failed to serialize configuration")?;

        Ok(format!("{TEMPLATE_HEADER}{body}"))
    }
}
