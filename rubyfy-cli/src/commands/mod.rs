//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

use crate::config_source::Preset;
use process::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate word/reading pairs in text files
    Process(process::ProcessArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Generate a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List built-in delimiter presets
    Presets,
}

impl ListCommands {
    /// Lines printed by the listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => OutputFormat::ALL
                .iter()
                .map(|f| format!("{:<8} {}", f.as_str(), f.description()))
                .collect(),
            ListCommands::Presets => Preset::ALL
                .iter()
                .map(|p| format!("{:<16} {}", p.as_str(), p.example()))
                .collect(),
        }
    }

    /// Execute the list command
    pub fn execute(&self) -> anyhow::Result<()> {
        for line in self.lines() {
            println!("{line}");
        }
        Ok(())
    }
}

impl Commands {
    /// Dispatch to the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let process_cmd = Commands::Process(process::ProcessArgs {
            input: vec!["notes.md".to_string()],
            output: None,
            format: OutputFormat::Text,
            preset: None,
            config: None,
            no_per_character: false,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", process_cmd);
        assert!(debug_str.contains("Process"));
        assert!(debug_str.contains("notes.md"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("text"));
        assert!(lines[2].starts_with("html"));
    }

    #[test]
    fn test_list_presets() {
        let lines = ListCommands::Presets.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("ascii-brackets"));
        assert!(lines[1].contains("[東京]<とう.きょう>"));
    }
}
