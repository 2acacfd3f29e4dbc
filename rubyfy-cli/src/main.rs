use clap::Parser;
use rubyfy_cli::commands::Commands;
use rubyfy_cli::CliResult;

/// Ruby (furigana) annotation for `{word}(reading)` markup
#[derive(Debug, Parser)]
#[command(name = "rubyfy", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_args() {
        let cli = Cli::try_parse_from([
            "rubyfy", "process", "-i", "a.md", "-i", "b.md", "-f", "json", "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.input, vec!["a.md", "b.md"]);
                assert_eq!(args.verbose, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_preset_conflicts_with_config() {
        let result = Cli::try_parse_from([
            "rubyfy",
            "process",
            "-i",
            "a.md",
            "-p",
            "ascii-brackets",
            "-c",
            "rubyfy.toml",
        ]);
        assert!(result.is_err());
    }
}
