//! Process command implementation

use crate::config_source::{ConfigSource, Preset};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, InputSource, LineFragments, LineSink};
use crate::output::{
    AnnotatedDocument, HtmlFormatter, JsonFormatter, OutputFormatter, TextFormatter,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use rubyfy_core::{Rubyfier, RunStats};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Built-in delimiter preset
    #[arg(short, long, value_enum, conflicts_with = "config")]
    pub preset: Option<Preset>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Always annotate the whole word unless the reading is segmented
    #[arg(long)]
    pub no_per_character: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rewritten documents, verbatim
    Text,
    /// JSON array with per-document counters
    Json,
    /// Minimal HTML page with one section per document
    Html,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 3] =
        [OutputFormat::Text, OutputFormat::Json, OutputFormat::Html];

    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Rewritten documents, verbatim",
            OutputFormat::Json => "JSON array with per-document counters",
            OutputFormat::Html => "Minimal HTML page with one section per document",
        }
    }
}

/// Annotate one document, line by line
pub fn annotate_document(
    rubyfier: &Rubyfier,
    name: String,
    text: &str,
) -> Result<AnnotatedDocument> {
    let mut sink = LineSink::new();
    let stats: RunStats = rubyfier
        .run(LineFragments::new(text), &mut sink)
        .map_err(|e| CliError::ProcessingError(format!("{name}: {e}")))?;

    Ok(AnnotatedDocument {
        name,
        text: sink.into_text(),
        stats,
    })
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting ruby annotation");
        log::debug!("Arguments: {:?}", self);

        let rubyfier = self.build_rubyfier()?;
        let sources = resolve_patterns(&self.input)?;
        log::info!("Processing {} input(s)", sources.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let documents = sources
            .par_iter()
            .map(|source| {
                let document = self.process_source(&rubyfier, source)?;
                progress.file_completed(&document.name);
                Ok(document)
            })
            .collect::<Result<Vec<_>>>();
        progress.finish();
        let documents = documents?;

        let mut formatter = self.create_formatter()?;
        let mut total = RunStats::default();
        for document in &documents {
            log::debug!(
                "{}: {} pairs in {} of {} lines",
                document.name,
                document.stats.pairs,
                document.stats.rewritten,
                document.stats.fragments
            );
            total += document.stats;
            formatter.format_document(document)?;
        }
        formatter.finish()?;

        log::info!(
            "Annotated {} pairs across {} input(s)",
            total.pairs,
            documents.len()
        );
        Ok(())
    }

    fn build_rubyfier(&self) -> Result<Rubyfier> {
        let source = ConfigSource::from_args(self.preset, self.config.clone());
        log::info!("Configuration: {}", source.display_name());

        let mut config = source.load()?;
        if self.no_per_character {
            config.alignment.per_character = false;
        }

        Rubyfier::new(config).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    fn process_source(
        &self,
        rubyfier: &Rubyfier,
        source: &InputSource,
    ) -> Result<AnnotatedDocument> {
        let text = FileReader::read(source)?;
        annotate_document(rubyfier, source.to_string(), &text)
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
