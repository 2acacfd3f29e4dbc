//! Rubyfy CLI library
//!
//! This library provides the command-line interface for annotating
//! `{word}(reading)` pairs with ruby markup.

pub mod commands;
pub mod config_source;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
