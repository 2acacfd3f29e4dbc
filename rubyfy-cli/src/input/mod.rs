//! Input handling module

pub mod file_reader;
pub mod fragments;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use fragments::{LineFragments, LineSink, CODE_SCOPE};
pub use glob_resolver::{resolve_patterns, InputSource};
