//! Lenient configuration loading
//!
//! User files are merged key by key onto the defaults. An entry that is
//! unknown, mistyped or not a single character is reported and skipped, so
//! a partly broken file still yields a usable configuration.

use super::{AlignmentConfig, DelimiterSet, RubyConfig, ScopeConfig};
use crate::error::ConfigError;
use log::warn;
use toml::{Table, Value};

pub(super) fn parse(source: &str) -> Result<RubyConfig, ConfigError> {
    let root: Table = toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
    let mut config = RubyConfig::default();

    for (name, value) in &root {
        match (name.as_str(), value.as_table()) {
            ("scope", Some(table)) => merge_scope(&mut config.scope, table),
            ("delimiters", Some(table)) => merge_delimiters(&mut config.delimiters, table),
            ("alignment", Some(table)) => merge_alignment(&mut config.alignment, table),
            ("scope" | "delimiters" | "alignment", None) => {
                warn!("configuration section `{name}` is not a table, using defaults");
            }
            _ => warn!("ignoring unrecognized configuration entry `{name}`"),
        }
    }

    Ok(config)
}

fn merge_scope(scope: &mut ScopeConfig, table: &Table) {
    for (key, value) in table {
        match key.as_str() {
            "root" => match value.as_str() {
                Some(root) => scope.root = Some(root.trim().to_string()),
                None => fallback("scope", key, "a string"),
            },
            "excluded" => match string_list(value) {
                Some(labels) => scope.excluded = labels,
                None => fallback("scope", key, "an array of strings"),
            },
            _ => unrecognized("scope", key),
        }
    }
}

fn merge_delimiters(delimiters: &mut DelimiterSet, table: &Table) {
    for (key, value) in table {
        let target = match key.as_str() {
            "word_opening" => &mut delimiters.word_opening,
            "word_closing" => &mut delimiters.word_closing,
            "reading_opening" => &mut delimiters.reading_opening,
            "reading_closing" => &mut delimiters.reading_closing,
            "reading_segment" => &mut delimiters.reading_segment,
            _ => {
                unrecognized("delimiters", key);
                continue;
            }
        };

        match char_list(value) {
            Some(chars) => *target = chars,
            None => fallback("delimiters", key, "an array of single characters"),
        }
    }
}

fn merge_alignment(alignment: &mut AlignmentConfig, table: &Table) {
    for (key, value) in table {
        match key.as_str() {
            "per_character" => match value.as_bool() {
                Some(flag) => alignment.per_character = flag,
                None => fallback("alignment", key, "a boolean"),
            },
            "honorifics" => match char_list(value) {
                Some(chars) => alignment.honorifics = chars,
                None => fallback("alignment", key, "an array of single characters"),
            },
            _ => unrecognized("alignment", key),
        }
    }
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(|s| s.trim().to_string()))
        .collect()
}

/// Each entry must be exactly one character after trimming
fn char_list(value: &Value) -> Option<Vec<char>> {
    value
        .as_array()?
        .iter()
        .map(|item| {
            let mut chars = item.as_str()?.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(ch),
                _ => None,
            }
        })
        .collect()
}

fn fallback(section: &str, key: &str, expected: &str) {
    warn!("`{section}.{key}` must be {expected}, using the default");
}

fn unrecognized(section: &str, key: &str) {
    warn!("ignoring unrecognized configuration key `{section}.{key}`");
}
