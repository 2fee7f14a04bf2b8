//! Argument parsing shared by the shell commands.
//!
//! Commands take positional words followed by `key=value` options, e.g.
//! `expense 250 Coffee beans category=food date=2026-02-03`.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use pocketbook_domain::{start_of_day, ParseEnumError};

use crate::cli::core::CommandError;

#[derive(Debug, Default)]
pub(crate) struct ParsedArgs<'a> {
    positional: Vec<&'a str>,
    options: Vec<(String, &'a str)>,
}

impl<'a> ParsedArgs<'a> {
    pub(crate) fn parse(args: &[&'a str]) -> Self {
        let mut parsed = ParsedArgs::default();
        for arg in args {
            match split_option(arg) {
                Some((key, value)) => parsed.options.push((key.to_ascii_lowercase(), value)),
                None => parsed.positional.push(arg),
            }
        }
        parsed
    }

    pub(crate) fn positional(&self, index: usize) -> Option<&'a str> {
        self.positional.get(index).copied()
    }

    pub(crate) fn require(&self, index: usize, what: &str) -> Result<&'a str, CommandError> {
        self.positional(index)
            .ok_or_else(|| CommandError::InvalidArguments(format!("missing {what}")))
    }

    /// Positional words from `index` on, joined with single spaces.
    pub(crate) fn rest(&self, index: usize) -> Option<String> {
        let words = self.positional.get(index..)?;
        if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        }
    }

    /// Last value given for `key`.
    pub(crate) fn option(&self, key: &str) -> Option<&'a str> {
        self.options
            .iter()
            .rev()
            .find(|(name, _)| name == key)
            .map(|(_, value)| *value)
    }

    pub(crate) fn ensure_known(&self, allowed: &[&str]) -> Result<(), CommandError> {
        match self
            .options
            .iter()
            .find(|(name, _)| !allowed.contains(&name.as_str()))
        {
            Some((name, _)) => Err(CommandError::InvalidArguments(format!(
                "unknown option `{name}` (expected one of: {})",
                allowed.join(", ")
            ))),
            None => Ok(()),
        }
    }
}

fn split_option(arg: &str) -> Option<(&str, &str)> {
    let (key, value) = arg.split_once('=')?;
    let valid_key = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    valid_key.then_some((key, value))
}

pub(crate) fn parse_amount(input: &str) -> Result<f64, CommandError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidArguments("Enter a valid amount".into()))
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

/// Midnight UTC of a `YYYY-MM-DD` date.
pub(crate) fn parse_day_start(input: &str) -> Result<DateTime<Utc>, CommandError> {
    parse_date(input).map(start_of_day)
}

pub(crate) fn parse_enum<T>(input: &str) -> Result<T, CommandError>
where
    T: FromStr<Err = ParseEnumError>,
{
    input
        .parse::<T>()
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))
}
