//! Formatting strategies for individual trace lines.
//!
//! A [`Formatter`] turns a resolved call site plus the user's message into the
//! text of one trace line. Two strategies ship with the crate:
//!
//! ```text
//! DefaultFormatter:  main.rs:load():123: message1
//! JsonFormatter:     {"File":"main.rs","Func":"load()","LineNbr":123,"Details":"message1"}
//! ```

use std::fmt;

#[cfg(feature = "cli")]
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::{self, names};

/// Formats one trace line from a call site and message.
///
/// The format can be as terse or verbose as desired, and may omit fields
/// that aren't needed. Any `Fn(&str, &str, u32, fmt::Arguments) -> String`
/// closure is also a formatter.
pub trait Formatter: Send + Sync {
    fn format(&self, file: &str, function: &str, line: u32, details: fmt::Arguments<'_>) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&str, &str, u32, fmt::Arguments<'_>) -> String + Send + Sync,
{
    fn format(&self, file: &str, function: &str, line: u32, details: fmt::Arguments<'_>) -> String {
        self(file, function, line, details)
    }
}

/// Formats each line as `file:function():line: message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl Formatter for DefaultFormatter {
    fn format(&self, file: &str, function: &str, line: u32, details: fmt::Arguments<'_>) -> String {
        format!("{}:{}():{}: {}", file, function, line, details)
    }
}

/// Formats each line as a JSON object with `File`, `Func`, `LineNbr` and `Details` keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, file: &str, function: &str, line: u32, details: fmt::Arguments<'_>) -> String {
        let record = TraceRecord {
            file: file.to_string(),
            func: format!("{}{}", function, names::FUNC_SUFFIX),
            line_nbr: line,
            details: details.to_string(),
        };

        match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize trace record");
                serialization_fallback(&err)
            }
        }
    }
}

/// Text rendered when a trace record cannot be serialized.
fn serialization_fallback(err: &serde_json::Error) -> String {
    format!("{}{}{}", constants::NO_TRACE_MSG, constants::DETAILS_LABEL, err)
}

/// One structured trace line, as written by [`JsonFormatter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TraceRecord {
    /// Base file name of the call site.
    pub file: String,
    /// Function name with `()` appended.
    pub func: String,
    /// Line number of the call site.
    pub line_nbr: u32,
    /// The formatted message.
    pub details: String,
}

impl TraceRecord {
    /// Parse one line produced by [`JsonFormatter`].
    ///
    /// Lines of a chained error are separated by [`CHAIN_SEPARATOR`](crate::constants::CHAIN_SEPARATOR),
    /// so split the rendered text on it before parsing.
    pub fn parse(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}

/// Built-in formatter selector, usable from config files and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// Compact `file:function():line: message` lines
    #[default]
    Default,
    /// One JSON object per line
    Json,
}

impl FormatterKind {
    /// Make this formatter the process-wide active formatter.
    pub fn install(self) {
        match self {
            FormatterKind::Default => crate::settings::set_formatter(DefaultFormatter),
            FormatterKind::Json => crate::settings::set_formatter(JsonFormatter),
        }
    }
}
