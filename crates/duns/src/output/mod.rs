//! Output formatting functions.

pub mod json;
pub mod pretty;

pub use pretty::PrettyFormat;

use crate::cli::OutputFormat;

/// Format a value in the requested output format.
pub fn format_output<T>(value: &T, format: OutputFormat) -> String
where
    T: serde::Serialize + PrettyFormat,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => value.pretty(),
    }
}
