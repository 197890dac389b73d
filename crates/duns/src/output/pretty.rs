//! Pretty output formatting.

use duns_core::dun::{Dun, Statistics};

/// Human-readable rendering of a value.
pub trait PrettyFormat {
    fn pretty(&self) -> String;
}

impl PrettyFormat for Dun {
    fn pretty(&self) -> String {
        format_dun(self)
    }
}

impl PrettyFormat for Vec<Dun> {
    fn pretty(&self) -> String {
        format_duns(self)
    }
}

impl PrettyFormat for Statistics {
    fn pretty(&self) -> String {
        format_statistics(self)
    }
}

/// Format a dun for display.
pub fn format_dun(dun: &Dun) -> String {
    let mark = if dun.completed { "x" } else { " " };
    let mut output = format!("[{}] {}\n  ID: {}", mark, dun.title_for_list(), dun.id);
    if !dun.title.is_empty() && !dun.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", dun.description));
    }
    output
}

/// Format duns for display.
pub fn format_duns(duns: &[Dun]) -> String {
    if duns.is_empty() {
        return "No duns found.".to_string();
    }
    let mut output = format!("DUNS ({})\n", duns.len());
    output.push_str(&"-".repeat(40));
    for dun in duns {
        output.push_str(&format!("\n{}", format_dun(dun)));
        output.push('\n');
    }
    output
}

/// Format statistics for display.
pub fn format_statistics(stats: &Statistics) -> String {
    format!(
        "Statistics:\n  Active: {:.1}%\n  Completed: {:.1}%",
        stats.active_percent, stats.completed_percent
    )
}
