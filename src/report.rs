//! Report rendering
//!
//! Turns gathered records into the lines printed to stdout and mirrored into
//! the report file next to the executable.

use std::fs;
use std::io;
use std::path::Path;

use crate::consts::UNKNOWN;
use crate::record::InstallRecord;
use crate::utils::Timezone;

/// Report lines, one per record, newest first. An empty gather produces a
/// single explanatory line instead.
pub(crate) fn build_report(
    records: &[InstallRecord],
    days: i64,
    timezone: Timezone,
    show_sources: bool,
) -> Vec<String> {
    if records.is_empty() {
        return vec![format!(
            "No applications found with date-added within the last {days} days."
        )];
    }
    records
        .iter()
        .map(|record| format_line(record, timezone, show_sources))
        .collect()
}

fn format_line(record: &InstallRecord, timezone: Timezone, show_sources: bool) -> String {
    let stamp = timezone.display(record.added);
    let mut line = format!(
        "{stamp} - {} ({})",
        record.display_name(),
        record.path.display()
    );
    if show_sources {
        line.push_str(" - ");
        line.push_str(record.source.as_deref().unwrap_or(UNKNOWN));
    }
    line
}

/// Write the report, newline-terminated, replacing any previous run's file.
pub(crate) fn write_report(path: &Path, lines: &[String]) -> io::Result<()> {
    fs::write(path, lines.join("\n") + "\n")
}
