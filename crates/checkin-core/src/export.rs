//! CSV export of submissions.

use crate::model::{format_timestamp, Submission};

/// Column order of the exported CSV.
pub const CSV_HEADER: [&str; 6] = ["timestamp", "name", "motivation", "energy", "happiness", "note"];

/// Render submissions as CSV.
///
/// Rows are separated by `\n` with no trailing newline. The timestamp and
/// ratings are written bare; name and note are always double-quoted with
/// embedded quotes doubled.
pub fn to_csv(records: &[Submission]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.join(","));
    lines.extend(records.iter().map(csv_row));
    lines.join("\n")
}

fn csv_row(r: &Submission) -> String {
    format!(
        "{},{},{},{},{},{}",
        format_timestamp(&r.timestamp),
        quote(&r.name),
        r.motivation,
        r.energy,
        r.happiness,
        quote(&r.note),
    )
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
