use crate::models::{Entry, ExportRow, Subject};
use chrono::SecondsFormat;

pub const CSV_HEADER: &str = "Behavior,Timestamp,Together,Note";

pub fn to_export_rows(log: &[Entry]) -> Vec<ExportRow> {
    log.iter()
        .map(|entry| ExportRow {
            behavior: entry.behavior.clone(),
            iso_timestamp: entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            together_label: if entry.together { "Yes" } else { "No" },
            escaped_note: escape_note(&entry.note),
        })
        .collect()
}

/// Quotes a non-empty note, doubling embedded quotes. Empty notes stay bare.
pub fn escape_note(note: &str) -> String {
    if note.is_empty() {
        return String::new();
    }
    format!("\"{}\"", note.replace('"', "\"\""))
}

/// Leaves a plain field bare and quotes one holding a separator, quote or line break.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn render_csv(rows: &[ExportRow]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + rows.len() * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{},\"{}\",{},{}\n",
            escape_field(&row.behavior),
            row.iso_timestamp,
            row.together_label,
            row.escaped_note
        ));
    }
    out
}

pub fn export_file_name(subject: Subject) -> String {
    format!("{subject}_behavior_log.csv")
}
