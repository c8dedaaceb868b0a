use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use super::model::RecoveryRecord;

// ---------------------------------------------------------------------------
// Export formats and errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Fixed output filename per format.
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "recovery-results.csv",
            ExportFormat::Json => "recovery-results.json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    /// Exporting an empty view is aborted with a warning; no file is
    /// produced.
    #[error("nothing to export: the current view is empty")]
    EmptyView,
    #[error("failed to serialize CSV")]
    Csv(#[from] csv::Error),
    #[error("failed to serialize JSON")]
    Json(#[from] serde_json::Error),
}

/// A serialized export ready for the host save-as capability.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}

// ---------------------------------------------------------------------------
// Field projection
// ---------------------------------------------------------------------------

/// Project a record to its exported key/value pairs, in order.
///
/// `filename, filepath, status, size, details` are always present; the model
/// fields are appended only when present and non-empty, so the row shape
/// varies between records. The size renders the raw ingested value.
pub fn project(record: &RecoveryRecord) -> Vec<(&'static str, String)> {
    let mut row = vec![
        ("filename", record.filename.clone()),
        ("filepath", record.filepath.clone()),
        ("status", record.status.clone()),
        ("size", record.size.to_string()),
        ("details", record.details.clone()),
    ];
    if let Some(value) = present(&record.model_id) {
        row.push(("modelId", value));
    }
    if let Some(value) = present(&record.version_id) {
        row.push(("versionId", value));
    }
    if let Some(value) = present(&record.model_name) {
        row.push(("modelName", value));
    }
    row
}

fn present(field: &Option<String>) -> Option<String> {
    field.as_ref().filter(|s| !s.is_empty()).cloned()
}

// ---------------------------------------------------------------------------
// Serializers
// ---------------------------------------------------------------------------

/// Serialize the view to CSV.
///
/// The header is derived from the first projected row only; later rows are
/// written against that header, with keys missing from a row rendered as
/// empty strings and keys absent from the header dropped. The header keys
/// are written bare; every data value is quoted, embedded quotes doubled,
/// rows joined by line breaks.
pub fn to_csv<'a, I>(records: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a RecoveryRecord>,
{
    let rows: Vec<Vec<(&'static str, String)>> = records.into_iter().map(project).collect();
    let Some(first) = rows.first() else {
        return Err(ExportError::EmptyView);
    };
    let header: Vec<&'static str> = first.iter().map(|(key, _)| *key).collect();

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());
    for row in &rows {
        let fields: Vec<&str> = header
            .iter()
            .map(|key| {
                row.iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.as_str())
                    .unwrap_or("")
            })
            .collect();
        writer.write_record(&fields)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    let body = String::from_utf8_lossy(&bytes);
    Ok(format!(
        "{}\n{}",
        header.join(","),
        body.trim_end_matches('\n')
    ))
}

/// Serialize the view to the pretty-printed JSON export document:
/// `{ exported, total, results }`. The export timestamp is injected by the
/// caller.
pub fn to_json<'a, I>(records: I, exported_at: DateTime<Utc>) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a RecoveryRecord>,
{
    let rows: Vec<Value> = records
        .into_iter()
        .map(|record| {
            let map: Map<String, Value> = project(record)
                .into_iter()
                .map(|(key, value)| (key.to_string(), Value::String(value)))
                .collect();
            Value::Object(map)
        })
        .collect();
    if rows.is_empty() {
        return Err(ExportError::EmptyView);
    }

    let document = serde_json::json!({
        "exported": exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        "total": rows.len(),
        "results": rows,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Serialize the view in the requested format and wrap it with the fixed
/// filename and MIME type for the host save-as capability.
pub fn export_view<'a, I>(
    records: I,
    format: ExportFormat,
    exported_at: DateTime<Utc>,
) -> Result<ExportPayload, ExportError>
where
    I: IntoIterator<Item = &'a RecoveryRecord>,
{
    let contents = match format {
        ExportFormat::Csv => to_csv(records)?,
        ExportFormat::Json => to_json(records, exported_at)?,
    };
    Ok(ExportPayload {
        file_name: format.file_name(),
        mime_type: format.mime_type(),
        contents,
    })
}
