use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// SizeValue – the size field as supplied by the recovery host
// ---------------------------------------------------------------------------

/// A file size as it appears in the report: either a raw byte count or a
/// human-readable string such as `"1.2 GB"`. Parsing to bytes happens at
/// read time in [`crate::data::size`]; the ingested value is kept verbatim
/// so exports can reproduce it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Bytes(u64),
    Text(String),
}

impl Default for SizeValue {
    fn default() -> Self {
        SizeValue::Bytes(0)
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeValue::Bytes(n) => write!(f, "{n}"),
            SizeValue::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// RecoveryRecord – one row of the report
// ---------------------------------------------------------------------------

/// The outcome of recovering a single file. Immutable once ingested.
///
/// Field names follow the host contract (camelCase JSON). The model fields
/// are present only for records tied to a recognized model; `duplicate_files`
/// lists the filepaths sharing identical content with this record and never
/// includes the record's own `filepath`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryRecord {
    pub filename: String,
    pub filepath: String,
    /// Free-text status string; classified at read time, never stored
    /// canonically (see [`crate::data::status`]).
    pub status: String,
    #[serde(default)]
    pub size: SizeValue,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub version_id: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub duplicate_files: Vec<String>,
}

// ---------------------------------------------------------------------------
// Statistics – host-supplied summary counts
// ---------------------------------------------------------------------------

/// Summary counts supplied by the recovery host alongside the records.
/// Never derived from the record list; every field defaults when absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default)]
    pub successful: u64,
    #[serde(default)]
    pub failed: u64,
    #[serde(default)]
    pub skipped: u64,
    #[serde(default)]
    pub duplicates: u64,
    #[serde(default)]
    pub total: u64,
    /// Combined size of all processed files, in bytes.
    #[serde(default)]
    pub total_size: u64,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// ---------------------------------------------------------------------------
// RecoveryDataset – the complete ingested report
// ---------------------------------------------------------------------------

/// The full ingested report: ordered records plus the statistics summary.
/// Re-ingestion replaces the dataset wholly; there is no incremental merge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryDataset {
    #[serde(default)]
    pub results: Vec<RecoveryRecord>,
    #[serde(default)]
    pub statistics: Statistics,
}

impl RecoveryDataset {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_value_deserializes_both_shapes() {
        let bytes: SizeValue = serde_json::from_str("2147483648").unwrap();
        assert_eq!(bytes, SizeValue::Bytes(2_147_483_648));

        let text: SizeValue = serde_json::from_str("\"2.0 GB\"").unwrap();
        assert_eq!(text, SizeValue::Text("2.0 GB".into()));
    }

    #[test]
    fn record_defaults_optional_fields() {
        let rec: RecoveryRecord = serde_json::from_str(
            r#"{"filename":"a.safetensors","filepath":"/m/a.safetensors","status":"Success"}"#,
        )
        .unwrap();
        assert_eq!(rec.size, SizeValue::Bytes(0));
        assert_eq!(rec.details, "");
        assert_eq!(rec.model_id, None);
        assert!(rec.duplicate_files.is_empty());
    }

    #[test]
    fn statistics_fields_default_to_zero() {
        let stats: Statistics = serde_json::from_str(r#"{"successful":3}"#).unwrap();
        assert_eq!(stats.successful, 3);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.total_size, 0);
        assert_eq!(stats.timestamp, None);
    }
}
