use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::{RecoveryDataset, RecoveryRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a recovery report from a file. Dispatch by extension.
///
/// Only `.json` reports are supported: the recovery host writes its results
/// as the `{ "results": [...], "statistics": {...} }` contract object.
pub fn load_file(path: &Path) -> Result<RecoveryDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<RecoveryDataset> {
    let text = std::fs::read_to_string(path).context("reading report file")?;
    parse_report(&text)
}

/// Parse report text into a dataset.
///
/// Accepts either the full contract object or a bare top-level array of
/// records (statistics default to zero). Missing record fields default per
/// the data model; a missing `results` key yields the empty state rather
/// than an error.
pub fn parse_report(text: &str) -> Result<RecoveryDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing report JSON")?;

    if root.is_array() {
        let results: Vec<RecoveryRecord> =
            serde_json::from_value(root).context("parsing record array")?;
        return Ok(RecoveryDataset {
            results,
            statistics: Default::default(),
        });
    }

    serde_json::from_value(root).context("parsing report object")
}
