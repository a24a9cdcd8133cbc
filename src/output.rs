//! Text summaries of the averaged results.
//!
//! Supports a logged table and JSON serialization.

use anyhow::Result;
use tracing::info;

use crate::types::AveragedRecord;

/// Logs one line per file size with its averaged timings.
pub fn print_pretty(records: &[AveragedRecord]) {
    for r in records {
        info!(
            filesize_mib = r.filesize_mib,
            avg_encode_ms = r.avg_encode_ms,
            avg_decode_ms = r.avg_decode_ms,
            "Averaged timings"
        );
    }
}

/// Serializes averaged records as pretty-printed JSON.
pub fn to_json(records: &[AveragedRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
