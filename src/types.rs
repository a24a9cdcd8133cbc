//! Data types passed between the pipeline stages.

use serde::Serialize;

/// One benchmark run pulled out of the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingRecord {
    pub filesize_mib: u64,
    pub encode_ms: u64,
    pub decode_ms: u64,
}

/// Mean encode and decode time for every run of a single file size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AveragedRecord {
    pub filesize_mib: u64,
    pub avg_encode_ms: f64,
    pub avg_decode_ms: f64,
}
