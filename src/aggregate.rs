use indexmap::IndexMap;

use crate::types::{AveragedRecord, TimingRecord};

/// Running totals for every run of a single file size.
#[derive(Debug, Default)]
struct SizeBucket {
    encode_total: u128,
    decode_total: u128,
    runs: u64,
}

impl SizeBucket {
    fn push(&mut self, record: &TimingRecord) {
        self.encode_total += u128::from(record.encode_ms);
        self.decode_total += u128::from(record.decode_ms);
        self.runs += 1;
    }

    /// Mean of `total` over the bucket's runs. NaN for a bucket with no runs,
    /// which `average_by_size` never produces.
    fn mean(&self, total: u128) -> f64 {
        if self.runs == 0 {
            return f64::NAN;
        }
        total as f64 / self.runs as f64
    }
}

/// Averages encode and decode times per file size.
///
/// Produces one [`AveragedRecord`] per distinct size, in the order each size
/// first appears in `records`.
pub fn average_by_size(records: &[TimingRecord]) -> Vec<AveragedRecord> {
    let mut buckets: IndexMap<u64, SizeBucket> = IndexMap::new();

    for record in records {
        buckets.entry(record.filesize_mib).or_default().push(record);
    }

    buckets
        .into_iter()
        .map(|(filesize_mib, bucket)| AveragedRecord {
            filesize_mib,
            avg_encode_ms: bucket.mean(bucket.encode_total),
            avg_decode_ms: bucket.mean(bucket.decode_total),
        })
        .collect()
}
