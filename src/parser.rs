//! Timing extraction from benchmark logs.
//!
//! A run is reported as a `Filename: <n>_random_MiB.bin` header followed, anywhere
//! later in the text, by two `Elapsed Time <ms> ms` lines: encode first,
//! decode second.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{PlotError, Result};
use crate::types::TimingRecord;

static FILENAME_TOKEN: OnceLock<Regex> = OnceLock::new();
static ELAPSED_TOKEN: OnceLock<Regex> = OnceLock::new();

fn filename_token() -> &'static Regex {
    FILENAME_TOKEN.get_or_init(|| {
        Regex::new(r"Filename: (\d+)_random_MiB\.bin").expect("filename pattern is valid")
    })
}

fn elapsed_token() -> &'static Regex {
    ELAPSED_TOKEN
        .get_or_init(|| Regex::new(r"Elapsed Time (\d+) ms").expect("elapsed pattern is valid"))
}

/// Reads the log at `path` and extracts every timing record in it.
///
/// # Errors
///
/// Returns [`PlotError::FileNotFound`] if the file is missing or unreadable.
/// The content itself never causes an error; text that doesn't match is skipped.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn parse_log(path: &Path) -> Result<Vec<TimingRecord>> {
    let bytes = std::fs::read(path).map_err(|source| PlotError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);
    debug!(bytes = bytes.len(), "Log read, scanning for runs");

    let records = parse_log_str(&content);
    debug!(records = records.len(), "Log scan complete");
    Ok(records)
}

/// Scans `content` for non-overlapping filename / encode / decode triples.
///
/// Each triple starts at the next `Filename:` header and takes the first two
/// elapsed-time tokens after it. Headers between those, and file names
/// mentioned anywhere without the header, are treated as ordinary text.
pub fn parse_log_str(content: &str) -> Vec<TimingRecord> {
    let mut records = Vec::new();
    let mut cursor = 0;

    while let Some((filesize_mib, after_name)) = next_token(filename_token(), content, cursor) {
        // Later filenames only see a subset of these elapsed tokens, so none of them can finish either.
        let Some((encode_ms, after_encode)) = next_token(elapsed_token(), content, after_name)
        else {
            break;
        };
        let Some((decode_ms, after_decode)) = next_token(elapsed_token(), content, after_encode)
        else {
            break;
        };

        records.push(TimingRecord {
            filesize_mib,
            encode_ms,
            decode_ms,
        });
        cursor = after_decode;
    }

    records
}

/// First token at or after `start` whose digits fit in a `u64`, with the
/// byte offset just past it.
fn next_token(re: &Regex, haystack: &str, start: usize) -> Option<(u64, usize)> {
    re.captures_iter(&haystack[start..]).find_map(|caps| {
        let value = caps[1].parse::<u64>().ok()?;
        Some((value, start + caps.get(0)?.end()))
    })
}
