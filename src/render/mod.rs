//! Line chart of averaged encode/decode times against file size.
//!
//! [`ChartData`] is the unzipped, plot-ready form of the averaged records.
//! [`ChartSink`] is the trait for anything that can present a chart.
//! [`WindowViewer`] opens a native window; [`FileExporter`] writes PNG or SVG.

mod chart;
mod export;
mod window;

pub use chart::draw_chart;
pub use export::{ChartFormat, FileExporter};
pub use window::WindowViewer;

use std::ops::Range;
use tracing::info;

use crate::error::{PlotError, Result};
use crate::types::AveragedRecord;

pub const DEFAULT_TITLE: &str = "Average Encode and Decode Times";
pub const X_LABEL: &str = "Filesize (MiB)";
pub const Y_LABEL: &str = "Time (ms)";
pub const ENCODE_LABEL: &str = "Average Encode Time";
pub const DECODE_LABEL: &str = "Average Decode Time";

/// Presentation settings shared by every sink.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: 1024,
            height: 768,
        }
    }
}

/// Parallel series sharing the file size axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub filesizes: Vec<u64>,
    pub avg_encode_ms: Vec<f64>,
    pub avg_decode_ms: Vec<f64>,
}

impl ChartData {
    /// Unzips averaged records into three parallel series, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::EmptyInput`] when `records` is empty.
    pub fn from_records(records: &[AveragedRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(PlotError::EmptyInput);
        }

        let mut data = ChartData {
            filesizes: Vec::with_capacity(records.len()),
            avg_encode_ms: Vec::with_capacity(records.len()),
            avg_decode_ms: Vec::with_capacity(records.len()),
        };
        for r in records {
            data.filesizes.push(r.filesize_mib);
            data.avg_encode_ms.push(r.avg_encode_ms);
            data.avg_decode_ms.push(r.avg_decode_ms);
        }
        Ok(data)
    }

    /// Axis ranges covering every point, with the y axis anchored at zero.
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let x_min = self.filesizes.iter().copied().min().unwrap_or(0) as f64;
        let x_max = self.filesizes.iter().copied().max().unwrap_or(0) as f64;
        let x_range = if x_min < x_max {
            x_min..x_max
        } else {
            (x_min - 1.0).max(0.0)..x_max + 1.0
        };

        let y_max = self
            .avg_encode_ms
            .iter()
            .chain(&self.avg_decode_ms)
            .copied()
            .fold(0.0, f64::max);
        let y_range = if y_max > 0.0 {
            0.0..y_max * 1.1
        } else {
            0.0..1.0
        };

        (x_range, y_range)
    }

    pub fn len(&self) -> usize {
        self.filesizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filesizes.is_empty()
    }
}

/// Something that can present a finished chart.
pub trait ChartSink {
    fn show(&self, data: &ChartData, style: &ChartStyle) -> Result<()>;
}

/// Checks there is something to plot, then hands the series to `sink`.
///
/// # Errors
///
/// Returns [`PlotError::EmptyInput`] for an empty slice before `sink` is
/// touched, otherwise whatever the sink reports.
#[tracing::instrument(skip_all, fields(points = records.len()))]
pub fn render<S: ChartSink + ?Sized>(
    sink: &S,
    records: &[AveragedRecord],
    style: &ChartStyle,
) -> Result<()> {
    let data = ChartData::from_records(records)?;
    info!(points = data.len(), title = %style.title, "Rendering chart");
    sink.show(&data, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        shown: RefCell<Vec<ChartData>>,
    }

    impl ChartSink for RecordingSink {
        fn show(&self, data: &ChartData, _style: &ChartStyle) -> Result<()> {
            self.shown.borrow_mut().push(data.clone());
            Ok(())
        }
    }

    fn averaged(filesize: u64, encode: f64, decode: f64) -> AveragedRecord {
        AveragedRecord {
            filesize_mib: filesize,
            avg_encode_ms: encode,
            avg_decode_ms: decode,
        }
    }

    #[test]
    fn test_from_records_empty_is_error() {
        let err = ChartData::from_records(&[]).unwrap_err();
        assert!(matches!(err, PlotError::EmptyInput));
    }

    #[test]
    fn test_from_records_unzips_in_order() {
        let data =
            ChartData::from_records(&[averaged(200, 9.0, 12.0), averaged(100, 5.0, 8.0)]).unwrap();

        assert_eq!(data.filesizes, vec![200, 100]);
        assert_eq!(data.avg_encode_ms, vec![9.0, 5.0]);
        assert_eq!(data.avg_decode_ms, vec![12.0, 8.0]);
        assert_eq!(data.len(), 2);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_bounds_cover_all_points() {
        let data =
            ChartData::from_records(&[averaged(64, 10.0, 40.0), averaged(16, 2.0, 5.0)]).unwrap();
        let (x, y) = data.bounds();

        assert_eq!(x, 16.0..64.0);
        assert_eq!(y.start, 0.0);
        assert!(y.end >= 40.0);
    }

    #[test]
    fn test_bounds_single_point_is_padded() {
        let data = ChartData::from_records(&[averaged(100, 50.0, 80.0)]).unwrap();
        let (x, y) = data.bounds();

        assert!(x.start < 100.0 && x.end > 100.0);
        assert!(y.end > 80.0);
    }

    #[test]
    fn test_bounds_all_zero_times() {
        let data = ChartData::from_records(&[averaged(0, 0.0, 0.0)]).unwrap();
        let (x, y) = data.bounds();

        assert_eq!(x, 0.0..1.0);
        assert_eq!(y, 0.0..1.0);
    }

    #[test]
    fn test_render_empty_never_reaches_sink() {
        let sink = RecordingSink::default();
        let err = render(&sink, &[], &ChartStyle::default()).unwrap_err();

        assert!(matches!(err, PlotError::EmptyInput));
        assert!(sink.shown.borrow().is_empty());
    }

    #[test]
    fn test_render_hands_series_to_sink() {
        let sink = RecordingSink::default();
        render(&sink, &[averaged(100, 55.0, 90.0)], &ChartStyle::default()).unwrap();

        let shown = sink.shown.borrow();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].filesizes, vec![100]);
        assert_eq!(shown[0].avg_encode_ms, vec![55.0]);
    }

    #[test]
    fn test_default_style() {
        let style = ChartStyle::default();
        assert_eq!(style.title, DEFAULT_TITLE);
        assert_eq!((style.width, style.height), (1024, 768));
    }
}
