use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{ChartData, ChartSink, ChartStyle, draw_chart};
use crate::error::{PlotError, Result};

/// Image formats [`FileExporter`] can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("png") => Ok(ChartFormat::Png),
            Some("svg") => Ok(ChartFormat::Svg),
            _ => Err(PlotError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// A [`ChartSink`] that writes the chart to an image file instead of a window.
pub struct FileExporter {
    path: PathBuf,
}

impl FileExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartSink for FileExporter {
    fn show(&self, data: &ChartData, style: &ChartStyle) -> Result<()> {
        let format = ChartFormat::from_path(&self.path)?;
        let size = (style.width, style.height);

        match format {
            ChartFormat::Png => {
                let root = BitMapBackend::new(&self.path, size).into_drawing_area();
                draw_chart(&root, data, style)?;
            }
            ChartFormat::Svg => {
                let root = SVGBackend::new(&self.path, size).into_drawing_area();
                draw_chart(&root, data, style)?;
            }
        }

        info!(path = %self.path.display(), ?format, "Chart written");
        Ok(())
    }
}
