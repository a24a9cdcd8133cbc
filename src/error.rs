//! Error types for the parse → aggregate → render pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a plotting run.
#[derive(Error, Debug)]
pub enum PlotError {
    /// The log path does not exist or could not be read
    #[error("log file {} not found or unreadable: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Nothing to plot
    #[error("no timing records to plot")]
    EmptyInput,

    /// Export path has an extension no backend can write
    #[error("unsupported chart format for {}: expected .png or .svg", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Drawing backend or viewer failure
    #[error("chart rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;

impl PlotError {
    pub(crate) fn render<E: std::fmt::Display>(err: E) -> Self {
        PlotError::Render(err.to_string())
    }
}
