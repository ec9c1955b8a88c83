use thiserror::Error;

/// Errors raised by the visualizer and its renderers.
#[derive(Debug, Error)]
pub enum VizError {
    /// The request cannot be served as asked, e.g. the filters match more
    /// than one feature for a plot.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0} renderer is not available in this build")]
    RendererUnavailable(&'static str),

    #[cfg(feature = "table")]
    #[error("table rendering failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// The native plot window could not be opened or crashed.
    #[error("plot window failed: {0}")]
    Plot(String),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VizError>;
