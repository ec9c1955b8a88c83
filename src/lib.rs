//! Table, plot and histogram views over per-module model diagnostic reports.
//!
//! A [`Report`] maps module fqns (in model order) to named statistics. The
//! [`ModelReportVisualizer`] filters it by module / feature substrings, splits
//! the surviving features into tensor level and channel level tables, and
//! projects a single feature into plot-ready series.
//!
//! Renderers are optional: the `table` feature prints tables through Arrow's
//! pretty printer, the `plot` feature opens native chart windows.

#[cfg(feature = "plot")]
mod app;
pub mod capabilities;
pub mod chart;
#[cfg(feature = "plot")]
mod color;
pub mod error;
pub mod options;
pub mod projection;
pub mod report;
pub mod table;
pub mod ui;
pub mod visualizer;

pub use capabilities::Capabilities;
pub use error::{Result, VizError};
pub use options::RenderOptions;
pub use projection::{Projection, Series};
pub use report::model::{FeatureMap, FeatureValue, Report};
pub use report::sample::sample_report;
pub use table::{Cell, Table, TablePair};
pub use visualizer::ModelReportVisualizer;
