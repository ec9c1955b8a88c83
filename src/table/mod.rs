use std::fmt;

use crate::report::classify::{classify_features, FeatureClasses};
use crate::report::model::Report;

pub mod render;

/// Text shown for a feature a module does not have.
pub const NOT_APPLICABLE: &str = "Not Applicable";

/// Leading non-feature columns of the scalar (tensor level) table.
pub const TENSOR_INFO_HEADERS: [&str; 2] = ["idx", "layer_fqn"];

/// Leading non-feature columns of the channel table.
pub const CHANNEL_INFO_HEADERS: [&str; 3] = ["idx", "layer_fqn", "channel"];

/// Position of the `channel` column in channel table rows.
pub const CHANNEL_COLUMN: usize = 2;

// ---------------------------------------------------------------------------
// Cell – one entry of a table row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Row counter or channel index.
    Index(usize),
    /// Module fqn.
    Label(String),
    Number(f64),
    Bool(bool),
    Text(String),
    NotApplicable,
}

impl Cell {
    /// Labels, free text and the "Not Applicable" marker are textual.
    pub fn is_textual(&self) -> bool {
        matches!(self, Cell::Label(_) | Cell::Text(_) | Cell::NotApplicable)
    }

    /// Numeric reading of a non-textual cell.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Index(i) => Some(*i as f64),
            Cell::Number(v) => Some(*v),
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Cell::Label(_) | Cell::Text(_) | Cell::NotApplicable => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Index(i) => write!(f, "{i}"),
            Cell::Label(s) | Cell::Text(s) => write!(f, "{s}"),
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::NotApplicable => f.write_str(NOT_APPLICABLE),
        }
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Header row plus body rows; every row is as long as the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table, giving it headers only when it has rows.
    fn with_rows(leading: &[&str], features: &[String], rows: Vec<Vec<Cell>>) -> Self {
        if rows.is_empty() {
            return Table::default();
        }
        let headers = leading
            .iter()
            .map(|h| h.to_string())
            .chain(features.iter().cloned())
            .collect();
        Table { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Number of columns after the first `leading` non-feature columns.
    pub fn feature_count(&self, leading: usize) -> usize {
        self.headers.len().saturating_sub(leading)
    }
}

/// The scalar ("tensor level") table and the channel table for one filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TablePair {
    pub scalar: Table,
    pub channel: Table,
}

impl TablePair {
    pub fn scalar_feature_count(&self) -> usize {
        self.scalar.feature_count(TENSOR_INFO_HEADERS.len())
    }

    pub fn channel_feature_count(&self) -> usize {
        self.channel.feature_count(CHANNEL_INFO_HEADERS.len())
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Classify the (already filtered) report and build both tables.
pub fn build_tables(report: &Report) -> TablePair {
    let FeatureClasses {
        scalar,
        channel,
        num_channels,
    } = classify_features(report);

    TablePair {
        scalar: build_scalar_table(report, &scalar),
        channel: build_channel_table(report, &channel, num_channels),
    }
}

/// One row per module: `idx, layer_fqn, <features…>`.
pub fn build_scalar_table(report: &Report, features: &[String]) -> Table {
    if features.is_empty() {
        return Table::default();
    }

    let rows = report
        .modules()
        .enumerate()
        .map(|(index, (fqn, values))| {
            let mut row = Vec::with_capacity(TENSOR_INFO_HEADERS.len() + features.len());
            row.push(Cell::Index(index));
            row.push(Cell::Label(fqn.to_string()));
            row.extend(features.iter().map(|feature| {
                values
                    .get(feature)
                    .map_or(Cell::NotApplicable, |v| v.scalar_cell())
            }));
            row
        })
        .collect();

    Table::with_rows(&TENSOR_INFO_HEADERS, features, rows)
}

/// One row per (module, channel): `idx, layer_fqn, channel, <features…>`.
pub fn build_channel_table(report: &Report, features: &[String], num_channels: usize) -> Table {
    if features.is_empty() {
        return Table::default();
    }

    let mut rows = Vec::with_capacity(report.len() * num_channels);
    for (fqn, values) in report.modules() {
        for channel in 0..num_channels {
            let mut row = Vec::with_capacity(CHANNEL_INFO_HEADERS.len() + features.len());
            row.push(Cell::Index(rows.len()));
            row.push(Cell::Label(fqn.to_string()));
            row.push(Cell::Index(channel));
            row.extend(features.iter().map(|feature| {
                values
                    .get(feature)
                    .map_or(Cell::NotApplicable, |v| v.channel_cell(channel))
            }));
            rows.push(row);
        }
    }

    Table::with_rows(&CHANNEL_INFO_HEADERS, features, rows)
}
