use log::debug;

use crate::error::{Result, VizError};
use crate::table::{
    Cell, Table, TablePair, CHANNEL_COLUMN, CHANNEL_INFO_HEADERS, TENSOR_INFO_HEADERS,
};

/// Y values of a [`Projection`].
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// One value per accepted module row.
    Scalar(Vec<f64>),
    /// One sub-series per channel.
    Channels(Vec<Vec<f64>>),
}

/// Plot-ready x / y series for a single feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Row number (scalar) or module position (channel) of each point.
    pub x: Vec<usize>,
    pub y: Series,
}

impl Projection {
    pub fn is_per_channel(&self) -> bool {
        matches!(self.y, Series::Channels(_))
    }

    /// Every y value, channel sub-series concatenated in channel order.
    pub fn flattened(&self) -> Vec<f64> {
        match &self.y {
            Series::Scalar(values) => values.clone(),
            Series::Channels(channels) => channels.iter().flatten().copied().collect(),
        }
    }
}

fn ambiguous_feature(scalar: usize, channel: usize) -> VizError {
    VizError::InvalidArgument(format!(
        "Make sure to pick only a single feature with your filter to plot a graph \
         (matched {scalar} tensor level and {channel} channel level features). \
         Call list_feature_names() to find unique feature names and pick one of those to plot."
    ))
}

/// Reduce a table pair holding exactly one feature to x / y series.
///
/// Fails with [`VizError::InvalidArgument`] unless exactly one feature, of
/// either kind, survived the filters.
pub fn project(tables: &TablePair) -> Result<Projection> {
    let scalar = tables.scalar_feature_count();
    let channel = tables.channel_feature_count();

    let projection = match (scalar, channel) {
        (1, 0) => project_scalar(&tables.scalar),
        (0, 1) => project_channels(&tables.channel),
        _ => return Err(ambiguous_feature(scalar, channel)),
    };
    debug!(
        "projected {} x values (per channel: {})",
        projection.x.len(),
        projection.is_per_channel()
    );
    Ok(projection)
}

fn project_scalar(table: &Table) -> Projection {
    let column = TENSOR_INFO_HEADERS.len();
    let mut x = Vec::new();
    let mut y = Vec::new();

    for (row_number, row) in table.rows.iter().enumerate() {
        let Some(value) = row[column].as_f64() else {
            continue;
        };
        if x.last() != Some(&row_number) {
            x.push(row_number);
        }
        y.push(value);
    }

    Projection {
        x,
        y: Series::Scalar(y),
    }
}

/// Rows are module-major / channel-minor. A value is appended to its
/// channel's sub-series whenever present, so sub-series only line up with
/// `x` when every module has every channel.
fn project_channels(table: &Table) -> Projection {
    let column = CHANNEL_INFO_HEADERS.len();
    let num_channels = table
        .rows
        .iter()
        .filter_map(|row| channel_of(row))
        .max()
        .map_or(0, |max| max + 1);

    let mut x = Vec::new();
    let mut y = vec![Vec::new(); num_channels];

    for (row_number, row) in table.rows.iter().enumerate() {
        let Some(channel) = channel_of(row) else {
            continue;
        };
        let module = row_number / num_channels;
        let Some(value) = row[column].as_f64() else {
            continue;
        };
        if x.last() != Some(&module) {
            x.push(module);
        }
        y[channel].push(value);
    }

    Projection {
        x,
        y: Series::Channels(y),
    }
}

fn channel_of(row: &[Cell]) -> Option<usize> {
    match row.get(CHANNEL_COLUMN) {
        Some(Cell::Index(channel)) => Some(*channel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::filter::filter_report;
    use crate::report::model::Report;
    use crate::table::build_tables;

    fn project_json(json: &str, feature: &str) -> Result<Projection> {
        let report: Report = serde_json::from_str(json).unwrap();
        project(&build_tables(&filter_report(&report, feature, "")))
    }

    const EXAMPLE: &str = r#"{
        "layer1": {"min": {"tensor": 0.1}, "per_ch_max": {"channels": [0.5, 0.9]}},
        "layer2": {"min": {"tensor": 0.3}, "per_ch_max": {"channels": [0.2, 0.4]}}
    }"#;

    #[test]
    fn scalar_feature() {
        let projection = project_json(EXAMPLE, "min").unwrap();
        assert_eq!(projection.x, [0, 1]);
        assert_eq!(projection.y, Series::Scalar(vec![0.1, 0.3]));
        assert!(!projection.is_per_channel());
    }

    #[test]
    fn channel_feature() {
        let projection = project_json(EXAMPLE, "per_ch").unwrap();
        assert_eq!(projection.x, [0, 1]);
        assert_eq!(
            projection.y,
            Series::Channels(vec![vec![0.5, 0.2], vec![0.9, 0.4]])
        );
        assert!(projection.is_per_channel());
        assert_eq!(projection.flattened(), [0.5, 0.2, 0.9, 0.4]);
    }

    #[test]
    fn several_features_are_rejected() {
        let err = project_json(EXAMPLE, "").unwrap_err();
        assert!(matches!(err, VizError::InvalidArgument(_)));
        assert!(err.to_string().contains("list_feature_names"));
    }

    #[test]
    fn no_feature_is_rejected() {
        assert!(matches!(
            project_json(EXAMPLE, "does_not_exist"),
            Err(VizError::InvalidArgument(_))
        ));
    }

    #[test]
    fn one_of_each_kind_is_rejected() {
        let json = r#"{"a": {"max": {"tensor": 1.0}, "per_ch_max": {"channels": [1.0]}}}"#;
        assert!(matches!(
            project_json(json, "max"),
            Err(VizError::InvalidArgument(_))
        ));
    }

    #[test]
    fn scalar_skips_missing_and_text_values() {
        let json = r#"{
            "a": {"stat": {"tensor": 1.0}},
            "b": {},
            "c": {"stat": {"text": "n/a"}},
            "d": {"stat": {"bool": true}}
        }"#;
        let projection = project_json(json, "stat").unwrap();
        assert_eq!(projection.x, [0, 3]);
        assert_eq!(projection.y, Series::Scalar(vec![1.0, 1.0]));
    }

    #[test]
    fn module_without_channel_feature_is_skipped() {
        let json = r#"{
            "a": {"per_ch": {"channels": [0.5, 0.9]}},
            "b": {},
            "c": {"per_ch": {"channels": [0.1, 0.2]}}
        }"#;
        let projection = project_json(json, "per_ch").unwrap();
        assert_eq!(projection.x, [0, 2]);
        assert_eq!(
            projection.y,
            Series::Channels(vec![vec![0.5, 0.1], vec![0.9, 0.2]])
        );
    }

    // A module missing only some channels leaves the channel sub-series with
    // different lengths; x still lists the module once.
    #[test]
    fn partially_missing_channels_diverge() {
        let json = r#"{
            "a": {"per_ch": {"channels": [0.5]}},
            "b": {"per_ch": {"channels": [0.2, 0.4]}}
        }"#;
        let projection = project_json(json, "per_ch").unwrap();
        assert_eq!(projection.x, [0, 1]);
        assert_eq!(
            projection.y,
            Series::Channels(vec![vec![0.5, 0.2], vec![0.4]])
        );
    }
}
