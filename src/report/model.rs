use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::table::Cell;

// ---------------------------------------------------------------------------
// FeatureValue – one statistic recorded for one module
// ---------------------------------------------------------------------------

/// A single diagnostic value, tagged by its shape when the report is built.
///
/// Everything except [`FeatureValue::Channels`] is a scalar ("tensor level")
/// value. Only [`FeatureValue::Tensor`] counts as plottable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureValue {
    /// 0-dimensional numeric container.
    Tensor(f64),
    /// Bare numeric value.
    Number(f64),
    Bool(bool),
    Text(String),
    /// One value per channel of the module.
    Channels(Vec<f64>),
}

/// Shape of a [`FeatureValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Scalar,
    Channel { channels: usize },
}

impl FeatureValue {
    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureValue::Channels(values) => FeatureKind::Channel {
                channels: values.len(),
            },
            _ => FeatureKind::Scalar,
        }
    }

    pub fn is_plottable(&self) -> bool {
        matches!(self, FeatureValue::Tensor(_))
    }

    /// Cell for the scalar table. Numeric containers are unwrapped.
    pub fn scalar_cell(&self) -> Cell {
        match self {
            FeatureValue::Tensor(v) | FeatureValue::Number(v) => Cell::Number(*v),
            FeatureValue::Bool(b) => Cell::Bool(*b),
            FeatureValue::Text(s) => Cell::Text(s.clone()),
            // Never reached for a classified scalar feature.
            FeatureValue::Channels(_) => Cell::NotApplicable,
        }
    }

    /// Cell for one channel of the channel table.
    ///
    /// Scalars and channel indices past the end have no per-channel value.
    pub fn channel_cell(&self, channel: usize) -> Cell {
        match self {
            FeatureValue::Channels(values) => values
                .get(channel)
                .map_or(Cell::NotApplicable, |v| Cell::Number(*v)),
            _ => Cell::NotApplicable,
        }
    }
}

// ---------------------------------------------------------------------------
// Report – module fqn → feature name → value
// ---------------------------------------------------------------------------

/// Features recorded for one module, in insertion order.
pub type FeatureMap = IndexMap<String, FeatureValue>;

/// The full report, keyed by module fqn in model order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    modules: IndexMap<String, FeatureMap>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a module entry. A new module goes to the end.
    pub fn insert_module(&mut self, module_fqn: impl Into<String>, features: FeatureMap) {
        self.modules.insert(module_fqn.into(), features);
    }

    /// Record one feature for a module, creating the module if needed.
    pub fn insert_feature(
        &mut self,
        module_fqn: &str,
        feature_name: impl Into<String>,
        value: FeatureValue,
    ) {
        self.modules
            .entry(module_fqn.to_string())
            .or_default()
            .insert(feature_name.into(), value);
    }

    pub fn module(&self, module_fqn: &str) -> Option<&FeatureMap> {
        self.modules.get(module_fqn)
    }

    /// Modules in report order.
    pub fn modules(&self) -> impl Iterator<Item = (&str, &FeatureMap)> {
        self.modules.iter().map(|(fqn, features)| (fqn.as_str(), features))
    }

    pub fn module_fqns(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Number of modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl FromIterator<(String, FeatureMap)> for Report {
    fn from_iter<I: IntoIterator<Item = (String, FeatureMap)>>(iter: I) -> Self {
        Report {
            modules: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keeps_module_order() {
        let report: Report = serde_json::from_str(
            r#"{
                "zeta": {"min": {"tensor": 1.0}},
                "alpha": {"flag": {"bool": true}, "note": {"text": "keep"}},
                "mid": {"per_ch": {"channels": [1.0, 2.0]}}
            }"#,
        )
        .unwrap();

        let order: Vec<&str> = report.module_fqns().collect();
        assert_eq!(order, ["zeta", "alpha", "mid"]);
        assert_eq!(
            report.module("mid").unwrap()["per_ch"].kind(),
            FeatureKind::Channel { channels: 2 }
        );
        assert_eq!(
            report.module("alpha").unwrap()["note"],
            FeatureValue::Text("keep".into())
        );
    }

    #[test]
    fn channel_cell_past_end_is_not_applicable() {
        let value = FeatureValue::Channels(vec![0.5]);
        assert_eq!(value.channel_cell(0), Cell::Number(0.5));
        assert_eq!(value.channel_cell(1), Cell::NotApplicable);
        assert_eq!(FeatureValue::Tensor(2.0).channel_cell(0), Cell::NotApplicable);
    }

    #[test]
    fn only_tensors_are_plottable() {
        assert!(FeatureValue::Tensor(0.0).is_plottable());
        assert!(!FeatureValue::Number(0.0).is_plottable());
        assert!(!FeatureValue::Channels(vec![0.0]).is_plottable());
    }

    #[test]
    fn insert_feature_creates_module_at_end() {
        let mut report = Report::new();
        report.insert_module("a", FeatureMap::new());
        report.insert_feature("b", "min", FeatureValue::Tensor(0.1));
        report.insert_feature("a", "max", FeatureValue::Tensor(0.9));

        assert_eq!(report.module_fqns().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(report.module("a").unwrap().len(), 1);
    }
}
