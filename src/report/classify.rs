use std::collections::BTreeSet;

use log::debug;

use super::model::{FeatureKind, Report};

/// Feature names of a report split by shape, each list sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureClasses {
    /// Features with one value per module.
    pub scalar: Vec<String>,
    /// Features with one value per channel.
    pub channel: Vec<String>,
    /// Channel count taken from the last channel value seen.
    pub num_channels: usize,
}

/// Classify every feature name in `report`.
///
/// A name is a channel feature as soon as one module holds it as a
/// per-channel sequence; every other name is scalar.
pub fn classify_features(report: &Report) -> FeatureClasses {
    let mut all: BTreeSet<&str> = BTreeSet::new();
    let mut channel: BTreeSet<&str> = BTreeSet::new();
    let mut num_channels = 0;

    for (_, features) in report.modules() {
        for (name, value) in features {
            all.insert(name);
            if let FeatureKind::Channel { channels } = value.kind() {
                channel.insert(name);
                num_channels = channels;
            }
        }
    }

    let classes = FeatureClasses {
        scalar: all
            .difference(&channel)
            .map(|name| name.to_string())
            .collect(),
        channel: channel.into_iter().map(str::to_string).collect(),
        num_channels,
    };
    debug!(
        "classified {} scalar and {} channel features ({} channels)",
        classes.scalar.len(),
        classes.channel.len(),
        classes.num_channels
    );
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_sorts_names() {
        let report: Report = serde_json::from_str(
            r#"{
                "a": {"zmax": {"tensor": 1.0}, "per_ch": {"channels": [1.0, 2.0]}, "flag": {"bool": false}},
                "b": {"amin": {"number": 0.0}}
            }"#,
        )
        .unwrap();

        let classes = classify_features(&report);
        assert_eq!(classes.scalar, ["amin", "flag", "zmax"]);
        assert_eq!(classes.channel, ["per_ch"]);
        assert_eq!(classes.num_channels, 2);
    }

    #[test]
    fn mixed_shapes_classify_as_channel_only() {
        let report: Report = serde_json::from_str(
            r#"{
                "a": {"stat": {"tensor": 1.0}},
                "b": {"stat": {"channels": [1.0, 2.0, 3.0]}}
            }"#,
        )
        .unwrap();

        let classes = classify_features(&report);
        assert!(classes.scalar.is_empty());
        assert_eq!(classes.channel, ["stat"]);
    }

    #[test]
    fn last_channel_length_wins() {
        let report: Report = serde_json::from_str(
            r#"{
                "a": {"x": {"channels": [1.0, 2.0, 3.0]}},
                "b": {"y": {"channels": [1.0]}}
            }"#,
        )
        .unwrap();

        assert_eq!(classify_features(&report).num_channels, 1);
    }

    #[test]
    fn empty_report_has_no_features() {
        assert_eq!(classify_features(&Report::new()), FeatureClasses::default());
    }
}
