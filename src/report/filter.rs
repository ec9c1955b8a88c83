use log::debug;

use super::model::{FeatureMap, Report};

// ---------------------------------------------------------------------------
// Substring filters over module fqns and feature names
// ---------------------------------------------------------------------------

/// An empty filter matches everything; otherwise `name` must contain it.
fn matches(filter: &str, name: &str) -> bool {
    filter.is_empty() || name.contains(filter)
}

/// Narrow a report to the modules whose fqn contains `module_filter` and,
/// within them, the features whose name contains `feature_filter`.
///
/// * Module order (and feature order within a module) is kept.
/// * A matching module with no matching feature stays as an empty entry.
pub fn filter_report(report: &Report, feature_filter: &str, module_filter: &str) -> Report {
    let filtered: Report = report
        .modules()
        .filter(|(fqn, _)| matches(module_filter, fqn))
        .map(|(fqn, features)| {
            let kept: FeatureMap = features
                .iter()
                .filter(|(name, _)| matches(feature_filter, name))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect();
            (fqn.to_string(), kept)
        })
        .collect();

    debug!(
        "filter (feature={feature_filter:?}, module={module_filter:?}) kept {} of {} modules",
        filtered.len(),
        report.len()
    );
    filtered
}
