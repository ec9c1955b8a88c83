use std::collections::BTreeSet;

use model_report_viz::chart::ChartKind;
use model_report_viz::report::filter::filter_report;
use model_report_viz::{
    sample_report, Capabilities, Cell, FeatureMap, FeatureValue, ModelReportVisualizer, Report,
    Series, VizError,
};

fn example_report() -> Report {
    [
        (
            "layer1".to_string(),
            FeatureMap::from([
                ("min".to_string(), FeatureValue::Tensor(0.1)),
                ("per_ch_max".to_string(), FeatureValue::Channels(vec![0.5, 0.9])),
            ]),
        ),
        (
            "layer2".to_string(),
            FeatureMap::from([
                ("min".to_string(), FeatureValue::Tensor(0.3)),
                ("per_ch_max".to_string(), FeatureValue::Channels(vec![0.2, 0.4])),
            ]),
        ),
    ]
    .into_iter()
    .collect()
}

fn visualizer(report: Report) -> ModelReportVisualizer {
    ModelReportVisualizer::with_capabilities(report, Capabilities::none())
}

#[test]
fn example_tables() {
    let tables = visualizer(example_report()).build_tables("", "");

    assert_eq!(tables.scalar.headers, ["idx", "layer_fqn", "min"]);
    assert_eq!(tables.scalar.rows[1][2], Cell::Number(0.3));

    assert_eq!(tables.channel.headers, ["idx", "layer_fqn", "channel", "per_ch_max"]);
    let values: Vec<Cell> = tables.channel.rows.iter().map(|r| r[3].clone()).collect();
    assert_eq!(
        values,
        [0.5, 0.9, 0.2, 0.4].map(Cell::Number).to_vec()
    );
    let idx: Vec<Cell> = tables.channel.rows.iter().map(|r| r[0].clone()).collect();
    assert_eq!(idx, (0..4).map(Cell::Index).collect::<Vec<_>>());
}

#[test]
fn example_projection() {
    let visualizer = visualizer(example_report());

    let projection = visualizer.project("min", "").unwrap();
    assert_eq!(projection.x, [0, 1]);
    assert_eq!(projection.y, Series::Scalar(vec![0.1, 0.3]));
    assert!(!projection.is_per_channel());

    let err = visualizer.project("", "").unwrap_err();
    assert!(matches!(err, VizError::InvalidArgument(_)));
}

#[test]
fn plottable_feature_names() {
    let expected: BTreeSet<String> = ["min".to_string()].into();
    assert_eq!(visualizer(example_report()).list_feature_names(true), expected);
}

#[test]
fn unfiltered_copy_and_idempotence() {
    let report = sample_report(11);
    assert_eq!(filter_report(&report, "", ""), report);

    let once = filter_report(&report, "per_channel", "block");
    assert_eq!(filter_report(&once, "per_channel", "block"), once);
}

#[test]
fn sample_report_end_to_end() {
    let visualizer = visualizer(sample_report(5));
    let tables = visualizer.build_tables("", "");

    let scalar: BTreeSet<&String> = tables.scalar.headers[2..].iter().collect();
    let channel: BTreeSet<&String> = tables.channel.headers[3..].iter().collect();
    assert!(scalar.is_disjoint(&channel));
    for table in [&tables.scalar, &tables.channel] {
        assert!(table.rows.iter().all(|row| row.len() == table.headers.len()));
    }

    // relu layers have no per-channel statistics
    let projection = visualizer.project("per_channel_min", "").unwrap();
    assert_eq!(projection.x, [0, 2, 3, 5, 6]);
    let Series::Channels(channels) = &projection.y else {
        panic!("expected channel series");
    };
    assert!(channels.iter().all(|c| c.len() == projection.x.len()));

    let chart = visualizer.line_chart("global_max", "block2").unwrap();
    let ChartKind::Line(lines) = chart.kind else {
        panic!("expected a line chart");
    };
    assert_eq!(lines[0].points.len(), 3);
}
