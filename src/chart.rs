use crate::error::{Result, VizError};
use crate::projection::{Projection, Series};

// ---------------------------------------------------------------------------
// Renderer-neutral chart descriptions
// ---------------------------------------------------------------------------

/// A named polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    /// Drawn on top, thicker; the channel average or the only line.
    pub primary: bool,
}

/// Half-open bin `[start, end)`; the last bin also holds `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    Line(Vec<LineSeries>),
    Histogram(Vec<HistogramBin>),
}

/// Everything a plot renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// X positions that get a tick mark.
    pub x_ticks: Vec<f64>,
    pub kind: ChartKind,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        match &self.kind {
            ChartKind::Line(lines) => lines.iter().all(|l| l.points.is_empty()),
            ChartKind::Histogram(bins) => bins.is_empty(),
        }
    }
}

/// Average of the channel sub-series at each module position, over the
/// channels that have a value there.
pub fn channel_average(channels: &[Vec<f64>]) -> Vec<f64> {
    let longest = channels.iter().map(Vec::len).max().unwrap_or(0);
    (0..longest)
        .map(|i| {
            let (sum, n) = channels
                .iter()
                .filter_map(|c| c.get(i))
                .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
            sum / n as f64
        })
        .collect()
}

fn zip_points(x: &[usize], y: &[f64]) -> Vec<[f64; 2]> {
    x.iter().zip(y).map(|(&xi, &yi)| [xi as f64, yi]).collect()
}

/// Line chart of a projection.
///
/// Channel data is drawn as the per-module average across channels; with
/// `show_channel_lines` each channel also gets its own line.
pub fn line_chart(feature: &str, projection: &Projection, show_channel_lines: bool) -> ChartSpec {
    let x_ticks = projection.x.iter().map(|&x| x as f64).collect();

    let (x_label, lines) = match &projection.y {
        Series::Scalar(values) => (
            "idx",
            vec![LineSeries {
                name: feature.to_string(),
                points: zip_points(&projection.x, values),
                primary: true,
            }],
        ),
        Series::Channels(channels) => {
            let mut lines = Vec::new();
            if show_channel_lines {
                lines.extend(channels.iter().enumerate().map(|(channel, values)| LineSeries {
                    name: format!("channel {channel}"),
                    points: zip_points(&projection.x, values),
                    primary: false,
                }));
            }
            lines.push(LineSeries {
                name: format!("Average Value Across {} Channels", channels.len()),
                points: zip_points(&projection.x, &channel_average(channels)),
                primary: true,
            });
            ("First idx of module", lines)
        }
    };

    ChartSpec {
        title: format!("{feature} Plot"),
        x_label: x_label.to_string(),
        y_label: feature.to_string(),
        x_ticks,
        kind: ChartKind::Line(lines),
    }
}

/// Equal-width bins spanning the finite values. A single distinct value is
/// centred in a unit-wide range.
pub fn histogram_bins(values: &[f64], num_bins: usize) -> Result<Vec<HistogramBin>> {
    if num_bins == 0 {
        return Err(VizError::InvalidArgument(
            "a histogram needs at least one bin".to_string(),
        ));
    }
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Ok(Vec::new());
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (low, high) = if max > min { (min, max) } else { (min - 0.5, max + 0.5) };
    let width = (high - low) / num_bins as f64;

    let mut counts = vec![0usize; num_bins];
    for v in finite {
        let bin = (((v - low) / width) as usize).min(num_bins - 1);
        counts[bin] += 1;
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: low + i as f64 * width,
            end: low + (i + 1) as f64 * width,
            count,
        })
        .collect())
}

/// Histogram over every projected value, channels flattened together.
pub fn histogram_chart(feature: &str, projection: &Projection, num_bins: usize) -> Result<ChartSpec> {
    let bins = histogram_bins(&projection.flattened(), num_bins)?;
    let mut x_ticks: Vec<f64> = bins.iter().map(|b| b.start).collect();
    if let Some(last) = bins.last() {
        x_ticks.push(last.end);
    }

    Ok(ChartSpec {
        title: format!("{feature} Histogram"),
        x_label: feature.to_string(),
        y_label: "Frequency".to_string(),
        x_ticks,
        kind: ChartKind::Histogram(bins),
    })
}
