use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Corner, GridInput, GridMark, Legend, Line, Plot, PlotPoints};

use crate::chart::{ChartKind, ChartSpec, HistogramBin, LineSeries};
use crate::color::{channel_palette, PRIMARY};

// ---------------------------------------------------------------------------
// Chart plot (central panel)
// ---------------------------------------------------------------------------

/// Fraction of each bin's width covered by its bar.
const BAR_WIDTH_RATIO: f64 = 0.8;

/// Render a chart spec into the given UI.
pub fn chart_plot(ui: &mut Ui, spec: &ChartSpec) {
    if spec.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data points to plot.");
        });
        return;
    }

    let plot = Plot::new("chart_plot")
        .legend(Legend::default().position(Corner::RightTop))
        .x_axis_label(spec.x_label.as_str())
        .y_axis_label(spec.y_label.as_str())
        .x_grid_spacer(tick_spacer(spec.x_ticks.clone()))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    match &spec.kind {
        ChartKind::Line(lines) => {
            plot.show(ui, |plot_ui| {
                for line in styled_lines(lines) {
                    plot_ui.line(line);
                }
            });
        }
        ChartKind::Histogram(bins) => {
            let chart = histogram_bars(&spec.title, bins);
            plot.show(ui, |plot_ui| plot_ui.bar_chart(chart));
        }
    }
}

/// Grid marks only at the chart's tick positions.
fn tick_spacer(ticks: Vec<f64>) -> impl Fn(GridInput) -> Vec<GridMark> {
    let step_size = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .filter(|d| *d > 0.0)
        .fold(f64::INFINITY, f64::min);
    let step_size = if step_size.is_finite() { step_size } else { 1.0 };

    move |input: GridInput| {
        let (low, high) = input.bounds;
        ticks
            .iter()
            .filter(|&&value| value >= low && value <= high)
            .map(|&value| GridMark { value, step_size })
            .collect()
    }
}

fn styled_lines(series: &[LineSeries]) -> Vec<Line> {
    let secondary = series.iter().filter(|s| !s.primary).count();
    let mut palette = channel_palette(secondary).into_iter();

    series
        .iter()
        .map(|s| {
            let points: PlotPoints = s.points.iter().copied().collect();
            let line = Line::new(points).name(&s.name);
            if s.primary {
                line.color(PRIMARY).width(2.5)
            } else {
                line.color(palette.next().unwrap_or(PRIMARY)).width(1.0)
            }
        })
        .collect()
}

fn histogram_bars(name: &str, bins: &[HistogramBin]) -> BarChart {
    let bars = bins
        .iter()
        .map(|bin| {
            let width = bin.end - bin.start;
            Bar::new(bin.start + width / 2.0, bin.count as f64).width(width * BAR_WIDTH_RATIO)
        })
        .collect();
    BarChart::new(bars).name(name).color(PRIMARY)
}
