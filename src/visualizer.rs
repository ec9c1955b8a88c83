use std::collections::BTreeSet;

use log::{info, warn};

use crate::capabilities::Capabilities;
use crate::chart::{histogram_chart, line_chart, ChartSpec};
use crate::error::Result;
use crate::options::RenderOptions;
use crate::projection::{project, Projection};
use crate::report::filter::filter_report;
use crate::report::model::Report;
use crate::table::render::pretty_format;
use crate::table::{build_tables, TablePair};
use crate::ui::show_chart;

/// Printed when neither table has a feature column.
pub const NO_TABLE_DATA: &str = "No data points to generate table with.";

const NO_TABLE_RENDERER: &str =
    "Table rendering is unavailable; rebuild with the `table` feature and try again.";
const NO_PLOT_RENDERER: &str =
    "Plot rendering is unavailable; rebuild with the `plot` feature and run with a display.";

// ---------------------------------------------------------------------------
// ModelReportVisualizer
// ---------------------------------------------------------------------------

/// Table, plot and histogram views over a [`Report`].
///
/// Every view takes a feature filter and a module filter; both are substring
/// matches and an empty filter keeps everything. The report itself is never
/// modified.
///
/// ```no_run
/// use model_report_viz::{ModelReportVisualizer, sample_report};
///
/// let visualizer = ModelReportVisualizer::new(sample_report(42));
/// visualizer.render_tables("per_channel_min", "block1")?;
/// visualizer.render_plot("global_max", "")?;
/// # Ok::<(), model_report_viz::VizError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ModelReportVisualizer {
    report: Report,
    capabilities: Capabilities,
    options: RenderOptions,
}

impl ModelReportVisualizer {
    /// Wrap a report, detecting the available renderers.
    pub fn new(report: Report) -> Self {
        Self::with_capabilities(report, Capabilities::detect())
    }

    pub fn with_capabilities(report: Report, capabilities: Capabilities) -> Self {
        Self {
            report,
            capabilities,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Every module fqn in the report.
    pub fn list_module_ids(&self) -> BTreeSet<String> {
        self.report.module_fqns().map(str::to_string).collect()
    }

    /// Every feature name in the report. With `plottable_only`, only names
    /// some module records as a tensor value.
    pub fn list_feature_names(&self, plottable_only: bool) -> BTreeSet<String> {
        self.report
            .modules()
            .flat_map(|(_, features)| features.iter())
            .filter(|(_, value)| !plottable_only || value.is_plottable())
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn filtered(&self, feature_filter: &str, module_filter: &str) -> Report {
        filter_report(&self.report, feature_filter, module_filter)
    }

    /// The scalar (tensor level) and channel tables for the filters.
    pub fn build_tables(&self, feature_filter: &str, module_filter: &str) -> TablePair {
        build_tables(&self.filtered(feature_filter, module_filter))
    }

    /// Both tables as text, each under its own heading and only when it has
    /// at least one feature column.
    pub fn format_tables(&self, feature_filter: &str, module_filter: &str) -> Result<String> {
        let tables = self.build_tables(feature_filter, module_filter);

        let mut text = String::new();
        if tables.scalar_feature_count() > 0 {
            text.push_str("Tensor Level Information\n");
            text.push_str(&pretty_format(&tables.scalar)?);
        }
        if tables.channel_feature_count() > 0 {
            if !text.is_empty() {
                text.push_str("\n\n");
            }
            text.push_str("Channel Level Information\n");
            text.push_str(&pretty_format(&tables.channel)?);
        }

        if text.is_empty() {
            text.push_str(NO_TABLE_DATA);
        }
        Ok(text)
    }

    /// Print both tables to stdout.
    pub fn render_tables(&self, feature_filter: &str, module_filter: &str) -> Result<()> {
        if !self.capabilities.table_renderer {
            warn!("table render requested without a table renderer");
            println!("{NO_TABLE_RENDERER}");
            return Ok(());
        }
        println!("{}", self.format_tables(feature_filter, module_filter)?);
        Ok(())
    }

    /// X / y series for the single feature the filters select.
    pub fn project(&self, feature_filter: &str, module_filter: &str) -> Result<Projection> {
        project(&self.build_tables(feature_filter, module_filter))
    }

    pub fn line_chart(&self, feature_filter: &str, module_filter: &str) -> Result<ChartSpec> {
        let projection = self.project(feature_filter, module_filter)?;
        Ok(line_chart(
            feature_filter,
            &projection,
            self.options.show_channel_lines,
        ))
    }

    pub fn histogram(
        &self,
        feature_filter: &str,
        module_filter: &str,
        num_bins: usize,
    ) -> Result<ChartSpec> {
        let projection = self.project(feature_filter, module_filter)?;
        histogram_chart(feature_filter, &projection, num_bins)
    }

    /// Line plot of the selected feature across modules. Channel features
    /// plot the per-module average across channels.
    pub fn render_plot(&self, feature_filter: &str, module_filter: &str) -> Result<()> {
        if !self.plot_available() {
            return Ok(());
        }
        let spec = self.line_chart(feature_filter, module_filter)?;
        info!("plotting {feature_filter:?} (module filter {module_filter:?})");
        show_chart(spec, &self.options)
    }

    /// Histogram of every value of the selected feature, channels flattened.
    /// `None` uses the configured bin count.
    pub fn render_histogram(
        &self,
        feature_filter: &str,
        module_filter: &str,
        num_bins: Option<usize>,
    ) -> Result<()> {
        if !self.plot_available() {
            return Ok(());
        }
        let num_bins = num_bins.unwrap_or(self.options.num_bins);
        let spec = self.histogram(feature_filter, module_filter, num_bins)?;
        info!("histogram of {feature_filter:?} with {num_bins} bins");
        show_chart(spec, &self.options)
    }

    fn plot_available(&self) -> bool {
        if !self.capabilities.plot_renderer {
            warn!("plot requested without a plot renderer");
            println!("{NO_PLOT_RENDERER}");
        }
        self.capabilities.plot_renderer
    }
}
