//! Native plot window for [`ChartSpec`]s.

use log::info;

use crate::chart::ChartSpec;
use crate::error::{Result, VizError};
use crate::options::RenderOptions;

#[cfg(feature = "plot")]
pub mod plot;

/// Open a window showing `spec`; blocks until the window is closed.
#[cfg(feature = "plot")]
pub fn show_chart(spec: ChartSpec, options: &RenderOptions) -> Result<()> {
    use eframe::egui;

    use crate::app::ChartApp;

    info!("opening plot window: {}", spec.title);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(options.window_size)
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let title = spec.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(|_cc| Ok(Box::new(ChartApp::new(spec)))),
    )
    .map_err(|e| VizError::Plot(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "plot"))]
pub fn show_chart(spec: ChartSpec, _options: &RenderOptions) -> Result<()> {
    info!("cannot open plot window for {}: no plot renderer", spec.title);
    Err(VizError::RendererUnavailable("plot"))
}
