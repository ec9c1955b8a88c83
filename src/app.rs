use eframe::egui;

use crate::chart::ChartSpec;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// A window showing a single chart until it is closed.
pub struct ChartApp {
    pub spec: ChartSpec,
}

impl ChartApp {
    pub fn new(spec: ChartSpec) -> Self {
        Self { spec }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: chart title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading(&self.spec.title));
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &self.spec);
        });
    }
}
