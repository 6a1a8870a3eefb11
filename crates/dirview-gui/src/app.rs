/// Main `eframe::App` implementation for DirView.
///
/// Composes the toolbar, the tree view and the status bar.
use crate::state::BrowserState;
use crate::widgets;

/// The DirView application.
pub struct DirViewApp {
    state: BrowserState,
}

impl DirViewApp {
    /// Create the app from state built before the window opened, so the
    /// initial scan does not run behind a blank window.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: BrowserState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { state }
    }
}

impl eframe::App for DirViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.process_model_events() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("toolbar")
            .min_height(32.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .min_height(22.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::tree_view::tree_view(ui, &mut self.state);
        });
    }
}
