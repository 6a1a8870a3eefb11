/// Bottom status bar — what the last scan found.
use crate::state::BrowserState;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &BrowserState) {
    let color_weak = ui.visuals().weak_text_color();
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);
    let summary = state.model.last_scan();

    ui.horizontal(|ui| {
        match state.model.root_info() {
            Some(root) => {
                ui.label(
                    egui::RichText::new(root.path.to_string_lossy())
                        .size(12.0)
                        .color(color_weak),
                );
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "{} files, {} folders in {:.2}s",
                        summary.files,
                        summary.dirs.saturating_sub(1),
                        summary.duration.as_secs_f64()
                    ))
                    .size(12.0)
                    .color(color_weak),
                );
            }
            None => {
                ui.label(
                    egui::RichText::new(format!(
                        "Path does not exist: {}",
                        state.model.root_path().display()
                    ))
                    .size(12.0)
                    .color(color_warning),
                );
            }
        }

        if state.model.root_info().is_some() && summary.error_count > 0 {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} unreadable entries skipped", summary.error_count))
                    .size(12.0)
                    .color(color_warning),
            )
            .on_hover_ui(|ui| {
                for err in summary.errors.iter().take(20) {
                    ui.label(egui::RichText::new(err.path().to_string_lossy()).strong());
                    ui.label(err.to_string());
                }
            });
        }
    });
}
