/// Top bar -- path field and Open button.
use crate::state::BrowserState;
use egui::Ui;
use std::path::PathBuf;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut BrowserState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("📂").size(16.0));

        let field = ui.add(
            egui::TextEdit::singleline(&mut state.path_input)
                .hint_text("Directory to browse")
                .desired_width(ui.available_width() - 70.0),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Open").clicked() || submitted {
            let path = PathBuf::from(state.path_input.trim());
            state.set_root_path(path);
        }
    });
}
