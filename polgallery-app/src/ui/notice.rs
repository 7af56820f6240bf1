use eframe::egui;

use crate::app::PolGalleryApp;
use crate::app_state::ActiveDialog;

impl PolGalleryApp {
    /// Blocking notice shown when a pin is rejected because the panel is full.
    pub(crate) fn show_comparison_notice(&mut self, ctx: &egui::Context) {
        let ActiveDialog::ComparisonFull(message) = &self.active_dialog else {
            return;
        };
        let message = message.clone();

        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("comparison_full_notice")).show(ctx, |ui| {
            ui.set_width(300.0);
            ui.heading("Comparison full");
            ui.add_space(6.0);
            ui.label(message);
            ui.add_space(10.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

        if dismissed
            || modal.should_close()
            || ctx.input(|i| i.key_pressed(egui::Key::Enter))
        {
            self.active_dialog = ActiveDialog::None;
        }
    }
}
