use eframe::egui;
use tracing::info;

use crate::app::PolGalleryApp;
use crate::preferences::THUMBNAIL_WIDTH_RANGE;

impl PolGalleryApp {
    pub(crate) fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut open = true;
        let mut apply_root: Option<String> = None;
        egui::Window::new("Settings")
            .open(&mut open)
            .resizable(false)
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.label("Image folder (contains I/, lp/, cp/, evpa/):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.asset_root_buf)
                        .hint_text("current directory")
                        .desired_width(ui.available_width()),
                );
                ui.horizontal(|ui| {
                    if ui.small_button("Browse...").clicked() {
                        let start = std::path::Path::new(&self.asset_root_buf);
                        let mut dialog = rfd::FileDialog::new();
                        if start.is_dir() {
                            dialog = dialog.set_directory(start);
                        }
                        if let Some(folder) = dialog.pick_folder() {
                            self.asset_root_buf = folder.to_string_lossy().to_string();
                        }
                    }
                    if ui.small_button("Apply").clicked() {
                        apply_root = Some(self.asset_root_buf.trim().to_string());
                    }
                    if ui.small_button("Reset").clicked() {
                        apply_root = Some(String::new());
                    }
                });
                ui.weak(format!(
                    "Loading from {}",
                    self.preferences.asset_root_path().display()
                ));

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label("Thumbnail width:");
                    ui.add(
                        egui::Slider::new(
                            &mut self.preferences.thumbnail_width,
                            THUMBNAIL_WIDTH_RANGE,
                        )
                        .suffix(" pt"),
                    );
                });
            });

        if let Some(root) = apply_root {
            if root != self.preferences.asset_root {
                info!("Asset root changed to {root:?}");
                self.preferences.asset_root = root.clone();
                self.preferences.save();
                self.reset_assets();
            }
            self.asset_root_buf = root;
        }
        if !open {
            self.show_settings = false;
            self.preferences.save();
        }
    }
}
