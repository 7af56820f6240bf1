use eframe::egui;

use polgallery_render::comparison::EMPTY_SLOT_PROMPT;
use polgallery_render::ComparisonSlot;

use crate::app::{PolGalleryApp, ACCENT};

const SLOT_SPACING: f32 = 10.0;

impl PolGalleryApp {
    pub(crate) fn draw_comparison_panel(
        &mut self,
        ui: &mut egui::Ui,
        toggle_request: &mut Option<String>,
    ) {
        use egui_material_icons::icons::*;

        let mut clear = false;
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new("Comparison").color(ACCENT));
            ui.weak(format!(
                "{} / {}",
                self.selection.len(),
                polgallery_core::COMPARISON_CAPACITY
            ));
            if ui
                .add_enabled(
                    !self.selection.is_empty(),
                    egui::Button::new(format!("{ICON_CLEAR_ALL} Clear comparison")),
                )
                .clicked()
            {
                clear = true;
            }
        });
        ui.add_space(6.0);

        let slot_count = self.comparison.slots.len() as f32;
        let slot_width = ((ui.available_width() - SLOT_SPACING * (slot_count - 1.0))
            / slot_count)
            .max(80.0);

        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = SLOT_SPACING;
            for slot in &self.comparison.slots {
                egui::Frame::group(ui.style())
                    .corner_radius(6.0)
                    .show(ui, |ui| {
                        ui.set_width(slot_width - 12.0);
                        match slot {
                            ComparisonSlot::Filled(image) => {
                                self.draw_image(ui, &image.id, &image.alt_text, slot_width - 12.0);
                                ui.horizontal_wrapped(|ui| {
                                    ui.label(egui::RichText::new(image.caption()).size(12.0));
                                });
                                ui.horizontal(|ui| {
                                    ui.weak(egui::RichText::new(&image.filename).size(10.0));
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            if ui
                                                .small_button(ICON_CLOSE)
                                                .on_hover_text("Remove from comparison")
                                                .clicked()
                                            {
                                                *toggle_request = Some(image.id.clone());
                                            }
                                        },
                                    );
                                });
                            }
                            ComparisonSlot::Empty => {
                                ui.set_min_height(120.0);
                                ui.centered_and_justified(|ui| {
                                    ui.weak(EMPTY_SLOT_PROMPT);
                                });
                            }
                        }
                    });
            }
        });

        if clear {
            self.clear_comparison();
        }
    }
}
