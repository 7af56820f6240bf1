use eframe::egui;

use polgallery_render::GalleryCard;

use crate::app::{PolGalleryApp, ACCENT, MUTED};

impl PolGalleryApp {
    pub(crate) fn draw_gallery(&self, ui: &mut egui::Ui, toggle_request: &mut Option<String>) {
        ui.horizontal(|ui| {
            ui.heading("Gallery");
            ui.weak(format!(
                "{} of {} images",
                self.gallery.len(),
                self.catalog.len()
            ));
        });
        ui.add_space(6.0);

        if self.gallery.is_empty() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.weak("No images match the current filter.");
            });
            return;
        }

        let card_width = self.preferences.thumbnail_width;
        let spacing = 8.0_f32;
        let cols = ((ui.available_width() + spacing) / (card_width + spacing))
            .floor()
            .max(1.0) as usize;

        for group in &self.gallery.groups {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(group.quantity_label).strong().size(16.0));
                ui.label(
                    egui::RichText::new(format!(" {} ", group.quantity_id))
                        .size(11.0)
                        .color(ACCENT)
                        .background_color(egui::Color32::from_black_alpha(120)),
                );
            });
            ui.add_space(4.0);

            egui::Grid::new(ui.id().with(("group", group.quantity_id)))
                .num_columns(cols)
                .spacing([spacing, spacing])
                .show(ui, |ui| {
                    for (ci, card) in group.cards.iter().enumerate() {
                        self.draw_card(ui, card, card_width, toggle_request);
                        if (ci + 1) % cols == 0 {
                            ui.end_row();
                        }
                    }
                });
        }
    }

    fn draw_card(
        &self,
        ui: &mut egui::Ui,
        card: &GalleryCard,
        card_width: f32,
        toggle_request: &mut Option<String>,
    ) {
        let card_resp = ui.vertical(|ui| {
            ui.set_width(card_width);
            self.draw_image(ui, &card.id, &card.alt_text, card_width);

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;
                ui.label(egui::RichText::new(format!("a = {}", card.spin)).size(11.0));
                ui.label(egui::RichText::new(card.field).size(11.0));
                ui.label(egui::RichText::new(format!("{}\u{b0}", card.angle)).size(11.0));
            });

            ui.horizontal(|ui| {
                let button = egui::Button::new(egui::RichText::new(card.toggle_label).size(11.0))
                    .selected(card.in_comparison);
                if ui.add(button).clicked() {
                    *toggle_request = Some(card.id.clone());
                }
                ui.label(
                    egui::RichText::new(&card.filename)
                        .size(10.0)
                        .color(MUTED),
                );
            });
        });

        if card.in_comparison {
            ui.painter().rect_stroke(
                card_resp.response.rect,
                4.0,
                egui::Stroke::new(2.0, ACCENT),
                egui::StrokeKind::Outside,
            );
        }
    }

    /// Draw a loaded image at `width`, or a placeholder while it loads or if
    /// it could not be decoded.
    pub(crate) fn draw_image(&self, ui: &mut egui::Ui, id: &str, alt_text: &str, width: f32) {
        let texture = self.textures.get(id);
        let height = match texture {
            Some(tex) => {
                let [w, h] = tex.size();
                width * h as f32 / w.max(1) as f32
            }
            None => width,
        };
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

        if let Some(tex) = texture {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ui.painter().image(tex.id(), rect, uv, egui::Color32::WHITE);
        } else {
            let text = if self.failed_assets.contains(id) {
                "No preview"
            } else {
                "Loading\u{2026}"
            };
            ui.painter()
                .rect_filled(rect, 4.0, egui::Color32::from_gray(40));
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                text,
                egui::FontId::proportional(10.0),
                egui::Color32::GRAY,
            );
        }
        response.on_hover_text(alt_text);
    }
}
