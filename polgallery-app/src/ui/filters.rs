use eframe::egui;

use polgallery_core::FilterField;

use crate::app::{PolGalleryApp, ACCENT};

/// Text shown for an unconstrained filter.
const ANY: &str = "Any";

fn field_heading(field: FilterField) -> &'static str {
    match field {
        FilterField::Quantity => "Quantity",
        FilterField::Spin => "Spin (a)",
        FilterField::Field => "Field",
        FilterField::Angle => "Angle",
    }
}

fn option_text(field: FilterField, value: &str) -> String {
    match field {
        FilterField::Angle => format!("{value}\u{b0}"),
        _ => value.to_string(),
    }
}

impl PolGalleryApp {
    pub(crate) fn draw_filter_bar(&mut self, ctx: &egui::Context) {
        use egui_material_icons::icons::*;

        let domains = *self.catalog.domains();
        let mut changes: Vec<(FilterField, String)> = Vec::new();
        let mut clear = false;

        egui::TopBottomPanel::top("filter_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("PolGallery").color(ACCENT));
                ui.add_space(16.0);

                for field in FilterField::ALL {
                    let current = self.filter.get(field).unwrap_or("").to_string();
                    let mut picked = current.clone();
                    ui.label(field_heading(field));
                    egui::ComboBox::from_id_salt(egui::Id::new(("filter", field.label())))
                        .selected_text(if current.is_empty() {
                            ANY.to_string()
                        } else {
                            option_text(field, &current)
                        })
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut picked, String::new(), ANY);
                            for value in field.options(&domains) {
                                ui.selectable_value(
                                    &mut picked,
                                    value.to_string(),
                                    option_text(field, value),
                                );
                            }
                        });
                    if picked != current {
                        changes.push((field, picked));
                    }
                    ui.add_space(8.0);
                }

                if ui
                    .add_enabled(
                        !self.filter.is_empty(),
                        egui::Button::new(format!("{ICON_CLEAR_ALL} Clear filters")),
                    )
                    .clicked()
                {
                    clear = true;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(egui::RichText::new(ICON_SETTINGS).size(18.0))
                        .on_hover_text("Settings")
                        .clicked()
                    {
                        self.show_settings = !self.show_settings;
                    }
                });
            });
            ui.add_space(4.0);
        });

        if clear {
            self.clear_filters();
        }
        for (field, value) in changes {
            self.set_filter(field, &value);
        }
    }
}
