use crate::error::Notice;
use crate::models::{ItemId, SteelForm, SteelItem};
use crate::service::InventoryService;
use crate::store::SteelStore;
use crate::ui::state::InventoryState;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

pub struct InventoryScreen;

impl InventoryScreen {
    /// Draws the form, item table and totals. `enabled` is false while a
    /// notice is open so the screen cannot be used behind it.
    pub fn show<S: SteelStore>(
        ctx: &egui::Context,
        state: &mut InventoryState,
        service: &mut InventoryService<S>,
        enabled: bool,
    ) -> Result<(), Notice> {
        let mut result = Ok(());

        egui::TopBottomPanel::bottom("totals_panel").show(ctx, |ui| {
            let totals = service.totals();
            ui.horizontal(|ui| {
                ui.label(format!("Total weight: {}", totals.weight_text()));
                ui.separator();
                ui.label(format!("Total length: {}", totals.length_text()));
                if !state.status.is_empty() {
                    ui.separator();
                    ui.label(state.status.as_str());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.heading("Steel Inventory");
                ui.add_space(10.0);

                Self::show_form(ui, &mut state.form);
                ui.add_space(5.0);

                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        result = state.submit_add(service);
                    }
                    if ui.button("Edit").clicked() {
                        result = state.edit_selected(service);
                    }
                    if ui.button("Delete").clicked() {
                        result = state.delete_selected(service);
                    }
                });

                ui.separator();
                Self::show_table(ui, service.items(), &mut state.selected);
            });
        });

        result
    }

    fn show_form(ui: &mut egui::Ui, form: &mut SteelForm) {
        egui::Grid::new("steel_form")
            .num_columns(2)
            .spacing([10.0, 4.0])
            .show(ui, |ui| {
                let fields = [
                    ("Name:", &mut form.name),
                    ("Code:", &mut form.code),
                    ("Weight (t):", &mut form.weight),
                    ("Length (m):", &mut form.length),
                    ("Thickness:", &mut form.thickness),
                ];
                for (label, value) in fields {
                    ui.label(label);
                    ui.text_edit_singleline(value);
                    ui.end_row();
                }
            });
    }

    fn show_table(ui: &mut egui::Ui, items: &[SteelItem], selected: &mut Option<ItemId>) {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for title in ["Code", "Name", "Weight (t)", "Length (m)", "Thickness"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for item in items {
                    body.row(20.0, |mut row| {
                        let is_selected = *selected == Some(item.id);
                        row.col(|ui| {
                            if ui.selectable_label(is_selected, item.code.as_str()).clicked() {
                                *selected = Some(item.id);
                            }
                        });
                        row.col(|ui| {
                            ui.label(item.display_name());
                        });
                        row.col(|ui| {
                            ui.label(item.weight.to_string());
                        });
                        row.col(|ui| {
                            ui.label(item.length.to_string());
                        });
                        row.col(|ui| {
                            ui.label(item.thickness.to_string());
                        });
                    });
                }
            });
    }
}
