//! Stencil Palette panel: the three commands and the list of placed stencils

use egui::Ui;
use shared::{classify, Fit, StencilId};

use crate::actions;
use crate::build::rgba;
use crate::state::{short_id, stencil_display_name, AppState};
use crate::viewport::to_color32;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Stencil Palette");
    ui.separator();

    ui.vertical_centered_justified(|ui| {
        if ui.button("Add Stencil").clicked() {
            let id = actions::action_add_stencil(state, &mut rand::thread_rng());
            state.selection.select(id);
        }
        if ui.button("Load Box Config").clicked() {
            load_box_config_dialog(state);
        }
        if ui.button("Edit Box Dimensions").clicked() {
            actions::action_edit_box_dimensions(state);
        }
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.strong("Stencils");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("({})", state.scene.stencil_count()));
        });
    });
    ui.separator();

    if state.scene.stencil_count() == 0 {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.weak("No stencils yet");
        });
        return;
    }

    show_stencil_list(ui, state);
}

/// Pick a JSON file and apply its box dimensions
pub fn load_box_config_dialog(state: &mut AppState) {
    if let Some(path) = rfd::FileDialog::new()
        .set_title("Load Box Config")
        .add_filter("JSON", &["json"])
        .pick_file()
    {
        actions::action_load_box_config(state, &path);
    }
}

/// One line of the stencil list
struct StencilRow {
    id: StencilId,
    name: String,
    position: [f64; 3],
    dimensions: [f64; 3],
    fit: Fit,
}

/// Rows in list order, each classified against the current box
fn stencil_rows(state: &AppState) -> Vec<StencilRow> {
    let bounds = state.scene.box_dimensions();
    state
        .scene
        .stencils()
        .iter()
        .enumerate()
        .map(|(i, s)| StencilRow {
            id: s.id.clone(),
            name: stencil_display_name(i, s),
            position: s.position,
            dimensions: s.dimensions,
            fit: classify(&bounds, s),
        })
        .collect()
}

fn show_stencil_list(ui: &mut Ui, state: &mut AppState) {
    // Collect row data to avoid borrow conflicts
    let rows = stencil_rows(state);

    let mut delete_request = None;

    egui::ScrollArea::vertical()
        .id_salt("stencil_list_scroll")
        .show(ui, |ui| {
            for row in &rows {
                let StencilRow {
                    id,
                    name,
                    position,
                    dimensions,
                    fit,
                } = row;
                let selected = state.selection.is_selected(id);
                let color = to_color32(rgba(state.settings.viewport.fit_color(*fit), 1.0));

                let sel_frame = if selected {
                    egui::Frame::NONE
                        .fill(ui.visuals().selection.bg_fill)
                        .corner_radius(3.0)
                        .inner_margin(egui::Margin::symmetric(4, 2))
                } else {
                    egui::Frame::NONE.inner_margin(egui::Margin::symmetric(4, 2))
                };

                sel_frame.show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let (swatch, _) =
                            ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter().rect_filled(swatch, 2.0, color);

                        let label = ui
                            .selectable_label(selected, name)
                            .on_hover_text(format!("ID: {id}"));
                        if label.clicked() {
                            if ui.input(|i| i.modifiers.command) {
                                state.selection.toggle(id.clone());
                            } else {
                                state.selection.select(id.clone());
                            }
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .small_button("🗑")
                                .on_hover_text(format!("Delete {}", short_id(id)))
                                .clicked()
                            {
                                delete_request = Some(id.clone());
                            }
                            ui.colored_label(color, fit.label());
                        });
                    });
                    ui.weak(format!(
                        "at ({:.1}, {:.1}, {:.1})  size {:.1} × {:.1} × {:.1}",
                        position[0],
                        position[1],
                        position[2],
                        dimensions[0],
                        dimensions[1],
                        dimensions[2]
                    ));
                });
            }
        });

    if let Some(id) = delete_request {
        actions::action_delete_stencil(state, &id);
    }
}
