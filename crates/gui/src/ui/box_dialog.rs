//! Edit Box Dimensions dialog rendering
//!
//! Form data lives in state/box_dialog.rs.

use crate::state::BoxDimensionsDialog;

/// Extension trait for BoxDimensionsDialog to add UI rendering
pub trait BoxDimensionsDialogUi {
    /// Show the dialog UI, returns Some(true) if OK clicked, Some(false) if cancelled
    fn show(&mut self, ctx: &egui::Context) -> Option<bool>;
}

impl BoxDimensionsDialogUi for BoxDimensionsDialog {
    fn show(&mut self, ctx: &egui::Context) -> Option<bool> {
        if !self.open {
            return None;
        }

        let mut result = None;

        // Modal: everything behind the form ignores input until it closes
        let modal = egui::Modal::new(egui::Id::new("box_dimensions_modal")).show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.heading("Edit Box Dimensions");
            ui.add_space(8.0);

            egui::Grid::new("box_dimensions_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    for (label, field) in [
                        ("Length", &mut self.length),
                        ("Width", &mut self.width),
                        ("Height", &mut self.height),
                    ] {
                        ui.label(label);
                        ui.add(egui::TextEdit::singleline(field).desired_width(140.0));
                        ui.end_row();
                    }
                });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Cancel").clicked() {
                        result = Some(false);
                    }
                    if ui.button("OK").clicked() {
                        result = Some(true);
                    }
                });
            });
        });

        if result.is_none() {
            if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                result = Some(true);
            } else if modal.should_close() {
                // Escape or a click outside the form
                result = Some(false);
            }
        }

        result
    }
}
