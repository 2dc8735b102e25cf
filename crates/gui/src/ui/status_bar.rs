use egui::Ui;

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let dims = state.scene.box_dimensions();
        ui.weak(format!(
            "Box: {} × {} × {}",
            dims.length, dims.width, dims.height
        ));

        ui.separator();

        let [fits, exceeds, borderline] = state.scene.fit_counts();
        ui.weak(format!("Stencils: {}", state.scene.stencil_count()));
        if state.scene.stencil_count() > 0 {
            let colors = &state.settings.viewport;
            ui.colored_label(rgb(colors.fits_color), format!("{fits} fit"));
            ui.colored_label(rgb(colors.exceeds_color), format!("{exceeds} exceed"));
            if borderline > 0 {
                ui.colored_label(rgb(colors.borderline_color), format!("{borderline} borderline"));
            }
        }

        ui.separator();

        let sel = state.selection.count();
        if sel > 0 {
            ui.label(format!("Selected: {sel}"));
        } else {
            ui.weak("Ready");
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("Box Recommender v", env!("CARGO_PKG_VERSION")));
        });
    });
}

fn rgb(c: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(c[0], c[1], c[2])
}
