//! Application menu bar

use eframe::egui;

use crate::actions;
use crate::state::AppState;
use crate::ui::palette;
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("File", |ui| {
        if ui
            .add(egui::Button::new("Load Box Config…").shortcut_text("Ctrl+O"))
            .clicked()
        {
            ui.close_menu();
            palette::load_box_config_dialog(state);
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("Edit", |ui| {
        if ui.button("Add Stencil").clicked() {
            actions::action_add_stencil(state, &mut rand::thread_rng());
            ui.close_menu();
        }
        if ui.button("Edit Box Dimensions…").clicked() {
            actions::action_edit_box_dimensions(state);
            ui.close_menu();
        }
        ui.separator();
        let has_selection = state.selection.count() > 0;
        if ui
            .add_enabled(
                has_selection,
                egui::Button::new("Delete Selected").shortcut_text("Del"),
            )
            .clicked()
        {
            actions::action_delete_selected(state);
            ui.close_menu();
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Deselect").shortcut_text("Esc"))
            .clicked()
        {
            state.selection.clear();
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button("View", |ui| {
        if ui
            .add(egui::Button::new("Frame Box").shortcut_text("F"))
            .clicked()
        {
            viewport.frame_box(&state.scene.box_dimensions());
            ui.close_menu();
        }
        ui.separator();
        ui.checkbox(&mut state.settings.grid.visible, "Show Grid");
        ui.checkbox(&mut state.settings.axes.visible, "Show Axes");
        ui.add_enabled(
            state.settings.axes.visible,
            egui::Checkbox::new(&mut state.settings.axes.show_labels, "Axis Labels"),
        );
    });
}
