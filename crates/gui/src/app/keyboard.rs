//! Keyboard shortcut handling

use eframe::egui;

use crate::actions;
use crate::state::AppState;
use crate::ui::palette;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState, viewport: &mut ViewportPanel) {
    // Don't handle shortcuts when a text field is focused or a modal owns input
    if ctx.memory(|m| m.focused().is_some()) || state.is_modal_open() {
        return;
    }

    let (delete, escape, open, frame) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Delete),
            i.key_pressed(egui::Key::Escape),
            i.modifiers.command && i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::F) && !i.modifiers.command,
        )
    });

    // Delete: remove selected stencils
    if delete {
        actions::action_delete_selected(state);
    }
    // Escape: clear selection
    if escape {
        state.selection.clear();
    }
    // Ctrl+O: load box config (file dialog blocks, so not inside ctx.input)
    if open {
        palette::load_box_config_dialog(state);
    }
    // F: frame the box
    if frame {
        viewport.frame_box(&state.scene.box_dimensions());
    }
}
