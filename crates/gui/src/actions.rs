//! User actions, callable from the palette buttons, keyboard shortcuts and tests.
//!
//! Each action mutates `AppState` and queues the notification the user should see.

use std::path::Path;

use rand::Rng;
use shared::StencilId;

use crate::config::read_box_config;
use crate::state::AppState;

pub const SUCCESS_TITLE: &str = "Success";
pub const ERROR_TITLE: &str = "Error";

/// "Add Stencil": random size and position relative to the current box
pub fn action_add_stencil<R: Rng + ?Sized>(state: &mut AppState, rng: &mut R) -> StencilId {
    let placement = state.settings.placement.clone();
    state.scene.add_random_stencil(rng, &placement)
}

/// "Load Box Config": apply `box_dimensions` from a JSON file.
/// On failure the box is left unchanged.
pub fn action_load_box_config(state: &mut AppState, path: &Path) -> bool {
    match read_box_config(path) {
        Ok(config) => {
            if state.scene.load_box_dimensions_from(&config).is_none() {
                tracing::warn!("{} has no box_dimensions; box unchanged", path.display());
            }
            // An open form must not submit the values it was opened with
            if state.box_dialog.open {
                let current = state.scene.box_dimensions();
                state.box_dialog.open_with(&current);
            }
            state
                .notifications
                .info(SUCCESS_TITLE, "Box configuration loaded successfully.");
            true
        }
        Err(e) => {
            state
                .notifications
                .error(ERROR_TITLE, format!("Failed to load box configuration: {e}"));
            false
        }
    }
}

/// "Edit Box Dimensions": open the form with the current values
pub fn action_edit_box_dimensions(state: &mut AppState) {
    let current = state.scene.box_dimensions();
    state.box_dialog.open_with(&current);
}

/// Submit the form. All three values apply together or not at all;
/// the form closes either way.
pub fn apply_box_dimensions(state: &mut AppState) -> bool {
    let parsed = state.box_dialog.parse();
    state.box_dialog.close();
    match parsed {
        Ok(dims) => {
            state.scene.set_box_dimensions(dims);
            true
        }
        Err(e) => {
            state
                .notifications
                .error(ERROR_TITLE, format!("Invalid dimensions entered: {e}"));
            false
        }
    }
}

/// Close the form without applying anything
pub fn cancel_box_dimensions(state: &mut AppState) {
    state.box_dialog.close();
}

/// Delete a stencil by ID; unknown IDs are ignored
pub fn action_delete_stencil(state: &mut AppState, id: &str) -> bool {
    state.selection.deselect(id);
    state.scene.delete_stencil(id)
}

/// Delete every selected stencil
pub fn action_delete_selected(state: &mut AppState) -> usize {
    let ids: Vec<StencilId> = state.selection.all().to_vec();
    ids.iter()
        .filter(|id| action_delete_stencil(state, id))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppSettings, NotificationLevel};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::BoxDimensions;
    use std::io::Write;

    fn state() -> AppState {
        AppState::with_settings(AppSettings::default())
    }

    fn config_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_add_stencil_appends() {
        let mut s = state();
        let mut rng = StdRng::seed_from_u64(11);
        let a = action_add_stencil(&mut s, &mut rng);
        let b = action_add_stencil(&mut s, &mut rng);
        assert_ne!(a, b);
        assert_eq!(s.scene.stencil_count(), 2);
    }

    #[test]
    fn test_load_config_success() {
        let mut s = state();
        let file = config_file(r#"{"box_dimensions": {"length": 10, "width": 20, "height": 30}}"#);
        assert!(action_load_box_config(&mut s, file.path()));
        assert_eq!(s.scene.box_dimensions().extents(), [10.0, 20.0, 30.0]);

        let n = s.notifications.current().unwrap();
        assert_eq!(n.level, NotificationLevel::Info);
        assert_eq!(n.message, "Box configuration loaded successfully.");
    }

    #[test]
    fn test_load_config_failure_leaves_box() {
        let mut s = state();
        let file = config_file("not json at all");
        assert!(!action_load_box_config(&mut s, file.path()));
        assert_eq!(s.scene.box_dimensions(), BoxDimensions::default());

        let n = s.notifications.current().unwrap();
        assert_eq!(n.level, NotificationLevel::Error);
        assert!(n.message.starts_with("Failed to load box configuration: "));
    }

    #[test]
    fn test_edit_box_applies_all_three() {
        let mut s = state();
        action_edit_box_dimensions(&mut s);
        assert!(s.box_dialog.open);
        assert_eq!(s.box_dialog.length, "50");

        s.box_dialog.length = "10".into();
        s.box_dialog.width = "20".into();
        s.box_dialog.height = "30".into();
        assert!(apply_box_dimensions(&mut s));
        assert!(!s.box_dialog.open);
        assert_eq!(s.scene.box_dimensions().extents(), [10.0, 20.0, 30.0]);
        assert!(s.notifications.is_empty());
    }

    #[test]
    fn test_edit_box_invalid_field_changes_nothing() {
        let mut s = state();
        action_edit_box_dimensions(&mut s);
        s.box_dialog.length = "10".into();
        s.box_dialog.width = "-5".into();
        s.box_dialog.height = "30".into();
        assert!(!apply_box_dimensions(&mut s));
        assert!(!s.box_dialog.open);
        assert_eq!(s.scene.box_dimensions(), BoxDimensions::default());

        let n = s.notifications.current().unwrap();
        assert!(n.message.starts_with("Invalid dimensions entered: "));
        assert!(n.message.contains("width"));
    }

    #[test]
    fn test_form_blocks_input_while_open() {
        let mut s = state();
        assert!(!s.is_modal_open());
        action_edit_box_dimensions(&mut s);
        assert!(s.is_modal_open());
        cancel_box_dimensions(&mut s);
        assert!(!s.is_modal_open());
    }

    #[test]
    fn test_load_while_form_open_is_not_overwritten_on_ok() {
        let mut s = state();
        action_edit_box_dimensions(&mut s);
        assert_eq!(s.box_dialog.length, "50");

        let file = config_file(r#"{"box_dimensions": {"length": 10, "width": 20, "height": 30}}"#);
        assert!(action_load_box_config(&mut s, file.path()));
        assert!(s.box_dialog.open);
        assert_eq!(s.box_dialog.length, "10");

        assert!(apply_box_dimensions(&mut s));
        assert_eq!(s.scene.box_dimensions().extents(), [10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_edit_box_rejects_extent_too_large_to_draw() {
        let mut s = state();
        action_edit_box_dimensions(&mut s);
        s.box_dialog.length = "1e39".into();
        assert!(!apply_box_dimensions(&mut s));
        assert_eq!(s.scene.box_dimensions(), BoxDimensions::default());
        assert!(s.notifications.current().unwrap().message.contains("at most"));
    }

    #[test]
    fn test_cancel_keeps_box() {
        let mut s = state();
        action_edit_box_dimensions(&mut s);
        s.box_dialog.length = "1".into();
        cancel_box_dimensions(&mut s);
        assert!(!s.box_dialog.open);
        assert_eq!(s.scene.box_dimensions(), BoxDimensions::default());
    }

    #[test]
    fn test_delete_clears_selection() {
        let mut s = state();
        let mut rng = StdRng::seed_from_u64(5);
        let id = action_add_stencil(&mut s, &mut rng);
        s.selection.select(id.clone());

        assert!(action_delete_stencil(&mut s, &id));
        assert_eq!(s.selection.count(), 0);
        assert!(!action_delete_stencil(&mut s, &id));
    }

    #[test]
    fn test_delete_selected() {
        let mut s = state();
        let mut rng = StdRng::seed_from_u64(5);
        let a = action_add_stencil(&mut s, &mut rng);
        let b = action_add_stencil(&mut s, &mut rng);
        let c = action_add_stencil(&mut s, &mut rng);
        s.selection.select(a);
        s.selection.toggle(c);

        assert_eq!(action_delete_selected(&mut s), 2);
        assert_eq!(s.scene.stencil_count(), 1);
        assert!(s.scene.get_stencil(&b).is_some());
    }
}
