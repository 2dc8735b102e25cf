pub mod box_dialog;
pub mod notification;
pub mod scene;
pub mod selection;
pub mod settings;

pub use box_dialog::BoxDimensionsDialog;
pub use notification::{Notification, NotificationLevel, Notifications};
pub use scene::{short_id, stencil_display_name, SceneState};
pub use selection::SelectionState;
pub use settings::{AppSettings, PlacementSettings, ViewportSettings};

/// Combined application state
pub struct AppState {
    pub scene: SceneState,
    pub selection: SelectionState,
    pub settings: AppSettings,
    /// Edit Box Dimensions form
    pub box_dialog: BoxDimensionsDialog,
    /// Pending user-visible messages (shown one at a time, blocking)
    pub notifications: Notifications,
}

impl AppState {
    /// Fresh state with the given settings (no disk access)
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            scene: SceneState::default(),
            selection: SelectionState::default(),
            settings,
            box_dialog: BoxDimensionsDialog::default(),
            notifications: Notifications::default(),
        }
    }

    /// True while a modal (form or notification) owns the input
    pub fn is_modal_open(&self) -> bool {
        self.box_dialog.open || self.notifications.current().is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(AppSettings::load())
    }
}
