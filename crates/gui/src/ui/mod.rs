//! Panels and modal dialogs

pub mod box_dialog;
pub mod notification;
pub mod palette;
pub mod status_bar;
