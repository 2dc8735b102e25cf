//! Blocking message box for the current notification

use egui::{Color32, RichText};

use crate::state::{NotificationLevel, Notifications};

const ERROR_COLOR: Color32 = Color32::from_rgb(200, 40, 40);

/// Show the oldest pending notification until OK is pressed
pub fn show(ctx: &egui::Context, notifications: &mut Notifications) {
    let Some(current) = notifications.current() else {
        return;
    };
    let title = current.title.clone();
    let message = current.message.clone();
    let level = current.level;

    let mut dismissed = false;

    let modal = egui::Modal::new(egui::Id::new("notification_modal")).show(ctx, |ui| {
        ui.set_min_width(280.0);
        ui.set_max_width(420.0);

        let heading = match level {
            NotificationLevel::Info => RichText::new(&title).strong(),
            NotificationLevel::Error => RichText::new(&title).strong().color(ERROR_COLOR),
        };
        ui.heading(heading);
        ui.add_space(6.0);
        ui.label(&message);
        ui.add_space(12.0);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    if modal.should_close() {
        dismissed = true;
    }

    if dismissed {
        notifications.dismiss();
    }
}
