//! Viewport overlay drawing (axis labels, fit legend, hints)

use egui::{Color32, Painter, Rect};
use glam::Vec3;
use shared::Fit;

use super::camera::ArcBallCamera;
use super::renderer::to_color32;
use crate::build::rgba;
use crate::state::settings::{AxisSettings, ViewportSettings};
use crate::viewport::mesh::AXIS_COLORS;

/// Draw axis labels at the tips of the axes
pub fn draw_axis_labels(painter: &Painter, rect: Rect, camera: &ArcBallCamera, axes: &AxisSettings) {
    if !axes.visible || !axes.show_labels {
        return;
    }
    let tip = axes.length * 1.08;
    let labels = [(Vec3::X, "X"), (Vec3::Y, "Y"), (Vec3::Z, "Z")];

    for ((dir, label), color) in labels.into_iter().zip(AXIS_COLORS) {
        if let Some(screen) = camera.project(dir * tip, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    label,
                    egui::FontId::monospace(12.0),
                    to_color32(color),
                );
            }
        }
    }
}

/// Legend mapping fill colors to fit classes, bottom-left corner
pub fn draw_fit_legend(painter: &Painter, rect: Rect, colors: &ViewportSettings) {
    let row_h = 16.0;
    let entries = Fit::ALL;
    let size = egui::vec2(120.0, row_h * entries.len() as f32 + 8.0);
    let overlay_rect = Rect::from_min_size(
        egui::pos2(rect.left() + 6.0, rect.bottom() - size.y - 6.0),
        size,
    );
    painter.rect_filled(overlay_rect, 4.0, Color32::from_rgba_unmultiplied(255, 255, 255, 190));

    for (i, fit) in entries.into_iter().enumerate() {
        let y = overlay_rect.top() + 4.0 + row_h * i as f32;
        let swatch = Rect::from_min_size(egui::pos2(overlay_rect.left() + 6.0, y + 2.0), egui::vec2(12.0, 12.0));
        painter.rect_filled(swatch, 2.0, to_color32(rgba(colors.fit_color(fit), 1.0)));
        painter.text(
            egui::pos2(swatch.right() + 6.0, y + row_h * 0.5),
            egui::Align2::LEFT_CENTER,
            fit.label(),
            egui::FontId::proportional(11.0),
            Color32::from_rgb(40, 40, 48),
        );
    }
}

/// Navigation hint shown while the box is empty
pub fn draw_navigation_hint(painter: &Painter, rect: Rect) {
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 20.0),
        egui::Align2::CENTER_BOTTOM,
        "Drag to orbit, right-drag to pan, scroll to zoom, F to frame the box",
        egui::FontId::proportional(11.0),
        Color32::from_rgb(100, 100, 110),
    );
}
