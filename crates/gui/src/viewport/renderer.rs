//! Software rendering for the viewport, used when no GL context is available.
//!
//! Faces are painted back to front with egui's painter, then the outlines.

use egui::{Color32, Rect, Shape, Stroke, Ui};
use glam::Vec3;

use super::camera::ArcBallCamera;
use crate::build::{FacePolygon, SceneGeometry};
use crate::state::settings::{AxisSettings, GridSettings};
use crate::state::AppState;
use crate::viewport::mesh::AXIS_COLORS;

/// Paint the 3D viewport using egui's painter
pub fn paint_viewport(
    ui: &Ui,
    rect: Rect,
    camera: &ArcBallCamera,
    state: &AppState,
    geometry: &SceneGeometry,
) {
    let painter = ui.painter_at(rect);

    // Background
    let bg = &state.settings.viewport.background_color;
    painter.rect_filled(rect, 0.0, Color32::from_rgb(bg[0], bg[1], bg[2]));

    if state.settings.grid.visible {
        draw_grid(&painter, rect, camera, &state.settings.grid);
    }

    if state.settings.axes.visible {
        draw_axes(&painter, rect, camera, &state.settings.axes);
    }

    let eye = camera.eye_position();
    for idx in back_to_front(&geometry.polygons, eye) {
        draw_polygon(&painter, rect, camera, &geometry.polygons[idx]);
    }

    for edge in &geometry.edges {
        draw_line_3d(&painter, rect, camera, edge.start, edge.end, Stroke::new(1.5, to_color32(edge.color)));
    }
}

/// Polygon indices ordered from farthest to nearest centroid
pub fn back_to_front(polygons: &[FacePolygon], eye: Vec3) -> Vec<usize> {
    let mut order: Vec<(usize, f32)> = polygons
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.centroid().distance_squared(eye)))
        .collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));
    order.into_iter().map(|(i, _)| i).collect()
}

pub fn to_color32(rgba: [f32; 4]) -> Color32 {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(c(rgba[0]), c(rgba[1]), c(rgba[2]), c(rgba[3]))
}

fn draw_polygon(painter: &egui::Painter, rect: Rect, camera: &ArcBallCamera, polygon: &FacePolygon) {
    let points: Option<Vec<egui::Pos2>> = polygon
        .corners
        .iter()
        .map(|c| camera.project(*c, rect))
        .collect();
    // Skip faces with a corner behind the camera
    let Some(points) = points else { return };
    painter.add(Shape::convex_polygon(points, to_color32(polygon.color), Stroke::NONE));
}

fn draw_grid(painter: &egui::Painter, rect: Rect, camera: &ArcBallCamera, settings: &GridSettings) {
    let alpha = (settings.opacity * 255.0) as u8;
    let stroke = Stroke::new(0.5, Color32::from_rgba_unmultiplied(140, 140, 150, alpha));

    let range = settings.range;
    let step = settings.size;
    let extent = range as f32 * step;

    for i in -range..=range {
        let f = i as f32 * step;
        // Line along Y
        draw_line_3d(painter, rect, camera, Vec3::new(f, -extent, 0.0), Vec3::new(f, extent, 0.0), stroke);
        // Line along X
        draw_line_3d(painter, rect, camera, Vec3::new(-extent, f, 0.0), Vec3::new(extent, f, 0.0), stroke);
    }
}

fn draw_axes(painter: &egui::Painter, rect: Rect, camera: &ArcBallCamera, settings: &AxisSettings) {
    let dirs = [Vec3::X, Vec3::Y, Vec3::Z];
    for (dir, color) in dirs.into_iter().zip(AXIS_COLORS) {
        let stroke = Stroke::new(settings.thickness, to_color32(color));
        draw_line_3d(painter, rect, camera, Vec3::ZERO, dir * settings.length, stroke);
    }
}

fn draw_line_3d(
    painter: &egui::Painter,
    rect: Rect,
    camera: &ArcBallCamera,
    a: Vec3,
    b: Vec3,
    stroke: Stroke,
) {
    if let (Some(pa), Some(pb)) = (camera.project(a, rect), camera.project(b, rect)) {
        painter.line_segment([pa, pb], stroke);
    }
}
