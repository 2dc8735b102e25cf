//! 3D viewport panel with OpenGL rendering

mod camera;
mod gl_renderer;
pub use box_recommender_gui_lib::viewport::{mesh, picking};
mod overlays;
mod renderer;

pub use renderer::to_color32;

use std::sync::{Arc, Mutex};

use egui::Ui;
use shared::BoxDimensions;

use crate::build::GeometryCache;
use crate::state::AppState;
use camera::ArcBallCamera;
use gl_renderer::GlRenderer;
use picking::pick_stencil;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    cache: GeometryCache,
    /// Box the camera was last framed on
    framed_box: Option<BoxDimensions>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            gl_renderer: None,
            cache: GeometryCache::new(),
            framed_box: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context).
    /// On failure the viewport keeps using the software painter.
    pub fn init_gl(&mut self, gl: &glow::Context) {
        match GlRenderer::new(gl) {
            Ok(renderer) => self.gl_renderer = Some(Arc::new(Mutex::new(renderer))),
            Err(e) => tracing::error!("GL renderer unavailable, using software fallback: {e}"),
        }
    }

    /// Release GPU resources
    pub fn destroy_gl(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(mut r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }

    /// Point the camera at the whole box
    pub fn frame_box(&mut self, bounds: &BoxDimensions) {
        self.camera.frame_box(bounds);
        self.framed_box = Some(*bounds);
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Reframe when the box changes ─────────────────────────
        let bounds = state.scene.box_dimensions();
        if self.framed_box != Some(bounds) {
            self.frame_box(&bounds);
        }

        // ── Camera controls ─────────────────────────────────────
        self.handle_camera(&response, ui, rect);

        // ── Geometry BEFORE picking (so picking sees this frame's scene) ──
        self.cache.refresh(
            &state.scene.scene,
            &state.settings.viewport,
            state.selection.all(),
            state.scene.version(),
        );

        // ── Stencil selection via click ──────────────────────────
        self.handle_selection(&response, ui, rect, state);

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── Rendering ───────────────────────────────────────────
        self.render(ui, rect, state);

        // ── Overlays ─────────────────────────────────────
        self.draw_overlays(ui, rect, state);
    }

    fn handle_camera(&mut self, response: &egui::Response, ui: &Ui, rect: egui::Rect) {
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }

        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            self.camera.pan(delta.x, delta.y, rect.height());
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }
    }

    fn handle_selection(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        state: &mut AppState,
    ) {
        if !response.clicked() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };

        let ray = self.camera.screen_ray(pos, rect);
        let picked = pick_stencil(&ray, &state.scene.scene);
        if ui.input(|i| i.modifiers.command) {
            if let Some(id) = picked {
                state.selection.toggle(id);
            }
        } else if let Some(id) = picked {
            state.selection.select(id);
        } else {
            state.selection.clear();
        }
    }

    fn render(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            // Fallback: software rendering
            renderer::paint_viewport(ui, rect, &self.camera, state, self.cache.geometry());
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera = self.camera;

        let faces = Arc::clone(self.cache.mesh());
        let edges = Arc::clone(self.cache.lines());
        let version = self.cache.rebuild_count();

        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();
        let bg_color = state.settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    r.sync_scene(gl, &faces, &edges, version);

                    let render_params = gl_renderer::RenderParams {
                        viewport,
                        grid_visible: grid_settings.visible,
                        axes_visible: axes_settings.visible,
                        axes_thickness: axes_settings.thickness,
                        bg_color,
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        overlays::draw_axis_labels(&painter, rect, &self.camera, &state.settings.axes);
        overlays::draw_fit_legend(&painter, rect, &state.settings.viewport);

        if state.scene.stencil_count() == 0 {
            overlays::draw_navigation_hint(&painter, rect);
        }
    }
}
