//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::actions;
use crate::state::AppState;
use crate::ui::box_dialog::BoxDimensionsDialogUi;
use crate::ui::{notification, palette, status_bar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct BoxRecommenderApp {
    state: AppState,
    viewport: ViewportPanel,
}

impl BoxRecommenderApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::default();

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }
        viewport.frame_box(&state.scene.box_dimensions());

        Self { state, viewport }
    }
}

impl eframe::App for BoxRecommenderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                if self.state.is_modal_open() {
                    ui.disable();
                }
                menus::file_menu(ui, &mut self.state);
                menus::edit_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
            });
        });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: Stencil palette ──────────────────────
        egui::SidePanel::left("stencil_palette")
            .default_width(250.0)
            .width_range(200.0..=420.0)
            .resizable(true)
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(8)))
            .show(ctx, |ui| {
                let enabled = !self.state.is_modal_open();
                ui.add_enabled_ui(enabled, |ui| palette::show(ui, &mut self.state));
            });

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let enabled = !self.state.is_modal_open();
                ui.add_enabled_ui(enabled, |ui| self.viewport.show(ui, &mut self.state));
            });

        // ── Modals: dimension form, then notifications ───────
        self.handle_box_dialog(ctx);
        notification::show(ctx, &mut self.state.notifications);
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.viewport.destroy_gl(gl);
        }
    }
}

impl BoxRecommenderApp {
    fn handle_box_dialog(&mut self, ctx: &egui::Context) {
        if let Some(confirmed) = self.state.box_dialog.show(ctx) {
            if confirmed {
                actions::apply_box_dimensions(&mut self.state);
            } else {
                actions::cancel_box_dimensions(&mut self.state);
            }
        }
    }
}
