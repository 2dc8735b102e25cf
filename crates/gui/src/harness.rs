//! Headless test harness for programmatic scene manipulation.
//!
//! Drives the same actions as the palette buttons and the dimension form,
//! without a window.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{BoxDimensions, Fit, StencilId, StencilSpec};

use crate::actions;
use crate::build::{build_scene_geometry, SceneGeometry};
use crate::config::parse_box_config;
use crate::state::{AppSettings, AppState, Notification};
use crate::validation::MeshValidator;
use crate::viewport::mesh::MeshData;

/// Headless test harness: app state with default settings and a seeded RNG
pub struct TestHarness {
    pub state: AppState,
    rng: StdRng,
    last_geometry: SceneGeometry,
    last_mesh: MeshData,
}

impl TestHarness {
    /// Create a new harness with an empty scene and the default box.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Harness whose "Add Stencil" draws are reproducible from `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: AppState::with_settings(AppSettings::default()),
            rng: StdRng::seed_from_u64(seed),
            last_geometry: SceneGeometry::default(),
            last_mesh: MeshData::default(),
        }
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Add a stencil with explicit origin and size
    pub fn add_stencil_at(&mut self, position: [f64; 3], dimensions: [f64; 3]) -> StencilId {
        self.state.scene.add_stencil(StencilSpec {
            position,
            dimensions,
        })
    }

    /// Press "Add Stencil"
    pub fn add_random_stencil(&mut self) -> StencilId {
        actions::action_add_stencil(&mut self.state, &mut self.rng)
    }

    /// Delete a stencil by ID
    pub fn delete(&mut self, id: &str) -> bool {
        actions::action_delete_stencil(&mut self.state, id)
    }

    /// Set the box directly
    pub fn set_box(&mut self, length: f64, width: f64, height: f64) -> bool {
        match BoxDimensions::new(length, width, height) {
            Ok(dims) => self.state.scene.set_box_dimensions(dims),
            Err(_) => false,
        }
    }

    /// Open the dimension form, type the three values, and submit
    pub fn edit_box(&mut self, length: &str, width: &str, height: &str) -> bool {
        actions::action_edit_box_dimensions(&mut self.state);
        let dialog = &mut self.state.box_dialog;
        dialog.length = length.to_string();
        dialog.width = width.to_string();
        dialog.height = height.to_string();
        actions::apply_box_dimensions(&mut self.state)
    }

    /// Apply a box config given as JSON text (no file involved)
    pub fn load_config_json(&mut self, json: &str) -> bool {
        match parse_box_config(json) {
            Ok(config) => {
                self.state.scene.load_box_dimensions_from(&config);
                true
            }
            Err(_) => false,
        }
    }

    /// Press "Load Box Config" and pick `path`
    pub fn load_config_file(&mut self, path: &Path) -> bool {
        actions::action_load_box_config(&mut self.state, path)
    }

    // ── Selection ─────────────────────────────────────────────

    pub fn select(&mut self, id: &str) {
        self.state.selection.select(id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    // ── Build + inspection ────────────────────────────────────

    /// Build geometry from the current scene and selection
    pub fn build(&mut self) -> &SceneGeometry {
        self.last_geometry = build_scene_geometry(
            &self.state.scene.scene,
            &self.state.settings.viewport,
            self.state.selection.all(),
        );
        self.last_mesh = self.last_geometry.to_mesh_data();
        &self.last_geometry
    }

    /// Geometry from the last `build()`
    pub fn geometry(&self) -> &SceneGeometry {
        &self.last_geometry
    }

    /// Validator over the mesh from the last `build()`
    pub fn validate_mesh(&self) -> MeshValidator<'_> {
        MeshValidator::new(&self.last_mesh)
    }

    pub fn stencil_count(&self) -> usize {
        self.state.scene.stencil_count()
    }

    pub fn box_dimensions(&self) -> BoxDimensions {
        self.state.scene.box_dimensions()
    }

    pub fn fit_of(&self, id: &str) -> Option<Fit> {
        self.state.scene.fit_of(id)
    }

    /// Stencil IDs in list order
    pub fn stencil_ids(&self) -> Vec<StencilId> {
        self.state.scene.stencils().iter().map(|s| s.id.clone()).collect()
    }

    /// Most recent notification raised by an action
    pub fn last_notification(&self) -> Option<&Notification> {
        self.state.notifications.last()
    }

    /// Acknowledge every pending notification
    pub fn dismiss_all(&mut self) {
        while self.state.notifications.dismiss().is_some() {}
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_empty() {
        let h = TestHarness::new();
        assert_eq!(h.stencil_count(), 0);
        assert_eq!(h.box_dimensions(), BoxDimensions::default());
        assert!(h.last_notification().is_none());
    }

    #[test]
    fn test_add_and_delete() {
        let mut h = TestHarness::new();
        let a = h.add_stencil_at([0.0; 3], [40.0; 3]);
        let b = h.add_random_stencil();
        assert_eq!(h.stencil_ids(), vec![a.clone(), b]);

        assert!(h.delete(&a));
        assert_eq!(h.stencil_count(), 1);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut h1 = TestHarness::with_seed(9);
        let mut h2 = TestHarness::with_seed(9);
        let a = h1.add_random_stencil();
        let b = h2.add_random_stencil();
        let sa = h1.state.scene.get_stencil(&a).unwrap();
        let sb = h2.state.scene.get_stencil(&b).unwrap();
        assert_eq!(sa.position, sb.position);
        assert_eq!(sa.dimensions, sb.dimensions);
    }

    #[test]
    fn test_build_and_validate() {
        let mut h = TestHarness::new();
        h.add_stencil_at([0.0; 3], [40.0; 3]);
        assert_eq!(h.build().polygons.len(), 12);

        let v = h.validate_mesh();
        assert!(v.validate_all().is_empty());
        assert!(v.assert_dimensions_approx([50.0, 50.0, 50.0], 1e-3));
    }

    #[test]
    fn test_set_box_rejects_invalid() {
        let mut h = TestHarness::new();
        assert!(!h.set_box(0.0, 1.0, 1.0));
        assert!(h.set_box(1.0, 2.0, 3.0));
        assert_eq!(h.box_dimensions().extents(), [1.0, 2.0, 3.0]);
    }
}
