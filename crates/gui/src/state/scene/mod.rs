//! Scene state management
//!
//! This module provides the scene model: one box and the stencils placed in it.

mod box_ops;
mod display;
mod stencil_ops;

pub use display::{short_id, stencil_display_name};

use shared::{classify, Fit, SceneDescription, Stencil};

/// Scene state with a version counter for render invalidation
#[derive(Default)]
pub struct SceneState {
    /// Current box and stencils
    pub scene: SceneDescription,
    /// Monotonically increasing version counter, bumped on every mutation
    pub(crate) version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get a stencil by ID
    pub fn get_stencil(&self, id: &str) -> Option<&Stencil> {
        self.scene.stencils.iter().find(|s| s.id == id)
    }

    /// All stencils in insertion order
    pub fn stencils(&self) -> &[Stencil] {
        &self.scene.stencils
    }

    pub fn stencil_count(&self) -> usize {
        self.scene.stencils.len()
    }

    /// Fit of a stencil against the current box, computed on demand
    pub fn fit_of(&self, id: &str) -> Option<Fit> {
        self.get_stencil(id)
            .map(|s| classify(&self.scene.box_dimensions, s))
    }

    /// Count of stencils per fit class: `[fits, exceeds, borderline]`
    pub fn fit_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for stencil in &self.scene.stencils {
            match classify(&self.scene.box_dimensions, stencil) {
                Fit::Fits => counts[0] += 1,
                Fit::Exceeds => counts[1] += 1,
                Fit::Borderline => counts[2] += 1,
            }
        }
        counts
    }
}
