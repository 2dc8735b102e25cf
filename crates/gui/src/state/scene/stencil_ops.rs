//! Stencil add/delete operations

use rand::Rng;
use shared::{Stencil, StencilId, StencilSpec};

use super::SceneState;
use crate::placement::random_stencil;
use crate::state::settings::PlacementSettings;

impl SceneState {
    /// Append a stencil with a fresh unique ID
    pub fn add_stencil(&mut self, spec: StencilSpec) -> StencilId {
        let id = uuid::Uuid::new_v4().to_string();
        self.scene.stencils.push(Stencil::from_spec(id.clone(), spec));
        self.version += 1;
        tracing::info!(
            "Added stencil {} at {:?} size {:?}",
            super::short_id(&id),
            spec.position,
            spec.dimensions
        );
        id
    }

    /// Append a stencil with random placement and size relative to the current box
    pub fn add_random_stencil<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        placement: &PlacementSettings,
    ) -> StencilId {
        let spec = random_stencil(rng, &self.scene.box_dimensions, placement);
        self.add_stencil(spec)
    }

    /// Remove the stencil with this ID. Unknown IDs are ignored.
    /// Returns true if a stencil was removed.
    pub fn delete_stencil(&mut self, id: &str) -> bool {
        let before = self.scene.stencils.len();
        self.scene.stencils.retain(|s| s.id != id);
        if self.scene.stencils.len() == before {
            tracing::debug!("Delete ignored: no stencil {}", id);
            return false;
        }
        self.version += 1;
        tracing::info!("Deleted stencil {}", super::short_id(id));
        true
    }
}
