//! Geometry cache management

use std::sync::Arc;

use shared::{SceneDescription, StencilId};

use super::{build_scene_geometry, SceneGeometry};
use crate::state::settings::ViewportSettings;
use crate::viewport::mesh::{LineMeshData, MeshData};

/// Cached scene geometry, rebuilt when the scene or the selection changes
pub struct GeometryCache {
    geometry: SceneGeometry,
    /// Shared with the GL paint callback without copying
    mesh: Arc<MeshData>,
    lines: Arc<LineMeshData>,
    version: u64,
    rebuild_count: u64,
    selected_snapshot: Vec<StencilId>,
}

impl Default for GeometryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryCache {
    pub fn new() -> Self {
        Self {
            geometry: SceneGeometry::default(),
            mesh: Arc::new(MeshData::default()),
            lines: Arc::new(LineMeshData::default()),
            version: u64::MAX, // force first rebuild
            rebuild_count: 0,
            selected_snapshot: Vec::new(),
        }
    }

    /// Check if cache is still valid
    pub fn is_valid(&self, scene_version: u64, selected: &[StencilId]) -> bool {
        self.version == scene_version && self.selected_snapshot == selected
    }

    /// Rebuild cached geometry from the scene
    pub fn rebuild(
        &mut self,
        scene: &SceneDescription,
        colors: &ViewportSettings,
        selected: &[StencilId],
        version: u64,
    ) {
        self.geometry = build_scene_geometry(scene, colors, selected);
        self.mesh = Arc::new(self.geometry.to_mesh_data());
        self.lines = Arc::new(self.geometry.to_line_data());
        self.version = version;
        self.rebuild_count += 1;
        self.selected_snapshot = selected.to_vec();
    }

    /// Rebuild only if the scene version or selection changed. Returns true if rebuilt.
    pub fn refresh(
        &mut self,
        scene: &SceneDescription,
        colors: &ViewportSettings,
        selected: &[StencilId],
        version: u64,
    ) -> bool {
        if self.is_valid(version, selected) {
            return false;
        }
        self.rebuild(scene, colors, selected, version);
        true
    }

    pub fn geometry(&self) -> &SceneGeometry {
        &self.geometry
    }

    pub fn mesh(&self) -> &Arc<MeshData> {
        &self.mesh
    }

    pub fn lines(&self) -> &Arc<LineMeshData> {
        &self.lines
    }

    /// Version the cached data was built from
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Rebuild counter
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_forces_first_rebuild() {
        let cache = GeometryCache::new();
        assert!(!cache.is_valid(0, &[]));
    }

    #[test]
    fn test_refresh_only_on_change() {
        let mut cache = GeometryCache::new();
        let scene = SceneDescription::default();
        let colors = ViewportSettings::default();

        assert!(cache.refresh(&scene, &colors, &[], 0));
        assert!(!cache.refresh(&scene, &colors, &[], 0));
        assert_eq!(cache.rebuild_count(), 1);
        assert_eq!(cache.geometry().polygons.len(), 6);

        assert!(cache.refresh(&scene, &colors, &["x".to_string()], 0));
        assert!(cache.refresh(&scene, &colors, &["x".to_string()], 1));
        assert_eq!(cache.rebuild_count(), 3);
        assert_eq!(cache.version(), 1);
    }

    #[test]
    fn test_buffers_shared_until_rebuild() {
        let mut cache = GeometryCache::new();
        let scene = SceneDescription::default();
        let colors = ViewportSettings::default();

        cache.refresh(&scene, &colors, &[], 0);
        let mesh = Arc::clone(cache.mesh());
        let lines = Arc::clone(cache.lines());
        assert_eq!(mesh.vertex_count(), 24);

        cache.refresh(&scene, &colors, &[], 0);
        assert!(Arc::ptr_eq(&mesh, cache.mesh()));
        assert!(Arc::ptr_eq(&lines, cache.lines()));

        cache.refresh(&scene, &colors, &[], 1);
        assert!(!Arc::ptr_eq(&mesh, cache.mesh()));
    }
}
