//! Box dimension operations

use shared::{BoxConfig, BoxDimensions};

use super::SceneState;

impl SceneState {
    /// Current box dimensions
    pub fn box_dimensions(&self) -> BoxDimensions {
        self.scene.box_dimensions
    }

    /// Replace the box wholesale. Returns false if the dimensions were already set.
    pub fn set_box_dimensions(&mut self, dims: BoxDimensions) -> bool {
        if self.scene.box_dimensions == dims {
            return false;
        }
        self.scene.box_dimensions = dims;
        self.version += 1;
        tracing::info!(
            "Box dimensions set to {} x {} x {}",
            dims.length,
            dims.width,
            dims.height
        );
        true
    }

    /// Apply `box_dimensions` from a parsed config; keeps the current box if the key is absent.
    /// Returns the dimensions that were applied.
    pub fn load_box_dimensions_from(&mut self, config: &BoxConfig) -> Option<BoxDimensions> {
        let dims = config.box_dimensions?;
        self.set_box_dimensions(dims);
        Some(dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_box() {
        let s = SceneState::default();
        assert_eq!(s.box_dimensions(), BoxDimensions::default());
        assert_eq!(s.version(), 0);
    }

    #[test]
    fn test_set_box_dimensions_replaces_all_fields() {
        let mut s = SceneState::default();
        let dims = BoxDimensions::new(10.0, 20.0, 30.0).unwrap();
        assert!(s.set_box_dimensions(dims));
        assert_eq!(s.box_dimensions(), dims);
        assert_eq!(s.version(), 1);
    }

    #[test]
    fn test_set_box_dimensions_is_idempotent() {
        let dims = BoxDimensions::new(10.0, 20.0, 30.0).unwrap();

        let mut once = SceneState::default();
        once.set_box_dimensions(dims);

        let mut twice = SceneState::default();
        twice.set_box_dimensions(dims);
        assert!(!twice.set_box_dimensions(dims));

        assert_eq!(once.scene, twice.scene);
        assert_eq!(once.version(), twice.version());
    }

    #[test]
    fn test_load_from_config_applies_dimensions() {
        let mut s = SceneState::default();
        let config = BoxConfig {
            box_dimensions: Some(BoxDimensions::new(10.0, 20.0, 30.0).unwrap()),
        };
        let applied = s.load_box_dimensions_from(&config);
        assert!(applied.is_some());
        assert_eq!(s.box_dimensions().extents(), [10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_load_from_config_without_key_keeps_box() {
        let mut s = SceneState::default();
        s.set_box_dimensions(BoxDimensions::new(5.0, 6.0, 7.0).unwrap());
        let version = s.version();

        assert!(s.load_box_dimensions_from(&BoxConfig::default()).is_none());
        assert_eq!(s.box_dimensions().extents(), [5.0, 6.0, 7.0]);
        assert_eq!(s.version(), version);
    }
}
