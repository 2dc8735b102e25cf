//! Application settings
//!
//! Read once at startup from `settings.json` in the platform config directory.
//! Missing sections fall back to defaults; the file is never written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use shared::Fit;

/// Grid display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Show grid
    pub visible: bool,
    /// Grid cell size in box units
    pub size: f32,
    /// Number of grid lines in each direction from origin
    pub range: i32,
    /// Grid line opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            size: 10.0,
            range: 8,
            opacity: 0.5,
        }
    }
}

/// Axis display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSettings {
    /// Show axes
    pub visible: bool,
    /// Axis arrow length
    pub length: f32,
    /// Axis line thickness
    pub thickness: f32,
    /// Show axis labels (X, Y, Z)
    pub show_labels: bool,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            visible: true,
            length: 15.0,
            thickness: 2.0,
            show_labels: true,
        }
    }
}

/// Viewport colors and opacities
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Box face fill RGB
    pub box_color: [u8; 3],
    /// Box face opacity (0.0 - 1.0)
    pub box_opacity: f32,
    /// Stencil face opacity (0.0 - 1.0)
    pub stencil_opacity: f32,
    pub fits_color: [u8; 3],
    pub exceeds_color: [u8; 3],
    pub borderline_color: [u8; 3],
    /// Box outline RGB
    pub edge_color: [u8; 3],
    /// Outline of the selected stencil RGB
    pub selection_color: [u8; 3],
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [240, 240, 244],
            box_color: [0, 0, 255],
            box_opacity: 0.2,
            stencil_opacity: 0.5,
            fits_color: [0, 128, 0],
            exceeds_color: [255, 0, 0],
            borderline_color: [255, 255, 0],
            edge_color: [0, 0, 0],
            selection_color: [0, 160, 220],
        }
    }
}

impl ViewportSettings {
    /// Fill color for a fit class
    pub fn fit_color(&self, fit: Fit) -> [u8; 3] {
        match fit {
            Fit::Fits => self.fits_color,
            Fit::Exceeds => self.exceeds_color,
            Fit::Borderline => self.borderline_color,
        }
    }
}

/// Random placement for "Add Stencil", as fractions of the box extent per axis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    pub min_extent_fraction: f64,
    pub max_extent_fraction: f64,
    pub max_origin_fraction: f64,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            min_extent_fraction: 0.1,
            max_extent_fraction: 0.5,
            max_origin_fraction: 0.8,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Grid settings
    pub grid: GridSettings,
    /// Axis settings
    pub axes: AxisSettings,
    /// Viewport settings
    pub viewport: ViewportSettings,
    /// Random stencil placement
    pub placement: PlacementSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl AppSettings {
    /// Location of the settings file, if the platform has a config directory
    pub fn path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "boxrecommender", "box-recommender")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return default if not found or invalid
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        let Ok(json) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Parse settings JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_palette() {
        let s = AppSettings::default();
        assert_eq!(s.viewport.box_opacity, 0.2);
        assert_eq!(s.viewport.stencil_opacity, 0.5);
        assert_eq!(s.viewport.fit_color(Fit::Exceeds), [255, 0, 0]);
        assert_eq!(s.viewport.fit_color(Fit::Borderline), [255, 255, 0]);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let s = AppSettings::from_json(r#"{"viewport": {"box_opacity": 0.35}, "ui": {}}"#).unwrap();
        assert_eq!(s.viewport.box_opacity, 0.35);
        assert_eq!(s.viewport.stencil_opacity, 0.5);
        assert_eq!(s.placement.max_origin_fraction, 0.8);
        assert_eq!(s.ui.font_size, 14.0);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(AppSettings::from_json("{ not json").is_err());
    }
}
