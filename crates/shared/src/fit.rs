//! Fit classification of a stencil against the box bounds.

use serde::{Deserialize, Serialize};

use crate::{BoxDimensions, Stencil};

/// How a stencil sits relative to the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fit {
    /// Far corner within the box on every axis
    Fits,
    /// Far corner outside the box on at least one axis
    Exceeds,
    /// Neither of the above holds. Only happens for unordered (NaN) coordinates.
    Borderline,
}

impl Fit {
    pub const ALL: [Fit; 3] = [Fit::Fits, Fit::Exceeds, Fit::Borderline];

    pub fn label(&self) -> &'static str {
        match self {
            Fit::Fits => "Fits",
            Fit::Exceeds => "Exceeds",
            Fit::Borderline => "Borderline",
        }
    }
}

/// Classify a stencil against the box. Pure; recompute whenever either changes.
pub fn classify(bounds: &BoxDimensions, stencil: &Stencil) -> Fit {
    let far = stencil.far_corner();
    let limits = bounds.extents();

    if far.iter().zip(limits.iter()).all(|(f, l)| f <= l) {
        Fit::Fits
    } else if far.iter().zip(limits.iter()).any(|(f, l)| f > l) {
        Fit::Exceeds
    } else {
        Fit::Borderline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stencil(position: [f64; 3], dimensions: [f64; 3]) -> Stencil {
        Stencil {
            id: "s".to_string(),
            position,
            dimensions,
        }
    }

    #[test]
    fn test_stencil_inside_default_box_fits() {
        let b = BoxDimensions::default();
        let s = stencil([0.0, 0.0, 0.0], [40.0, 40.0, 40.0]);
        assert_eq!(classify(&b, &s), Fit::Fits);
    }

    #[test]
    fn test_stencil_past_corner_exceeds() {
        let b = BoxDimensions::default();
        let s = stencil([40.0, 40.0, 40.0], [20.0, 20.0, 20.0]);
        assert_eq!(classify(&b, &s), Fit::Exceeds);
    }

    #[test]
    fn test_touching_the_wall_still_fits() {
        let b = BoxDimensions::default();
        let s = stencil([10.0, 0.0, 25.0], [40.0, 50.0, 25.0]);
        assert_eq!(classify(&b, &s), Fit::Fits);
    }

    #[test]
    fn test_single_axis_overflow_exceeds() {
        let b = BoxDimensions::new(10.0, 20.0, 30.0).unwrap();
        assert_eq!(classify(&b, &stencil([0.0, 0.0, 0.0], [10.5, 1.0, 1.0])), Fit::Exceeds);
        assert_eq!(classify(&b, &stencil([0.0, 15.0, 0.0], [1.0, 5.5, 1.0])), Fit::Exceeds);
        assert_eq!(classify(&b, &stencil([0.0, 0.0, 29.0], [1.0, 1.0, 1.01])), Fit::Exceeds);
    }

    #[test]
    fn test_fits_iff_far_corner_within_bounds() {
        let b = BoxDimensions::new(10.0, 20.0, 30.0).unwrap();
        for x in [0.0, 4.0, 8.0] {
            for l in [1.0, 2.0, 6.0] {
                for z in [0.0, 20.0, 28.0] {
                    let s = stencil([x, 5.0, z], [l, 15.0, 2.0]);
                    let far = s.far_corner();
                    let inside = far[0] <= 10.0 && far[1] <= 20.0 && far[2] <= 30.0;
                    let fit = classify(&b, &s);
                    assert_eq!(fit == Fit::Fits, inside, "{s:?}");
                    assert_eq!(fit == Fit::Exceeds, !inside, "{s:?}");
                }
            }
        }
    }

    #[test]
    fn test_borderline_only_for_nan() {
        let b = BoxDimensions::default();
        let s = stencil([f64::NAN, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert_eq!(classify(&b, &s), Fit::Borderline);
    }

    #[test]
    fn test_classification_follows_box_changes() {
        let s = stencil([0.0, 0.0, 0.0], [40.0, 40.0, 40.0]);
        let big = BoxDimensions::default();
        let small = BoxDimensions::new(30.0, 50.0, 50.0).unwrap();
        assert_eq!(classify(&big, &s), Fit::Fits);
        assert_eq!(classify(&small, &s), Fit::Exceeds);
        assert_eq!(classify(&big, &s), Fit::Fits);
    }
}
