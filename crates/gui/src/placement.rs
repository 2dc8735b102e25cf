//! Random stencil generation for "Add Stencil".

use rand::Rng;
use shared::{BoxDimensions, StencilSpec};

use crate::state::settings::PlacementSettings;

/// Smallest extent fraction; keeps every drawn stencil strictly positive
const MIN_EXTENT_FRACTION: f64 = 0.01;

/// Draw a stencil sized and placed relative to the current box.
///
/// Per axis, the extent is uniform in `[min_extent_fraction, max_extent_fraction]`
/// times the box extent, and the origin is uniform in `[0, max_origin_fraction]`
/// times the box extent. Nothing keeps the stencil inside the box, so it may
/// classify as either fitting or exceeding. Fractions from settings are
/// clamped to `[0.01, 1]` for extents and `[0, 1]` for the origin.
pub fn random_stencil<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &BoxDimensions,
    placement: &PlacementSettings,
) -> StencilSpec {
    let (lo, hi) = ordered(placement.min_extent_fraction, placement.max_extent_fraction);
    // f64::max/min drop NaN, so a bad settings value lands on the bound
    let lo = lo.max(MIN_EXTENT_FRACTION).min(1.0);
    let hi = hi.max(lo).min(1.0);
    let origin_max = placement.max_origin_fraction.max(0.0).min(1.0);

    let mut position = [0.0; 3];
    let mut dimensions = [0.0; 3];
    for (axis, extent) in bounds.extents().into_iter().enumerate() {
        dimensions[axis] = extent * uniform(rng, lo, hi);
        position[axis] = extent * uniform(rng, 0.0, origin_max);
    }

    StencilSpec {
        position,
        dimensions,
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}
