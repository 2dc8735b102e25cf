//! Axis-aligned cuboid topology shared by the box and the stencils.

use glam::Vec3;

/// Corner indices of each face, wound counter-clockwise seen from outside
/// (for positive extents): front, right, back, left, bottom, top.
pub const CUBOID_FACES: [[usize; 4]; 6] = [
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
    [0, 3, 2, 1],
    [4, 5, 6, 7],
];

/// Corner index pairs of the 12 edges: bottom ring, top ring, verticals
pub const CUBOID_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// The 8 corners of the cuboid spanned by `origin` and `origin + extent`.
/// Bottom ring (z = origin) first, then the top ring in the same order.
pub fn cuboid_corners(origin: [f64; 3], extent: [f64; 3]) -> [Vec3; 8] {
    let o = Vec3::new(origin[0] as f32, origin[1] as f32, origin[2] as f32);
    let e = Vec3::new(extent[0] as f32, extent[1] as f32, extent[2] as f32);
    [
        o,
        o + Vec3::new(e.x, 0.0, 0.0),
        o + Vec3::new(e.x, e.y, 0.0),
        o + Vec3::new(0.0, e.y, 0.0),
        o + Vec3::new(0.0, 0.0, e.z),
        o + Vec3::new(e.x, 0.0, e.z),
        o + e,
        o + Vec3::new(0.0, e.y, e.z),
    ]
}

/// Quads of all six faces, in `CUBOID_FACES` order
pub fn cuboid_faces(corners: &[Vec3; 8]) -> [[Vec3; 4]; 6] {
    CUBOID_FACES.map(|f| f.map(|i| corners[i]))
}

/// Segments of all twelve edges, in `CUBOID_EDGES` order
pub fn cuboid_edges(corners: &[Vec3; 8]) -> [[Vec3; 2]; 12] {
    CUBOID_EDGES.map(|e| e.map(|i| corners[i]))
}

/// Normal of a planar quad from its winding; zero for a degenerate quad
pub fn quad_normal(quad: &[Vec3; 4]) -> Vec3 {
    (quad[1] - quad[0]).cross(quad[3] - quad[0]).normalize_or_zero()
}
