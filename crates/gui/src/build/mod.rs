//! Scene geometry: the box and every stencil as six translucent quads,
//! plus the box outline and the outline of selected stencils.

mod cache;
pub mod cuboid;

pub use cache::GeometryCache;

use glam::Vec3;
use shared::{classify, SceneDescription, StencilId};

use crate::state::settings::ViewportSettings;
use crate::viewport::mesh::{LineMeshData, MeshData};
use cuboid::{cuboid_corners, cuboid_edges, cuboid_faces, quad_normal};

/// What a polygon belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryOwner {
    Box,
    Stencil(StencilId),
}

/// One filled face, ready to draw
#[derive(Debug, Clone)]
pub struct FacePolygon {
    pub owner: GeometryOwner,
    pub corners: [Vec3; 4],
    pub normal: Vec3,
    /// Linear RGBA in 0..1, alpha is the face opacity
    pub color: [f32; 4],
}

impl FacePolygon {
    pub fn centroid(&self) -> Vec3 {
        self.corners.iter().copied().sum::<Vec3>() * 0.25
    }
}

/// One outline segment
#[derive(Debug, Clone, Copy)]
pub struct EdgeSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub color: [f32; 4],
}

/// Everything drawn for one scene state
#[derive(Debug, Clone, Default)]
pub struct SceneGeometry {
    /// Box faces first, then stencil faces in list order
    pub polygons: Vec<FacePolygon>,
    pub edges: Vec<EdgeSegment>,
}

impl SceneGeometry {
    /// Faces belonging to one owner
    pub fn polygons_of<'a>(
        &'a self,
        owner: &'a GeometryOwner,
    ) -> impl Iterator<Item = &'a FacePolygon> + 'a {
        self.polygons.iter().filter(move |p| &p.owner == owner)
    }

    /// Triangle mesh (two triangles per face) for the GL path
    pub fn to_mesh_data(&self) -> MeshData {
        let mut mesh = MeshData::default();
        for p in &self.polygons {
            mesh.push_quad(&p.corners, p.normal, p.color);
        }
        mesh
    }

    /// Line list for the GL path
    pub fn to_line_data(&self) -> LineMeshData {
        let mut lines = LineMeshData::default();
        for e in &self.edges {
            lines.push_segment(e.start, e.end, e.color);
        }
        lines
    }
}

/// Convert an 8-bit RGB color plus opacity into linear RGBA
pub fn rgba(rgb: [u8; 3], alpha: f32) -> [f32; 4] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        alpha.clamp(0.0, 1.0),
    ]
}

fn push_cuboid_faces(
    out: &mut Vec<FacePolygon>,
    owner: GeometryOwner,
    corners: &[Vec3; 8],
    color: [f32; 4],
) {
    for quad in cuboid_faces(corners) {
        out.push(FacePolygon {
            owner: owner.clone(),
            normal: quad_normal(&quad),
            corners: quad,
            color,
        });
    }
}

fn push_cuboid_edges(out: &mut Vec<EdgeSegment>, corners: &[Vec3; 8], color: [f32; 4]) {
    for [start, end] in cuboid_edges(corners) {
        out.push(EdgeSegment { start, end, color });
    }
}

/// Build drawable geometry for the scene.
///
/// The box is a cuboid from the origin to its dimensions, drawn as six faces
/// in the box color plus twelve outline edges. Each stencil is six faces
/// colored by its fit against the current box. Stencils listed in `selected`
/// also get a twelve-edge outline.
pub fn build_scene_geometry(
    scene: &SceneDescription,
    colors: &ViewportSettings,
    selected: &[StencilId],
) -> SceneGeometry {
    let mut geometry = SceneGeometry::default();
    let bounds = &scene.box_dimensions;

    let box_corners = cuboid_corners([0.0; 3], bounds.extents());
    push_cuboid_faces(
        &mut geometry.polygons,
        GeometryOwner::Box,
        &box_corners,
        rgba(colors.box_color, colors.box_opacity),
    );
    push_cuboid_edges(&mut geometry.edges, &box_corners, rgba(colors.edge_color, 1.0));

    for stencil in &scene.stencils {
        let fit = classify(bounds, stencil);
        let corners = cuboid_corners(stencil.position, stencil.dimensions);
        push_cuboid_faces(
            &mut geometry.polygons,
            GeometryOwner::Stencil(stencil.id.clone()),
            &corners,
            rgba(colors.fit_color(fit), colors.stencil_opacity),
        );
        if selected.contains(&stencil.id) {
            push_cuboid_edges(
                &mut geometry.edges,
                &corners,
                rgba(colors.selection_color, 1.0),
            );
        }
    }

    geometry
}
