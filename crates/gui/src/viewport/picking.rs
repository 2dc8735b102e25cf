use glam::Vec3;
use shared::{SceneDescription, Stencil, StencilId};

use super::mesh::{MeshData, MESH_STRIDE};

/// A ray in world space
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box spanned by an origin corner and a per-axis extent
    pub fn from_corner(origin: [f64; 3], extent: [f64; 3]) -> Self {
        let a = Vec3::new(origin[0] as f32, origin[1] as f32, origin[2] as f32);
        let b = a + Vec3::new(extent[0] as f32, extent[1] as f32, extent[2] as f32);
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_stencil(stencil: &Stencil) -> Self {
        Self::from_corner(stencil.position, stencil.dimensions)
    }

    /// Compute AABB from MeshData (10 floats per vertex: pos+normal+rgba)
    pub fn from_mesh(data: &MeshData) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);

        for v in data.vertices.chunks_exact(MESH_STRIDE) {
            let p = Vec3::new(v[0], v[1], v[2]);
            min = min.min(p);
            max = max.max(p);
        }

        Self { min, max }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Size along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Pick the nearest object whose AABB is intersected by the ray.
pub fn pick_nearest<'a, I>(ray: &Ray, aabbs: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, Aabb)>,
{
    let mut best: Option<(&str, f32)> = None;

    for (id, aabb) in aabbs {
        if let Some(dist) = ray_aabb(ray, &aabb) {
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((id, dist));
            }
        }
    }

    best.map(|(id, _)| id)
}

/// Pick the stencil under the ray. The box itself is never picked.
pub fn pick_stencil(ray: &Ray, scene: &SceneDescription) -> Option<StencilId> {
    let candidates = scene
        .stencils
        .iter()
        .map(|s| (s.id.as_str(), Aabb::from_stencil(s)));
    pick_nearest(ray, candidates).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stencil(id: &str, position: [f64; 3], dimensions: [f64; 3]) -> Stencil {
        Stencil {
            id: id.to_string(),
            position,
            dimensions,
        }
    }

    fn down_ray(x: f32, y: f32) -> Ray {
        Ray {
            origin: Vec3::new(x, y, 100.0),
            direction: Vec3::NEG_Z,
        }
    }

    #[test]
    fn test_ray_hits_aabb() {
        let aabb = Aabb::from_corner([0.0; 3], [10.0; 3]);
        let dist = ray_aabb(&down_ray(5.0, 5.0), &aabb).unwrap();
        assert!((dist - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_ray_misses_aabb() {
        let aabb = Aabb::from_corner([0.0; 3], [10.0; 3]);
        assert!(ray_aabb(&down_ray(15.0, 5.0), &aabb).is_none());
    }

    #[test]
    fn test_ray_from_inside() {
        let aabb = Aabb::from_corner([0.0; 3], [10.0; 3]);
        let ray = Ray {
            origin: Vec3::splat(5.0),
            direction: Vec3::X,
        };
        let dist = ray_aabb(&ray, &aabb).unwrap();
        assert!((dist - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_aabb_from_mesh() {
        let mut mesh = MeshData::default();
        let corners = [
            Vec3::new(-1.0, 0.0, 2.0),
            Vec3::new(3.0, 0.0, 2.0),
            Vec3::new(3.0, 4.0, 2.0),
            Vec3::new(-1.0, 4.0, 2.0),
        ];
        mesh.push_quad(&corners, Vec3::Z, [1.0; 4]);
        let aabb = Aabb::from_mesh(&mesh);
        assert_eq!(aabb.size(), Vec3::new(4.0, 4.0, 0.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 2.0));
    }

    #[test]
    fn test_pick_stencil_nearest_wins() {
        let scene = SceneDescription {
            stencils: vec![
                stencil("low", [0.0, 0.0, 0.0], [10.0, 10.0, 10.0]),
                stencil("high", [0.0, 0.0, 20.0], [10.0, 10.0, 10.0]),
                stencil("aside", [30.0, 30.0, 0.0], [5.0, 5.0, 5.0]),
            ],
            ..Default::default()
        };
        assert_eq!(pick_stencil(&down_ray(5.0, 5.0), &scene).as_deref(), Some("high"));
        assert_eq!(pick_stencil(&down_ray(32.0, 32.0), &scene).as_deref(), Some("aside"));
        assert!(pick_stencil(&down_ray(20.0, 20.0), &scene).is_none());
    }

    #[test]
    fn test_pick_empty_scene() {
        let scene = SceneDescription::default();
        assert!(pick_stencil(&down_ray(0.0, 0.0), &scene).is_none());
    }
}
