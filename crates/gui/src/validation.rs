//! Mesh validation utilities.
//!
//! `MeshValidator` provides methods to check mesh data integrity:
//! correct stride, in-range indices, normalized normals, AABB dimensions,
//! face colors and opacity.

use crate::viewport::mesh::{MeshData, MESH_STRIDE};
use crate::viewport::picking::Aabb;

/// Validator for `MeshData` integrity checks.
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    /// Create a new validator for the given mesh.
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    /// Number of vertices (vertices buffer length / 10).
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len() / MESH_STRIDE
    }

    /// Number of triangles (indices buffer length / 3).
    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }

    /// Check that the vertex buffer length is a multiple of the stride.
    pub fn is_stride_valid(&self) -> bool {
        self.mesh.vertices.len() % MESH_STRIDE == 0
    }

    /// Check that the index buffer length is a multiple of 3.
    pub fn is_index_stride_valid(&self) -> bool {
        self.mesh.indices.len() % 3 == 0
    }

    /// Check that all indices are within the valid vertex range.
    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < max_idx)
    }

    fn vertex(&self, i: usize) -> &[f32] {
        &self.mesh.vertices[i * MESH_STRIDE..(i + 1) * MESH_STRIDE]
    }

    /// Check that all vertex normals have unit length (within epsilon).
    pub fn are_normals_normalized(&self, epsilon: f32) -> bool {
        (0..self.vertex_count()).all(|i| {
            let v = self.vertex(i);
            let len = (v[3] * v[3] + v[4] * v[4] + v[5] * v[5]).sqrt();
            (len - 1.0).abs() <= epsilon
        })
    }

    /// Check that every color channel, alpha included, lies in 0..=1.
    pub fn are_colors_in_range(&self) -> bool {
        (0..self.vertex_count()).all(|i| self.vertex(i)[6..10].iter().all(|c| (0.0..=1.0).contains(c)))
    }

    /// Number of vertices carrying this RGBA color (within 0.01 per channel).
    pub fn count_color(&self, rgba: [f32; 4]) -> usize {
        (0..self.vertex_count())
            .filter(|&i| {
                self.vertex(i)[6..10]
                    .iter()
                    .zip(rgba)
                    .all(|(a, b)| (a - b).abs() < 0.01)
            })
            .count()
    }

    /// Compute the axis-aligned bounding box of the mesh.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_mesh(self.mesh)
    }

    /// Compute the dimensions (x, y, z extent) of the bounding box.
    pub fn dimensions(&self) -> [f32; 3] {
        self.aabb().size().to_array()
    }

    /// Check that the AABB dimensions are approximately equal to `expected`.
    pub fn assert_dimensions_approx(&self, expected: [f32; 3], tolerance: f32) -> bool {
        let dims = self.dimensions();
        (dims[0] - expected[0]).abs() < tolerance
            && (dims[1] - expected[1]).abs() < tolerance
            && (dims[2] - expected[2]).abs() < tolerance
    }

    /// Run all validation checks and return a list of error messages.
    /// An empty list means the mesh is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.is_stride_valid() {
            errors.push(format!(
                "Vertex buffer length {} is not a multiple of {}",
                self.mesh.vertices.len(),
                MESH_STRIDE
            ));
            // Per-vertex checks below assume a whole number of vertices
            return errors;
        }

        if !self.is_index_stride_valid() {
            errors.push(format!(
                "Index buffer length {} is not a multiple of 3",
                self.mesh.indices.len()
            ));
        }

        if !self.are_indices_in_range() {
            let max_idx = self.vertex_count() as u32;
            let out_of_range: Vec<_> = self
                .mesh
                .indices
                .iter()
                .filter(|&&i| i >= max_idx)
                .take(5)
                .collect();
            errors.push(format!(
                "Indices out of range (vertex_count={}): {:?}",
                max_idx, out_of_range
            ));
        }

        if self.vertex_count() > 0 && !self.are_normals_normalized(0.1) {
            errors.push("Some normals are not unit-length (epsilon=0.1)".to_string());
        }

        if !self.are_colors_in_range() {
            errors.push("Some color channels are outside 0..1".to_string());
        }

        errors
    }
}
