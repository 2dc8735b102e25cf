use glam::Vec3;

/// Floats per triangle-mesh vertex: position(3) + normal(3) + color(4)
pub const MESH_STRIDE: usize = 10;
/// Floats per line vertex: position(3) + color(4)
pub const LINE_STRIDE: usize = 7;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b, a]
#[derive(Clone, Default)]
pub struct MeshData {
    /// 10 floats per vertex: position(3) + normal(3) + color(4)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / MESH_STRIDE
    }

    /// Append a flat-shaded quad as two triangles
    pub fn push_quad(&mut self, corners: &[Vec3; 4], normal: Vec3, color: [f32; 4]) {
        let base = self.vertex_count() as u32;
        for v in corners {
            push_vert(&mut self.vertices, *v, normal, color);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
#[derive(Clone, Default)]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

impl LineMeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / LINE_STRIDE
    }

    pub fn push_segment(&mut self, start: Vec3, end: Vec3, color: [f32; 4]) {
        push_line_vert(&mut self.vertices, start.x, start.y, start.z, color);
        push_line_vert(&mut self.vertices, end.x, end.y, end.z, color);
    }
}

// ── Grid and axes ────────────────────────────────────────────

/// Floor grid on the XY plane (Z is up)
pub fn grid(range: i32, cell_size: f32, opacity: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let grid_color = [0.55_f32, 0.55, 0.6, opacity];
    let origin_color_x = [0.6_f32, 0.3, 0.3, opacity * 0.8];
    let origin_color_y = [0.3_f32, 0.55, 0.3, opacity * 0.8];

    let extent = range as f32 * cell_size;

    for i in -range..=range {
        let f = i as f32 * cell_size;
        let color = if i == 0 { origin_color_y } else { grid_color };
        // Line along Y
        push_line_vert(&mut vertices, f, -extent, 0.0, color);
        push_line_vert(&mut vertices, f, extent, 0.0, color);

        let color = if i == 0 { origin_color_x } else { grid_color };
        // Line along X
        push_line_vert(&mut vertices, -extent, f, 0.0, color);
        push_line_vert(&mut vertices, extent, f, 0.0, color);
    }

    LineMeshData { vertices }
}

/// Axis colors: X red, Y green, Z blue
pub const AXIS_COLORS: [[f32; 4]; 3] = [
    [0.9, 0.2, 0.2, 1.0],
    [0.2, 0.7, 0.2, 1.0],
    [0.2, 0.3, 0.9, 1.0],
];

pub fn axes(length: f32) -> LineMeshData {
    let mut lines = LineMeshData::default();
    let dirs = [Vec3::X, Vec3::Y, Vec3::Z];
    for (dir, color) in dirs.iter().zip(AXIS_COLORS) {
        lines.push_segment(Vec3::ZERO, *dir * length, color);
    }
    lines
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, p: Vec3, n: Vec3, c: [f32; 4]) {
    v.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, c[0], c[1], c[2], c[3]]);
}

fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}
