use glow::HasContext;

use super::camera::ArcBallCamera;
use super::mesh::{self, LineMeshData, MeshData, LINE_STRIDE, MESH_STRIDE};
use crate::state::settings::{AxisSettings, GridSettings};

// ── Render parameters ────────────────────────────────────────

/// Parameters for rendering the viewport
pub struct RenderParams {
    /// Viewport rectangle [x, y, width, height] in pixels
    pub viewport: [f32; 4],
    /// Show grid
    pub grid_visible: bool,
    /// Show axes
    pub axes_visible: bool,
    /// Axis line thickness
    pub axes_thickness: f32,
    /// Background color RGB
    pub bg_color: [u8; 3],
}

// ── GPU mesh handles ─────────────────────────────────────────

struct GpuMesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ibo: glow::Buffer,
    index_count: i32,
}

struct GpuLines {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: i32,
}

// ── Main GL renderer ─────────────────────────────────────────

pub struct GlRenderer {
    mesh_program: glow::Program,
    line_program: glow::Program,
    grid: Option<GpuLines>,
    axes: Option<GpuLines>,
    /// Cached grid settings to detect changes
    cached_grid_settings: Option<(i32, f32, f32)>,
    /// Cached axes length to detect changes
    cached_axes_length: Option<f32>,
    /// All box and stencil faces
    faces: Option<GpuMesh>,
    /// Box outline and selection outlines
    edges: Option<GpuLines>,
    /// Geometry version the GPU buffers were built from
    uploaded_version: Option<u64>,
}

impl GlRenderer {
    pub fn new(gl: &glow::Context) -> Result<Self, String> {
        let mesh_program = compile_program(gl, MESH_VERT, MESH_FRAG)?;
        let line_program = compile_program(gl, LINE_VERT, LINE_FRAG)?;

        Ok(Self {
            mesh_program,
            line_program,
            grid: None,
            axes: None,
            cached_grid_settings: None,
            cached_axes_length: None,
            faces: None,
            edges: None,
            uploaded_version: None,
        })
    }

    /// Update grid mesh based on settings
    pub fn update_grid(&mut self, gl: &glow::Context, settings: &GridSettings) {
        let new_settings = (settings.range, settings.size, settings.opacity);

        if self.cached_grid_settings == Some(new_settings) {
            return;
        }

        if let Some(old) = self.grid.take() {
            delete_lines(gl, &old);
        }

        let grid_data = mesh::grid(settings.range, settings.size, settings.opacity);
        self.grid = upload_lines(gl, &grid_data).ok();
        self.cached_grid_settings = Some(new_settings);
    }

    /// Update axes mesh based on settings
    pub fn update_axes(&mut self, gl: &glow::Context, settings: &AxisSettings) {
        if self.cached_axes_length == Some(settings.length) {
            return;
        }

        if let Some(old) = self.axes.take() {
            delete_lines(gl, &old);
        }

        let axes_data = mesh::axes(settings.length);
        self.axes = upload_lines(gl, &axes_data).ok();
        self.cached_axes_length = Some(settings.length);
    }

    /// Upload scene geometry to GPU, replacing the previous buffers
    pub fn sync_scene(
        &mut self,
        gl: &glow::Context,
        faces: &MeshData,
        edges: &LineMeshData,
        version: u64,
    ) {
        if self.uploaded_version == Some(version) {
            return;
        }
        self.uploaded_version = Some(version);

        if let Some(old) = self.faces.take() {
            delete_mesh(gl, &old);
        }
        if let Some(old) = self.edges.take() {
            delete_lines(gl, &old);
        }

        match upload_mesh(gl, faces) {
            Ok(m) => self.faces = Some(m),
            Err(e) => tracing::error!("Failed to upload scene faces: {e}"),
        }
        match upload_lines(gl, edges) {
            Ok(l) => self.edges = Some(l),
            Err(e) => tracing::error!("Failed to upload scene edges: {e}"),
        }
    }

    /// Render the scene
    pub fn paint(&self, gl: &glow::Context, camera: &ArcBallCamera, params: &RenderParams) {
        let aspect = params.viewport[2] / params.viewport[3];
        let vp = camera.view_projection(aspect);

        unsafe {
            gl.viewport(
                params.viewport[0] as i32,
                params.viewport[1] as i32,
                params.viewport[2] as i32,
                params.viewport[3] as i32,
            );
            gl.scissor(
                params.viewport[0] as i32,
                params.viewport[1] as i32,
                params.viewport[2] as i32,
                params.viewport[3] as i32,
            );
            gl.enable(glow::SCISSOR_TEST);

            // Clear viewport area with configured background color
            gl.clear_color(
                params.bg_color[0] as f32 / 255.0,
                params.bg_color[1] as f32 / 255.0,
                params.bg_color[2] as f32 / 255.0,
                1.0,
            );
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LEQUAL);
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

            // Opaque lines first: grid, axes, outlines
            gl.use_program(Some(self.line_program));
            set_uniform_mat4(gl, self.line_program, "u_mvp", &vp);

            if params.grid_visible {
                if let Some(ref grid) = self.grid {
                    draw_lines(gl, grid);
                }
            }

            if params.axes_visible {
                if let Some(ref axes) = self.axes {
                    gl.line_width(params.axes_thickness);
                    draw_lines(gl, axes);
                    gl.line_width(1.0);
                }
            }

            if let Some(ref edges) = self.edges {
                gl.line_width(2.0);
                draw_lines(gl, edges);
                gl.line_width(1.0);
            }

            // Translucent faces, depth-tested but not depth-written
            gl.use_program(Some(self.mesh_program));
            set_uniform_mat4(gl, self.mesh_program, "u_mvp", &vp);

            // Light direction in world space (Z up)
            let light_dir = glam::Vec3::new(0.4, -0.5, 0.8).normalize();
            set_uniform_vec3(gl, self.mesh_program, "u_light_dir", &light_dir);

            if let Some(ref faces) = self.faces {
                gl.depth_mask(false);
                draw_mesh(gl, faces);
                gl.depth_mask(true);
            }

            gl.disable(glow::BLEND);
            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::SCISSOR_TEST);
            gl.use_program(None);
        }
    }

    pub fn destroy(&mut self, gl: &glow::Context) {
        for lines in [self.grid.take(), self.axes.take(), self.edges.take()]
            .into_iter()
            .flatten()
        {
            delete_lines(gl, &lines);
        }
        if let Some(faces) = self.faces.take() {
            delete_mesh(gl, &faces);
        }
        unsafe {
            gl.delete_program(self.mesh_program);
            gl.delete_program(self.line_program);
        }
    }
}

// ── GPU upload ───────────────────────────────────────────────

fn upload_mesh(gl: &glow::Context, data: &MeshData) -> Result<GpuMesh, String> {
    unsafe {
        let vao = gl.create_vertex_array()?;
        gl.bind_vertex_array(Some(vao));

        let vbo = gl.create_buffer()?;
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck_cast_slice(&data.vertices),
            glow::STATIC_DRAW,
        );

        let stride = (MESH_STRIDE * 4) as i32;
        // position: location 0
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        // normal: location 1
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, 3 * 4);
        // color: location 2
        gl.enable_vertex_attrib_array(2);
        gl.vertex_attrib_pointer_f32(2, 4, glow::FLOAT, false, stride, 6 * 4);

        let ibo = gl.create_buffer()?;
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ibo));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck_cast_slice(&data.indices),
            glow::STATIC_DRAW,
        );

        gl.bind_vertex_array(None);

        Ok(GpuMesh {
            vao,
            vbo,
            ibo,
            index_count: data.indices.len() as i32,
        })
    }
}

fn upload_lines(gl: &glow::Context, data: &LineMeshData) -> Result<GpuLines, String> {
    unsafe {
        let vao = gl.create_vertex_array()?;
        gl.bind_vertex_array(Some(vao));

        let vbo = gl.create_buffer()?;
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck_cast_slice(&data.vertices),
            glow::STATIC_DRAW,
        );

        let stride = (LINE_STRIDE * 4) as i32;
        // position: location 0
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        // color: location 1
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_f32(1, 4, glow::FLOAT, false, stride, 3 * 4);

        gl.bind_vertex_array(None);

        Ok(GpuLines {
            vao,
            vbo,
            vertex_count: data.vertex_count() as i32,
        })
    }
}

fn delete_mesh(gl: &glow::Context, mesh: &GpuMesh) {
    unsafe {
        gl.delete_vertex_array(mesh.vao);
        gl.delete_buffer(mesh.vbo);
        gl.delete_buffer(mesh.ibo);
    }
}

fn delete_lines(gl: &glow::Context, lines: &GpuLines) {
    unsafe {
        gl.delete_vertex_array(lines.vao);
        gl.delete_buffer(lines.vbo);
    }
}

// ── Draw calls ───────────────────────────────────────────────

unsafe fn draw_mesh(gl: &glow::Context, mesh: &GpuMesh) {
    gl.bind_vertex_array(Some(mesh.vao));
    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(mesh.ibo));
    gl.draw_elements(glow::TRIANGLES, mesh.index_count, glow::UNSIGNED_INT, 0);
    gl.bind_vertex_array(None);
}

unsafe fn draw_lines(gl: &glow::Context, lines: &GpuLines) {
    gl.bind_vertex_array(Some(lines.vao));
    gl.draw_arrays(glow::LINES, 0, lines.vertex_count);
    gl.bind_vertex_array(None);
}

// ── Shader compilation ───────────────────────────────────────

fn compile_program(
    gl: &glow::Context,
    vert_src: &str,
    frag_src: &str,
) -> Result<glow::Program, String> {
    unsafe {
        let program = gl.create_program()?;

        let vert = gl.create_shader(glow::VERTEX_SHADER)?;
        gl.shader_source(vert, vert_src);
        gl.compile_shader(vert);
        if !gl.get_shader_compile_status(vert) {
            return Err(format!("vertex shader: {}", gl.get_shader_info_log(vert)));
        }

        let frag = gl.create_shader(glow::FRAGMENT_SHADER)?;
        gl.shader_source(frag, frag_src);
        gl.compile_shader(frag);
        if !gl.get_shader_compile_status(frag) {
            return Err(format!("fragment shader: {}", gl.get_shader_info_log(frag)));
        }

        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);
        if !gl.get_program_link_status(program) {
            return Err(format!("program link: {}", gl.get_program_info_log(program)));
        }

        gl.delete_shader(vert);
        gl.delete_shader(frag);

        Ok(program)
    }
}

// ── Uniform setters ──────────────────────────────────────────

fn set_uniform_mat4(gl: &glow::Context, program: glow::Program, name: &str, mat: &glam::Mat4) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_matrix_4_f32_slice(loc.as_ref(), false, &mat.to_cols_array());
    }
}

fn set_uniform_vec3(gl: &glow::Context, program: glow::Program, name: &str, v: &glam::Vec3) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_3_f32(loc.as_ref(), v.x, v.y, v.z);
    }
}

// ── Byte cast helper ─────────────────────────────────────────

fn bytemuck_cast_slice<T: Copy>(slice: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(slice.as_ptr() as *const u8, std::mem::size_of_val(slice)) }
}

// ── Shaders ──────────────────────────────────────────────────

const MESH_VERT: &str = r#"#version 330 core
uniform mat4 u_mvp;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec4 a_color;

out vec3 v_normal;
out vec4 v_color;

void main() {
    gl_Position = u_mvp * vec4(a_position, 1.0);
    v_normal = a_normal;
    v_color = a_color;
}
"#;

// Two-sided lighting: back faces of translucent cuboids stay visible
const MESH_FRAG: &str = r#"#version 330 core
uniform vec3 u_light_dir;

in vec3 v_normal;
in vec4 v_color;

out vec4 frag_color;

void main() {
    vec3 n = normalize(v_normal);
    float diffuse = abs(dot(n, u_light_dir));
    float light = 0.55 + diffuse * 0.45;
    frag_color = vec4(v_color.rgb * light, v_color.a);
}
"#;

const LINE_VERT: &str = r#"#version 330 core
uniform mat4 u_mvp;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec4 a_color;

out vec4 v_color;

void main() {
    gl_Position = u_mvp * vec4(a_position, 1.0);
    v_color = a_color;
}
"#;

const LINE_FRAG: &str = r#"#version 330 core
in vec4 v_color;
out vec4 frag_color;

void main() {
    frag_color = v_color;
}
"#;
