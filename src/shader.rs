use bytemuck::{Pod, Zeroable};

/// One circle to draw: expanded to a quad in the vertex shader, masked to a
/// disc in the fragment shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Instance {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: [f32; 3],
    pub alpha: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub resolution: [f32; 2],
    pub _padding: [f32; 2],
}

/// Instanced circle shader. Coordinates arrive in surface pixels (origin
/// top-left, y down) and are mapped to clip space against the resolution
/// uniform; alpha blending happens in the pipeline's blend state.
pub const SHADER_SOURCE: &str = r#"
struct Uniforms {
    resolution: vec2<f32>,
    _padding: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
    @location(1) alpha: f32,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) center: vec2<f32>,
    @location(1) radius: f32,
    @location(2) color: vec3<f32>,
    @location(3) alpha: f32,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let corner = quad_vertices[vertex_index];
    let pixel_pos = center + corner * radius;
    let ndc = vec2<f32>(
        pixel_pos.x / uniforms.resolution.x * 2.0 - 1.0,
        1.0 - pixel_pos.y / uniforms.resolution.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.color = color;
    out.alpha = clamp(alpha, 0.0, 1.0);
    out.uv = corner;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let dist = length(in.uv);
    if dist > 1.0 {
        discard;
    }
    let edge = 1.0 - smoothstep(0.9, 1.0, dist);
    return vec4<f32>(in.color, in.alpha * edge);
}
"#;
