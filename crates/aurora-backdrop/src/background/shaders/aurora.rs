/// Aurora shader - domain-warped fractal value noise in deep blue and cyan
///
/// Mirrors `shading::shade` step for step; keep the constants in sync.
pub const SHADER_AURORA: &str = r#"
struct Uniforms {
    time: f32,
    _pad0: f32,
    resolution: vec2<f32>,
};

struct VsOut {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VsOut {
    var out: VsOut;

    // Oversized triangle covering the screen
    // vertex 0: (-1, -1), vertex 1: (3, -1), vertex 2: (-1, 3)
    let x = f32(i32(vertex_index & 1u) * 4 - 1);
    let y = f32(i32(vertex_index >> 1u) * 4 - 1);

    out.position = vec4<f32>(x, y, 0.0, 1.0);
    // Origin bottom-left
    out.uv = vec2<f32>((x + 1.0) * 0.5, (y + 1.0) * 0.5);
    return out;
}

fn hash(p: vec2<f32>) -> f32 {
    var q = fract(p * vec2<f32>(123.34, 456.21));
    q = q + dot(q, q + 45.32);
    return fract(q.x * q.y);
}

fn value_noise(p: vec2<f32>) -> f32 {
    let i = floor(p);
    let f = fract(p);
    let u = f * f * (3.0 - 2.0 * f);

    let a = hash(i);
    let b = hash(i + vec2<f32>(1.0, 0.0));
    let c = hash(i + vec2<f32>(0.0, 1.0));
    let d = hash(i + vec2<f32>(1.0, 1.0));

    return mix(mix(a, b, u.x), mix(c, d, u.x), u.y);
}

fn fbm(p_in: vec2<f32>) -> f32 {
    let m = mat2x2<f32>(1.6, 1.2, -1.2, 1.6);
    var p = p_in;
    var value = 0.0;
    var amplitude = 0.5;
    var frequency = 1.0;
    for (var i = 0; i < 5; i = i + 1) {
        value = value + amplitude * value_noise(p * frequency);
        p = p * m;
        amplitude = amplitude * 0.5;
        frequency = frequency * 2.0;
    }
    return value;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let t = uniforms.time;
    let res = uniforms.resolution;

    let frag = in.uv * res;
    let extent = max(min(res.x, res.y), 1.0);
    let p = (frag - 0.5 * res) / extent * 1.5;

    let q = vec2<f32>(
        fbm(p + vec2<f32>(0.0, 0.0) + 0.05 * t),
        fbm(p + vec2<f32>(5.2, 1.3) + 0.02 * t)
    );
    let r = vec2<f32>(
        fbm(p + 4.0 * q + vec2<f32>(1.7, 9.2) + 0.15 * t),
        fbm(p + 4.0 * q + vec2<f32>(8.3, 2.8) + 0.126 * t)
    );
    let f = fbm(p + 4.0 * r);

    var col = mix(vec3<f32>(0.02, 0.05, 0.2), vec3<f32>(0.05, 0.2, 0.5), f);
    col = mix(col, vec3<f32>(0.1, 0.7, 0.9), dot(r, q) * 0.8);

    col = col * (0.85 + 0.15 * sin(t * 0.2));

    let d = length(in.uv - vec2<f32>(0.5, 0.5));
    col = col * (1.0 - smoothstep(0.2, 0.8, d));

    return vec4<f32>(col, 1.0);
}
"#;
