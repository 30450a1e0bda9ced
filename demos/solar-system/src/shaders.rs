/// WGSL programs for each pass.
///
/// Every program reads the whole draw record as one uniform block at
/// group 0, binding 0, so the host can upload records without knowing which
/// fields a program uses. Textures bind in unit order at group 1 after a
/// shared sampler. Vertex attributes: position @0, normal @1, uv @2; the
/// instanced pass adds a mat4 at @3..@6.

/// Shader program ids, as written into draw records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Skybox,
    Sun,
    Planet,
    Ring,
    Asteroid,
}

impl Program {
    pub const ALL: [Program; 5] = [
        Program::Skybox,
        Program::Sun,
        Program::Planet,
        Program::Ring,
        Program::Asteroid,
    ];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn from_id(id: u32) -> Option<Program> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn source(self) -> &'static str {
        match self {
            Program::Skybox => SKYBOX_WGSL,
            Program::Sun => SUN_WGSL,
            Program::Planet => PLANET_WGSL,
            Program::Ring => RING_WGSL,
            Program::Asteroid => ASTEROID_WGSL,
        }
    }
}

/// Planet index that selects the day/night/cloud path.
pub const EARTH_VARIANT: f32 = 2.0;

macro_rules! draw_uniforms {
    () => {
        r#"
struct Draw {
    // program, mesh kind, mesh resource, instance count
    header: vec4<f32>,
    textures: vec4<f32>,
    // variant, phase, unused, unused
    params: vec4<f32>,
    projection: mat4x4<f32>,
    view: mat4x4<f32>,
    model: mat4x4<f32>,
    normal: mat3x3<f32>,
    aux: mat4x4<f32>,
};

@group(0) @binding(0) var<uniform> draw: Draw;
@group(1) @binding(0) var samp: sampler;
"#
    };
}

pub const SKYBOX_WGSL: &str = concat!(
    draw_uniforms!(),
    r#"
@group(1) @binding(1) var sky: texture_cube<f32>;

struct VsOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) dir: vec3<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VsOut {
    var out: VsOut;
    out.dir = position;
    let clip = draw.projection * draw.view * vec4<f32>(position, 1.0);
    // pinned to the far plane
    out.clip = clip.xyww;
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    return textureSample(sky, samp, in.dir);
}
"#
);

pub const SUN_WGSL: &str = concat!(
    draw_uniforms!(),
    r#"
@group(1) @binding(1) var surface: texture_2d<f32>;

struct VsOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>, @location(2) uv: vec2<f32>) -> VsOut {
    var out: VsOut;
    out.uv = uv;
    out.clip = draw.projection * draw.view * draw.model * vec4<f32>(position, 1.0);
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    return textureSample(surface, samp, in.uv);
}
"#
);

pub const PLANET_WGSL: &str = concat!(
    draw_uniforms!(),
    r#"
@group(1) @binding(1) var surface: texture_2d<f32>;
@group(1) @binding(2) var clouds: texture_2d<f32>;
@group(1) @binding(3) var night: texture_2d<f32>;

const PI: f32 = 3.14159265358979;
const LIGHT_INTENSITY: f32 = 0.8;
const AMBIENT: f32 = 0.12;
const SHININESS: f32 = 0.5;

struct VsOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) cloud_uv: vec2<f32>,
    @location(2) normal: vec3<f32>,
    @location(3) pos: vec3<f32>,
};

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
) -> VsOut {
    var out: VsOut;
    let clip = draw.projection * draw.view * draw.model * vec4<f32>(position, 1.0);
    out.uv = uv;
    out.cloud_uv = vec2<f32>(abs(uv.x - draw.params.y), uv.y);
    out.normal = draw.normal * normal;
    out.pos = clip.xyz;
    out.clip = clip;
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let base = textureSample(surface, samp, in.uv);
    // sampled unconditionally to keep control flow uniform
    let cloud = textureSample(clouds, samp, in.cloud_uv);
    let lights = textureSample(night, samp, in.uv);

    let n = normalize(in.normal);
    var to_light = -in.pos;
    let d2 = dot(to_light, to_light);
    to_light = to_light / sqrt(d2);

    let diffuse = max(0.0, dot(n, to_light));
    let lit_diffuse = (LIGHT_INTENSITY / d2) * base.rgb * diffuse / PI;

    var lit_spec = vec3<f32>(0.0);
    if (diffuse > 0.0) {
        let half_dir = normalize(normalize(-in.pos) + to_light);
        let spec = max(0.0, pow(max(dot(n, half_dir), 0.0), SHININESS));
        lit_spec = vec3<f32>(LIGHT_INTENSITY * spec) / ((SHININESS + 2.0) / (2.0 * PI));
    }

    if (draw.params.x == 2.0) {
        let lit = 0.3 * lit_diffuse + 0.3 * lit_spec;
        let dark = vec3<f32>(1.0) - lit;
        let day = base * 0.5 + cloud * 0.5;
        return vec4<f32>(day.rgb * lit + lights.rgb * dark, day.a);
    }
    let color = vec3<f32>(0.3 * AMBIENT) + 0.3 * lit_diffuse + 0.3 * lit_spec;
    return vec4<f32>(base.rgb * color, base.a);
}
"#
);

pub const RING_WGSL: &str = concat!(
    draw_uniforms!(),
    r#"
@group(1) @binding(1) var color_map: texture_2d<f32>;
@group(1) @binding(2) var pattern: texture_2d<f32>;

struct VsOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>, @location(2) uv: vec2<f32>) -> VsOut {
    var out: VsOut;
    out.uv = uv;
    out.clip = draw.projection * draw.view * draw.model * vec4<f32>(position, 1.0);
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let color = textureSample(color_map, samp, in.uv);
    let alpha = textureSample(pattern, samp, in.uv);
    return alpha * color * vec4<f32>(0.3, 0.3, 0.3, 1.0);
}
"#
);

pub const ASTEROID_WGSL: &str = concat!(
    draw_uniforms!(),
    r#"
@group(1) @binding(1) var rock: texture_2d<f32>;

struct VsOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(2) uv: vec2<f32>,
    @location(3) i0: vec4<f32>,
    @location(4) i1: vec4<f32>,
    @location(5) i2: vec4<f32>,
    @location(6) i3: vec4<f32>,
) -> VsOut {
    var out: VsOut;
    let instance = mat4x4<f32>(i0, i1, i2, i3);
    // model = belt rotation, aux = shared tumble and size
    out.uv = uv;
    out.clip = draw.projection * draw.view * draw.model * instance * draw.aux * vec4<f32>(position, 1.0);
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    return textureSample(rock, samp, in.uv);
}
"#
);
