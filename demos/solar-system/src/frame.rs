/// Per-frame draw sequencing.
///
/// Order is fixed: skybox, sun, planets, rings, asteroid belt. The follow
/// camera moves right after the focused planet's own draw, so every draw
/// after it (including later planets) already sees the new view. Draws whose
/// textures or mesh are still loading are deferred by the draw list; the
/// camera follow runs regardless.

use glam::Mat4;
use orrery_engine::core::matrix::rotation_only;
use orrery_engine::{AssetRegistry, DrawCall, EngineContext, EngineError, Geometry, ResourceId};

use crate::bodies::{
    Planet, CLOUD_PERIOD, EARTH_CLOUDS, EARTH_NIGHT, PLANET_COUNT, RINGS, ROCK_MESH, ROCK_TEXTURE,
    SKYBOX_TEXTURE, SUN_TEXTURE,
};
use crate::controls::{ScaleFactors, ViewMode};
use crate::focus::FocusController;
use crate::kinematics::{self, Pass};
use crate::shaders::Program;

/// Every resource a frame binds, resolved from the manifest once.
#[derive(Debug, Clone)]
pub struct SceneAssets {
    pub skybox: ResourceId,
    pub sun: ResourceId,
    pub planets: [ResourceId; PLANET_COUNT],
    pub earth_clouds: ResourceId,
    pub earth_night: ResourceId,
    /// (color, pattern) per ring, in ring table order.
    pub rings: [(ResourceId, ResourceId); 2],
    pub rock_texture: ResourceId,
    pub rock_mesh: ResourceId,
}

impl SceneAssets {
    pub fn resolve(assets: &AssetRegistry) -> Result<Self, EngineError> {
        let mut planets = [ResourceId(0); PLANET_COUNT];
        for planet in Planet::ALL {
            planets[planet.index()] = assets.lookup(planet.body().texture)?;
        }
        let mut rings = [(ResourceId(0), ResourceId(0)); 2];
        for (slot, ring) in rings.iter_mut().zip(RINGS.iter()) {
            *slot = (assets.lookup(ring.color_texture)?, assets.lookup(ring.pattern_texture)?);
        }
        Ok(Self {
            skybox: assets.lookup(SKYBOX_TEXTURE)?,
            sun: assets.lookup(SUN_TEXTURE)?,
            planets,
            earth_clouds: assets.lookup(EARTH_CLOUDS)?,
            earth_night: assets.lookup(EARTH_NIGHT)?,
            rings,
            rock_texture: assets.lookup(ROCK_TEXTURE)?,
            rock_mesh: assets.lookup(ROCK_MESH)?,
        })
    }
}

/// Frame-invariant inputs gathered by the scene before composing.
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    pub t: f64,
    pub factors: ScaleFactors,
    pub view_mode: ViewMode,
    /// View captured at startup; drives lighting only.
    pub lighting_view: Mat4,
}

/// Cloud scroll phase in [0, 1).
pub fn cloud_phase(t: f64) -> f32 {
    (t.rem_euclid(CLOUD_PERIOD) / CLOUD_PERIOD) as f32
}

/// Submit one frame of draws into `ctx.draws`, moving the camera if a
/// planet is focused.
pub fn compose(
    ctx: &mut EngineContext,
    assets: &SceneAssets,
    focus: &FocusController,
    state: &FrameState,
) {
    let FrameState { t, factors, view_mode, lighting_view } = *state;

    // ── Skybox ───────────────────────────────────────────────────────
    let projection = ctx.camera.projection_matrix();
    let sky = DrawCall::new(Program::Skybox.id(), Geometry::Cube)
        .with_camera(projection, rotation_only(ctx.camera.view_matrix()))
        .with_texture(0, assets.skybox);
    ctx.draws.submit(&sky, &ctx.assets);

    // ── Sun ──────────────────────────────────────────────────────────
    let sun = DrawCall::new(Program::Sun.id(), Geometry::Sphere)
        .with_camera(projection, kinematics::pass_view(Pass::Sun, ctx.camera.view_matrix(), view_mode))
        .with_model(kinematics::sun_model(t))
        .with_texture(0, assets.sun);
    ctx.draws.submit(&sun, &ctx.assets);

    // ── Planets ──────────────────────────────────────────────────────
    let phase = cloud_phase(t);
    for planet in Planet::ALL {
        let body = planet.body();
        let mut call = DrawCall::new(Program::Planet.id(), Geometry::Sphere)
            .with_camera(
                ctx.camera.projection_matrix(),
                kinematics::pass_view(Pass::Planet, ctx.camera.view_matrix(), view_mode),
            )
            .with_model(kinematics::planet_model(body, t, &factors))
            .with_normal(kinematics::planet_normal(lighting_view, body, t, &factors))
            .with_texture(0, assets.planets[planet.index()])
            .with_variant(planet.index() as f32)
            .with_phase(phase);
        if planet == Planet::Earth {
            call = call
                .with_texture(1, assets.earth_clouds)
                .with_texture(2, assets.earth_night);
        }
        ctx.draws.submit(&call, &ctx.assets);

        focus.follow(planet, &mut ctx.camera, t, &factors, view_mode);
    }

    // ── Rings ────────────────────────────────────────────────────────
    let projection = ctx.camera.projection_matrix();
    let ring_view = kinematics::pass_view(Pass::Ring, ctx.camera.view_matrix(), view_mode);
    for (ring, (color, pattern)) in RINGS.iter().zip(assets.rings.iter()) {
        let call = DrawCall::new(Program::Ring.id(), Geometry::Torus)
            .with_camera(projection, ring_view)
            .with_model(kinematics::ring_model(ring, t, &factors))
            .with_texture(0, *color)
            .with_texture(1, *pattern)
            .with_variant(ring.planet.index() as f32);
        ctx.draws.submit(&call, &ctx.assets);
    }

    // ── Asteroid belt ────────────────────────────────────────────────
    let belt = DrawCall::new(Program::Asteroid.id(), Geometry::Loaded(assets.rock_mesh))
        .with_camera(
            projection,
            kinematics::pass_view(Pass::Asteroid, ctx.camera.view_matrix(), view_mode),
        )
        .with_model(kinematics::belt_rotation(t, &factors))
        .with_aux(kinematics::asteroid_modifier(t, &factors))
        .with_texture(0, assets.rock_texture)
        .with_instances(ctx.instances.instance_count());
    ctx.draws.submit(&belt, &ctx.assets);
}
