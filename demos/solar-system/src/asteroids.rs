/// Asteroid belt placement, done once at startup.
///
/// Each rock gets a random spot in a flat annulus between Mars and Jupiter,
/// a random orientation and a random size. The result fills the engine's
/// instance buffer, which is then frozen and uploaded by the host once.

use glam::Mat4;
use orrery_engine::core::matrix::{compose, rotate_x, rotate_y, rotate_z, translate, uniform_scale};
use orrery_engine::{EngineError, InstanceBuffer, Rng};

pub const ASTEROID_COUNT: usize = 18_000;

pub const RADIAL_MIN: f32 = 4.9;
pub const RADIAL_MAX: f32 = 7.2;
/// Half thickness of the belt.
pub const LATERAL_SPREAD: f32 = 0.19;
pub const SIZE_MIN: f32 = 0.02;
pub const SIZE_MAX: f32 = 0.1;
/// Size unit: Earth's radius.
pub const BASE_SIZE: f32 = 0.0854;

/// Tilts the belt from the XY plane into the XZ plane.
const BELT_PLANE_DEGREES: f32 = 270.0;

/// Random draws for one asteroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidSample {
    pub radial: f32,
    pub lateral: f32,
    pub size: f32,
    /// Position around the sun, degrees.
    pub sun_angle: f32,
    /// Orientation about X, Y and Z, degrees.
    pub orientation: [f32; 3],
}

impl AsteroidSample {
    pub fn draw(rng: &mut Rng) -> Self {
        Self {
            radial: rng.range(RADIAL_MIN, RADIAL_MAX),
            lateral: rng.range(-LATERAL_SPREAD, LATERAL_SPREAD),
            size: rng.range(SIZE_MIN, SIZE_MAX),
            sun_angle: rng.angle_degrees(),
            orientation: [rng.angle_degrees(), rng.angle_degrees(), rng.angle_degrees()],
        }
    }

    /// `Rx(270) · Rz(angle) · T(radial, 0, lateral) · Rx·Ry·Rz · S(size)`.
    pub fn transform(&self) -> Mat4 {
        let [ax, ay, az] = self.orientation;
        compose(&[
            rotate_x(BELT_PLANE_DEGREES),
            rotate_z(self.sun_angle),
            translate(self.radial, 0.0, self.lateral),
            rotate_x(ax),
            rotate_y(ay),
            rotate_z(az),
            uniform_scale(BASE_SIZE * self.size),
        ])
    }
}

/// Draw `count` asteroid transforms.
pub fn generate(rng: &mut Rng, count: usize) -> Vec<Mat4> {
    (0..count).map(|_| AsteroidSample::draw(rng).transform()).collect()
}

/// Fill and freeze the instance buffer with a fresh belt.
pub fn populate(instances: &mut InstanceBuffer, rng: &mut Rng) -> Result<usize, EngineError> {
    let count = instances.fill(generate(rng, ASTEROID_COUNT))?;
    log::info!("asteroid belt: {count} instances");
    Ok(count)
}
