/// Per-frame transforms for every body in the scene.
///
/// Everything here is a pure function of simulation time and the scale
/// factors. Angles grow without bound, so they are computed in f64 and
/// wrapped into [0, 360) before reaching f32 trig.
///
/// Composition reads left to right as applied outermost first:
/// `planet = Rz(orbit) · T(d, 0, 0) · Rx(tilt) · Rz(spin) · S(r)`.

use glam::{Mat3, Mat4};
use orrery_engine::core::matrix::{
    compose, normal_matrix, rotate_x, rotate_y, rotate_z, scale, translate, uniform_scale,
    wrap_degrees,
};

use crate::bodies::{
    CelestialBody, Ring, ORBIT_RATE, RING_THICKNESS, SPIN_RATE, SUN_SPIN_RATE, YEAR_DAYS,
};
use crate::controls::{ScaleFactors, ViewMode};

/// Fixed yaw of the light frame used for normals.
const LIGHT_YAW_DEGREES: f32 = 290.0;

// ── Asteroid belt rates (degrees per simulated second) ───────────────

const BELT_ORBIT_RATE: f64 = 5.0;
const ASTEROID_SPIN_X_RATE: f64 = 60.0;
const ASTEROID_SPIN_Y_RATE: f64 = 80.0;

// ── Angles ───────────────────────────────────────────────────────────

/// Unwrapped orbit angle in degrees.
pub fn orbit_degrees(body: &CelestialBody, t: f64, orbit_factor: f32) -> f64 {
    orbit_factor as f64 * ORBIT_RATE * t * YEAR_DAYS / body.orbital_period_days
}

/// Unwrapped spin angle in degrees. Negative periods spin the other way.
pub fn spin_degrees(body: &CelestialBody, t: f64, spin_factor: f32) -> f64 {
    spin_factor as f64 * SPIN_RATE * t * YEAR_DAYS / body.axial_period_hours
}

// ── Model matrices ───────────────────────────────────────────────────

/// Orbit, offset, tilt and spin shared by a planet and its ring.
fn carrier(body: &CelestialBody, t: f64, factors: &ScaleFactors) -> Mat4 {
    compose(&[
        rotate_z(wrap_degrees(orbit_degrees(body, t, factors.orbit))),
        translate(body.distance * factors.distance, 0.0, 0.0),
        rotate_x(body.tilt_degrees),
        rotate_z(wrap_degrees(spin_degrees(body, t, factors.spin))),
    ])
}

pub fn planet_model(body: &CelestialBody, t: f64, factors: &ScaleFactors) -> Mat4 {
    carrier(body, t, factors) * uniform_scale(body.radius * factors.size)
}

/// A ring rides its planet's carrier, flattened along the spin axis.
pub fn ring_model(ring: &Ring, t: f64, factors: &ScaleFactors) -> Mat4 {
    let s = ring.size * factors.size;
    carrier(ring.planet.body(), t, factors) * scale(s, s, RING_THICKNESS)
}

/// The sun only turns about its own axis.
pub fn sun_model(t: f64) -> Mat4 {
    rotate_y(wrap_degrees(-SUN_SPIN_RATE * t))
}

/// Normal matrix for planet lighting.
///
/// `lighting_view` is the view captured at startup, so shading does not
/// shift when the camera later follows a planet.
pub fn planet_normal(
    lighting_view: Mat4,
    body: &CelestialBody,
    t: f64,
    factors: &ScaleFactors,
) -> Mat3 {
    let orbit = wrap_degrees(orbit_degrees(body, t, factors.orbit));
    normal_matrix(compose(&[
        lighting_view,
        rotate_x(orbit),
        rotate_y(LIGHT_YAW_DEGREES),
        planet_model(body, t, factors),
    ]))
}

// ── Asteroid belt ────────────────────────────────────────────────────

/// Shared rotation of the whole belt about the sun, applied before each
/// instance transform.
pub fn belt_rotation(t: f64, factors: &ScaleFactors) -> Mat4 {
    rotate_y(wrap_degrees(t * BELT_ORBIT_RATE * factors.belt_orbit as f64))
}

/// Shared tumble and size, applied after each instance transform.
pub fn asteroid_modifier(t: f64, factors: &ScaleFactors) -> Mat4 {
    let spin = factors.asteroid_spin as f64;
    compose(&[
        rotate_x(wrap_degrees(t * ASTEROID_SPIN_X_RATE * spin)),
        rotate_y(wrap_degrees(t * ASTEROID_SPIN_Y_RATE * spin)),
        uniform_scale(factors.asteroid_size),
    ])
}

// ── View matrices ────────────────────────────────────────────────────

/// Draw passes that get their own view adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Sun,
    Planet,
    Ring,
    Asteroid,
}

/// Camera view for a pass. Planets orbit in the XY plane while the sun and
/// belt turn about Y, hence the different corrections per view mode.
pub fn pass_view(pass: Pass, view: Mat4, mode: ViewMode) -> Mat4 {
    match (pass, mode) {
        (Pass::Sun | Pass::Asteroid, ViewMode::Top) => view * rotate_x(90.0),
        (Pass::Sun | Pass::Asteroid, ViewMode::Side) => view,
        (Pass::Planet | Pass::Ring, ViewMode::Top) => view,
        (Pass::Planet | Pass::Ring, ViewMode::Side) => view * rotate_x(270.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{Planet, BODIES, RINGS};
    use glam::Vec3;

    fn factors() -> ScaleFactors {
        ScaleFactors::default()
    }

    fn center(m: Mat4) -> Vec3 {
        m.transform_point3(Vec3::ZERO)
    }

    #[test]
    fn orbit_angle_is_monotonic() {
        let earth = Planet::Earth.body();
        let mut last = f64::MIN;
        for step in 0..500 {
            let a = orbit_degrees(earth, step as f64 * 0.37, 0.5);
            assert!(a >= last);
            last = a;
        }
    }

    #[test]
    fn earth_orbits_ten_degrees_per_second() {
        let earth = Planet::Earth.body();
        assert!((orbit_degrees(earth, 1.0, 1.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn planet_starts_on_x_axis() {
        for body in &BODIES {
            let c = center(planet_model(body, 0.0, &factors()));
            assert!((c - Vec3::new(body.distance, 0.0, 0.0)).length() < 1e-4, "{}", body.name);
        }
    }

    #[test]
    fn planet_keeps_distance_while_orbiting() {
        let body = Planet::Mars.body();
        for t in [0.0, 3.0, 47.5, 1234.0] {
            let c = center(planet_model(body, t, &factors()));
            assert!((c.length() - body.distance).abs() < 1e-3);
            assert!(c.z.abs() < 1e-4);
        }
    }

    #[test]
    fn distance_factor_scales_orbit_radius() {
        let body = Planet::Jupiter.body();
        let f = ScaleFactors { distance: 2.0, ..factors() };
        let c = center(planet_model(body, 12.0, &f));
        assert!((c.length() - 2.0 * body.distance).abs() < 1e-3);
    }

    #[test]
    fn zero_size_degenerates_scale_but_normal_stays_finite() {
        let f = ScaleFactors { size: 0.0, ..factors() };
        let model = planet_model(Planet::Earth.body(), 5.0, &f);
        assert!(model.transform_vector3(Vec3::X).length() < 1e-6);
        let n = planet_normal(Mat4::IDENTITY, Planet::Earth.body(), 5.0, &f);
        assert!(n.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn size_factor_max_is_four_times_baseline() {
        let body = Planet::Saturn.body();
        let base = planet_model(body, 0.0, &factors()).transform_vector3(Vec3::X).length();
        let f = ScaleFactors { size: 4.0, ..factors() };
        let big = planet_model(body, 0.0, &f).transform_vector3(Vec3::X).length();
        assert!((big / base - 4.0).abs() < 1e-4);
        assert!((base - body.radius).abs() < 1e-5);
    }

    #[test]
    fn zero_factors_freeze_motion() {
        let f = ScaleFactors { orbit: 0.0, spin: 0.0, ..factors() };
        let body = Planet::Venus.body();
        assert_eq!(planet_model(body, 0.0, &f), planet_model(body, 999.0, &f));
    }

    #[test]
    fn ring_follows_its_planet() {
        for ring in &RINGS {
            let t = 77.0;
            let p = center(planet_model(ring.planet.body(), t, &factors()));
            let r = center(ring_model(ring, t, &factors()));
            assert!((p - r).length() < 1e-4);
        }
    }

    #[test]
    fn ring_is_flat() {
        let ring = &RINGS[0];
        let f = factors();
        let m = ring_model(ring, 0.0, &f);
        // axis of the ring before tilt/spin is local Z
        let spin_axis = (m.transform_vector3(Vec3::Z)).length();
        assert!((spin_axis - RING_THICKNESS).abs() < 1e-5);
        assert!((m.transform_vector3(Vec3::X).length() - ring.size).abs() < 1e-5);
    }

    #[test]
    fn sun_turns_backwards_about_y() {
        let m = sun_model(9.0);
        let expected = Mat4::from_rotation_y((-90.0f32).to_radians());
        assert!(m.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn large_times_stay_finite() {
        let t = 1.0e7;
        let m = planet_model(Planet::Mercury.body(), t, &factors());
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
        assert!((center(m).length() - Planet::Mercury.body().distance).abs() < 1e-3);
    }

    #[test]
    fn view_mode_only_changes_pass_views() {
        let view = Mat4::look_to_rh(Vec3::new(0.0, 0.0, 22.0), Vec3::NEG_Z, Vec3::Y);
        for pass in [Pass::Sun, Pass::Planet, Pass::Ring, Pass::Asteroid] {
            let top = pass_view(pass, view, ViewMode::Top);
            let side = pass_view(pass, view, ViewMode::Side);
            assert_ne!(top, side);
        }
        assert_eq!(pass_view(Pass::Planet, view, ViewMode::Top), view);
        assert_eq!(pass_view(Pass::Sun, view, ViewMode::Side), view);
    }

    #[test]
    fn pass_views_apply_the_quarter_turns() {
        let view = Mat4::look_to_rh(Vec3::new(3.0, -2.0, 22.0), Vec3::NEG_Z, Vec3::Y);
        let quarter = view * Mat4::from_rotation_x(90f32.to_radians());
        let three_quarter = view * Mat4::from_rotation_x(270f32.to_radians());
        let cases = [
            (Pass::Sun, ViewMode::Top, quarter),
            (Pass::Asteroid, ViewMode::Top, quarter),
            (Pass::Sun, ViewMode::Side, view),
            (Pass::Asteroid, ViewMode::Side, view),
            (Pass::Planet, ViewMode::Top, view),
            (Pass::Ring, ViewMode::Top, view),
            (Pass::Planet, ViewMode::Side, three_quarter),
            (Pass::Ring, ViewMode::Side, three_quarter),
        ];
        for (pass, mode, expected) in cases {
            assert!(pass_view(pass, view, mode).abs_diff_eq(expected, 1e-5), "{pass:?} {mode:?}");
        }
    }

    #[test]
    fn top_view_lays_the_belt_into_the_planet_plane() {
        // a belt point on +Z ends up where a planet orbit point on +Y would be
        let view = Mat4::IDENTITY;
        let belt = pass_view(Pass::Asteroid, view, ViewMode::Top).transform_point3(Vec3::Z);
        let planet = pass_view(Pass::Planet, view, ViewMode::Top).transform_point3(Vec3::NEG_Y);
        assert!((belt - planet).length() < 1e-5, "{belt:?} {planet:?}");
    }

    #[test]
    fn belt_rotation_rate() {
        let m = belt_rotation(2.0, &factors());
        assert!(m.abs_diff_eq(Mat4::from_rotation_y(10f32.to_radians()), 1e-5));
        let half = ScaleFactors { belt_orbit: 0.5, ..factors() };
        assert!(belt_rotation(2.0, &half).abs_diff_eq(Mat4::from_rotation_y(5f32.to_radians()), 1e-5));
    }

    #[test]
    fn modifier_carries_asteroid_size() {
        let f = ScaleFactors { asteroid_size: 2.0, ..factors() };
        let m = asteroid_modifier(3.3, &f);
        assert!((m.transform_vector3(Vec3::Y).length() - 2.0).abs() < 1e-5);
        assert!(asteroid_modifier(0.0, &factors()).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn normal_ignores_translation() {
        let body = Planet::Neptune.body();
        let f = factors();
        let n = planet_normal(Mat4::IDENTITY, body, 0.0, &f);
        // at t = 0 the chain is Ry(290) · Rx(tilt) · S(r): a rotation scaled by 1/r
        let rot = Mat3::from_mat4(rotate_y(290.0) * rotate_x(body.tilt_degrees));
        let expected = rot * (1.0 / body.radius);
        assert!(n.abs_diff_eq(expected, 1e-3));
    }

    #[test]
    fn normal_includes_orbit_pitch_after_start() {
        let body = Planet::Earth.body();
        let f = factors();
        let lighting = Mat4::look_to_rh(Vec3::new(0.0, 0.0, 22.0), Vec3::NEG_Z, Vec3::Y);
        let t = 4.5;
        let orbit = orbit_degrees(body, t, f.orbit) as f32;
        assert!((orbit - 45.0).abs() < 1e-4);

        let chain = lighting
            * Mat4::from_rotation_x(orbit.to_radians())
            * Mat4::from_rotation_y(290f32.to_radians())
            * planet_model(body, t, &f);
        let expected = Mat3::from_mat4(chain).inverse().transpose();
        let n = planet_normal(lighting, body, t, &f);
        assert!(n.abs_diff_eq(expected, 1e-3), "{n:?} vs {expected:?}");

        // a yaw instead of a pitch for the orbit term gives a different matrix
        let yawed = lighting
            * Mat4::from_rotation_z(orbit.to_radians())
            * Mat4::from_rotation_y(290f32.to_radians())
            * planet_model(body, t, &f);
        let wrong = Mat3::from_mat4(yawed).inverse().transpose();
        assert!(!n.abs_diff_eq(wrong, 1e-2));
    }
}
