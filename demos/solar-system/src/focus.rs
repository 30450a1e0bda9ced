/// Keyboard commands and the follow camera.
///
/// At most one planet is focused. While one is, the camera is re-aimed every
/// frame so the planet stays in view as it orbits.

use glam::Vec3;
use orrery_engine::SceneCamera;

use crate::bodies::{Planet, DEGREES_PER_RADIAN, ORBIT_RATE, YEAR_DAYS};
use crate::controls::{ScaleFactors, ViewMode};

/// Start-up eye position, restored by '0'.
pub const HOME_EYE: Vec3 = Vec3::new(0.0, 0.0, 22.0);
/// The follow camera always looks down -Z with +Y up.
pub const LOOK_DIRECTION: Vec3 = Vec3::NEG_Z;
pub const LOOK_UP: Vec3 = Vec3::Y;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Focus(Planet),
    /// Drop focus and return the camera home.
    Reset,
    TogglePause,
}

impl KeyCommand {
    /// Unknown keys map to `None`.
    pub fn from_char(key: char) -> Option<Self> {
        match key {
            '0' => Some(KeyCommand::Reset),
            'p' | 'P' => Some(KeyCommand::TogglePause),
            _ => Planet::from_key(key).map(KeyCommand::Focus),
        }
    }
}

/// Put the camera back at its start-up pose.
pub fn reset_camera(camera: &mut SceneCamera) {
    camera.look(HOME_EYE, LOOK_DIRECTION, LOOK_UP);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusController {
    focused: Option<Planet>,
}

impl FocusController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<Planet> {
        self.focused
    }

    pub fn is_focused(&self, planet: Planet) -> bool {
        self.focused == Some(planet)
    }

    pub fn focus(&mut self, planet: Planet) {
        if self.focused != Some(planet) {
            log::debug!("focus: {}", planet.name());
        }
        self.focused = Some(planet);
    }

    pub fn clear(&mut self) {
        self.focused = None;
    }

    /// Eye position that keeps `planet` in view at time `t`.
    pub fn eye_for(planet: Planet, t: f64, factors: &ScaleFactors, view: ViewMode) -> Vec3 {
        let body = planet.body();
        let angle = factors.orbit as f64 * ORBIT_RATE * t * YEAR_DAYS
            / (body.orbital_period_days * DEGREES_PER_RADIAN);
        let d = (body.distance * factors.distance) as f64;
        let offset = body.camera_offset;
        match view {
            ViewMode::Top => Vec3::new(
                (d * angle.cos()) as f32,
                (d * angle.sin()) as f32,
                offset,
            ),
            ViewMode::Side => Vec3::new(
                (d * (-angle).cos()) as f32,
                0.0,
                (d * (-angle).sin()) as f32 + offset,
            ),
        }
    }

    /// Re-aim the camera if `planet` is the focused one. Returns whether
    /// the camera moved.
    pub fn follow(
        &self,
        planet: Planet,
        camera: &mut SceneCamera,
        t: f64,
        factors: &ScaleFactors,
        view: ViewMode,
    ) -> bool {
        if !self.is_focused(planet) {
            return false;
        }
        camera.look(Self::eye_for(planet, t, factors, view), LOOK_DIRECTION, LOOK_UP);
        true
    }
}
