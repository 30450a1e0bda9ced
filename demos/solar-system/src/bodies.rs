/// Planetary data: visual scale, periods, tilts and texture names.
///
/// Distances and radii are exaggerated for readability; periods are real
/// (days and hours) so relative motion stays correct.

// ── Time scaling ─────────────────────────────────────────────────────

/// Days per year.
pub const YEAR_DAYS: f64 = 365.25;
/// Orbit speed multiplier: degrees of orbit per simulated second, per year of period.
pub const ORBIT_RATE: f64 = 10.0;
/// Spin speed multiplier (hours per day).
pub const SPIN_RATE: f64 = 24.0;
/// Sun spin in degrees per simulated second.
pub const SUN_SPIN_RATE: f64 = 10.0;
/// Degrees-to-radians divisor used by the follow camera.
pub const DEGREES_PER_RADIAN: f64 = 57.3;

// ── Planets ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

pub const PLANET_COUNT: usize = 8;

impl Planet {
    /// Draw order, innermost first.
    pub const ALL: [Planet; PLANET_COUNT] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Planet> {
        Self::ALL.get(index).copied()
    }

    /// Keys '1'..='8' select Mercury..Neptune.
    pub fn from_key(key: char) -> Option<Planet> {
        let digit = key.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(Self::from_index)
    }

    pub fn body(self) -> &'static CelestialBody {
        &BODIES[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.body().name
    }
}

/// Fixed physical and visual parameters for one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub name: &'static str,
    /// Visual radius in scene units.
    pub radius: f32,
    /// Orbital radius in scene units.
    pub distance: f32,
    /// Sidereal rotation period in hours; negative spins retrograde.
    pub axial_period_hours: f64,
    pub orbital_period_days: f64,
    pub tilt_degrees: f32,
    /// How far the follow camera sits from the planet.
    pub camera_offset: f32,
    /// Manifest name of the surface texture.
    pub texture: &'static str,
}

const DAY_HOURS: f64 = 23.93;

pub const BODIES: [CelestialBody; PLANET_COUNT] = [
    CelestialBody {
        name: "Mercury",
        radius: 0.03,
        distance: 1.26,
        axial_period_hours: 58.0 * DAY_HOURS,
        orbital_period_days: 88.0,
        tilt_degrees: 0.1,
        camera_offset: 0.3,
        texture: "mercury",
    },
    CelestialBody {
        name: "Venus",
        radius: 0.078,
        distance: 2.08,
        axial_period_hours: -243.0 * DAY_HOURS,
        orbital_period_days: 224.7,
        tilt_degrees: 177.0,
        camera_offset: 0.7,
        texture: "venus",
    },
    CelestialBody {
        name: "Earth",
        radius: 0.0854,
        distance: 2.95,
        axial_period_hours: DAY_HOURS,
        orbital_period_days: YEAR_DAYS,
        tilt_degrees: 23.0,
        camera_offset: 0.8,
        texture: "earth_day",
    },
    CelestialBody {
        name: "Mars",
        radius: 0.0407,
        distance: 4.0,
        axial_period_hours: 24.62,
        orbital_period_days: 689.0,
        tilt_degrees: 25.0,
        camera_offset: 0.4,
        texture: "mars",
    },
    CelestialBody {
        name: "Jupiter",
        radius: 0.5040,
        distance: 8.86,
        axial_period_hours: 9.92,
        orbital_period_days: 11.87 * YEAR_DAYS,
        tilt_degrees: 3.0,
        camera_offset: 5.0,
        texture: "jupiter",
    },
    CelestialBody {
        name: "Saturn",
        radius: 0.3362,
        distance: 12.34,
        axial_period_hours: 10.65,
        orbital_period_days: 29.45 * YEAR_DAYS,
        tilt_degrees: 27.0,
        camera_offset: 3.3,
        texture: "saturn",
    },
    CelestialBody {
        name: "Uranus",
        radius: 0.1642,
        distance: 16.6,
        axial_period_hours: 17.24,
        orbital_period_days: 84.07 * YEAR_DAYS,
        tilt_degrees: 98.0,
        camera_offset: 1.6,
        texture: "uranus",
    },
    CelestialBody {
        name: "Neptune",
        radius: 0.1536,
        distance: 23.0,
        axial_period_hours: 16.11,
        orbital_period_days: 164.89 * YEAR_DAYS,
        tilt_degrees: 30.0,
        camera_offset: 1.5,
        texture: "neptune",
    },
];

// ── Earth extras ─────────────────────────────────────────────────────

pub const EARTH_CLOUDS: &str = "earth_clouds";
pub const EARTH_NIGHT: &str = "earth_night";
/// Seconds for the cloud layer to scroll once around.
pub const CLOUD_PERIOD: f64 = 100.0;

// ── Rings ────────────────────────────────────────────────────────────

/// A flat ring riding on its planet's orbit, tilt and spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub planet: Planet,
    /// Outer scale relative to the size slider baseline.
    pub size: f32,
    pub color_texture: &'static str,
    /// Alpha pattern multiplied over the color.
    pub pattern_texture: &'static str,
}

/// Flattening of the ring torus along its axis.
pub const RING_THICKNESS: f32 = 0.01;

pub const RINGS: [Ring; 2] = [
    Ring {
        planet: Planet::Saturn,
        size: 0.9,
        color_texture: "saturn_ring_color",
        pattern_texture: "saturn_ring_pattern",
    },
    Ring {
        planet: Planet::Uranus,
        size: 0.4,
        color_texture: "uranus_ring_color",
        pattern_texture: "uranus_ring_pattern",
    },
];

// ── Sun, sky, asteroids ──────────────────────────────────────────────

pub const SUN_TEXTURE: &str = "sun";
pub const SKYBOX_TEXTURE: &str = "skybox";
pub const ROCK_TEXTURE: &str = "rock_texture";
pub const ROCK_MESH: &str = "rock";
