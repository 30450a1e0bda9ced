/// UI sliders, the view toggle and the scale factors derived from them.
///
/// Slider values arrive in slider units (as the host widget reports them);
/// every factor is `value / divisor`, so the default position gives 1.0.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    OrbitSpeed,
    SpinSpeed,
    PlanetSize,
    OrbitDistance,
    BeltOrbitSpeed,
    AsteroidSpinSpeed,
    AsteroidSize,
}

pub const SLIDER_COUNT: usize = 7;

/// Range and scaling of one slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub divisor: f32,
}

impl Slider {
    /// Host-side slider ids are indices into this array.
    pub const ALL: [Slider; SLIDER_COUNT] = [
        Slider::OrbitSpeed,
        Slider::SpinSpeed,
        Slider::PlanetSize,
        Slider::OrbitDistance,
        Slider::BeltOrbitSpeed,
        Slider::AsteroidSpinSpeed,
        Slider::AsteroidSize,
    ];

    pub fn from_id(id: u32) -> Option<Slider> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn spec(self) -> SliderSpec {
        let (label, max, default, divisor) = match self {
            Slider::OrbitSpeed => {
                ("The speed of the planet around the sun", 1000.0, 200.0, 200.0)
            }
            Slider::SpinSpeed => {
                ("The speed of the planet rotation around itself", 1000.0, 200.0, 200.0)
            }
            Slider::PlanetSize => ("The size of the planet", 2000.0, 500.0, 500.0),
            Slider::OrbitDistance => ("The distance from the planets to the sun", 10.0, 1.0, 1.0),
            Slider::BeltOrbitSpeed => {
                ("The speed of the asteroids around the sun", 1000.0, 200.0, 200.0)
            }
            Slider::AsteroidSpinSpeed => {
                ("The speed of the asteroids rotation", 1000.0, 200.0, 200.0)
            }
            Slider::AsteroidSize => ("The size of the asteroids", 2000.0, 500.0, 500.0),
        };
        SliderSpec { label, min: 0.0, max, default, divisor }
    }

    /// Field set the host groups the slider under.
    pub fn group(self) -> &'static str {
        match self {
            Slider::OrbitSpeed | Slider::SpinSpeed | Slider::PlanetSize | Slider::OrbitDistance => {
                PLANET_GROUP
            }
            Slider::BeltOrbitSpeed | Slider::AsteroidSpinSpeed | Slider::AsteroidSize => {
                ASTEROID_GROUP
            }
        }
    }
}

const VIEW_GROUP: &str = "View changer";
const PLANET_GROUP: &str = "Basic manipulations with planets";
const ASTEROID_GROUP: &str = "Basic manipulations with asteroids";

/// Host-side id of the "Top view" checkbox.
pub const TOP_VIEW_TOGGLE: u32 = 0;
const TOP_VIEW_LABEL: &str = "Top view";

/// Which way the scene is viewed. Only view matrices depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Top,
    #[default]
    Side,
}

impl ViewMode {
    pub fn from_top_view(checked: bool) -> Self {
        if checked {
            ViewMode::Top
        } else {
            ViewMode::Side
        }
    }

    pub fn is_top(self) -> bool {
        self == ViewMode::Top
    }
}

/// Multipliers applied to the base formulas each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub orbit: f32,
    pub spin: f32,
    pub size: f32,
    pub distance: f32,
    pub belt_orbit: f32,
    pub asteroid_spin: f32,
    pub asteroid_size: f32,
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Controls::new().factors()
    }
}

/// Current slider positions plus the view toggle.
#[derive(Debug, Clone)]
pub struct Controls {
    values: [f32; SLIDER_COUNT],
    view: ViewMode,
}

impl Controls {
    pub fn new() -> Self {
        let mut values = [0.0; SLIDER_COUNT];
        for slider in Slider::ALL {
            values[slider.id() as usize] = slider.spec().default;
        }
        Self { values, view: ViewMode::default() }
    }

    /// Set a slider, clamped to its range. Non-finite input is ignored.
    pub fn set(&mut self, slider: Slider, value: f32) {
        if !value.is_finite() {
            log::warn!("slider {:?}: ignoring non-finite value", slider);
            return;
        }
        let spec = slider.spec();
        self.values[slider.id() as usize] = value.clamp(spec.min, spec.max);
    }

    pub fn value(&self, slider: Slider) -> f32 {
        self.values[slider.id() as usize]
    }

    pub fn factor(&self, slider: Slider) -> f32 {
        self.value(slider) / slider.spec().divisor
    }

    pub fn factors(&self) -> ScaleFactors {
        ScaleFactors {
            orbit: self.factor(Slider::OrbitSpeed),
            spin: self.factor(Slider::SpinSpeed),
            size: self.factor(Slider::PlanetSize),
            distance: self.factor(Slider::OrbitDistance),
            belt_orbit: self.factor(Slider::BeltOrbitSpeed),
            asteroid_spin: self.factor(Slider::AsteroidSpinSpeed),
            asteroid_size: self.factor(Slider::AsteroidSize),
        }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}

// ── Host panel description ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderDescriptor {
    pub id: u32,
    pub group: &'static str,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleDescriptor {
    pub id: u32,
    pub group: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Everything the host needs to build the control panel: ids, labels,
/// ranges and current positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlPanel {
    pub toggles: Vec<ToggleDescriptor>,
    pub sliders: Vec<SliderDescriptor>,
}

impl ControlPanel {
    pub fn describe(controls: &Controls) -> Self {
        let toggles = vec![ToggleDescriptor {
            id: TOP_VIEW_TOGGLE,
            group: VIEW_GROUP,
            label: TOP_VIEW_LABEL,
            checked: controls.view().is_top(),
        }];
        let sliders = Slider::ALL
            .iter()
            .map(|&slider| {
                let spec = slider.spec();
                SliderDescriptor {
                    id: slider.id(),
                    group: slider.group(),
                    label: spec.label,
                    min: spec.min,
                    max: spec.max,
                    default: spec.default,
                    value: controls.value(slider),
                }
            })
            .collect();
        Self { toggles, sliders }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
