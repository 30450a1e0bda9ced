/// Solar System: textured planets, rings and an instanced asteroid belt.
///
/// Keys '1'..'8' follow a planet, '0' returns home, 'P' pauses.
/// Seven sliders scale speeds and sizes; a checkbox switches to top view.
/// With nothing focused, dragging orbits the camera around the sun.

use glam::{Mat4, Vec2, Vec3};
use orrery_engine::{
    EngineContext, EngineError, Game, GameConfig, GameEvent, InputEvent, InputQueue, Rng,
};

use crate::asteroids::{self, ASTEROID_COUNT};
use crate::controls::{ControlPanel, Controls, Slider, ViewMode, TOP_VIEW_TOGGLE};
use crate::focus::{reset_camera, FocusController, KeyCommand};
use crate::frame::{self, FrameState, SceneAssets};
use crate::shaders::Program;

// ── Scene layout ─────────────────────────────────────────────────────

const MANIFEST: &str = include_str!("../assets/manifest.json");

/// Half-diagonal of the unit skybox cube.
const SKYBOX_BOUNDING_RADIUS: f32 = 1.732_050_8;
/// Margin so the outer planets stay inside the far plane.
const SCENE_MARGIN: f32 = 35.0;
const FOV_Y_DEGREES: f32 = 45.0;

/// Skybox, sun, planets, two rings, belt.
const DRAWS_PER_FRAME: usize = 13;

// ── Pointer orbit ────────────────────────────────────────────────────

/// Radians of camera orbit per pixel of drag.
const ORBIT_SENSITIVITY: f32 = 0.005;

// ── Game event kinds to the host ─────────────────────────────────────

const EVENT_FOCUS: f32 = 1.0;
const EVENT_PAUSED: f32 = 2.0;
const EVENT_SIM_TIME: f32 = 3.0;
const EVENT_VIEW_MODE: f32 = 4.0;

pub const HELP_TEXT: &str = "\
Operating keys:
1 - Mercury
2 - Venus
3 - Earth
4 - Mars
5 - Jupiter
6 - Saturn
7 - Uranus
8 - Neptune
0 - initial camera position
P - Pause";

pub struct SolarSystem {
    controls: Controls,
    focus: FocusController,
    assets: Option<SceneAssets>,
    /// View at startup, used for lighting for the whole session.
    lighting_view: Mat4,
    /// Fixed asteroid seed; host entropy when `None`.
    seed: Option<u64>,
    /// Last pointer position while dragging.
    drag_from: Option<Vec2>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            controls: Controls::new(),
            focus: FocusController::new(),
            assets: None,
            lighting_view: Mat4::IDENTITY,
            seed: None,
            drag_from: None,
        }
    }

    /// Reproducible asteroid belt.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::new() }
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    // ── Input ──────────────────────────────────────────────────────

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::KeyDown { .. } => {
                    if let Some(command) = event.key_char().and_then(KeyCommand::from_char) {
                        self.apply_command(ctx, command);
                    }
                }
                InputEvent::Slider { id, value } => match Slider::from_id(id) {
                    Some(slider) => self.controls.set(slider, value),
                    None => log::warn!("unknown slider id {id}"),
                },
                InputEvent::Toggle { id, checked } => {
                    if id == TOP_VIEW_TOGGLE {
                        self.controls.set_view(ViewMode::from_top_view(checked));
                    } else {
                        log::warn!("unknown toggle id {id}");
                    }
                }
                InputEvent::PointerDown { x, y } => self.drag_from = Some(Vec2::new(x, y)),
                InputEvent::PointerUp { .. } => self.drag_from = None,
                InputEvent::PointerMove { x, y } => self.drag(ctx, Vec2::new(x, y)),
                InputEvent::KeyUp { .. } => {}
            }
        }
    }

    fn apply_command(&mut self, ctx: &mut EngineContext, command: KeyCommand) {
        match command {
            KeyCommand::Focus(planet) => self.focus.focus(planet),
            KeyCommand::Reset => {
                self.focus.clear();
                reset_camera(&mut ctx.camera);
                log::debug!("focus cleared");
            }
            KeyCommand::TogglePause => {
                let paused = ctx.clock.toggle_pause();
                log::debug!("paused: {paused}");
            }
        }
    }

    /// Drag orbits the camera only while nothing is focused; the follow
    /// camera would overwrite it on the next frame anyway.
    fn drag(&mut self, ctx: &mut EngineContext, to: Vec2) {
        let Some(from) = self.drag_from else {
            return;
        };
        self.drag_from = Some(to);
        if self.focus.focused().is_some() {
            return;
        }
        let delta = (to - from) * ORBIT_SENSITIVITY;
        ctx.camera.orbit(delta.x, delta.y);
    }

    // ── Host events ────────────────────────────────────────────────

    fn emit_status(&self, ctx: &mut EngineContext) {
        let focus = self.focus.focused().map(|p| p.index() as f32).unwrap_or(-1.0);
        let paused = if ctx.clock.is_paused() { 1.0 } else { 0.0 };
        let top = if self.controls.view().is_top() { 1.0 } else { 0.0 };
        let t = ctx.clock.elapsed() as f32;

        ctx.emit_event(GameEvent::new(EVENT_FOCUS, focus));
        ctx.emit_event(GameEvent::new(EVENT_PAUSED, paused));
        ctx.emit_event(GameEvent::new(EVENT_SIM_TIME, t));
        ctx.emit_event(GameEvent::new(EVENT_VIEW_MODE, top));
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_draws: DRAWS_PER_FRAME + 3,
            max_instances: ASTEROID_COUNT,
            max_events: 8,
            fov_y_degrees: FOV_Y_DEGREES,
            scene_center: Vec3::ZERO,
            scene_radius: SKYBOX_BOUNDING_RADIUS + SCENE_MARGIN,
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), EngineError> {
        if let Some(seed) = self.seed {
            ctx.rng = Rng::new(seed);
        }

        ctx.load_manifest(MANIFEST)?;
        self.assets = Some(SceneAssets::resolve(&ctx.assets)?);

        asteroids::populate(&mut ctx.instances, &mut ctx.rng)?;

        reset_camera(&mut ctx.camera);
        self.lighting_view = ctx.camera.view_matrix();
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        if let Some(assets) = &self.assets {
            let state = FrameState {
                t: ctx.clock.elapsed(),
                factors: self.controls.factors(),
                view_mode: self.controls.view(),
                lighting_view: self.lighting_view,
            };
            frame::compose(ctx, assets, &self.focus, &state);
        }

        self.emit_status(ctx);
    }

    fn shader_source(&self, program: u32) -> Option<&'static str> {
        Program::from_id(program).map(Program::source)
    }

    fn help_text(&self) -> &'static str {
        HELP_TEXT
    }

    fn controls_json(&self) -> String {
        ControlPanel::describe(&self.controls).to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Planet;
    use crate::focus::HOME_EYE;
    use orrery_engine::ResourceId;

    fn key(c: char) -> InputEvent {
        InputEvent::KeyDown { key_code: c as u32 }
    }

    struct Harness {
        game: SolarSystem,
        ctx: EngineContext,
        input: InputQueue,
    }

    impl Harness {
        fn new() -> Self {
            let mut game = SolarSystem::with_seed(1234);
            let mut ctx = EngineContext::new(&game.config(), 1);
            game.init(&mut ctx).unwrap();
            for id in 0..ctx.assets.len() as u32 {
                ctx.assets.mark_ready(ResourceId(id)).unwrap();
            }
            Self { game, ctx, input: InputQueue::new() }
        }

        fn frame(&mut self, dt: f32, events: &[InputEvent]) {
            for e in events {
                self.input.push(*e);
            }
            self.ctx.clear_frame_data();
            self.ctx.clock.advance(dt);
            self.game.update(&mut self.ctx, &self.input);
            self.input.drain();
        }

        fn event(&self, kind: f32) -> f32 {
            self.ctx.events.iter().find(|e| e.kind == kind).map(|e| e.a).unwrap()
        }
    }

    #[test]
    fn init_fills_belt_and_places_camera() {
        let h = Harness::new();
        assert_eq!(h.ctx.instances.instance_count() as usize, ASTEROID_COUNT);
        assert!(h.ctx.instances.is_frozen());
        assert_eq!(h.ctx.camera.eye, HOME_EYE);
        assert!((h.ctx.camera.scene_radius - (3f32.sqrt() + 35.0)).abs() < 1e-4);
    }

    #[test]
    fn full_frame_fits_config() {
        let mut h = Harness::new();
        h.frame(0.016, &[]);
        assert_eq!(h.ctx.draws.draw_count() as usize, DRAWS_PER_FRAME);
        assert!(h.ctx.draws.capacity() >= DRAWS_PER_FRAME);
        assert_eq!(h.ctx.events.len(), 4);
    }

    #[test]
    fn seeded_belts_repeat() {
        let a = Harness::new();
        let b = Harness::new();
        assert_eq!(a.ctx.instances.as_slice()[..32], b.ctx.instances.as_slice()[..32]);
    }

    #[test]
    fn keys_switch_focus_and_report_it() {
        let mut h = Harness::new();
        h.frame(0.1, &[key('3'), key('7')]);
        assert_eq!(h.game.focus().focused(), Some(Planet::Uranus));
        assert_eq!(h.event(EVENT_FOCUS), Planet::Uranus.index() as f32);

        h.frame(0.1, &[key('0')]);
        assert_eq!(h.game.focus().focused(), None);
        assert_eq!(h.ctx.camera.eye, Vec3::new(0.0, 0.0, 22.0));
        assert_eq!(h.event(EVENT_FOCUS), -1.0);
    }

    #[test]
    fn pause_freezes_scene_time() {
        let mut h = Harness::new();
        h.frame(1.0, &[]);
        h.frame(0.5, &[key('p')]);
        let frozen = h.event(EVENT_SIM_TIME);
        let models: Vec<_> = h.ctx.draws.records().iter().map(|r| r.model).collect();
        h.frame(2.0, &[]);
        assert_eq!(h.event(EVENT_SIM_TIME), frozen);
        assert_eq!(h.event(EVENT_PAUSED), 1.0);
        let after: Vec<_> = h.ctx.draws.records().iter().map(|r| r.model).collect();
        assert_eq!(models, after);

        // the resume frame's own delta still lands while paused
        h.frame(0.25, &[key('P')]);
        assert_eq!(h.event(EVENT_PAUSED), 0.0);
        h.frame(0.25, &[]);
        assert!((h.event(EVENT_SIM_TIME) - (frozen + 0.25)).abs() < 1e-5);
    }

    #[test]
    fn sliders_and_toggle_apply() {
        let mut h = Harness::new();
        h.frame(0.1, &[
            InputEvent::Slider { id: Slider::PlanetSize.id(), value: 2000.0 },
            InputEvent::Toggle { id: TOP_VIEW_TOGGLE, checked: true },
            InputEvent::Slider { id: 42, value: 1.0 },
        ]);
        assert!((h.game.controls().factors().size - 4.0).abs() < 1e-6);
        assert_eq!(h.game.controls().view(), ViewMode::Top);
        assert_eq!(h.event(EVENT_VIEW_MODE), 1.0);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut h = Harness::new();
        h.frame(0.1, &[key('2'), key('x'), InputEvent::KeyDown { key_code: 0xD800 }]);
        assert_eq!(h.game.focus().focused(), Some(Planet::Venus));
    }

    #[test]
    fn drag_orbits_only_without_focus() {
        let mut h = Harness::new();
        let drag = [
            InputEvent::PointerDown { x: 100.0, y: 100.0 },
            InputEvent::PointerMove { x: 160.0, y: 90.0 },
            InputEvent::PointerUp { x: 160.0, y: 90.0 },
        ];
        h.frame(0.0, &drag);
        assert_ne!(h.ctx.camera.eye, HOME_EYE);
        assert!((h.ctx.camera.eye.length() - 22.0).abs() < 1e-3);

        // move without a button held does nothing
        let before = h.ctx.camera.eye;
        h.frame(0.0, &[InputEvent::PointerMove { x: 300.0, y: 300.0 }]);
        assert_eq!(h.ctx.camera.eye, before);
    }

    #[test]
    fn shaders_and_help_are_exposed() {
        let game = SolarSystem::new();
        assert!(game.shader_source(Program::Planet.id()).is_some());
        assert!(game.shader_source(99).is_none());
        assert!(game.help_text().contains("0 - initial camera position"));
    }

    #[test]
    fn controls_json_tracks_slider_input() {
        let mut h = Harness::new();
        h.frame(0.1, &[InputEvent::Slider { id: Slider::AsteroidSize.id(), value: 1500.0 }]);
        let json: serde_json::Value = serde_json::from_str(&h.game.controls_json()).unwrap();
        let sliders = json["sliders"].as_array().unwrap();
        assert_eq!(sliders.len(), Slider::ALL.len());
        assert_eq!(sliders[6]["label"], "The size of the asteroids");
        assert_eq!(sliders[6]["value"], 1500.0);
        assert_eq!(json["toggles"][0]["id"], TOP_VIEW_TOGGLE);
    }
}
