use wasm_bindgen::prelude::*;

pub mod asteroids;
pub mod bodies;
pub mod controls;
pub mod focus;
pub mod frame;
pub mod game;
pub mod kinematics;
pub mod shaders;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");
