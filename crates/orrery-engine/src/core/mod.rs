pub mod matrix;
pub mod rng;
pub mod time;
