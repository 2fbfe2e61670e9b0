//! Jolleyball - a volleyball arcade game on a rectangular court
//!
//! Core modules:
//! - `sim`: Deterministic physics (integration, wall bounces, ball contacts)
//! - `input`: Controllers, key layouts and the per-tick input queue
//! - `renderer`: Render backends reading entity state
//! - `game`: Application context tying the pieces together
//! - `config`: Data-driven game tuning

pub mod bot;
pub mod config;
pub mod game;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, ContactResolution, GameConfig};
pub use game::Game;

/// Fixed game constants (tunable values live in [`GameConfig`](crate::GameConfig))
pub mod consts {
    /// Spawn position shared by players and the ball
    pub const SPAWN_X: f32 = 200.0;
    pub const SPAWN_Y: f32 = 200.0;

    /// Ball starts hugging the left wall
    pub const BALL_SPAWN_X: f32 = 20.0;

    /// Ball colour tag
    pub const BALL_COLOR: &str = "green";

    /// Largest frame delta the driver will feed the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
