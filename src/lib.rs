//! Gap Glider - a flappy-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, scoring, game state)
//! - `config`: Tuning surface consumed by the core, validated at the boundary
//!
//! Rendering, input devices and the frame loop are external collaborators: they
//! read state snapshots, translate device events into `flap`/`restart`, and call
//! the tick function once per frame. The core owns no I/O and no clock.

pub mod config;
pub mod sim;

pub use config::{Palette, PhysicsConfig, PipeConfig, Viewport};
pub use sim::{Bird, GamePhase, GameState, Pipe, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Viewport defaults (logical pixels)
    pub const VIEWPORT_WIDTH: f32 = 400.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 80.0;
    pub const BIRD_START_Y: f32 = 300.0;
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;

    /// Physics defaults (per-tick units)
    pub const GRAVITY: f32 = 0.5;
    /// Flap impulse - negative is up
    pub const FLAP_VELOCITY: f32 = -8.0;
    /// Maximum downward speed
    pub const TERMINAL_VELOCITY: f32 = 10.0;
    pub const PIPE_SPEED: f32 = 2.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 150.0;
    /// Gap-center bounds; with GAP_HEIGHT both segments stay inside the viewport
    pub const MIN_GAP_Y: f32 = 100.0;
    pub const MAX_GAP_Y: f32 = 500.0;
    /// Spawn one pipe every this many ticks
    pub const SPAWN_INTERVAL: u64 = 90;
}
