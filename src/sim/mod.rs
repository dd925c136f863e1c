//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete sequential ticks only, no wall-clock awareness
//! - Seeded RNG only
//! - Stable pipe order (spawn order, oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, bird_hits_bounds, bird_hits_pipe, rects_overlap};
pub use physics::{apply_flap, apply_gravity, integrate_bird, step_pipes};
pub use score::{award_points, pipe_passed};
pub use spawn::{cull_offscreen, generate_pipe, should_spawn_pipe};
pub use state::{Bird, GamePhase, GameState, Pipe};
pub use tick::{TickInput, advance, handle_collision, handle_flap, handle_restart, tick};
