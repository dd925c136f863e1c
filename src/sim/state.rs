//! Game state and core simulation types
//!
//! All state needed to reproduce a run deterministically lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Viewport;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap
    Ready,
    /// Active gameplay
    Active,
    /// Run ended on a collision; only restart leaves this phase
    Ended,
}

/// The player-controlled bird
///
/// Horizontal position is fixed for the whole run; only pipes move
/// horizontally. The hitbox is the axis-aligned rectangle at `pos` with
/// `size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    /// Vertical velocity (positive = down)
    pub vel: f32,
    pub size: Vec2,
}

impl Bird {
    /// Bird at the documented starting pose, at rest
    pub fn at_start() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, BIRD_START_Y),
            vel: 0.0,
            size: Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
        }
    }
}

/// A pipe pair: solid above and below a passable gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge; decreases every tick
    pub x: f32,
    /// Vertical center of the gap
    pub gap_y: f32,
    pub gap_height: f32,
    pub width: f32,
    /// Set exactly once, when the bird clears this pipe; the sole memory
    /// that prevents double scoring
    pub passed: bool,
}

/// Complete game state (deterministic, serializable)
///
/// Pipes are kept in spawn order, oldest first - which is also leftmost
/// first since all pipes move at the same speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap-placement RNG; serialized so a restored snapshot continues the
    /// identical pipe sequence
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub viewport: Viewport,
}

impl GameState {
    /// Create a fresh state: Ready, no pipes, score 0, bird at the start pose
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Ready,
            bird: Bird::at_start(),
            pipes: Vec::new(),
            score: 0,
            viewport,
        }
    }

    /// Wholesale reset back to the creation state, reseeding the RNG
    ///
    /// The driver owns the frame counter and must zero it alongside this.
    pub fn reset(&self) -> Self {
        Self::new(self.seed, self.viewport)
    }
}
