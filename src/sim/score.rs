//! Pass detection and scoring
//!
//! Each pipe scores exactly once. The `passed` flag is the only memory of
//! prior scoring, so calling `award_points` again without moving anything is
//! a no-op.

use super::state::{Bird, GameState, Pipe};

/// True iff the bird has fully cleared a pipe that has not scored yet
pub fn pipe_passed(bird: &Bird, pipe: &Pipe) -> bool {
    bird.pos.x > pipe.x + pipe.width && !pipe.passed
}

/// Increment the score once per newly passed pipe, marking each as scored
pub fn award_points(mut state: GameState) -> GameState {
    for pipe in &mut state.pipes {
        if pipe_passed(&state.bird, pipe) {
            pipe.passed = true;
            state.score += 1;
        }
    }
    state
}
