//! The state machine driving each simulation tick
//!
//! Phases run Ready -> Active (first flap) -> Ended (collision), with restart
//! as the only way out of Ended. While Active, each tick threads the state
//! through physics, spawning, collision and scoring as pure stages: every
//! stage's output is the next stage's input, and the tick's final output is a
//! fresh state value.
//!
//! The driver owns the frame counter and passes it in; ticks must be applied
//! strictly sequentially or the set-once `passed` flags and the
//! collision-before-score ordering stop meaning anything.

use crate::config::{PhysicsConfig, PipeConfig};

use super::collision::{bird_hits_bounds, bird_hits_pipe};
use super::physics::{apply_flap, apply_gravity, integrate_bird, step_pipes};
use super::score::award_points;
use super::spawn::{cull_offscreen, generate_pipe, should_spawn_pipe};
use super::state::{GamePhase, GameState};

/// Input events for a single tick, already normalized by the input collaborator
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap impulse (key press / tap)
    pub flap: bool,
    /// Restart after a run has ended
    pub restart: bool,
}

/// Handle a flap event
///
/// Ready: start the run and apply the first impulse. Active: impulse only.
/// Ended: ignored, state returned unchanged.
pub fn handle_flap(mut state: GameState, physics: &PhysicsConfig) -> GameState {
    match state.phase {
        GamePhase::Ready => {
            state.phase = GamePhase::Active;
            state.bird = apply_flap(state.bird, physics);
        }
        GamePhase::Active => {
            state.bird = apply_flap(state.bird, physics);
        }
        GamePhase::Ended => {}
    }
    state
}

/// Transition into Ended after a collision, carrying the score over
///
/// Only meaningful while Active; any other phase passes through untouched.
pub fn handle_collision(mut state: GameState) -> GameState {
    if state.phase == GamePhase::Active {
        state.phase = GamePhase::Ended;
    }
    state
}

/// Handle a restart event: from Ended, back to a fresh Ready state
///
/// Restart outside Ended is ignored; the driver must also zero its frame
/// counter when the restart is accepted.
pub fn handle_restart(state: GameState) -> GameState {
    match state.phase {
        GamePhase::Ended => state.reset(),
        _ => state,
    }
}

/// Advance the simulation by one tick; no-op unless Active
///
/// Stage order matters: pipes move and spawn before the collision check, so a
/// pipe spawned this tick sits fully offscreen and can never collide on its
/// first tick. A tick that ends in collision skips scoring, freezing the
/// just-prior score into the Ended state.
pub fn advance(
    mut state: GameState,
    frame: u64,
    physics: &PhysicsConfig,
    pipes_cfg: &PipeConfig,
) -> GameState {
    if state.phase != GamePhase::Active {
        return state;
    }

    state.bird = integrate_bird(apply_gravity(state.bird, physics));
    state.pipes = step_pipes(state.pipes, physics);

    if should_spawn_pipe(frame, pipes_cfg) {
        let pipe = generate_pipe(&mut state.rng, &state.viewport, pipes_cfg);
        state.pipes.push(pipe);
    }
    state.pipes = cull_offscreen(state.pipes);

    let height = state.viewport.height;
    let collided = bird_hits_bounds(&state.bird, height)
        || state
            .pipes
            .iter()
            .any(|pipe| bird_hits_pipe(&state.bird, pipe, height));
    if collided {
        return handle_collision(state);
    }

    award_points(state)
}

/// One full tick: apply this tick's input events, then advance
pub fn tick(
    state: GameState,
    input: &TickInput,
    frame: u64,
    physics: &PhysicsConfig,
    pipes_cfg: &PipeConfig,
) -> GameState {
    let mut state = state;
    if input.restart {
        state = handle_restart(state);
    }
    if input.flap {
        state = handle_flap(state, physics);
    }
    advance(state, frame, physics, pipes_cfg)
}
