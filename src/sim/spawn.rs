//! Pipe spawning and offscreen cleanup
//!
//! The generator trusts its configuration: `PipeConfig::sanitize` has already
//! guaranteed that every gap center in `[min_gap_y, max_gap_y]` leaves both
//! pipe segments inside the viewport, so no clamping happens here.

use rand::Rng;

use crate::config::{PipeConfig, Viewport};

use super::state::Pipe;

/// True on the ticks a new pipe should spawn
///
/// The frame counter is owned by the driver and threaded in; the predicate
/// itself is stateless.
pub fn should_spawn_pipe(frame: u64, cfg: &PipeConfig) -> bool {
    frame % cfg.spawn_interval == 0
}

/// Generate a pipe just off the right edge with a uniformly random gap center
pub fn generate_pipe<R: Rng>(rng: &mut R, viewport: &Viewport, cfg: &PipeConfig) -> Pipe {
    Pipe {
        x: viewport.width,
        gap_y: rng.random_range(cfg.min_gap_y..=cfg.max_gap_y),
        gap_height: cfg.gap_height,
        width: cfg.pipe_width,
        passed: false,
    }
}

/// Drop pipes that have fully left the screen, order preserved
pub fn cull_offscreen(mut pipes: Vec<Pipe>) -> Vec<Pipe> {
    pipes.retain(|pipe| pipe.x + pipe.width >= 0.0);
    pipes
}
