//! Headless demo driver
//!
//! Owns everything the core refuses to own: the frame counter, the viewport,
//! the tick loop and input events. An autopilot plays the game so the sim can
//! be exercised (and profiled) without a renderer.
//!
//! Usage: gap-glider [--seed N] [--runs N] [--dump]

use gap_glider::config::{PhysicsConfig, PipeConfig, Viewport};
use gap_glider::sim::{GamePhase, GameState, TickInput, tick};

/// Safety cap per run so a lucky autopilot can't loop forever
const MAX_TICKS_PER_RUN: u64 = 100_000;

struct Args {
    seed: u64,
    runs: u32,
    dump: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        seed: 0xC0FFEE,
        runs: 5,
        dump: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                if let Some(v) = iter.next().and_then(|s| s.parse().ok()) {
                    args.seed = v;
                }
            }
            "--runs" => {
                if let Some(v) = iter.next().and_then(|s| s.parse().ok()) {
                    args.runs = v;
                }
            }
            "--dump" => args.dump = true,
            other => log::warn!("ignoring unknown argument {other:?}"),
        }
    }
    args
}

/// Decide whether the autopilot flaps this tick
///
/// Aim for the gap center of the nearest pipe still ahead of the bird; with
/// no pipe in play, hold the middle of the viewport. Flap only while falling
/// and below the target, which keeps the bird gently bobbing around it.
fn autopilot_flap(state: &GameState) -> bool {
    let bird_center = state.bird.pos.y + state.bird.size.y / 2.0;
    let target = state
        .pipes
        .iter()
        .find(|pipe| pipe.x + pipe.width > state.bird.pos.x)
        .map(|pipe| pipe.gap_y)
        .unwrap_or(state.viewport.height / 2.0);

    state.bird.vel > 0.0 && bird_center > target
}

fn main() {
    env_logger::init();
    let args = parse_args();

    let viewport = Viewport::default().sanitize();
    let physics = PhysicsConfig::default().sanitize();
    let pipes_cfg = PipeConfig::default().sanitize(&viewport);

    log::info!("seed {}, {} run(s)", args.seed, args.runs);

    let mut state = GameState::new(args.seed, viewport);
    let mut best = 0;

    for run in 1..=args.runs {
        let mut frame: u64 = 0;
        // First flap starts the run
        let mut input = TickInput {
            flap: true,
            restart: false,
        };

        while state.phase != GamePhase::Ended && frame < MAX_TICKS_PER_RUN {
            state = tick(state, &input, frame, &physics, &pipes_cfg);
            frame += 1;
            input = TickInput {
                flap: autopilot_flap(&state),
                restart: false,
            };
        }

        best = best.max(state.score);
        log::info!(
            "run {run}: score {} after {frame} ticks (session best {best})",
            state.score
        );
        println!("run {run}: score {} ({frame} ticks)", state.score);

        if run < args.runs {
            // Restart is an input event like any other; the driver zeroes its
            // own frame counter at the top of the loop
            let restart = TickInput {
                flap: false,
                restart: true,
            };
            state = tick(state, &restart, 0, &physics, &pipes_cfg);
        }
    }

    println!("session best: {best}");

    if args.dump {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("snapshot serialization failed: {err}"),
        }
    }
}
