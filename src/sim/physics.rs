//! Per-tick integration for the bird and the pipe field
//!
//! Every function is pure: value in, fresh value out, no side effects. The
//! state manager enforces the invariants (valid config, Active phase) before
//! calling, so nothing here defends against malformed input.

use crate::config::PhysicsConfig;

use super::state::{Bird, Pipe};

/// Accelerate the bird downward, clamped to terminal velocity
///
/// Gravity only ever increases velocity (downward is positive), so the clamp
/// is one-sided.
pub fn apply_gravity(mut bird: Bird, cfg: &PhysicsConfig) -> Bird {
    bird.vel = (bird.vel + cfg.gravity).min(cfg.terminal_velocity);
    bird
}

/// Flap: overwrite velocity with the upward impulse, whatever it was before
pub fn apply_flap(mut bird: Bird, cfg: &PhysicsConfig) -> Bird {
    bird.vel = cfg.flap_velocity;
    bird
}

/// Integrate the bird's position; x never changes during play
pub fn integrate_bird(mut bird: Bird) -> Bird {
    bird.pos.y += bird.vel;
    bird
}

/// Move every pipe left by the configured speed, order preserved
pub fn step_pipes(pipes: Vec<Pipe>, cfg: &PhysicsConfig) -> Vec<Pipe> {
    pipes
        .into_iter()
        .map(|mut pipe| {
            pipe.x -= cfg.pipe_speed;
            pipe
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird_with_vel(vel: f32) -> Bird {
        Bird {
            vel,
            ..Bird::at_start()
        }
    }

    #[test]
    fn test_gravity_accelerates_downward() {
        let cfg = PhysicsConfig::default();
        let bird = apply_gravity(bird_with_vel(0.0), &cfg);
        assert_eq!(bird.vel, cfg.gravity);
    }

    #[test]
    fn test_gravity_clamps_at_terminal_velocity() {
        let cfg = PhysicsConfig::default();
        let bird = apply_gravity(bird_with_vel(cfg.terminal_velocity), &cfg);
        assert_eq!(bird.vel, cfg.terminal_velocity);

        // Just below terminal: clamp kicks in mid-step
        let bird = apply_gravity(bird_with_vel(cfg.terminal_velocity - 0.1), &cfg);
        assert_eq!(bird.vel, cfg.terminal_velocity);
    }

    #[test]
    fn test_flap_overwrites_any_velocity() {
        let cfg = PhysicsConfig::default();
        for vel in [-20.0, -8.0, 0.0, 3.0, 10.0] {
            let bird = apply_flap(bird_with_vel(vel), &cfg);
            assert_eq!(bird.vel, cfg.flap_velocity);
        }
    }

    #[test]
    fn test_integrate_moves_y_only() {
        let mut bird = bird_with_vel(4.0);
        bird.pos.y = 100.0;
        let x_before = bird.pos.x;

        let bird = integrate_bird(bird);
        assert_eq!(bird.pos.y, 104.0);
        assert_eq!(bird.pos.x, x_before);
    }

    #[test]
    fn test_step_pipes_moves_left_and_preserves_order() {
        let cfg = PhysicsConfig::default();
        let pipes = vec![
            Pipe {
                x: 100.0,
                gap_y: 200.0,
                gap_height: 150.0,
                width: 60.0,
                passed: true,
            },
            Pipe {
                x: 300.0,
                gap_y: 400.0,
                gap_height: 150.0,
                width: 60.0,
                passed: false,
            },
        ];

        let moved = step_pipes(pipes, &cfg);
        assert_eq!(moved[0].x, 100.0 - cfg.pipe_speed);
        assert_eq!(moved[1].x, 300.0 - cfg.pipe_speed);
        // Everything else untouched
        assert_eq!(moved[0].gap_y, 200.0);
        assert_eq!(moved[0].gap_height, 150.0);
        assert!(moved[0].passed);
        assert!(!moved[1].passed);
    }

    #[test]
    fn test_flap_then_gravity_velocity_trace() {
        // jump -8, gravity 1, terminal 10: the classic -8, -7, -6, -5 arc
        let cfg = PhysicsConfig {
            gravity: 1.0,
            flap_velocity: -8.0,
            pipe_speed: 2.0,
            terminal_velocity: 10.0,
        };
        let mut bird = apply_flap(bird_with_vel(0.0), &cfg);
        assert_eq!(bird.vel, -8.0);
        for expected in [-7.0, -6.0, -5.0] {
            bird = apply_gravity(bird, &cfg);
            assert_eq!(bird.vel, expected);
        }
    }
}
