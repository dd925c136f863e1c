//! Configuration surface consumed by the simulation core
//!
//! Everything here is supplied by the surrounding collaborator and validated at
//! this boundary: `sanitize()` replaces each invalid field with its documented
//! default and logs a diagnostic, so the pure core never sees a malformed
//! config. The core itself does no defensive checking.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Per-tick physics tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Downward acceleration added to the bird's velocity each tick
    pub gravity: f32,
    /// Velocity assigned on flap (negative = up)
    pub flap_velocity: f32,
    /// Horizontal speed at which pipes move left each tick
    pub pipe_speed: f32,
    /// Maximum downward velocity; gravity never pushes past this
    pub terminal_velocity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            pipe_speed: PIPE_SPEED,
            terminal_velocity: TERMINAL_VELOCITY,
        }
    }
}

impl PhysicsConfig {
    /// Replace invalid fields with defaults, logging one warning per substitution
    pub fn sanitize(mut self) -> Self {
        if self.gravity < 0.0 {
            log::warn!("invalid gravity {}, using default {}", self.gravity, GRAVITY);
            self.gravity = GRAVITY;
        }
        if self.flap_velocity >= 0.0 {
            log::warn!(
                "flap_velocity {} is not upward, using default {}",
                self.flap_velocity,
                FLAP_VELOCITY
            );
            self.flap_velocity = FLAP_VELOCITY;
        }
        if self.pipe_speed <= 0.0 {
            log::warn!(
                "invalid pipe_speed {}, using default {}",
                self.pipe_speed,
                PIPE_SPEED
            );
            self.pipe_speed = PIPE_SPEED;
        }
        if self.terminal_velocity <= 0.0 {
            log::warn!(
                "invalid terminal_velocity {}, using default {}",
                self.terminal_velocity,
                TERMINAL_VELOCITY
            );
            self.terminal_velocity = TERMINAL_VELOCITY;
        }
        self
    }
}

/// Pipe generation tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeConfig {
    pub pipe_width: f32,
    /// Vertical size of the passable gap
    pub gap_height: f32,
    /// Lowest allowed gap center
    pub min_gap_y: f32,
    /// Highest allowed gap center
    pub max_gap_y: f32,
    /// A pipe spawns every `spawn_interval` ticks
    pub spawn_interval: u64,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            pipe_width: PIPE_WIDTH,
            gap_height: GAP_HEIGHT,
            min_gap_y: MIN_GAP_Y,
            max_gap_y: MAX_GAP_Y,
            spawn_interval: SPAWN_INTERVAL,
        }
    }
}

impl PipeConfig {
    /// Replace invalid fields with defaults, logging one warning per substitution
    ///
    /// The viewport is needed to enforce the generator contract: for every gap
    /// center in `[min_gap_y, max_gap_y]`, both pipe segments must have
    /// non-negative height and lie inside the viewport. The generator trusts
    /// these bounds and never clamps.
    pub fn sanitize(mut self, viewport: &Viewport) -> Self {
        if self.pipe_width <= 0.0 {
            log::warn!(
                "invalid pipe_width {}, using default {}",
                self.pipe_width,
                PIPE_WIDTH
            );
            self.pipe_width = PIPE_WIDTH;
        }
        if self.gap_height <= 0.0 {
            log::warn!(
                "invalid gap_height {}, using default {}",
                self.gap_height,
                GAP_HEIGHT
            );
            self.gap_height = GAP_HEIGHT;
        }
        if self.spawn_interval == 0 {
            log::warn!("spawn_interval must be positive, using default {SPAWN_INTERVAL}");
            self.spawn_interval = SPAWN_INTERVAL;
        }
        if self.gap_height > viewport.height {
            log::warn!(
                "gap_height {} exceeds viewport height {}, using default {}",
                self.gap_height,
                viewport.height,
                GAP_HEIGHT.min(viewport.height)
            );
            self.gap_height = GAP_HEIGHT.min(viewport.height);
        }
        if self.min_gap_y > self.max_gap_y {
            log::warn!(
                "inverted gap bounds [{}, {}], using defaults [{MIN_GAP_Y}, {MAX_GAP_Y}]",
                self.min_gap_y,
                self.max_gap_y
            );
            self.min_gap_y = MIN_GAP_Y;
            self.max_gap_y = MAX_GAP_Y;
        }
        // Segment containment: gap must fit at both extremes of the range
        let half_gap = self.gap_height / 2.0;
        if self.min_gap_y - half_gap < 0.0 || self.max_gap_y + half_gap > viewport.height {
            log::warn!(
                "gap bounds [{}, {}] with gap_height {} do not fit viewport height {}, clamping",
                self.min_gap_y,
                self.max_gap_y,
                self.gap_height,
                viewport.height
            );
            self.min_gap_y = half_gap;
            self.max_gap_y = viewport.height - half_gap;
        }
        self
    }
}

/// Playfield dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Replace non-positive dimensions with defaults, logging a warning
    pub fn sanitize(mut self) -> Self {
        if self.width <= 0.0 {
            log::warn!("invalid viewport width {}, using default {VIEWPORT_WIDTH}", self.width);
            self.width = VIEWPORT_WIDTH;
        }
        if self.height <= 0.0 {
            log::warn!(
                "invalid viewport height {}, using default {VIEWPORT_HEIGHT}",
                self.height
            );
            self.height = VIEWPORT_HEIGHT;
        }
        self
    }
}

/// Colors for the render collaborator (RGBA, 0-1)
///
/// The core never reads these; they ride along with the rest of the config so
/// a renderer can be themed from the same file/snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: [f32; 4],
    pub pipe: [f32; 4],
    pub pipe_cap: [f32; 4],
    pub bird_body: [f32; 4],
    pub bird_beak: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: srgb(0x87, 0xce, 0xeb),
            pipe: srgb(0x2e, 0xc4, 0x41),
            pipe_cap: srgb(0x1c, 0x8a, 0x2b),
            bird_body: srgb(0xf5, 0xc8, 0x42),
            bird_beak: srgb(0xff, 0xd0, 0x2a),
        }
    }
}

fn srgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_physics_is_already_sane() {
        let cfg = PhysicsConfig::default();
        assert_eq!(cfg.sanitize(), PhysicsConfig::default());
    }

    #[test]
    fn test_sanitize_replaces_bad_physics_fields() {
        let cfg = PhysicsConfig {
            gravity: -1.0,
            flap_velocity: 5.0,
            pipe_speed: 0.0,
            terminal_velocity: -2.0,
        }
        .sanitize();
        assert_eq!(cfg, PhysicsConfig::default());
    }

    #[test]
    fn test_sanitize_keeps_valid_custom_physics() {
        let cfg = PhysicsConfig {
            gravity: 1.0,
            flap_velocity: -12.0,
            pipe_speed: 3.5,
            terminal_velocity: 14.0,
        };
        assert_eq!(cfg.sanitize(), cfg);
    }

    #[test]
    fn test_sanitize_fixes_inverted_gap_bounds() {
        let viewport = Viewport::default();
        let cfg = PipeConfig {
            min_gap_y: 500.0,
            max_gap_y: 100.0,
            ..Default::default()
        }
        .sanitize(&viewport);
        assert_eq!(cfg.min_gap_y, MIN_GAP_Y);
        assert_eq!(cfg.max_gap_y, MAX_GAP_Y);
    }

    #[test]
    fn test_sanitize_clamps_gap_bounds_to_viewport() {
        let viewport = Viewport::default();
        let cfg = PipeConfig {
            min_gap_y: 10.0,
            max_gap_y: 595.0,
            ..Default::default()
        }
        .sanitize(&viewport);
        // Every gap center in range must leave both segments inside the viewport
        let half = cfg.gap_height / 2.0;
        assert!(cfg.min_gap_y - half >= 0.0);
        assert!(cfg.max_gap_y + half <= viewport.height);
    }

    #[test]
    fn test_sanitize_oversized_gap() {
        let viewport = Viewport {
            width: 400.0,
            height: 100.0,
        };
        let cfg = PipeConfig {
            gap_height: 150.0,
            min_gap_y: 100.0,
            max_gap_y: 500.0,
            ..Default::default()
        }
        .sanitize(&viewport);
        // Bounds must still form a valid, viewport-contained range
        assert!(cfg.min_gap_y <= cfg.max_gap_y);
        let half = cfg.gap_height / 2.0;
        assert!(cfg.min_gap_y - half >= 0.0);
        assert!(cfg.max_gap_y + half <= viewport.height);
    }

    #[test]
    fn test_sanitize_zero_spawn_interval() {
        let cfg = PipeConfig {
            spawn_interval: 0,
            ..Default::default()
        }
        .sanitize(&Viewport::default());
        assert_eq!(cfg.spawn_interval, SPAWN_INTERVAL);
    }

    #[test]
    fn test_sanitize_viewport() {
        let v = Viewport {
            width: -5.0,
            height: 0.0,
        }
        .sanitize();
        assert_eq!(v, Viewport::default());
    }
}
