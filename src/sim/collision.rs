//! Collision detection for the bird against pipes and playfield bounds
//!
//! Two deliberately different rules: rectangle overlap is strict (pipes that
//! merely touch the bird do not kill), while the top/bottom bounds are
//! inclusive (the playfield edges are hard walls - touching is a collision).

use glam::Vec2;

use super::state::{Bird, Pipe};

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }
}

impl From<&Bird> for Rect {
    fn from(bird: &Bird) -> Self {
        Self {
            pos: bird.pos,
            size: bird.size,
        }
    }
}

/// Strict AABB overlap: rectangles sharing only an edge do not intersect
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

/// True iff the bird touches the top or bottom of the playfield (inclusive)
pub fn bird_hits_bounds(bird: &Bird, viewport_height: f32) -> bool {
    bird.pos.y <= 0.0 || bird.pos.y + bird.size.y >= viewport_height
}

/// True iff the bird overlaps either solid segment of the pipe
///
/// The pipe is two rectangles: from the top of the playfield down to the gap,
/// and from the gap down to the bottom. Segment heights are clamped to zero
/// for safety, though the generator contract guarantees they never go
/// negative.
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe, viewport_height: f32) -> bool {
    let half_gap = pipe.gap_height / 2.0;
    let gap_top = pipe.gap_y - half_gap;
    let gap_bottom = pipe.gap_y + half_gap;

    let top = Rect::new(pipe.x, 0.0, pipe.width, gap_top.max(0.0));
    let bottom = Rect::new(
        pipe.x,
        gap_bottom,
        pipe.width,
        (viewport_height - gap_bottom).max(0.0),
    );

    let hitbox = Rect::from(bird);
    rects_overlap(&hitbox, &top) || rects_overlap(&hitbox, &bottom)
}
