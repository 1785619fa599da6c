//! Swept collision detection
//!
//! The tricky part of Tankoid: a fast ball can cross a whole brick in one
//! step, so collision tests must cover the full per-step translation, not
//! just the end position. Two variants are supported:
//!
//! - [`SweepMethod::RectOverlap`]: translate the ball's bounding box by the
//!   full step and resolve the smaller overlap axis against the obstacle.
//! - [`SweepMethod::LineSweep`]: intersect the ball center's travel segment
//!   with the facing edges of the obstacle grown by the ball radius.
//!
//! Both report the ball *center* at first contact, so the resolver can clamp
//! the ball to the reported position directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// The struck face, in the obstacle's own frame: `Left` means the ball hit
/// the obstacle's left edge while traveling rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// True for the vertical faces (left/right), which reflect velocity x
    #[inline]
    pub fn reflects_x(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

/// Result of one detector invocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    /// Ball center at first contact (pre-penetration)
    pub pos: Vec2,
    /// Which obstacle face was struck
    pub side: Side,
}

/// Which swept test drives detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SweepMethod {
    /// Translated-bounds overlap, resolved along the smaller overlap axis
    RectOverlap,
    /// Travel-segment intersection against the radius-grown obstacle
    #[default]
    LineSweep,
}

/// Test a moving ball against one static obstacle rect.
///
/// Returns `None` for a zero translation: a stationary ball cannot newly
/// collide, any contact was already resolved in a prior step.
pub fn detect(
    center: Vec2,
    radius: f32,
    translation: Vec2,
    obstacle: &Rect,
    method: SweepMethod,
) -> Option<Impact> {
    if translation == Vec2::ZERO {
        return None;
    }

    // Broad phase: the box swept by the ball over the whole step must reach
    // the obstacle at all.
    let bounds = Rect::from_center(center, Vec2::splat(2.0 * radius));
    let swept = bounds.union(&bounds.translated(translation));
    if !swept.intersects(obstacle) {
        return None;
    }

    match method {
        SweepMethod::RectOverlap => detect_rect_overlap(center, radius, translation, obstacle),
        SweepMethod::LineSweep => detect_line_sweep(center, radius, translation, obstacle),
    }
}

/// Variant a: move the ball's bounds by the full translation and resolve the
/// overlap, if any, along its smaller axis. On an exact tie the vertical
/// axis wins.
fn detect_rect_overlap(
    center: Vec2,
    radius: f32,
    translation: Vec2,
    obstacle: &Rect,
) -> Option<Impact> {
    let moved = Rect::from_center(center + translation, Vec2::splat(2.0 * radius));
    let overlap = moved.overlap(obstacle)?;

    // Penetration axis: smaller overlap extent, unless the translation has
    // no component on it to pull back along.
    let prefer_x = overlap.x < overlap.y;
    let use_x = if prefer_x {
        translation.x != 0.0
    } else {
        translation.y == 0.0
    };

    if use_x {
        let (side, x) = if translation.x > 0.0 {
            (Side::Left, obstacle.left() - radius)
        } else {
            (Side::Right, obstacle.right() + radius)
        };
        Some(Impact {
            pos: Vec2::new(x, center.y + translation.y),
            side,
        })
    } else {
        let (side, y) = if translation.y > 0.0 {
            (Side::Top, obstacle.top() - radius)
        } else {
            (Side::Bottom, obstacle.bottom() + radius)
        };
        Some(Impact {
            pos: Vec2::new(center.x + translation.x, y),
            side,
        })
    }
}

/// Variant b: grow the obstacle by the ball radius, then intersect the
/// center's travel segment with each edge facing the direction of travel.
/// When both a vertical and a horizontal face are hit, the one nearer the
/// pre-step center wins.
fn detect_line_sweep(
    center: Vec2,
    radius: f32,
    translation: Vec2,
    obstacle: &Rect,
) -> Option<Impact> {
    let grown = obstacle.inflated(radius);
    let end = center + translation;

    let mut best: Option<(f32, Impact)> = None;
    let mut consider = |side: Side, a: Vec2, b: Vec2| {
        if let Some(hit) = segment_intersection(center, end, a, b) {
            let dist_sq = center.distance_squared(hit);
            if best.is_none_or(|(d, _)| dist_sq < d) {
                best = Some((dist_sq, Impact { pos: hit, side }));
            }
        }
    };

    // Only the faces the ball travels toward can be struck first.
    if translation.x > 0.0 {
        let x = grown.left();
        consider(
            Side::Left,
            Vec2::new(x, grown.top()),
            Vec2::new(x, grown.bottom()),
        );
    } else if translation.x < 0.0 {
        let x = grown.right();
        consider(
            Side::Right,
            Vec2::new(x, grown.top()),
            Vec2::new(x, grown.bottom()),
        );
    }
    if translation.y > 0.0 {
        let y = grown.top();
        consider(
            Side::Top,
            Vec2::new(grown.left(), y),
            Vec2::new(grown.right(), y),
        );
    } else if translation.y < 0.0 {
        let y = grown.bottom();
        consider(
            Side::Bottom,
            Vec2::new(grown.left(), y),
            Vec2::new(grown.right(), y),
        );
    }

    best.map(|(_, impact)| impact)
}

/// Intersection point of segments p1-p2 and p3-p4, if any.
///
/// A near-zero direction determinant means the segments are parallel (or
/// degenerate) and is treated as no intersection rather than dividing into
/// garbage.
fn segment_intersection(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    let d = p2 - p1;
    let e = p4 - p3;
    let denom = d.perp_dot(e);
    if denom.abs() < f32::EPSILON {
        return None;
    }
    let s = p3 - p1;
    let t = s.perp_dot(e) / denom;
    let u = s.perp_dot(d) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(p1 + d * t)
    } else {
        None
    }
}
