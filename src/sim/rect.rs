//! Axis-aligned rectangle geometry
//!
//! All play-field geometry is axis-aligned: bricks, the paddle, the four
//! borders and the ball's bounding box. A rect is an origin corner
//! (top-left, +y downward) plus a size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left origin plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// Build from origin corner and size. Size must be non-negative.
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        debug_assert!(size.x >= 0.0 && size.y >= 0.0, "negative rect size");
        Self { pos, size }
    }

    /// Build from a center point and size
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Rect shifted by `delta`
    #[inline]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    /// Rect grown by `pad` on every side (Minkowski sum with a `pad` box)
    pub fn inflated(&self, pad: f32) -> Self {
        debug_assert!(pad >= 0.0);
        Self {
            pos: self.pos - Vec2::splat(pad),
            size: self.size + Vec2::splat(2.0 * pad),
        }
    }

    /// Smallest rect containing both `self` and `other`
    pub fn union(&self, other: &Rect) -> Self {
        let min = self.pos.min(other.pos);
        let max = Vec2::new(
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        );
        Self {
            pos: min,
            size: max - min,
        }
    }

    /// Whether the two rects overlap (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Extent of the overlap region as (width, height), if any
    pub fn overlap(&self, other: &Rect) -> Option<Vec2> {
        if !self.intersects(other) {
            return None;
        }
        let w = self.right().min(other.right()) - self.left().max(other.left());
        let h = self.bottom().min(other.bottom()) - self.top().max(other.top());
        Some(Vec2::new(w, h))
    }
}
