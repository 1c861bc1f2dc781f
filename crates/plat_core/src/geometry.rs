//! Axis-aligned boxes in screen space: origin at the top-left corner, `y` grows
//! downward. Every collidable thing in the game is one of these; nothing
//! rotates.
//!
//! Overlap is strict: boxes that merely share an edge do not intersect. The
//! physics relies on this so that a body resting exactly on a surface is not
//! re-resolved every frame.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// How far one box has sunk into another, measured from each side of the
/// box being entered. The smallest depth is the axis of least penetration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapDepths {
    /// Entered through the other box's left side.
    pub from_left: f32,
    /// Entered through the other box's right side.
    pub from_right: f32,
    /// Entered through the other box's top (i.e. landed on it).
    pub from_top: f32,
    /// Entered through the other box's bottom (i.e. hit it from below).
    pub from_bottom: f32,
}

impl OverlapDepths {
    pub fn min(&self) -> f32 {
        self.from_left
            .min(self.from_right)
            .min(self.from_top.min(self.from_bottom))
    }
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Directed depths of `self` inside `other`. Only meaningful when the two
    /// boxes intersect.
    pub fn overlap_depths(&self, other: &Aabb) -> OverlapDepths {
        OverlapDepths {
            from_left: self.right() - other.x,
            from_right: other.right() - self.x,
            from_top: self.bottom() - other.y,
            from_bottom: other.bottom() - self.y,
        }
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
