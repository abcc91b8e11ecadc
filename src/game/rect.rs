//! Axis-aligned rectangle for entity bounds
//!
//! Screen space: origin top-left, +y points down. Overlap is strict,
//! so two rectangles that only share an edge do not collide.

use serde::{Deserialize, Serialize};

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Left edge
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    /// Move so the right edge sits at `right`, keeping the width
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    /// Move so the bottom edge sits at `bottom`, keeping the height
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    /// Center point
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Strict overlap test. Shared edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
