//! `geom::shapes` submodule implements axis-aligned rectangle and its dimensions.
//!

use crate::{floats::NearEq, vectors::Vec2};
use serde::{Deserialize, Serialize};

/// [`Size`] struct represents the dimensions (width and height) of a rectangle.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Width.
    ///
    pub w: f32,
    /// Height.
    ///
    pub h: f32,
}
impl Size {
    /// Constructs size from width and height.
    ///
    pub const fn new(w: f32, h: f32) -> Self {
        Size { w, h }
    }
}
impl NearEq for Size {
    fn near_eq(&self, other: &Self) -> bool {
        [self.w, self.h].near_eq(&[other.w, other.h])
    }
}
impl From<Vec2> for Size {
    fn from(vector: Vec2) -> Self {
        Size {
            w: vector.x,
            h: vector.y,
        }
    }
}
impl From<Size> for Vec2 {
    fn from(size: Size) -> Self {
        Vec2 {
            x: size.w,
            y: size.h,
        }
    }
}

/// [`Rectangle`] struct represents axis-aligned rectangle which contains the points with
/// `min.x <= x <= max.x` and `min.y <= y <= max.y`.
///
/// Rectangle is well-formed if `min.x <= max.x` and `min.y <= max.y`. Construction does not
/// enforce it; [`Rectangle::contains`] and [`Rectangle::size`] are meaningless for rectangles
/// that are not well-formed.
///
/// # Example
/// ```rust
/// # use geom::prelude::*;
/// let r: Rectangle = rect(0.0, 0.0, 320.0, 200.0);
/// assert!(r.contains(vec2(320.0, 0.0)));
/// assert_eq!(r.size(), Size::new(320.0, 200.0));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Rectangle {
    /// Minimal corner.
    ///
    pub min: Vec2,
    /// Maximal corner.
    ///
    pub max: Vec2,
}
impl Rectangle {
    /// Constructs rectangle from coordinates of its corners.
    ///
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Rectangle {
            min: Vec2::new(x0, y0),
            max: Vec2::new(x1, y1),
        }
    }
    /// Constructs rectangle from its position (minimal corner) and size.
    ///
    /// Negative size is kept as is, so the resulting rectangle is not well-formed.
    ///
    pub fn sized(pos: Vec2, size: Size) -> Self {
        Rectangle {
            min: pos,
            max: pos + Vec2::from(size),
        }
    }

    /// Reports whether the rectangle contains point `pt`.
    ///
    /// Both edges are inclusive.
    ///
    pub fn contains(&self, pt: Vec2) -> bool {
        (self.min.x..=self.max.x).contains(&pt.x) && (self.min.y..=self.max.y).contains(&pt.y)
    }

    /// Returns the dimensions (width and height) of the rectangle.
    ///
    pub fn size(&self) -> Size {
        Size::from(self.max - self.min)
    }
}
impl NearEq for Rectangle {
    fn near_eq(&self, other: &Self) -> bool {
        self.min.near_eq(&other.min) && self.max.near_eq(&other.max)
    }
}
/// Shorthand for writing `Rectangle::new(x0, y0, x1, y1)`.
///
pub const fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rectangle {
    Rectangle::new(x0, y0, x1, y1)
}
