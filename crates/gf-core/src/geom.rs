//! 2-D geometry on the terminal plane.
//!
//! Coordinates are display units on the terminal map: origin at the top-left,
//! x growing right, y growing down (matching the layout tables and the host
//! renderer's viewport).  `f32` is sufficient — the plane is ~1150 × 750
//! units and positions feed a renderer, not navigation.

use crate::rng::SimRng;

// ── Point ─────────────────────────────────────────────────────────────────────

/// A position on the terminal plane, stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Quadratic Bézier ──────────────────────────────────────────────────────────

/// Evaluate the quadratic Bézier curve through `start`/`control`/`target`
/// at parameter `t`.
///
/// `B(t) = (1−t)²·start + 2(1−t)t·control + t²·target`
///
/// `t = 0` yields `start` exactly and `t = 1` yields `target` exactly; the
/// curve bends toward (but does not pass through) `control`.
///
/// ```
/// use gf_core::{Point, quad_bezier};
///
/// let s = Point::new(0.0, 0.0);
/// let c = Point::new(5.0, 10.0);
/// let e = Point::new(10.0, 0.0);
/// assert_eq!(quad_bezier(s, c, e, 0.0), s);
/// assert_eq!(quad_bezier(s, c, e, 1.0), e);
/// ```
#[inline]
pub fn quad_bezier(start: Point, control: Point, target: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    Point::new(
        mt * mt * start.x + 2.0 * mt * t * control.x + t * t * target.x,
        mt * mt * start.y + 2.0 * mt * t * control.y + t * t * target.y,
    )
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle: top-left corner plus extent.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x:      f32,
    pub y:      f32,
    pub width:  f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Geometric center of the rectangle.
    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// `true` if `p` lies inside the rectangle (right/bottom edges exclusive,
    /// consistent with grid binning).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x
            && p.x < self.x + self.width
            && p.y >= self.y
            && p.y < self.y + self.height
    }

    /// A uniformly distributed point inside the rectangle.
    ///
    /// Degenerate rectangles (zero width or height) collapse the affected
    /// axis to the corner coordinate rather than erroring.
    pub fn sample(self, rng: &mut SimRng) -> Point {
        Point::new(
            self.x + rng.random::<f32>() * self.width,
            self.y + rng.random::<f32>() * self.height,
        )
    }
}
