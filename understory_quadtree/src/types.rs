// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// A point in 2D.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2D<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate (grows downward: smaller `y` is "top").
    pub y: T,
}

impl<T> Point2D<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point2D<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in 2D.
///
/// The region is inclusive on every side: `[min_x, max_x] × [min_y, max_y]`.
/// The min corner is the top-left corner and the max corner the bottom-right one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb2D<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a new AABB from its top-left and bottom-right corners.
    pub fn from_corners(top_left: Point2D<T>, bottom_right: Point2D<T>) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: bottom_right.x,
            max_y: bottom_right.y,
        }
    }
}

impl<T: Copy> Aabb2D<T> {
    /// Top-left (min) corner.
    pub fn top_left(&self) -> Point2D<T> {
        Point2D::new(self.min_x, self.min_y)
    }

    /// Bottom-right (max) corner.
    pub fn bottom_right(&self) -> Point2D<T> {
        Point2D::new(self.max_x, self.max_y)
    }
}

impl<T: Copy + PartialOrd> Aabb2D<T> {
    /// Whether this AABB contains the point. NaN coordinates are never contained.
    pub fn contains_point(&self, x: T, y: T) -> bool {
        le(self.min_x, x) && le(self.min_y, y) && le(x, self.max_x) && le(y, self.max_y)
    }

    /// Return true if the AABB is inverted (no extent). Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        lt(self.max_x, self.min_x) || lt(self.max_y, self.min_y)
    }
}

impl<T: Scalar> Aabb2D<T> {
    /// The split point of this box: `(top_left + bottom_right) / 2`.
    ///
    /// Integer scalars truncate toward zero.
    pub fn median(&self) -> Point2D<T> {
        Point2D::new(T::mid(self.min_x, self.max_x), T::mid(self.min_y, self.max_y))
    }

    /// Classify a point into one of the four quadrants split at [`median`](Self::median).
    ///
    /// Returns `None` when the point lies outside the box. A point exactly on the
    /// median line belongs to the right (for `x`) or bottom (for `y`) quadrant.
    pub fn classify(&self, p: Point2D<T>) -> Option<Quadrant> {
        if !self.contains_point(p.x, p.y) {
            return None;
        }
        let m = self.median();
        let right = !lt(p.x, m.x);
        let bottom = !lt(p.y, m.y);
        Some(match (right, bottom) {
            (false, false) => Quadrant::TopLeft,
            (true, false) => Quadrant::TopRight,
            (false, true) => Quadrant::BottomLeft,
            (true, true) => Quadrant::BottomRight,
        })
    }

    /// The sub-box covered by a quadrant.
    ///
    /// Neighbouring quadrants share their edge on the median line.
    pub fn quadrant(&self, q: Quadrant) -> Self {
        let m = self.median();
        match q {
            Quadrant::TopLeft => Self::new(self.min_x, self.min_y, m.x, m.y),
            Quadrant::TopRight => Self::new(m.x, self.min_y, self.max_x, m.y),
            Quadrant::BottomLeft => Self::new(self.min_x, m.y, m.x, self.max_y),
            Quadrant::BottomRight => Self::new(m.x, m.y, self.max_x, self.max_y),
        }
    }
}

impl Aabb2D<f64> {
    /// Create an AABB from origin and size in f64.
    ///
    /// `x + w` and `y + h` become infinite past `f64::MAX`.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }
}

impl Aabb2D<i32> {
    /// Create an AABB from origin and size in i32.
    ///
    /// `x + w` and `y + h` must fit in `i32`; overflow panics in debug builds.
    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }
}

/// One of the four sub-regions of a node, split at the node's median.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Left of the median `x`, above the median `y`.
    TopLeft = 0,
    /// Right of (or on) the median `x`, above the median `y`.
    TopRight = 1,
    /// Left of the median `x`, below (or on) the median `y`.
    BottomLeft = 2,
    /// Right of (or on) the median `x`, below (or on) the median `y`.
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Slot index of this quadrant (0..4).
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Numeric scalar abstraction for coordinates.
///
/// Provides the median used for splitting and the orientation test behind
/// point-in-polygon queries. Both are exact and overflow-free for integer
/// scalars across their whole range.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Midpoint `(a + b) / 2`. Integer scalars truncate and never overflow.
    fn mid(a: Self, b: Self) -> Self;

    /// Sign of the cross product `(b - a) × (p - a)`.
    ///
    /// `Greater` for a positive product, `Equal` when the three points are
    /// collinear, `None` when a coordinate is NaN.
    fn orient(a: Point2D<Self>, b: Point2D<Self>, p: Point2D<Self>) -> Option<Ordering>;
}

/// Float midpoint, falling back to halving each side when the sum overflows.
#[inline]
fn mid_float(a: f64, b: f64) -> f64 {
    let m = (a + b) / 2.0;
    if m.is_finite() { m } else { a / 2.0 + b / 2.0 }
}

#[inline]
fn orient_f64(a: Point2D<f64>, b: Point2D<f64>, p: Point2D<f64>) -> Option<Ordering> {
    let cross = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
    cross.partial_cmp(&0.0)
}

/// Compare `l0 * l1` with `r0 * r1` exactly. Operands must be below `2^64` in magnitude.
fn cmp_products(l0: i128, l1: i128, r0: i128, r1: i128) -> Ordering {
    let left = l0.signum() * l1.signum();
    let right = r0.signum() * r1.signum();
    if left != right {
        return left.cmp(&right);
    }
    let lm = l0.unsigned_abs() * l1.unsigned_abs();
    let rm = r0.unsigned_abs() * r1.unsigned_abs();
    match left {
        1 => lm.cmp(&rm),
        -1 => rm.cmp(&lm),
        _ => Ordering::Equal,
    }
}

impl Scalar for f32 {
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The midpoint of two f32 values is within f32 range."
    )]
    fn mid(a: Self, b: Self) -> Self {
        mid_float(a as f64, b as f64) as Self
    }

    #[inline]
    fn orient(a: Point2D<Self>, b: Point2D<Self>, p: Point2D<Self>) -> Option<Ordering> {
        let w = |q: Point2D<Self>| Point2D::new(q.x as f64, q.y as f64);
        orient_f64(w(a), w(b), w(p))
    }
}

impl Scalar for f64 {
    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        mid_float(a, b)
    }

    #[inline]
    fn orient(a: Point2D<Self>, b: Point2D<Self>, p: Point2D<Self>) -> Option<Ordering> {
        orient_f64(a, b, p)
    }
}

impl Scalar for i32 {
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The average of two i32 values always fits in an i32."
    )]
    fn mid(a: Self, b: Self) -> Self {
        ((a as i64 + b as i64) / 2) as Self
    }

    #[inline]
    fn orient(a: Point2D<Self>, b: Point2D<Self>, p: Point2D<Self>) -> Option<Ordering> {
        // Differences stay below 2^32, products below 2^64, their difference below 2^65.
        let d = |u: Self, v: Self| u as i128 - v as i128;
        let cross = d(b.x, a.x) * d(p.y, a.y) - d(p.x, a.x) * d(b.y, a.y);
        Some(cross.cmp(&0))
    }
}

impl Scalar for i64 {
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The average of two i64 values always fits in an i64."
    )]
    fn mid(a: Self, b: Self) -> Self {
        ((a as i128 + b as i128) / 2) as Self
    }

    #[inline]
    fn orient(a: Point2D<Self>, b: Point2D<Self>, p: Point2D<Self>) -> Option<Ordering> {
        // Products of differences can reach 2^128, past i128; compare them instead.
        let d = |u: Self, v: Self| u as i128 - v as i128;
        Some(cmp_products(
            d(b.x, a.x),
            d(p.y, a.y),
            d(p.x, a.x),
            d(b.y, a.y),
        ))
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
