// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon handles and the point-in-polygon predicate.
//!
//! The quadtree never owns polygon geometry. It stores handles implementing
//! [`Polygon`], reads their vertices during insertion, and asks them for a
//! [`Containment`] answer during queries.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::types::{Point2D, Scalar, le, lt, max_t, min_t};

/// Where a point lies relative to a polygon.
///
/// Ordered so that `Outside < Boundary < Inside`, which mirrors the sign of the
/// classic signed point-in-polygon test (see [`Containment::signum`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Containment {
    /// Strictly outside.
    Outside,
    /// Exactly on an edge or vertex.
    Boundary,
    /// Strictly inside.
    Inside,
}

impl Containment {
    /// Whether the point is inside or on the boundary.
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Outside)
    }

    /// `-1` outside, `0` on the boundary, `1` inside.
    pub const fn signum(self) -> i8 {
        match self {
            Self::Outside => -1,
            Self::Boundary => 0,
            Self::Inside => 1,
        }
    }
}

/// A handle to a simple polygon stored elsewhere.
///
/// The ring is implicitly closed: the last vertex connects back to the first.
///
/// Handles are stored in the tree by value, so they should be cheap to move
/// (a slice borrow, an `Rc`, an `Arc`, or an id into your own storage). If your
/// handle refers to storage the borrow checker cannot see, that storage must
/// stay alive and unchanged for as long as the tree holds the handle.
pub trait Polygon<T: Scalar> {
    /// Vertices of the ring, in order.
    fn vertices(&self) -> &[Point2D<T>];

    /// Test a point against the polygon.
    ///
    /// Defaults to [`point_in_polygon`]. Override to plug in another predicate;
    /// it must report [`Containment::Outside`] for any point outside the
    /// bounding box of [`vertices`](Self::vertices), since the tree only
    /// visits cells that enclose those vertices.
    fn containment(&self, p: Point2D<T>) -> Containment {
        point_in_polygon(self.vertices(), p)
    }
}

/// Exact crossing-number test with explicit boundary detection.
///
/// Points on an edge or vertex report [`Containment::Boundary`]. Edge sides come
/// from [`Scalar::orient`], which is exact for integer coordinates over their
/// whole range. An empty ring contains nothing.
pub fn point_in_polygon<T: Scalar>(vertices: &[Point2D<T>], p: Point2D<T>) -> Containment {
    let Some(&last) = vertices.last() else {
        return Containment::Outside;
    };
    let mut inside = false;
    let mut a = last;
    for &b in vertices {
        let side = T::orient(a, b, p);
        if side == Some(Ordering::Equal) && on_segment_bounds(a, b, p) {
            return Containment::Boundary;
        }
        // Half-open rule on y so a vertex shared by two edges is counted once.
        if lt(p.y, a.y) != lt(p.y, b.y) {
            // Upward edges cross to the right of `p` when `p` is on their left.
            let upward = lt(a.y, b.y);
            if (side == Some(Ordering::Greater)) == upward {
                inside = !inside;
            }
        }
        a = b;
    }
    if inside {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

fn on_segment_bounds<T: Scalar>(a: Point2D<T>, b: Point2D<T>, p: Point2D<T>) -> bool {
    le(min_t(a.x, b.x), p.x)
        && le(p.x, max_t(a.x, b.x))
        && le(min_t(a.y, b.y), p.y)
        && le(p.y, max_t(a.y, b.y))
}

impl<T: Scalar> Polygon<T> for [Point2D<T>] {
    fn vertices(&self) -> &[Point2D<T>] {
        self
    }
}

impl<T: Scalar, const N: usize> Polygon<T> for [Point2D<T>; N] {
    fn vertices(&self) -> &[Point2D<T>] {
        self
    }
}

impl<T: Scalar> Polygon<T> for Vec<Point2D<T>> {
    fn vertices(&self) -> &[Point2D<T>] {
        self
    }
}

impl<T: Scalar, P: Polygon<T> + ?Sized> Polygon<T> for &P {
    fn vertices(&self) -> &[Point2D<T>] {
        (**self).vertices()
    }

    fn containment(&self, p: Point2D<T>) -> Containment {
        (**self).containment(p)
    }
}

impl<T: Scalar, P: Polygon<T> + ?Sized> Polygon<T> for Box<P> {
    fn vertices(&self) -> &[Point2D<T>] {
        (**self).vertices()
    }

    fn containment(&self, p: Point2D<T>) -> Containment {
        (**self).containment(p)
    }
}

impl<T: Scalar, P: Polygon<T> + ?Sized> Polygon<T> for Rc<P> {
    fn vertices(&self) -> &[Point2D<T>] {
        (**self).vertices()
    }

    fn containment(&self, p: Point2D<T>) -> Containment {
        (**self).containment(p)
    }
}

impl<T: Scalar, P: Polygon<T> + ?Sized> Polygon<T> for Arc<P> {
    fn vertices(&self) -> &[Point2D<T>] {
        (**self).vertices()
    }

    fn containment(&self, p: Point2D<T>) -> Containment {
        (**self).containment(p)
    }
}
