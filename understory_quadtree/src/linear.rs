// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scan over every polygon. Small and simple; the baseline the quadtree is measured against.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::marker::PhantomData;

use crate::polygon::Polygon;
use crate::types::{Point2D, Scalar};

/// Polygon handles in a flat vector, tested one by one.
///
/// Exposes the same insert/query shape as [`QuadTree`](crate::QuadTree) so the
/// two can be swapped in comparisons.
pub struct LinearScan<T: Scalar, P> {
    polygons: Vec<P>,
    _t: PhantomData<T>,
}

impl<T: Scalar, P> LinearScan<T, P> {
    /// Create an empty scan.
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
            _t: PhantomData,
        }
    }

    /// Number of stored polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// True if no polygon is stored.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Stored polygons, in insertion order.
    pub fn polygons(&self) -> &[P] {
        &self.polygons
    }
}

impl<T: Scalar, P: Polygon<T>> LinearScan<T, P> {
    /// Append a polygon handle. Every polygon is accepted.
    pub fn insert(&mut self, polygon: P) {
        self.polygons.push(polygon);
    }

    /// The first polygon (in insertion order) containing `(x, y)`, boundary included.
    pub fn query_point(&self, x: T, y: T) -> Option<&P> {
        let p = Point2D::new(x, y);
        self.polygons.iter().find(|poly| poly.containment(p).is_hit())
    }

    /// Every polygon containing `(x, y)`, in insertion order.
    pub fn query_all(&self, x: T, y: T) -> impl Iterator<Item = &P> + '_ {
        let p = Point2D::new(x, y);
        self.polygons
            .iter()
            .filter(move |poly| poly.containment(p).is_hit())
    }
}

impl<T: Scalar, P> Default for LinearScan<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, P> Debug for LinearScan<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinearScan")
            .field("polygons", &self.polygons.len())
            .finish_non_exhaustive()
    }
}

impl<T: Scalar, P: Polygon<T>> Extend<P> for LinearScan<T, P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.polygons.extend(iter);
    }
}
