// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region nodes: one rectangular cell of the quadtree.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::{Aabb2D, Point2D, Quadrant, Scalar};

/// A rectangular cell with up to four lazily created children and a bucket of
/// polygons that terminate at this level.
///
/// Polygons land in a node's bucket when their vertices straddle more than one
/// of its quadrants, or when the node sits at the tree's maximum depth.
pub struct RegionNode<T: Scalar, P> {
    bounds: Aabb2D<T>,
    children: [Option<Box<Self>>; 4],
    polygons: Vec<P>,
}

impl<T: Scalar, P> RegionNode<T, P> {
    pub(crate) fn new(bounds: Aabb2D<T>) -> Self {
        Self {
            bounds,
            children: [None, None, None, None],
            polygons: Vec::new(),
        }
    }

    /// The cell covered by this node, inclusive on every side.
    pub fn bounds(&self) -> Aabb2D<T> {
        self.bounds
    }

    /// The split point between the four quadrants.
    pub fn median(&self) -> Point2D<T> {
        self.bounds.median()
    }

    /// Classify a point into a quadrant of this node, or `None` if it lies outside.
    ///
    /// See [`Aabb2D::classify`] for the tie-break on the median lines.
    pub fn quadrant_of(&self, p: Point2D<T>) -> Option<Quadrant> {
        self.bounds.classify(p)
    }

    /// The cell a child in quadrant `q` covers (whether or not that child exists).
    pub fn quadrant_bounds(&self, q: Quadrant) -> Aabb2D<T> {
        self.bounds.quadrant(q)
    }

    /// The child in quadrant `q`, if one has been created.
    pub fn child(&self, q: Quadrant) -> Option<&Self> {
        self.children[q.index()].as_deref()
    }

    /// Iterate over the existing children with their quadrants.
    pub fn children(&self) -> impl Iterator<Item = (Quadrant, &Self)> + '_ {
        Quadrant::ALL
            .into_iter()
            .filter_map(|q| self.child(q).map(|c| (q, c)))
    }

    /// Polygons stored directly at this node, in insertion order.
    pub fn polygons(&self) -> &[P] {
        &self.polygons
    }

    /// True if no polygons are stored directly at this node.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(|c| c.node_count())
            .sum::<usize>()
    }

    pub(crate) fn add(&mut self, polygon: P) {
        self.polygons.push(polygon);
    }

    /// The child in quadrant `q`, created on first use.
    pub(crate) fn child_or_insert(&mut self, q: Quadrant) -> &mut Self {
        let bounds = self.bounds.quadrant(q);
        self.children[q.index()].get_or_insert_with(|| Box::new(Self::new(bounds)))
    }
}

impl<T: Scalar, P> Debug for RegionNode<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let children = self.children.iter().filter(|c| c.is_some()).count();
        f.debug_struct("RegionNode")
            .field("bounds", &self.bounds)
            .field("polygons", &self.polygons.len())
            .field("children", &children)
            .finish_non_exhaustive()
    }
}
