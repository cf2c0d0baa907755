// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bounded-depth quadtree: insertion placement and point queries.

use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};

use crate::node::RegionNode;
use crate::polygon::Polygon;
use crate::types::{Aabb2D, Point2D, Quadrant, Scalar};

/// Number of levels a tree uses unless configured otherwise.
///
/// The count includes the root, so polygons are stored at levels `0..=5` and every
/// query visits at most six nodes. A tree that instead counted descents below
/// the root would place its deepest polygons one level further down.
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Why [`QuadTree::insert`] refused a polygon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InsertError {
    /// [`QuadTree::set_root`] has not been called yet.
    NoRoot,
    /// The polygon has no vertices.
    EmptyPolygon,
    /// A vertex lies outside the cell evaluated at `level` (0 is the root).
    OutOfBounds {
        /// Level of the cell that rejected the vertex.
        level: usize,
    },
}

impl Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRoot => f.write_str("quadtree has no root region"),
            Self::EmptyPolygon => f.write_str("polygon has no vertices"),
            Self::OutOfBounds { level } => {
                write!(f, "polygon vertex outside the region at level {level}")
            }
        }
    }
}

impl core::error::Error for InsertError {}

/// A region quadtree answering "which polygon contains this point?".
///
/// Polygons are pushed down from the root while all their vertices fall into a
/// single quadrant, and stored at the first node where they straddle a median
/// line (or at the deepest level). Queries follow the single path of quadrants
/// containing the point and test the buckets met along the way.
///
/// The tree holds polygon handles `P`, never geometry; see [`Polygon`].
pub struct QuadTree<T: Scalar, P> {
    root: Option<RegionNode<T, P>>,
    max_depth: usize,
    len: usize,
}

impl<T: Scalar, P> QuadTree<T, P> {
    /// Create a tree without a root and with [`DEFAULT_MAX_DEPTH`] levels.
    pub fn new() -> Self {
        Self {
            root: None,
            max_depth: DEFAULT_MAX_DEPTH,
            len: 0,
        }
    }

    /// Set the number of levels, root included. Zero is treated as one.
    ///
    /// Only affects future insertions and queries; call it before inserting.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Shorthand for [`set_root`](Self::set_root) on a fresh tree.
    pub fn with_root(mut self, bounds: Aabb2D<T>) -> Self {
        self.set_root(bounds);
        self
    }

    /// Replace the whole tree with an empty root covering `bounds`.
    ///
    /// All previously inserted polygons are dropped.
    pub fn set_root(&mut self, bounds: Aabb2D<T>) {
        debug_assert!(!bounds.is_empty(), "root bounds must not be inverted");
        self.root = Some(RegionNode::new(bounds));
        self.len = 0;
    }

    /// The universe rectangle, if a root has been set.
    pub fn bounds(&self) -> Option<Aabb2D<T>> {
        self.root.as_ref().map(RegionNode::bounds)
    }

    /// The root node, if one has been set.
    pub fn root(&self) -> Option<&RegionNode<T, P>> {
        self.root.as_ref()
    }

    /// Number of levels, root included.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of stored polygons.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no polygon is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, RegionNode::node_count)
    }

    /// The nodes a query at `(x, y)` visits, root first.
    ///
    /// Stops at a point outside the current cell, at a missing child, or after
    /// [`max_depth`](Self::max_depth) nodes.
    pub fn path(&self, x: T, y: T) -> impl Iterator<Item = &RegionNode<T, P>> + '_ {
        Path {
            node: self.root.as_ref(),
            point: Point2D::new(x, y),
            remaining: self.max_depth,
        }
    }
}

impl<T: Scalar, P: Polygon<T>> QuadTree<T, P> {
    /// Insert a polygon handle. Returns the level (0 is the root) it was stored at.
    ///
    /// A polygon with any vertex outside the root bounds is rejected as a whole;
    /// a rejected insert leaves the tree untouched.
    ///
    /// # Errors
    ///
    /// See [`InsertError`].
    pub fn insert(&mut self, polygon: P) -> Result<usize, InsertError> {
        let root = self.root.as_mut().ok_or(InsertError::NoRoot)?;
        let vertices = polygon.vertices();
        if vertices.is_empty() {
            return Err(InsertError::EmptyPolygon);
        }

        // Resolve the descent on rectangles first so that rejection never
        // leaves freshly allocated children behind.
        let mut path = Vec::new();
        let mut cell = root.bounds();
        for level in 0..self.max_depth {
            let q = common_quadrant(cell, vertices).ok_or(InsertError::OutOfBounds { level })?;
            match q {
                Some(q) if level + 1 < self.max_depth => {
                    path.push(q);
                    cell = cell.quadrant(q);
                }
                _ => break,
            }
        }

        let mut node = root;
        for &q in &path {
            node = node.child_or_insert(q);
        }
        node.add(polygon);
        self.len += 1;
        Ok(path.len())
    }

    /// The first polygon containing `(x, y)`, boundary included.
    ///
    /// Buckets are tested root first, each in insertion order.
    pub fn query_point(&self, x: T, y: T) -> Option<&P> {
        let p = Point2D::new(x, y);
        self.path(x, y)
            .flat_map(RegionNode::polygons)
            .find(|poly| poly.containment(p).is_hit())
    }

    /// The whole bucket of the shallowest node holding a polygon that contains `(x, y)`.
    ///
    /// Returns `None` when no polygon on the query path contains the point.
    pub fn query_bucket(&self, x: T, y: T) -> Option<&[P]> {
        let p = Point2D::new(x, y);
        self.path(x, y)
            .find(|node| {
                node.polygons()
                    .iter()
                    .any(|poly| poly.containment(p).is_hit())
            })
            .map(RegionNode::polygons)
    }

    /// Every polygon containing `(x, y)`, shallowest first.
    pub fn query_all(&self, x: T, y: T) -> impl Iterator<Item = &P> + '_ {
        let p = Point2D::new(x, y);
        self.path(x, y)
            .flat_map(RegionNode::polygons)
            .filter(move |poly| poly.containment(p).is_hit())
    }
}

/// The quadrant shared by every vertex.
///
/// `None` if any vertex lies outside `cell`; `Some(None)` if the vertices
/// straddle more than one quadrant.
fn common_quadrant<T: Scalar>(
    cell: Aabb2D<T>,
    vertices: &[Point2D<T>],
) -> Option<Option<Quadrant>> {
    let mut common = None;
    let mut straddles = false;
    for &v in vertices {
        let q = cell.classify(v)?;
        match common {
            None => common = Some(q),
            Some(c) if c != q => straddles = true,
            Some(_) => {}
        }
    }
    Some(if straddles { None } else { common })
}

struct Path<'a, T: Scalar, P> {
    node: Option<&'a RegionNode<T, P>>,
    point: Point2D<T>,
    remaining: usize,
}

impl<'a, T: Scalar, P> Iterator for Path<'a, T, P> {
    type Item = &'a RegionNode<T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.node.take()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.node = node.quadrant_of(self.point).and_then(|q| node.child(q));
        }
        Some(node)
    }
}

impl<T: Scalar, P> Default for QuadTree<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, P> Debug for QuadTree<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds())
            .field("max_depth", &self.max_depth)
            .field("polygons", &self.len)
            .field("nodes", &self.node_count())
            .finish()
    }
}
