// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a bounded-depth region quadtree for point-in-polygon lookups.
//!
//! Understory Quadtree answers "which polygon, if any, contains this point?" over a
//! static set of simple polygons that is built once and queried many times.
//!
//! - Fix the universe rectangle with [`QuadTree::set_root`].
//! - [`QuadTree::insert`] pushes each polygon down while all of its vertices fall in a
//!   single quadrant, and stores it at the node where it straddles a median line.
//! - [`QuadTree::query_point`] follows the quadrants containing the point and runs an exact
//!   containment test against the polygons stored along that path.
//!
//! The tree stores polygon *handles* (anything implementing [`Polygon`]), never geometry.
//! It is generic over the scalar type `T` (`i32`, `i64`, `f32`, `f64`).
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Aabb2D, Point2D, QuadTree};
//!
//! let square = [
//!     Point2D::new(10, 10),
//!     Point2D::new(20, 10),
//!     Point2D::new(20, 20),
//!     Point2D::new(10, 20),
//! ];
//!
//! let mut qt = QuadTree::new();
//! qt.set_root(Aabb2D::new(0, 0, 100, 100));
//! qt.insert(&square).unwrap();
//!
//! assert!(qt.query_point(15, 15).is_some());
//! assert!(qt.query_point(30, 30).is_none());
//! ```
//!
//! ## Placement rules
//!
//! - The median of a cell is `(top_left + bottom_right) / 2`; integer scalars truncate.
//! - A point on a median line belongs to the right or bottom quadrant.
//! - A polygon with any vertex outside the root is rejected with [`InsertError::OutOfBounds`]
//!   and nothing is stored.
//! - The tree never grows beyond [`QuadTree::max_depth`] levels (root included,
//!   [`DEFAULT_MAX_DEPTH`] by default) and never rebalances.
//!
//! ## Queries
//!
//! - [`QuadTree::query_point`]: the first containing polygon, boundary included.
//! - [`QuadTree::query_bucket`]: the whole bucket of the first node with a containing polygon.
//! - [`QuadTree::query_all`]: every containing polygon on the path.
//!
//! [`LinearScan`] offers the same shape as a brute-force baseline.
//!
//! ## Features
//!
//! - `kurbo`: conversions from Kurbo points and rects, and `polygon_from_path` to turn a
//!   `BezPath` into a vertex ring. Requires `std` (default) or `libm`.
//!
//! ### Float semantics
//!
//! NaN coordinates are never inside any cell, so a polygon with a NaN vertex is rejected
//! and a NaN query point matches nothing.

#![no_std]

extern crate alloc;

#[cfg(feature = "kurbo")]
mod kurbo_interop;
pub mod linear;
pub mod node;
pub mod polygon;
pub mod tree;
pub mod types;

#[cfg(feature = "kurbo")]
pub use kurbo_interop::polygon_from_path;
pub use linear::LinearScan;
pub use node::RegionNode;
pub use polygon::{Containment, Polygon, point_in_polygon};
pub use tree::{DEFAULT_MAX_DEPTH, InsertError, QuadTree};
pub use types::{Aabb2D, Point2D, Quadrant, Scalar};
