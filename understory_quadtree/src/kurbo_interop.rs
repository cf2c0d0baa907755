// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions from [`kurbo`] geometry.

use alloc::vec::Vec;

use kurbo::{BezPath, PathEl, Point, Rect};

use crate::types::{Aabb2D, Point2D};

impl From<Point> for Point2D<f64> {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2D<f64>> for Point {
    fn from(p: Point2D<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Rect> for Aabb2D<f64> {
    fn from(r: Rect) -> Self {
        // Normalize so the min corner is always top-left.
        let r = r.abs();
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

/// Flatten the first subpath of `path` into a vertex ring.
///
/// Curves are approximated by line segments within `tolerance`. The ring is
/// implicitly closed, so a final vertex repeating the first is dropped.
pub fn polygon_from_path(path: &BezPath, tolerance: f64) -> Vec<Point2D<f64>> {
    let mut ring: Vec<Point2D<f64>> = Vec::new();
    let mut done = false;
    kurbo::flatten(path, tolerance, |el| {
        if done {
            return;
        }
        match el {
            PathEl::MoveTo(p) => {
                if ring.is_empty() {
                    ring.push(p.into());
                } else {
                    done = true;
                }
            }
            PathEl::LineTo(p) => ring.push(p.into()),
            PathEl::ClosePath => done = true,
            // `flatten` only emits lines.
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        }
    });
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}
