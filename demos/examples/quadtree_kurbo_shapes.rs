// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree with Kurbo shapes.
//!
//! Flatten a few Kurbo shapes into polygons, index them, and hit-test points.
//!
//! Run:
//! - `cargo run -p understory_examples --example quadtree_kurbo_shapes`

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use understory_quadtree::{Point2D, QuadTree, polygon_from_path};

const TOLERANCE: f64 = 0.1;

fn main() {
    let mut triangle = BezPath::new();
    triangle.move_to((300.0, 40.0));
    triangle.line_to((380.0, 180.0));
    triangle.line_to((220.0, 180.0));
    triangle.close_path();

    let shapes = [
        ("card", Rect::new(20.0, 20.0, 120.0, 80.0).to_path(TOLERANCE)),
        ("disk", Circle::new((200.0, 300.0), 40.0).to_path(TOLERANCE)),
        ("triangle", triangle),
        // Spans the center of the root, so it stays in the root bucket.
        ("banner", Rect::new(150.0, 230.0, 350.0, 270.0).to_path(TOLERANCE)),
    ];
    let polygons: Vec<(&str, Vec<Point2D<f64>>)> = shapes
        .iter()
        .map(|(name, path)| (*name, polygon_from_path(path, TOLERANCE)))
        .collect();

    let mut qt: QuadTree<f64, _> =
        QuadTree::new().with_root(Rect::new(0.0, 0.0, 400.0, 400.0).into());
    for (name, poly) in &polygons {
        match qt.insert(poly) {
            Ok(level) => println!("{name}: {} vertices, stored at level {level}", poly.len()),
            Err(err) => println!("{name}: rejected ({err})"),
        }
    }
    println!("{qt:?}");

    let probes = [
        Point::new(50.0, 50.0),
        Point::new(200.0, 300.0),
        Point::new(300.0, 120.0),
        Point::new(200.0, 250.0),
        Point::new(390.0, 390.0),
    ];
    for probe in probes {
        let name = qt
            .query_point(probe.x, probe.y)
            .and_then(|hit| polygons.iter().find(|(_, p)| std::ptr::eq(p, *hit)))
            .map_or("nothing", |(name, _)| *name);
        let visited = qt.path(probe.x, probe.y).count();
        println!("{probe:?} -> {name} (visited {visited} nodes)");
    }
}
