// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Quadtree: set the root, insert polygons, and query points.

use understory_quadtree::{Aabb2D, Point2D, QuadTree};

fn main() {
    let left = vec![
        Point2D::new(10, 10),
        Point2D::new(20, 10),
        Point2D::new(20, 20),
        Point2D::new(10, 20),
    ];
    let right = vec![
        Point2D::new(60, 60),
        Point2D::new(70, 60),
        Point2D::new(70, 70),
        Point2D::new(60, 70),
    ];
    let outside = vec![
        Point2D::new(90, 90),
        Point2D::new(110, 90),
        Point2D::new(90, 110),
    ];

    let mut qt = QuadTree::new();
    qt.set_root(Aabb2D::new(0, 0, 100, 100));
    for (name, poly) in [("left", &left), ("right", &right), ("outside", &outside)] {
        match qt.insert(poly) {
            Ok(level) => println!("{name}: stored at level {level}"),
            Err(err) => println!("{name}: rejected ({err})"),
        }
    }
    println!("{qt:?}");

    // Query a few points
    for (x, y) in [(15, 15), (65, 65), (30, 30)] {
        let hit = qt.query_point(x, y).map(|p| p.len());
        let visited = qt.path(x, y).count();
        println!("({x}, {y}): hit vertices={hit:?}, visited nodes={visited}");
    }
}
