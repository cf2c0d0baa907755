// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree vs linear scan parity.
//!
//! Index random quadrilaterals, then check that the quadtree and a brute-force
//! scan agree on whether each query point is covered. Prints rough timings.
//!
//! Run:
//! - `cargo run --release -p understory_examples --example quadtree_parity`

use std::time::Instant;

use understory_quadtree::{Aabb2D, LinearScan, Point2D, Polygon, QuadTree};

const NUM_POLYGONS: usize = 1 << 14;
const NUM_QUERIES: usize = 1 << 14;
const WORLD: i32 = 1 << 12;

struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: i32) -> i32 {
        (self.next_u64() % n as u64) as i32
    }
}

fn main() {
    let mut rng = Rng(0x5EED_1234_ABCD_0042);
    let polygons: Vec<Vec<Point2D<i32>>> = (0..NUM_POLYGONS)
        .map(|_| {
            let cx = rng.below(WORLD + 1);
            let cy = rng.below(WORLD + 1);
            (0..4)
                .map(|_| {
                    let x = (cx + rng.below(64) - 32).clamp(0, WORLD);
                    let y = (cy + rng.below(64) - 32).clamp(0, WORLD);
                    Point2D::new(x, y)
                })
                .collect()
        })
        .collect();
    let points: Vec<(i32, i32)> = (0..NUM_QUERIES)
        .map(|_| (rng.below(WORLD), rng.below(WORLD)))
        .collect();

    let start = Instant::now();
    let mut qt = QuadTree::new().with_root(Aabb2D::new(0, 0, WORLD, WORLD));
    let mut rejected = 0;
    for poly in &polygons {
        if qt.insert(poly).is_err() {
            rejected += 1;
        }
    }
    println!(
        "quadtree insert: {:?} ({} nodes, {rejected} rejected)",
        start.elapsed(),
        qt.node_count()
    );

    let mut scan: LinearScan<i32, _> = LinearScan::new();
    scan.extend(&polygons);

    let start = Instant::now();
    let qt_hits: Vec<_> = points.iter().map(|&(x, y)| qt.query_point(x, y)).collect();
    println!("quadtree query: {:?}", start.elapsed());

    let start = Instant::now();
    let scan_hits: Vec<_> = points.iter().map(|&(x, y)| scan.query_point(x, y)).collect();
    println!("linear query:   {:?}", start.elapsed());

    let mut agree = 0;
    let mut disagree = 0;
    for ((&(x, y), qt_hit), scan_hit) in points.iter().zip(&qt_hits).zip(&scan_hits) {
        let qt_ok = qt_hit.is_none_or(|p| p.containment(Point2D::new(x, y)).is_hit());
        if qt_ok && qt_hit.is_some() == scan_hit.is_some() {
            agree += 1;
        } else {
            disagree += 1;
        }
    }
    println!("agree: {agree}, disagree: {disagree}");
}
