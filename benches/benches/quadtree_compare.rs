// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Aabb2D, LinearScan, Point2D, QuadTree};

const WORLD: i32 = 1 << 12;

type Ring = Vec<Point2D<i32>>;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn below(&mut self, n: i32) -> i32 {
        (self.next_u64() % n as u64) as i32
    }
}

/// Quadrilaterals with vertices anywhere in the world; most straddle a median and stay shallow.
fn gen_scattered_quads(count: usize) -> Vec<Ring> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            (0..4)
                .map(|_| Point2D::new(rng.below(WORLD + 1), rng.below(WORLD + 1)))
                .collect()
        })
        .collect()
}

/// Small quadrilaterals around random centers; most sink deep into the tree.
fn gen_local_quads(count: usize, radius: i32) -> Vec<Ring> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            let cx = rng.below(WORLD + 1);
            let cy = rng.below(WORLD + 1);
            (0..4)
                .map(|_| {
                    let x = (cx + rng.below(2 * radius) - radius).clamp(0, WORLD);
                    let y = (cy + rng.below(2 * radius) - radius).clamp(0, WORLD);
                    Point2D::new(x, y)
                })
                .collect()
        })
        .collect()
}

fn gen_grid_squares_f64(n: usize, cell: f64) -> Vec<[Point2D<f64>; 4]> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let r = Aabb2D::<f64>::from_xywh(x as f64 * cell, y as f64 * cell, cell, cell);
            out.push([
                Point2D::new(r.min_x, r.min_y),
                Point2D::new(r.max_x, r.min_y),
                Point2D::new(r.max_x, r.max_y),
                Point2D::new(r.min_x, r.max_y),
            ]);
        }
    }
    out
}

fn gen_query_points(count: usize) -> Vec<(i32, i32)> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| (rng.below(WORLD), rng.below(WORLD)))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_build");
    for &n in &[1usize << 10, 1 << 14] {
        let scattered = gen_scattered_quads(n);
        let local = gen_local_quads(n, 16);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_scattered_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<i32, &Ring>::new().with_root(Aabb2D::new(0, 0, WORLD, WORLD)),
                |mut qt| {
                    for poly in &scattered {
                        assert!(qt.insert(poly).is_ok(), "workload polygon rejected");
                    }
                    black_box(qt.len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("insert_local_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<i32, &Ring>::new().with_root(Aabb2D::new(0, 0, WORLD, WORLD)),
                |mut qt| {
                    for poly in &local {
                        assert!(qt.insert(poly).is_ok(), "workload polygon rejected");
                    }
                    black_box(qt.node_count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_vs_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_vs_linear");
    let points = gen_query_points(4096);
    group.throughput(Throughput::Elements(points.len() as u64));
    for &n in &[1usize << 10, 1 << 12] {
        let local = gen_local_quads(n, 16);
        let mut qt = QuadTree::new().with_root(Aabb2D::new(0, 0, WORLD, WORLD));
        let mut scan = LinearScan::new();
        for poly in &local {
            assert!(qt.insert(poly).is_ok(), "workload polygon rejected");
            scan.insert(poly);
        }

        group.bench_function(format!("quadtree_local_n{}", n), |b| {
            b.iter(|| {
                let hits = points
                    .iter()
                    .filter(|&&(x, y)| qt.query_point(x, y).is_some())
                    .count();
                black_box(hits);
            })
        });
        group.bench_function(format!("linear_local_n{}", n), |b| {
            b.iter(|| {
                let hits = points
                    .iter()
                    .filter(|&&(x, y)| scan.query_point(x, y).is_some())
                    .count();
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_depth_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_depth_f64");
    let squares = gen_grid_squares_f64(64, 10.0);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let points: Vec<(f64, f64)> = (0..4096)
        .map(|_| (rng.next_f64() * 640.0, rng.next_f64() * 640.0))
        .collect();
    for &depth in &[4usize, 6, 8, 10] {
        let mut qt = QuadTree::new()
            .with_max_depth(depth)
            .with_root(Aabb2D::new(0.0, 0.0, 640.0, 640.0));
        for sq in &squares {
            assert!(qt.insert(sq).is_ok(), "grid square rejected");
        }
        group.bench_function(format!("grid_query_depth{}", depth), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for &(x, y) in &points {
                    total += qt.query_all(x, y).count();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_query_vs_linear, bench_depth_f64);
criterion_main!(benches);
