// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Aabb2D, Point2D, Polygon, QuadTree};

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB, RTree};

const WORLD: i32 = 1 << 12;

type Ring = Vec<Point2D<i32>>;
type Envelope = GeomWithData<Rectangle<[i32; 2]>, usize>;

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
    fn below(&mut self, n: i32) -> i32 {
        (self.next_u64() % n as u64) as i32
    }
}

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

/// Bounding box of each polygon tagged with its position in `polys`.
fn to_rstar_envelopes(polys: &[Ring]) -> Vec<Envelope> {
    polys
        .iter()
        .enumerate()
        .map(|(i, poly)| {
            let min = poly
                .iter()
                .fold([i32::MAX, i32::MAX], |m, p| [m[0].min(p.x), m[1].min(p.y)]);
            let max = poly
                .iter()
                .fold([i32::MIN, i32::MIN], |m, p| [m[0].max(p.x), m[1].max(p.y)]);
            GeomWithData::new(Rectangle::from_corners(min, max), i)
        })
        .collect()
}

/// Envelope lookup in the R-tree, then the exact containment test on each candidate.
fn rstar_query_point<'a>(
    tree: &RTree<Envelope>,
    polys: &'a [Ring],
    x: i32,
    y: i32,
) -> Option<&'a Ring> {
    let p = Point2D::new(x, y);
    tree.locate_in_envelope_intersecting(&AABB::from_point([x, y]))
        .map(|env| &polys[env.data])
        .find(|poly| poly.containment(p).is_hit())
}

fn bench_rtree_external_compare_i32(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_i32");
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let points: Vec<(i32, i32)> = (0..4096)
        .map(|_| (rng.below(WORLD), rng.below(WORLD)))
        .collect();
    for &n in &[1usize << 12, 1 << 14] {
        let polys = gen_local_quads(n, 16);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("quadtree_build_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<i32, &Ring>::new().with_root(Aabb2D::new(0, 0, WORLD, WORLD)),
                |mut qt| {
                    for poly in &polys {
                        assert!(qt.insert(poly).is_ok(), "workload polygon rejected");
                    }
                    black_box(qt.len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_envelopes(&polys),
                |envelopes| {
                    let tree = RTree::bulk_load(envelopes);
                    black_box(tree.size());
                },
                BatchSize::SmallInput,
            )
        });

        let mut qt = QuadTree::new().with_root(Aabb2D::new(0, 0, WORLD, WORLD));
        for poly in &polys {
            assert!(qt.insert(poly).is_ok(), "workload polygon rejected");
        }
        let tree = RTree::bulk_load(to_rstar_envelopes(&polys));

        group.bench_function(format!("quadtree_query_n{}", n), |b| {
            b.iter(|| {
                let hits = points
                    .iter()
                    .filter(|&&(x, y)| qt.query_point(x, y).is_some())
                    .count();
                black_box(hits);
            })
        });

        group.bench_function(format!("rstar_query_n{}", n), |b| {
            b.iter(|| {
                let hits = points
                    .iter()
                    .filter(|&&(x, y)| rstar_query_point(&tree, &polys, x, y).is_some())
                    .count();
                black_box(hits);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare_i32);
criterion_main!(benches);
