// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use sapling_heap_tree::{HeapTree, NodeId, ParseOptions, Value, parse_values};
use sapling_layout::{LayoutParams, ViewportLayout, layout};
use sapling_surface::{HitParams, RecordingCanvas, Style, find_path, node_circle, render};

const SIZES: [usize; 3] = [15, 1_023, 65_535];
const RADIUS: f64 = 20.0;

fn gen_values(n: usize) -> Vec<Value> {
    (0..n)
        .filter_map(|i| u32::try_from(i % 997 + 1).ok().and_then(Value::new))
        .collect()
}

fn gen_input(n: usize) -> String {
    gen_values(n)
        .iter()
        .map(|v| v.get().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn params() -> LayoutParams {
    ViewportLayout::default().params_for(Size::new(1920.0, 1080.0), RADIUS)
}

fn laid_out(n: usize) -> HeapTree {
    let mut tree = HeapTree::from_values(&gen_values(n));
    layout(&mut tree, &params());
    tree
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_values");
    for n in SIZES {
        let input = gen_input(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| parse_values(black_box(&input), &ParseOptions::default()));
        });
    }
    group.finish();
}

fn bench_build_and_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_layout");
    for n in SIZES {
        let values = gen_values(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("build n={n}"), |b| {
            b.iter(|| HeapTree::from_values(black_box(&values)));
        });
        group.bench_function(format!("layout n={n}"), |b| {
            b.iter_batched(
                || HeapTree::from_values(&values),
                |mut tree| {
                    layout(&mut tree, &params());
                    tree
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let style = Style::default();
    for n in SIZES {
        let tree = laid_out(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            b.iter_batched(
                || RecordingCanvas::new(Size::new(1920.0, 1080.0)),
                |mut canvas| {
                    render(&mut canvas, black_box(&tree), &style);
                    canvas
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_find_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path");
    for n in SIZES {
        let tree = laid_out(n);
        let last = NodeId::from_index(n - 1);
        let deepest = node_circle(tree.anchor(last).unwrap_or_default(), RADIUS).center;
        group.bench_function(format!("deepest n={n}"), |b| {
            b.iter(|| find_path(&tree, black_box(deepest), RADIUS, &HitParams::default()));
        });
        group.bench_function(format!("miss n={n}"), |b| {
            b.iter(|| {
                find_path(
                    &tree,
                    black_box(Point::new(-1_000.0, -1_000.0)),
                    RADIUS,
                    &HitParams::default(),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_build_and_layout,
    bench_render,
    bench_find_path
);
criterion_main!(benches);
