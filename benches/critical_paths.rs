//! Criterion benchmarks for Traitforge critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Ordering: trait sorting with priority and special rules
//! - Compositing: alpha blending layers onto a canvas
//! - Glitch: channel-shifted frame generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::{Rgba, RgbaImage};
use std::collections::HashMap;
use traitforge::assembler::composite_over;
use traitforge::config::SpecialRule;
use traitforge::glitch::glitch_frames;
use traitforge::models::Trait;
use traitforge::ordering::order_traits;

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generate a trait list cycling through 16 trait types
fn make_traits(n: usize) -> Vec<Trait> {
    (0..n)
        .map(|i| Trait::new(format!("type_{}", i % 16), format!("value_{}", i)))
        .collect()
}

/// Generate order rules ranking the first `n` trait types
fn make_order_rules(n: usize) -> HashMap<String, i64> {
    (0..n).map(|i| (format!("type_{}", i), i as i64)).collect()
}

/// Generate a few exact-match exceptions
fn make_special_rules() -> Vec<SpecialRule> {
    (0..4)
        .map(|i| SpecialRule {
            trait_type: format!("type_{}", i),
            value: format!("value_{}", i),
            priority: 99 + i as i64,
        })
        .collect()
}

/// Solid canvas at the given size
fn make_canvas(size: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(size, size, color)
}

// =============================================================================
// Ordering Benchmarks
// =============================================================================

fn bench_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordering");

    let order_rules = make_order_rules(16);
    let special_rules = make_special_rules();

    for count in [8, 32, 128, 512].iter() {
        let traits = make_traits(*count);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("order_traits", count), &traits, |b, traits| {
            b.iter(|| order_traits(black_box(traits), black_box(&order_rules), black_box(&special_rules)))
        });
    }

    group.finish();
}

// =============================================================================
// Compositing Benchmarks
// =============================================================================

fn bench_compositing(c: &mut Criterion) {
    let mut group = c.benchmark_group("compositing");

    for size in [64, 128, 256].iter() {
        // opaque layers take the overwrite fast path
        let opaque = make_canvas(*size, Rgba([200, 40, 40, 255]));
        group.throughput(Throughput::Elements((*size as u64) * (*size as u64)));
        group.bench_with_input(
            BenchmarkId::new("composite_opaque", format!("{}x{}", size, size)),
            &opaque,
            |b, layer| {
                b.iter(|| {
                    let mut canvas = make_canvas(layer.width(), Rgba([0, 0, 255, 255]));
                    composite_over(black_box(&mut canvas), black_box(layer));
                    canvas
                })
            },
        );

        // partial alpha forces per-pixel blending
        let translucent = make_canvas(*size, Rgba([200, 40, 40, 128]));
        group.bench_with_input(
            BenchmarkId::new("composite_blend", format!("{}x{}", size, size)),
            &translucent,
            |b, layer| {
                b.iter(|| {
                    let mut canvas = make_canvas(layer.width(), Rgba([0, 0, 255, 255]));
                    composite_over(black_box(&mut canvas), black_box(layer));
                    canvas
                })
            },
        );
    }

    group.finish();
}

// =============================================================================
// Glitch Benchmarks
// =============================================================================

fn bench_glitch(c: &mut Criterion) {
    let mut group = c.benchmark_group("glitch");

    for size in [64, 128, 256].iter() {
        let mut source = make_canvas(*size, Rgba([40, 90, 160, 255]));
        source.put_pixel(size / 2, size / 2, Rgba([250, 10, 10, 255]));

        group.throughput(Throughput::Elements((*size as u64) * (*size as u64)));
        group.bench_with_input(
            BenchmarkId::new("glitch_frame", format!("{}x{}", size, size)),
            &source,
            |b, source| b.iter(|| glitch_frames(black_box(source), 1, 5, 0.5, 42)),
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_ordering, bench_compositing, bench_glitch);

criterion_main!(benches);
