//! # Carousel Tick Benchmark
//!
//! The per-frame path must stay allocation-free: snap easing, fold advance
//! and the wrap check.
//!
//! Run with: `cargo bench --package cardreel_ui`

// Benchmarks don't need docs
#![allow(missing_docs)]

use cardreel_cards::{AppearanceManifest, AppearanceRegistry, Hand};
use cardreel_ui::{CardCarousel, CarouselConfig, InertialScroll, PanelGeometry, Rect, ScrollSurface};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const DT: f32 = 1.0 / 60.0;

fn carousel() -> CardCarousel<InertialScroll> {
    let registry = AppearanceRegistry::from_manifest(&AppearanceManifest::conventional("bench"))
        .expect("conventional manifest");
    let hand = Hand::starting(&registry).expect("starting hand");
    CardCarousel::new(
        CarouselConfig::default(),
        InertialScroll::new(),
        &hand,
        PanelGeometry::new(740.0, 900.0),
    )
    .expect("carousel")
}

/// Benchmark: snap easing from a quarter step away.
fn bench_snap_tick(c: &mut Criterion) {
    let mut carousel = carousel();
    c.bench_function("snap_tick", |b| {
        b.iter(|| {
            carousel.surface_mut().set_offset(46.0);
            carousel.on_end_drag();
            carousel.tick(black_box(DT));
            black_box(carousel.offset())
        });
    });
}

/// Benchmark: wheel step followed by a wrap check.
fn bench_wheel_and_wrap(c: &mut Criterion) {
    let mut carousel = carousel();
    let viewport = Rect::centered(0.0, 0.0, 1200.0, 300.0);
    c.bench_function("wheel_and_wrap", |b| {
        b.iter(|| {
            carousel.on_scroll(black_box((0.0, -1.0)));
            black_box(carousel.handle_infinite_scrolling(&viewport))
        });
    });
}

criterion_group!(benches, bench_snap_tick, bench_wheel_and_wrap);
criterion_main!(benches);
