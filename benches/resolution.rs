//! Benchmarks for symbol resolution performance
//!
//! This benchmark measures:
//! - Cold resolution (first access, provider load included)
//! - Hot resolution (resolution cache hit)
//! - Surface enumeration

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazy_surface::provider::from_fn;
use lazy_surface::{ProviderExports, Surface, SurfaceBuilder};

fn build_surface(symbols_per_provider: usize) -> Surface {
    let mut builder = SurfaceBuilder::new("bench.core");
    for p in 0..8 {
        let id = format!("bench.provider{p}");
        builder = builder.provider(
            id.clone(),
            from_fn(move || {
                let mut exports = ProviderExports::new();
                for s in 0..64 {
                    exports = exports.export(format!("Symbol{s}"), s as u64);
                }
                Ok(exports)
            }),
        );
        for s in 0..symbols_per_provider {
            builder = builder.symbol(format!("P{p}Symbol{s}"), id.clone(), format!("Symbol{s}"));
        }
    }
    builder.build().expect("bench surface")
}

fn bench_cold_resolution(c: &mut Criterion) {
    c.bench_function("resolve_cold", |b| {
        b.iter_with_setup(
            || build_surface(16),
            |surface| {
                black_box(surface.resolve("P0Symbol0").unwrap());
            },
        )
    });
}

fn bench_hot_resolution(c: &mut Criterion) {
    let surface = build_surface(16);
    surface.resolve("P0Symbol0").unwrap();
    c.bench_function("resolve_hot", |b| {
        b.iter(|| black_box(surface.resolve("P0Symbol0").unwrap()))
    });
}

fn bench_enumeration(c: &mut Criterion) {
    let surface = build_surface(16);
    c.bench_function("list_names", |b| b.iter(|| black_box(surface.list_names())));
}

criterion_group!(
    benches,
    bench_cold_resolution,
    bench_hot_resolution,
    bench_enumeration
);
criterion_main!(benches);
