use axis_plan::api::{AxisConfigResolver, AxisOrientation, AxisSpec, ScaleSpec};
use axis_plan::core::{AxisDimension, DomainValue};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_linear_axis_resolve(c: &mut Criterion) {
    let resolver = AxisConfigResolver::default();
    let axis = AxisSpec::new(AxisOrientation::Bottom).with_tick_total(20);
    let scale = ScaleSpec::linear(AxisDimension::X, (-1_234.5, 98_765.4), (0.0, 1920.0));

    c.bench_function("linear_axis_resolve_20_ticks", |b| {
        b.iter(|| {
            let _ = resolver
                .resolve(black_box(&axis), black_box(&scale))
                .expect("resolve linear axis");
        })
    });
}

fn bench_time_axis_resolve(c: &mut Criterion) {
    let resolver = AxisConfigResolver::default();
    let axis = AxisSpec::new(AxisOrientation::Bottom).with_tick_total(12);
    let scale = ScaleSpec::time(
        AxisDimension::X,
        (
            DomainValue::from_timestamp_millis(1_600_000_000_000).expect("start"),
            DomainValue::from_timestamp_millis(1_700_000_000_000).expect("end"),
        ),
        (0.0, 1920.0),
    );

    c.bench_function("time_axis_resolve_12_ticks", |b| {
        b.iter(|| {
            let _ = resolver
                .resolve(black_box(&axis), black_box(&scale))
                .expect("resolve time axis");
        })
    });
}

fn bench_ordinal_axis_resolve_300(c: &mut Criterion) {
    let resolver = AxisConfigResolver::default();
    let axis = AxisSpec::new(AxisOrientation::Bottom);
    let categories: Vec<String> = (0..300).map(|index| format!("category-{index}")).collect();
    let scale = ScaleSpec::ordinal(AxisDimension::X, categories, (0.0, 1920.0));

    c.bench_function("ordinal_axis_resolve_300_categories", |b| {
        b.iter(|| {
            let _ = resolver
                .resolve(black_box(&axis), black_box(&scale))
                .expect("resolve ordinal axis");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_axis_resolve,
    bench_time_axis_resolve,
    bench_ordinal_axis_resolve_300
);
criterion_main!(benches);
