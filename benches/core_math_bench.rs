use criterion::{Criterion, criterion_group, criterion_main};
use scaling_range::api::{ScaleRequest, ScalingEngine, ScalingEngineConfig};
use scaling_range::core::{AxisTriple, linear_map, scale};
use std::hint::black_box;

fn bench_linear_map_round_trip(c: &mut Criterion) {
    c.bench_function("linear_map_round_trip", |b| {
        b.iter(|| {
            let mapped = linear_map(black_box(4_321.123), 0.0, 10_000.0, -5.0, 5.0)
                .expect("forward");
            let _ = linear_map(mapped, -5.0, 5.0, 0.0, 10_000.0).expect("back");
        })
    });
}

fn bench_scale_hex_z(c: &mut Criterion) {
    let ranges = AxisTriple::new(("0", "10"), ("0", "100"), ("0", "4096"));

    c.bench_function("scale_x_driven_hex_z", |b| {
        b.iter(|| {
            let _ = scale(
                black_box(AxisTriple::new("7.25", "", "")),
                black_box(ranges),
                "x",
                true,
            )
            .expect("scale should succeed");
        })
    });
}

fn bench_engine_json_request(c: &mut Criterion) {
    let engine = ScalingEngine::new(ScalingEngineConfig::default()).expect("engine init");
    let request = ScaleRequest::new("y", ("", "42", ""))
        .with_ranges(("0", "10"), ("0", "100"), ("0", "50"));
    let body = serde_json::to_string(&request).expect("request json");

    c.bench_function("engine_handle_scale_json", |b| {
        b.iter(|| {
            let reply = engine.handle_scale_json(black_box(&body));
            assert_eq!(reply.status, 200);
        })
    });
}

criterion_group!(
    benches,
    bench_linear_map_round_trip,
    bench_scale_hex_z,
    bench_engine_json_request
);
criterion_main!(benches);
