use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::DVec2;
use liftoff_physics::*;

const DT: f64 = 1.0 / 60.0;

fn climbing_scenario() -> Scenario {
    let mut scenario = Scenario::earth_moon(presets::falcon_9(), FlightTuning::default())
        .expect("preset scenario is valid");
    scenario.vehicle.throttle_max();
    scenario
}

fn bench_single_tick(c: &mut Criterion) {
    let scenario = climbing_scenario();
    c.bench_function("vehicle_tick", |bencher| {
        bencher.iter_batched(
            || scenario.clone(),
            |mut s| black_box(s.vehicle.tick(&s.bodies, DT, 1.0)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_one_second_of_flight(c: &mut Criterion) {
    let scenario = climbing_scenario();
    c.bench_function("vehicle_tick_60", |bencher| {
        bencher.iter_batched(
            || scenario.clone(),
            |mut s| {
                for _ in 0..60 {
                    s.vehicle.tick(&s.bodies, DT, 1.0);
                }
                black_box(s.vehicle.center())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_gravity_sum(c: &mut Criterion) {
    let bodies: Vec<CelestialBody> = presets::earth_moon()
        .into_iter()
        .map(|spec| CelestialBody::new(spec).expect("preset body is valid"))
        .collect();
    let point = black_box(DVec2::new(1_234.0, -45_678.0));
    c.bench_function("gravity_sum_earth_moon", |bencher| {
        bencher.iter(|| {
            let total: DVec2 = bodies
                .iter()
                .map(|b| b.gravitational_acceleration(point, false))
                .sum();
            black_box(total)
        })
    });
}

fn bench_telemetry_snapshot(c: &mut Criterion) {
    let scenario = climbing_scenario();
    c.bench_function("telemetry_snapshot", |bencher| {
        bencher.iter(|| black_box(scenario.vehicle.telemetry(&scenario.bodies)))
    });
}

criterion_group!(
    benches,
    bench_single_tick,
    bench_one_second_of_flight,
    bench_gravity_sum,
    bench_telemetry_snapshot,
);
criterion_main!(benches);
