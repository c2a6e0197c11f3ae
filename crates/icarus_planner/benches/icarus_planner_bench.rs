use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use icarus_planner::payload::SolverPayload;
use icarus_planner::plan::{city::City, route::Route};

fn grid_cities(side: usize) -> Vec<City> {
    (0..side * side)
        .map(|i| {
            City::new(
                (i + 1).to_string(),
                format!("CITY{i}"),
                (i % side) as f64,
                (i / side) as f64,
            )
        })
        .collect()
}

fn generation_benchmark(c: &mut Criterion) {
    let cities = grid_cities(6);

    c.bench_function("generate routes 36 cities", |b| {
        b.iter(|| Route::generate_all(black_box(&cities)))
    });
}

fn payload_benchmark(c: &mut Criterion) {
    let cities = grid_cities(6);
    let mut routes = Route::generate_all(&cities);
    for (i, route) in routes.iter_mut().enumerate() {
        route.set_ticket_price((i % 250) as f64);
        route.set_passengers((i % 180) as u32);
    }

    c.bench_function("format payload 36 cities", |b| {
        b.iter(|| SolverPayload::from_plan(black_box(&cities), black_box(&routes)))
    });

    let payload = SolverPayload::from_plan(&cities, &routes);
    c.bench_function("serialize payload 36 cities", |b| {
        b.iter(|| serde_json::to_string(black_box(&payload)).unwrap())
    });
}

criterion_group!(benches, generation_benchmark, payload_benchmark);
criterion_main!(benches);
