//! Benchmarks for geo crate distance calculations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marketplace_geo::{annotate_listings, extract_coordinates, haversine_distance, Coordinate, Listing};
use serde_json::json;

fn create_test_listings(count: usize) -> Vec<Listing> {
    (0..count)
        .map(|i| {
            // Generate sellers in a grid around Bengaluru, alternating shapes
            let lat = 12.5 + (i as f64 * 0.01) % 1.0;
            let lng = 77.0 + (i as f64 * 0.01) % 1.0;
            let value = if i % 2 == 0 {
                json!({"id": i, "shop": {"latitude": lat, "longitude": lng}})
            } else {
                json!({"id": i, "location": {"type": "Point", "coordinates": [lng, lat]}})
            };
            serde_json::from_value(value).unwrap()
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let delhi = Coordinate::new(28.6139, 77.2090);
    let mumbai = Coordinate::new(19.0760, 72.8777);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance(black_box(&delhi), black_box(&mumbai)))
    });
}

fn bench_annotate_listings(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate_listings");
    let buyer = Coordinate::new(12.9716, 77.5946);

    for size in [10, 100, 1000, 10000].iter() {
        let listings = create_test_listings(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| annotate_listings(black_box(Some(&buyer)), black_box(listings.clone())))
        });
    }

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let flat = json!({"lat": "12.9716", "lng": "77.5946"});
    let nested = json!({"addresses": [{"city": "Pune"}, {"address": {"location": {"coordinates": [77.5946, 12.9716]}}}]});

    let mut group = c.benchmark_group("extract_coordinates");

    group.bench_function("flat", |b| b.iter(|| extract_coordinates(black_box(&flat))));

    group.bench_function("nested", |b| b.iter(|| extract_coordinates(black_box(&nested))));

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_annotate_listings, bench_extraction);
criterion_main!(benches);
