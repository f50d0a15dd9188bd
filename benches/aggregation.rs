//! Performance benchmarks for placematch.
//!
//! Run with: `cargo bench`
//!
//! Uses synthetic submission batches clustered around a handful of city
//! centers to measure aggregation throughput at realistic request sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use placematch::{aggregate_submissions, GroupConfig, Submission};

/// Generate submissions clustered around `place_count` distinct spots.
///
/// Each spot receives several submissions with coordinate jitter inside the
/// default tolerance cell, so realistic merging happens during aggregation.
fn generate_batch(place_count: usize, submissions_per_place: usize) -> Vec<Submission> {
    let mut rng = rand::thread_rng();
    let mut rows = Vec::with_capacity(place_count * submissions_per_place);

    for place in 0..place_count {
        // Spread places over a city-sized area around Seoul
        let base_x = 126.8 + rng.gen_range(0.0..0.4);
        let base_y = 37.4 + rng.gen_range(0.0..0.3);

        for i in 0..submissions_per_place {
            let jitter = 0.00004;
            rows.push(Submission::new(
                &format!("Place {place}"),
                "1 Some St",
                base_x + rng.gen_range(-jitter..jitter),
                base_y + rng.gen_range(-jitter..jitter),
                &format!("reason {i} for place {place}"),
                (place * submissions_per_place + i) as i64,
            ));
        }
    }

    // Newest first, as the row store delivers batches
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows
}

fn bench_aggregation(c: &mut Criterion) {
    let config = GroupConfig::default();
    let mut group = c.benchmark_group("aggregate_submissions");

    for &place_count in &[10usize, 100, 1000] {
        let rows = generate_batch(place_count, 5);
        group.bench_with_input(
            BenchmarkId::from_parameter(place_count),
            &rows,
            |b, rows| b.iter(|| aggregate_submissions(black_box(rows), &config)),
        );
    }

    group.finish();
}

fn bench_collision_heavy(c: &mut Criterion) {
    // Every place submits under the same name, forcing the collision path
    let mut rows = generate_batch(200, 5);
    for row in &mut rows {
        row.place_name = "Cafe X".to_string();
    }
    let config = GroupConfig::default();

    c.bench_function("aggregate_collision_heavy", |b| {
        b.iter(|| aggregate_submissions(black_box(&rows), &config))
    });
}

criterion_group!(benches, bench_aggregation, bench_collision_heavy);
criterion_main!(benches);
