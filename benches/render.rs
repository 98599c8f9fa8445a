//! Renderer throughput.
//!
//! Every refresh re-renders the whole roster, so card assembly is the
//! one hot path in the client.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use puppy_bowl::model::{Player, PlayerId, PlayerStatus};
use puppy_bowl::render::{detail_text, roster_text};

fn sample_roster(len: u64) -> Vec<Player> {
    (1..=len)
        .map(|i| {
            let status = if i % 2 == 0 {
                PlayerStatus::Field
            } else {
                PlayerStatus::Bench
            };
            Player::new(
                PlayerId::new(i),
                format!("Pup {i}"),
                "Golden Retriever",
                status,
            )
            .with_image_url(format!("https://place.dog/300/{}", 200 + i))
        })
        .collect()
}

fn bench_roster_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster_text");
    for len in [1u64, 10, 100, 1000] {
        let roster = sample_roster(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &roster, |b, roster| {
            b.iter(|| roster_text(black_box(roster)));
        });
    }
    group.finish();
}

fn bench_detail_text(c: &mut Criterion) {
    let player = sample_roster(1).remove(0);
    c.bench_function("detail_text", |b| {
        b.iter(|| detail_text(black_box(&player)));
    });
}

criterion_group!(benches, bench_roster_text, bench_detail_text);
criterion_main!(benches);
