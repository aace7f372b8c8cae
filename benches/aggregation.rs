//! Benchmarks for the dashboard aggregation queries on synthetic data

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use olympic_insights::dataset::{Column, EventRecord, Games, Medal, Season, Sex};
use olympic_insights::processing::{dedup_by, keys};
use olympic_insights::query::{
    data_over_time, fetch_medal_tally, most_successful, weight_vs_height, Filter,
};
use std::hint::black_box;
use std::time::Duration;

const REGIONS: [&str; 8] = ["USA", "China", "Kenya", "Brazil", "Japan", "France", "Italy", "Jamaica"];
const SPORTS: [&str; 5] = ["Athletics", "Swimming", "Rowing", "Fencing", "Hockey"];

/// Synthetic games where every fourth row shares a team medal with its neighbour.
fn create_games(size: usize) -> Games {
    (0..size)
        .map(|i| {
            let year = 1960 + 4 * (i % 15) as i64;
            let region = REGIONS[i % REGIONS.len()];
            let sport = SPORTS[i % SPORTS.len()];
            let medal = match i % 7 {
                0 => Some(Medal::Gold),
                1 => Some(Medal::Silver),
                2 => Some(Medal::Bronze),
                _ => None,
            };
            EventRecord {
                name: format!("athlete_{}", i / 3),
                sex: if i % 2 == 0 { Sex::Male } else { Sex::Female },
                age: Some(18.0 + (i % 20) as f64),
                height_cm: Some(160.0 + (i % 40) as f64),
                weight_kg: Some(50.0 + (i % 50) as f64),
                team: region.to_string(),
                noc: region[..3].to_uppercase(),
                region: Some(region.to_string()),
                games: format!("{year} Summer"),
                year,
                season: Season::Summer,
                city: format!("City{year}"),
                sport: sport.to_string(),
                event: format!("{sport} event {}", (i / 4) % 30),
                medal,
            }
        })
        .collect()
}

fn bench_medal_tally(c: &mut Criterion) {
    let mut group = c.benchmark_group("medal_tally");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));

    for size in [1_000, 10_000, 100_000].iter() {
        let games = create_games(*size);
        group.bench_with_input(BenchmarkId::new("overall", size), &games, |b, games| {
            b.iter(|| fetch_medal_tally(black_box(games), &Filter::Overall, &Filter::Overall));
        });
        group.bench_with_input(BenchmarkId::new("one_country", size), &games, |b, games| {
            let country = Filter::only("Kenya");
            b.iter(|| fetch_medal_tally(black_box(games), &Filter::Overall, &country));
        });
    }

    group.finish();
}

fn bench_dedup(c: &mut Criterion) {
    let games = create_games(100_000);
    c.bench_function("dedup_medal_award_unit", |b| {
        b.iter(|| dedup_by(black_box(&games), keys::MEDAL_AWARD_UNIT).len());
    });
}

fn bench_dashboard_queries(c: &mut Criterion) {
    let games = create_games(50_000);
    let mut group = c.benchmark_group("dashboard");

    group.bench_function("nations_over_time", |b| {
        b.iter(|| data_over_time(black_box(&games), Column::Region));
    });
    group.bench_function("most_successful", |b| {
        b.iter(|| most_successful(black_box(&games), &Filter::Overall));
    });
    group.bench_function("weight_vs_height", |b| {
        b.iter(|| weight_vs_height(black_box(&games), &Filter::Overall));
    });

    group.finish();
}

criterion_group!(benches, bench_medal_tally, bench_dedup, bench_dashboard_queries);
criterion_main!(benches);
