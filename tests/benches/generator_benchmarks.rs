//! # LifeLink Generator Benchmarks
//!
//! | Generator | Output |
//! |-----------|--------|
//! | ll-01 Match search | 1-5 candidates per batch |
//! | ll-05 Admin dataset | 20 donors, 15 recipients, 10 matches |
//! | ll-05 Admin filter | substring match over every row |

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ll_01_match_search::{generate_candidates, SearchQuery};
use ll_05_admin_dataset::AdminDataset;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::{BloodGroup, Organ, SEARCH_CITIES};

fn bench_match_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ll-01-match-search");
    let mut rng = StdRng::seed_from_u64(1);

    let any_city = SearchQuery::new(Organ::Kidney, BloodGroup::OPositive, None);
    group.bench_function("generate_any_city", |b| {
        b.iter(|| generate_candidates(black_box(&any_city), &SEARCH_CITIES, "bench", &mut rng))
    });

    let pinned = SearchQuery::new(Organ::Liver, BloodGroup::ANegative, Some("Chicago".into()));
    group.bench_function("generate_pinned_city", |b| {
        b.iter(|| generate_candidates(black_box(&pinned), &SEARCH_CITIES, "bench", &mut rng))
    });

    group.finish();
}

fn bench_admin_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("ll-05-admin-dataset");
    let mut rng = StdRng::seed_from_u64(2);
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default();

    group.bench_function("generate", |b| {
        b.iter(|| AdminDataset::generate(&mut rng, black_box(today)))
    });

    let dataset = AdminDataset::generate(&mut rng, today);
    for term in ["", "Recipient 1", "in-progress", "zzz"] {
        group.bench_function(format!("filter/{term:?}"), |b| {
            b.iter(|| dataset.filter(black_box(term)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_match_generation, bench_admin_dataset);
criterion_main!(benches);
