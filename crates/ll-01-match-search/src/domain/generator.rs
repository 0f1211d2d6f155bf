//! Mock candidate generation.

use rand::seq::SliceRandom;
use rand::Rng;
use shared_types::TimeSource;
use std::sync::atomic::{AtomicU64, Ordering};

use super::entities::{Compatibility, MatchCandidate, SearchQuery};

/// Largest batch a single search may return.
pub const MAX_CANDIDATES: usize = 5;

/// Youngest and oldest fabricated donor ages.
pub const CANDIDATE_AGE_RANGE: std::ops::RangeInclusive<u8> = 20..=59;

/// Generate one batch of candidates for `query`.
///
/// `batch_seed` is folded into every id; callers must not reuse it.
/// When the query has no city, each candidate draws one from `cities`.
pub fn generate_candidates<R, C>(
    query: &SearchQuery,
    cities: &[C],
    batch_seed: &str,
    rng: &mut R,
) -> Vec<MatchCandidate>
where
    R: Rng + ?Sized,
    C: AsRef<str>,
{
    let count = rng.gen_range(1..=MAX_CANDIDATES);

    (0..count)
        .map(|i| {
            let compatibility = *Compatibility::ALL
                .choose(rng)
                .unwrap_or(&Compatibility::Medium);
            let match_percentage = rng.gen_range(compatibility.band());
            let age = rng.gen_range(CANDIDATE_AGE_RANGE);
            let city = match &query.city {
                Some(city) => city.clone(),
                None => cities
                    .choose(rng)
                    .map(|c| c.as_ref().to_string())
                    .unwrap_or_default(),
            };

            MatchCandidate {
                id: format!("donor-{batch_seed}-{i}"),
                name: format!("Donor {}", i + 1),
                age,
                blood_group: query.blood_group,
                organ: query.organ,
                city,
                match_percentage,
                compatibility,
            }
        })
        .collect()
}

/// Generator that keeps candidate ids unique across batches.
///
/// Ids combine the time source's millisecond clock with a per-generator
/// counter, so two searches in the same millisecond still differ.
pub struct MockMatchGenerator<T: TimeSource> {
    time_source: T,
    batches: AtomicU64,
}

impl<T: TimeSource> MockMatchGenerator<T> {
    pub fn new(time_source: T) -> Self {
        Self {
            time_source,
            batches: AtomicU64::new(0),
        }
    }

    pub fn generate<R, C>(&self, query: &SearchQuery, cities: &[C], rng: &mut R) -> Vec<MatchCandidate>
    where
        R: Rng + ?Sized,
        C: AsRef<str>,
    {
        let batch = self.batches.fetch_add(1, Ordering::Relaxed);
        let seed = format!("{}-{}", self.time_source.now(), batch);
        generate_candidates(query, cities, &seed, rng)
    }

    /// Number of batches generated so far.
    pub fn batches(&self) -> u64 {
        self.batches.load(Ordering::Relaxed)
    }
}
