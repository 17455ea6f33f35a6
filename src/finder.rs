//! Seed search
//!
//! Runs the layout generator over a stream of candidate seeds and keeps the
//! ones whose layout satisfies every requested adjacency. The search stops
//! at whichever comes first: enough matches, or the attempt budget.
//!
//! Running out of budget is a normal outcome. The report just comes back
//! short, and front ends decide how to tell the user.
//!
//! Parallelization: [`run_parallel`] evaluates candidates in chunks with rayon
//! and returns the same matches as [`run`] for the same seed source.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::adjacency::{satisfies_all, AdjacencyConstraint};
use crate::error::{Error, Result};
use crate::generator::generate;
use crate::layout::Layout;
use crate::world::WorldSize;

/// Attempts between progress log lines
pub const PROGRESS_INTERVAL: usize = 1000;

/// Candidates evaluated per parallel batch
pub const PARALLEL_CHUNK: usize = 4096;

/// Where candidate seeds come from.
#[derive(Clone, Debug)]
pub enum SeedSource {
    /// Tried in the given order; repeats are separate attempts
    Explicit(Vec<u64>),
    /// `count` consecutive seeds from `start`
    Sequential { start: u64, count: u64 },
    /// Uniform draws over the full `u64` range from a stream owned by this search
    Random(ChaCha8Rng),
}

impl SeedSource {
    /// Random stream seeded from the process RNG. Not reproducible.
    pub fn random() -> Self {
        Self::random_from(rand::random())
    }

    /// Random stream seeded from `stream_seed`. Same stream seed, same candidates.
    pub fn random_from(stream_seed: u64) -> Self {
        SeedSource::Random(ChaCha8Rng::seed_from_u64(stream_seed))
    }

    pub fn range(start: u64, count: u64) -> Self {
        SeedSource::Sequential { start, count }
    }

    fn into_candidates(self) -> Box<dyn Iterator<Item = u64>> {
        match self {
            SeedSource::Explicit(seeds) => Box::new(seeds.into_iter()),
            SeedSource::Sequential { start, count } => {
                Box::new((0..count).map(move |i| start.wrapping_add(i)))
            }
            SeedSource::Random(mut rng) => Box::new(std::iter::repeat_with(move || rng.gen::<u64>())),
        }
    }
}

impl Default for SeedSource {
    fn default() -> Self {
        Self::random()
    }
}

/// One search call's worth of input. Consumed by [`run`].
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub constraints: Vec<AdjacencyConstraint>,
    pub num_seeds: usize,
    pub size: WorldSize,
    pub max_attempts: usize,
    pub source: SeedSource,
}

impl SearchRequest {
    /// Request with the interactive tool's defaults: 5 seeds, 5000 attempts, random seeds.
    pub fn new(constraints: Vec<AdjacencyConstraint>, size: WorldSize) -> Self {
        Self {
            constraints,
            num_seeds: 5,
            size,
            max_attempts: 5000,
            source: SeedSource::default(),
        }
    }

    pub fn num_seeds(mut self, num_seeds: usize) -> Self {
        self.num_seeds = num_seeds;
        self
    }

    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn seed_source(mut self, source: SeedSource) -> Self {
        self.source = source;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.constraints.is_empty() {
            return Err(Error::InvalidRequest("at least one adjacency constraint is required".into()));
        }
        if self.num_seeds < 1 {
            return Err(Error::InvalidRequest("num_seeds must be at least 1".into()));
        }
        if self.max_attempts < 1 {
            return Err(Error::InvalidRequest("max_attempts must be at least 1".into()));
        }
        Ok(())
    }

    /// One-line description for logs and reports
    pub fn summary(&self) -> String {
        let pairs: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();
        format!(
            "[{}] size={} target={} max_attempts={}",
            pairs.join(", "),
            self.size,
            self.num_seeds,
            self.max_attempts
        )
    }
}

/// An accepted seed. Never modified after the search creates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub seed: u64,
    pub size: WorldSize,
    pub layout: Layout,
    /// Constraints this layout satisfied (all of the request's)
    pub satisfied: Vec<AdjacencyConstraint>,
}

/// Outcome of a search
#[derive(Clone, Debug, Default)]
pub struct SearchReport {
    pub results: Vec<SearchResult>,
    /// Generator invocations counted against the budget
    pub attempts: usize,
    pub target: usize,
    pub cancelled: bool,
}

impl SearchReport {
    pub fn target_met(&self) -> bool {
        self.results.len() >= self.target
    }
}

/// Cooperative cancel signal, checked once per attempt.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Find up to `num_seeds` seeds whose layouts satisfy all `constraints`.
///
/// `seed_source` of `None` draws random seeds from a fresh stream owned by this call.
/// A result shorter than `num_seeds` means the budget ran out first.
pub fn find_seeds(
    constraints: &[AdjacencyConstraint],
    num_seeds: usize,
    size: WorldSize,
    max_attempts: usize,
    seed_source: Option<SeedSource>,
) -> Result<Vec<SearchResult>> {
    let request = SearchRequest::new(constraints.to_vec(), size)
        .num_seeds(num_seeds)
        .max_attempts(max_attempts)
        .seed_source(seed_source.unwrap_or_default());
    Ok(run(request)?.results)
}

/// Run a search to completion.
pub fn run(request: SearchRequest) -> Result<SearchReport> {
    run_with_cancel(request, &CancelFlag::new())
}

/// Run a search, stopping early if `cancel` is raised.
pub fn run_with_cancel(request: SearchRequest, cancel: &CancelFlag) -> Result<SearchReport> {
    request.validate()?;
    log::info!("Searching for seeds: {}", request.summary());

    let SearchRequest { constraints, num_seeds, size, max_attempts, source } = request;
    let mut report = SearchReport { target: num_seeds, ..Default::default() };

    for seed in source.into_candidates().take(max_attempts) {
        if cancel.is_cancelled() {
            report.cancelled = true;
            break;
        }

        report.attempts += 1;
        if let Some(result) = evaluate(seed, size, &constraints)? {
            log::info!("Found seed #{}: {} ({})", report.results.len() + 1, seed, result.layout);
            report.results.push(result);
            if report.results.len() == num_seeds {
                break;
            }
        }

        if report.attempts % PROGRESS_INTERVAL == 0 {
            log::debug!("Searched {} seeds... (found {})", report.attempts, report.results.len());
        }
    }

    log_outcome(&report);
    Ok(report)
}

/// Parallel variant of [`run`].
///
/// Candidates are pulled from the source in order, a chunk at a time, and
/// each chunk is evaluated across the rayon pool. A chunk never exceeds the
/// remaining budget. Matches are kept in candidate order, so the results are
/// identical to a sequential run over the same source.
pub fn run_parallel(request: SearchRequest) -> Result<SearchReport> {
    request.validate()?;
    log::info!("Searching for seeds in parallel: {}", request.summary());

    let SearchRequest { constraints, num_seeds, size, max_attempts, source } = request;
    let mut report = SearchReport { target: num_seeds, ..Default::default() };
    let mut candidates = source.into_candidates().take(max_attempts);

    'chunks: loop {
        let chunk: Vec<u64> = candidates.by_ref().take(PARALLEL_CHUNK).collect();
        if chunk.is_empty() {
            break;
        }

        let evaluated: Vec<Option<SearchResult>> = chunk
            .par_iter()
            .map(|&seed| evaluate(seed, size, &constraints))
            .collect::<Result<_>>()?;

        for (offset, hit) in evaluated.into_iter().enumerate() {
            if let Some(result) = hit {
                log::info!("Found seed #{}: {} ({})", report.results.len() + 1, result.seed, result.layout);
                report.results.push(result);
                if report.results.len() == num_seeds {
                    report.attempts += offset + 1;
                    break 'chunks;
                }
            }
        }

        report.attempts += chunk.len();
        log::debug!("Searched {} seeds... (found {})", report.attempts, report.results.len());
    }

    log_outcome(&report);
    Ok(report)
}

fn evaluate(seed: u64, size: WorldSize, constraints: &[AdjacencyConstraint]) -> Result<Option<SearchResult>> {
    let layout = generate(seed, size)?;
    if !satisfies_all(&layout, constraints) {
        return Ok(None);
    }
    Ok(Some(SearchResult {
        seed,
        size,
        layout,
        satisfied: constraints.to_vec(),
    }))
}

fn log_outcome(report: &SearchReport) {
    if report.cancelled {
        log::warn!(
            "Search cancelled after {} attempts ({} of {} found)",
            report.attempts,
            report.results.len(),
            report.target
        );
    } else if report.target_met() {
        log::info!("Found {} matching seeds after {} attempts", report.results.len(), report.attempts);
    } else {
        log::warn!(
            "Only found {} of {} matching seeds after {} attempts",
            report.results.len(),
            report.target,
            report.attempts
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biomes::Biome::*;

    fn desert_jungle() -> Vec<AdjacencyConstraint> {
        vec![AdjacencyConstraint::new(Desert, Jungle)]
    }

    #[test]
    fn test_empty_constraints_rejected() {
        let err = find_seeds(&[], 1, WorldSize::Medium, 1000, None).unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn test_zero_target_or_budget_rejected() {
        let zero_target = find_seeds(&desert_jungle(), 0, WorldSize::Medium, 1000, None);
        let zero_budget = find_seeds(&desert_jungle(), 1, WorldSize::Medium, 0, None);
        assert!(matches!(zero_target, Err(Error::InvalidRequest(_))));
        assert!(matches!(zero_budget, Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_sequential_scenario_is_reproducible() {
        let source = || Some(SeedSource::Explicit((0..50_000).collect()));
        let first = find_seeds(&desert_jungle(), 1, WorldSize::Medium, 50_000, source()).unwrap();
        let second = find_seeds(&desert_jungle(), 1, WorldSize::Medium, 50_000, source()).unwrap();

        assert!(first.len() <= 1);
        assert_eq!(first, second);
        for result in &first {
            assert!(result.layout.adjacent_pairs().any(|p| p == (Desert, Jungle) || p == (Jungle, Desert)));
            assert_eq!(generate(result.seed, WorldSize::Medium).unwrap(), result.layout);
        }
    }

    #[test]
    fn test_budget_is_respected() {
        let request = SearchRequest::new(desert_jungle(), WorldSize::Small)
            .num_seeds(1_000_000)
            .max_attempts(250)
            .seed_source(SeedSource::random_from(9));
        let report = run(request).unwrap();

        assert_eq!(report.attempts, 250);
        assert!(report.results.len() <= 250);
        assert!(!report.target_met());
        assert!(!report.cancelled);
    }

    #[test]
    fn test_stops_at_target() {
        let request = SearchRequest::new(desert_jungle(), WorldSize::Large)
            .num_seeds(3)
            .max_attempts(100_000)
            .seed_source(SeedSource::range(0, 100_000));
        let report = run(request).unwrap();

        assert_eq!(report.results.len(), 3);
        assert!(report.target_met());
        // The last attempt was the third match
        assert_eq!(report.results[2].seed, report.attempts as u64 - 1);
    }

    #[test]
    fn test_results_satisfy_every_constraint() {
        let constraints = vec![
            AdjacencyConstraint::new(Desert, Jungle),
            AdjacencyConstraint::new(Snow, Forest),
        ];
        let results = find_seeds(&constraints, 5, WorldSize::Large, 20_000, Some(SeedSource::random_from(3))).unwrap();
        for result in &results {
            assert!(satisfies_all(&result.layout, &constraints));
            assert_eq!(result.satisfied, constraints);
        }
    }

    #[test]
    fn test_explicit_list_shorter_than_budget() {
        let request = SearchRequest::new(desert_jungle(), WorldSize::Medium)
            .max_attempts(1000)
            .seed_source(SeedSource::Explicit(vec![4, 8, 15]));
        let report = run(request).unwrap();
        assert_eq!(report.attempts, 3);
    }

    #[test]
    fn test_repeated_explicit_seeds_count_separately() {
        // Find one matching seed, then feed it twice
        let hit = find_seeds(&desert_jungle(), 1, WorldSize::Medium, 50_000, Some(SeedSource::range(0, 50_000)))
            .unwrap()
            .pop()
            .expect("some seed below 50000 has desert beside jungle");

        let request = SearchRequest::new(desert_jungle(), WorldSize::Medium)
            .num_seeds(10)
            .max_attempts(10)
            .seed_source(SeedSource::Explicit(vec![hit.seed, hit.seed]));
        let report = run(request).unwrap();
        assert_eq!(report.attempts, 2);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0], report.results[1]);
    }

    #[test]
    fn test_random_stream_is_reproducible_when_seeded() {
        let a = find_seeds(&desert_jungle(), 4, WorldSize::Medium, 5000, Some(SeedSource::random_from(77))).unwrap();
        let b = find_seeds(&desert_jungle(), 4, WorldSize::Medium, 5000, Some(SeedSource::random_from(77))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cancelled_flag_stops_before_first_attempt() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let request = SearchRequest::new(desert_jungle(), WorldSize::Medium)
            .seed_source(SeedSource::range(0, 100));
        let report = run_with_cancel(request, &cancel).unwrap();

        assert!(report.cancelled);
        assert_eq!(report.attempts, 0);
        assert!(report.results.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let request = || {
            SearchRequest::new(desert_jungle(), WorldSize::Medium)
                .num_seeds(20)
                .max_attempts(30_000)
                .seed_source(SeedSource::range(1000, 30_000))
        };
        let sequential = run(request()).unwrap();
        let parallel = run_parallel(request()).unwrap();

        assert_eq!(sequential.results, parallel.results);
        assert_eq!(sequential.attempts, parallel.attempts);
    }

    #[test]
    fn test_parallel_respects_budget() {
        let request = SearchRequest::new(vec![AdjacencyConstraint::new(Mushroom, Mushroom)], WorldSize::Large)
            .num_seeds(1)
            .max_attempts(PARALLEL_CHUNK + 10)
            .seed_source(SeedSource::random_from(1));
        let report = run_parallel(request).unwrap();

        // Two mushrooms never occur, so the whole budget is spent
        assert!(report.results.is_empty());
        assert_eq!(report.attempts, PARALLEL_CHUNK + 10);
    }
}
