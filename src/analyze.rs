//! Single-seed analysis and adjacency statistics

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

use rayon::prelude::*;

use crate::adjacency::AdjacencyConstraint;
use crate::biomes::Biome;
use crate::error::Result;
use crate::generator::generate;
use crate::layout::Layout;
use crate::world::WorldSize;

/// Pairs players usually hunt for
pub const INTERESTING_PAIRS: [(Biome, Biome); 6] = [
    (Biome::Desert, Biome::Jungle),
    (Biome::Snow, Biome::Forest),
    (Biome::Corruption, Biome::Jungle),
    (Biome::Crimson, Biome::Jungle),
    (Biome::Mushroom, Biome::Jungle),
    (Biome::Snow, Biome::Desert),
];

/// Seeds per adjacency
pub type PairCounts = BTreeMap<AdjacencyConstraint, usize>;

/// Layout of one seed plus every adjacency it contains
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    pub seed: u64,
    pub size: WorldSize,
    pub layout: Layout,
    pub adjacencies: BTreeSet<AdjacencyConstraint>,
}

impl Analysis {
    pub fn holds(&self, constraint: &AdjacencyConstraint) -> bool {
        self.adjacencies.contains(constraint)
    }

    /// The adjacencies from [`INTERESTING_PAIRS`] present in this layout
    pub fn interesting(&self) -> Vec<AdjacencyConstraint> {
        INTERESTING_PAIRS
            .iter()
            .map(|&pair| AdjacencyConstraint::from(pair))
            .filter(|c| self.holds(c))
            .collect()
    }
}

/// Generate one layout and report its adjacencies.
pub fn analyze(seed: u64, size: WorldSize) -> Result<Analysis> {
    let layout = generate(seed, size)?;
    let adjacencies = layout
        .adjacent_pairs()
        .map(AdjacencyConstraint::from)
        .collect();
    Ok(Analysis { seed, size, layout, adjacencies })
}

/// Count, for each adjacency, how many seeds in `seeds` produce it.
///
/// A pair appearing twice in one layout counts once for that seed.
pub fn adjacency_frequencies(
    seeds: Range<u64>,
    size: WorldSize,
) -> Result<PairCounts> {
    seeds
        .into_par_iter()
        .map(|seed| analyze(seed, size).map(|a| a.adjacencies))
        .try_fold(BTreeMap::new, |mut counts: PairCounts, adjacencies| -> Result<PairCounts> {
            for pair in adjacencies? {
                *counts.entry(pair).or_insert(0) += 1;
            }
            Ok(counts)
        })
        .try_reduce(BTreeMap::new, |mut a, b| -> Result<PairCounts> {
            for (pair, count) in b {
                *a.entry(pair).or_insert(0) += count;
            }
            Ok(a)
        })
}
