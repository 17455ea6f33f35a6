//! Seed → layout generation
//!
//! Models biome placement along the horizontal axis of a world. The model is
//! an approximation: it reproduces the slot rules (one evil biome, a rare
//! mushroom biome, weighted natural fill) rather than any real game's
//! generator.
//!
//! Algorithm:
//! 1. Derive one sub-seed per step from the world seed ([`WorldSeeds`])
//! 2. Flip the evil coin and roll the mushroom on their own streams
//! 3. Fill the remaining natural slots from the weighted table
//! 4. Insert the evil biome, then the mushroom, at seed-derived positions

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::biomes::Biome;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::seeds::WorldSeeds;
use crate::world::WorldSize;

/// Probability the evil slot is Crimson rather than Corruption
pub const CRIMSON_CHANCE: f64 = 0.5;

/// Probability a world has a mushroom segment
pub const MUSHROOM_CHANCE: f64 = 0.08;

/// Smallest segment count that still fits the evil slot next to one other segment
pub const MIN_SEGMENTS: usize = 2;

/// Generate the layout for a seed.
///
/// Pure: the same `(seed, size)` always yields the same layout.
pub fn generate(seed: u64, size: WorldSize) -> Result<Layout> {
    generate_segments(seed, size.segment_count())
}

/// Generate a layout with an explicit segment count.
pub(crate) fn generate_segments(seed: u64, segment_count: usize) -> Result<Layout> {
    if segment_count < MIN_SEGMENTS {
        return Err(Error::Configuration(format!(
            "{} segment(s) cannot hold the evil slot (need at least {})",
            segment_count, MIN_SEGMENTS
        )));
    }

    let seeds = WorldSeeds::from_master(seed);

    let evil = roll_evil(seeds.evil);
    let has_mushroom = roll_mushroom(seeds.rare);

    let natural_count = segment_count - 1 - usize::from(has_mushroom);
    let mut segments = fill_natural(seeds.natural, natural_count);
    segments.reserve(segment_count - natural_count);

    let mut placement = ChaCha8Rng::seed_from_u64(seeds.placement);
    insert_at_random(&mut segments, evil, &mut placement);
    if has_mushroom {
        insert_at_random(&mut segments, Biome::Mushroom, &mut placement);
    }

    debug_assert_eq!(segments.len(), segment_count);
    Ok(Layout::from_segments(segments))
}

fn roll_evil(seed: u64) -> Biome {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    if rng.gen_bool(CRIMSON_CHANCE) {
        Biome::Crimson
    } else {
        Biome::Corruption
    }
}

fn roll_mushroom(seed: u64) -> bool {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.gen_bool(MUSHROOM_CHANCE)
}

fn fill_natural(seed: u64, count: usize) -> Vec<Biome> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| Biome::random_natural(&mut rng)).collect()
}

/// Insert `biome` at a uniformly chosen index in `0..=len`.
fn insert_at_random(segments: &mut Vec<Biome>, biome: Biome, rng: &mut impl Rng) {
    let index = rng.gen_range(0..=segments.len());
    segments.insert(index, biome);
}
