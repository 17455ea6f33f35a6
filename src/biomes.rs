//! Biome vocabulary for simulated world layouts
//!
//! Natural biomes fill most of a world. Every world also carries exactly one
//! evil biome and, rarely, a single mushroom biome.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Surface biome occupying one horizontal segment of a world
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Biome {
    Forest,
    Desert,
    Snow,
    Jungle,
    Corruption,
    Crimson,
    Mushroom,
}

/// Which slot rules a biome is placed under
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BiomeCategory {
    /// Sampled freely, may repeat
    Natural,
    /// Exactly one per world
    Evil,
    /// At most one per world
    Rare,
}

impl Biome {
    /// All biomes in declaration order.
    pub fn all() -> &'static [Biome] {
        &[
            Biome::Forest, Biome::Desert, Biome::Snow, Biome::Jungle,
            Biome::Corruption, Biome::Crimson, Biome::Mushroom,
        ]
    }

    /// Biomes that fill the natural slots.
    pub fn natural() -> &'static [Biome] {
        &[Biome::Forest, Biome::Desert, Biome::Snow, Biome::Jungle]
    }

    pub fn category(&self) -> BiomeCategory {
        match self {
            Biome::Forest | Biome::Desert | Biome::Snow | Biome::Jungle => BiomeCategory::Natural,
            Biome::Corruption | Biome::Crimson => BiomeCategory::Evil,
            Biome::Mushroom => BiomeCategory::Rare,
        }
    }

    pub fn is_evil(&self) -> bool {
        self.category() == BiomeCategory::Evil
    }

    /// Display name, also accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Biome::Forest => "Forest",
            Biome::Desert => "Desert",
            Biome::Snow => "Snow",
            Biome::Jungle => "Jungle",
            Biome::Corruption => "Corruption",
            Biome::Crimson => "Crimson",
            Biome::Mushroom => "Mushroom",
        }
    }

    /// Relative frequency in natural slots.
    /// Forest and Snow are common, Jungle a little less so, Desert uncommon.
    /// Evil and rare biomes never fill a natural slot.
    pub fn natural_weight(&self) -> u32 {
        match self {
            Biome::Forest => 4,
            Biome::Snow => 4,
            Biome::Jungle => 3,
            Biome::Desert => 2,
            Biome::Corruption | Biome::Crimson | Biome::Mushroom => 0,
        }
    }

    /// Pick a natural biome using the weight table.
    pub fn random_natural(rng: &mut impl Rng) -> Self {
        let total: u32 = Self::natural().iter().map(|b| b.natural_weight()).sum();
        let mut roll = rng.gen_range(0..total);
        for biome in Self::natural() {
            let weight = biome.natural_weight();
            if roll < weight {
                return *biome;
            }
            roll -= weight;
        }
        Biome::Forest
    }

    /// Chip color for terminal rendering
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Biome::Forest => (46, 139, 87),
            Biome::Desert => (237, 201, 125),
            Biome::Snow => (230, 240, 250),
            Biome::Jungle => (80, 170, 40),
            Biome::Corruption => (110, 70, 160),
            Biome::Crimson => (170, 30, 40),
            Biome::Mushroom => (60, 90, 220),
        }
    }

    /// Single-character legend glyph
    pub fn glyph(&self) -> char {
        match self {
            Biome::Forest => 'F',
            Biome::Desert => 'D',
            Biome::Snow => 'S',
            Biome::Jungle => 'J',
            Biome::Corruption => 'C',
            Biome::Crimson => 'R',
            Biome::Mushroom => 'M',
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Biome {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Biome::all()
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = Biome::all().iter().map(|b| b.name()).collect();
                Error::Parse(format!("unknown biome '{}' (expected one of: {})", wanted, known.join(", ")))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("jungle".parse::<Biome>().unwrap(), Biome::Jungle);
        assert_eq!(" CRIMSON ".parse::<Biome>().unwrap(), Biome::Crimson);
        for biome in Biome::all() {
            assert_eq!(biome.name().parse::<Biome>().unwrap(), *biome);
        }
    }

    #[test]
    fn test_parse_unknown_biome() {
        let err = "ocean".parse::<Biome>().unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_only_natural_biomes_have_weight() {
        for biome in Biome::all() {
            let weighted = biome.natural_weight() > 0;
            assert_eq!(weighted, biome.category() == BiomeCategory::Natural, "{}", biome);
        }
    }

    #[test]
    fn test_random_natural_follows_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut counts: HashMap<Biome, usize> = HashMap::new();
        for _ in 0..13_000 {
            *counts.entry(Biome::random_natural(&mut rng)).or_insert(0) += 1;
        }

        // Expected shares 4:4:3:2 out of 13 -> 4000/4000/3000/2000
        assert_eq!(counts.len(), 4);
        assert!(counts[&Biome::Desert] < counts[&Biome::Jungle]);
        assert!(counts[&Biome::Jungle] < counts[&Biome::Forest]);
        assert!(counts[&Biome::Desert] > 1500 && counts[&Biome::Desert] < 2500);
    }

    #[test]
    fn test_glyphs_are_unique() {
        let mut glyphs: Vec<char> = Biome::all().iter().map(|b| b.glyph()).collect();
        glyphs.sort();
        glyphs.dedup();
        assert_eq!(glyphs.len(), Biome::all().len());
    }
}
