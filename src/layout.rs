//! Left-to-right biome sequence of a generated world

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::biomes::{Biome, BiomeCategory};

/// Ordered biome segments, index 0 is the west edge of the world.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    segments: Vec<Biome>,
}

impl Layout {
    /// Wrap a segment list as-is. Use [`Layout::is_well_formed`] to check
    /// the evil/rare slot rules for layouts that did not come from the generator.
    pub fn from_segments(segments: Vec<Biome>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Biome] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The world's evil biome, if any
    pub fn evil(&self) -> Option<Biome> {
        self.segments.iter().copied().find(|b| b.is_evil())
    }

    pub fn has_mushroom(&self) -> bool {
        self.segments.contains(&Biome::Mushroom)
    }

    pub fn count(&self, biome: Biome) -> usize {
        self.segments.iter().filter(|&&b| b == biome).count()
    }

    /// Neighbouring segment pairs, west to east
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (Biome, Biome)> + '_ {
        self.segments.windows(2).map(|w| (w[0], w[1]))
    }

    /// Exactly one evil segment, at most one mushroom.
    pub fn is_well_formed(&self) -> bool {
        let evil = self.segments.iter().filter(|b| b.is_evil()).count();
        let rare = self
            .segments
            .iter()
            .filter(|b| b.category() == BiomeCategory::Rare)
            .count();
        evil == 1 && rare <= 1
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, biome) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{}", biome)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Biome::*;

    #[test]
    fn test_display_joins_with_arrows() {
        let layout = Layout::from_segments(vec![Snow, Crimson, Jungle]);
        assert_eq!(layout.to_string(), "Snow → Crimson → Jungle");
    }

    #[test]
    fn test_adjacent_pairs() {
        let layout = Layout::from_segments(vec![Forest, Desert, Corruption]);
        let pairs: Vec<_> = layout.adjacent_pairs().collect();
        assert_eq!(pairs, vec![(Forest, Desert), (Desert, Corruption)]);
        assert_eq!(Layout::from_segments(vec![Crimson]).adjacent_pairs().count(), 0);
    }

    #[test]
    fn test_well_formed_rules() {
        assert!(Layout::from_segments(vec![Forest, Corruption, Forest]).is_well_formed());
        assert!(Layout::from_segments(vec![Mushroom, Crimson]).is_well_formed());
        // Both evils
        assert!(!Layout::from_segments(vec![Corruption, Crimson]).is_well_formed());
        // No evil
        assert!(!Layout::from_segments(vec![Forest, Snow]).is_well_formed());
        // Two mushrooms
        assert!(!Layout::from_segments(vec![Mushroom, Crimson, Mushroom]).is_well_formed());
    }

    #[test]
    fn test_evil_lookup() {
        let layout = Layout::from_segments(vec![Jungle, Snow, Crimson]);
        assert_eq!(layout.evil(), Some(Crimson));
        assert_eq!(layout.count(Snow), 1);
        assert!(!layout.has_mushroom());
    }
}
