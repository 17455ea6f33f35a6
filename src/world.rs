//! World size classes.
//!
//! A size fixes how many biome segments a layout has. The nominal tile width
//! only proportions the layout when rendering; segments carry no absolute
//! distance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WorldSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl WorldSize {
    pub fn all() -> &'static [WorldSize] {
        &[WorldSize::Small, WorldSize::Medium, WorldSize::Large]
    }

    /// Number of biome segments a layout of this size holds
    pub fn segment_count(&self) -> usize {
        match self {
            WorldSize::Small => 5,
            WorldSize::Medium => 7,
            WorldSize::Large => 9,
        }
    }

    /// Nominal world width in tiles
    pub fn width_tiles(&self) -> u32 {
        match self {
            WorldSize::Small => 4200,
            WorldSize::Medium => 6400,
            WorldSize::Large => 8400,
        }
    }

    /// Approximate tiles spanned by one segment
    pub fn tiles_per_segment(&self) -> u32 {
        self.width_tiles() / self.segment_count() as u32
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorldSize::Small => "small",
            WorldSize::Medium => "medium",
            WorldSize::Large => "large",
        }
    }
}

impl fmt::Display for WorldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorldSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "s" => Ok(WorldSize::Small),
            "medium" | "m" => Ok(WorldSize::Medium),
            "large" | "l" => Ok(WorldSize::Large),
            other => Err(Error::Parse(format!(
                "unknown world size '{}' (expected small, medium or large)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_counts() {
        assert_eq!(WorldSize::Small.segment_count(), 5);
        assert_eq!(WorldSize::Medium.segment_count(), 7);
        assert_eq!(WorldSize::Large.segment_count(), 9);
    }

    #[test]
    fn test_every_size_fits_the_evil_slot() {
        for size in WorldSize::all() {
            assert!(size.segment_count() >= 2, "{}", size);
        }
    }

    #[test]
    fn test_parse_sizes() {
        assert_eq!("Large".parse::<WorldSize>().unwrap(), WorldSize::Large);
        assert_eq!("m".parse::<WorldSize>().unwrap(), WorldSize::Medium);
        assert!("huge".parse::<WorldSize>().is_err());
    }

    #[test]
    fn test_tiles_per_segment_shrinks_with_more_segments() {
        // Larger worlds are wider but split into more segments
        assert_eq!(WorldSize::Small.tiles_per_segment(), 840);
        assert!(WorldSize::Large.width_tiles() > WorldSize::Medium.width_tiles());
    }
}
