//! Seed management for layout generation
//!
//! Each generation step gets its own sub-seed, derived from the master seed,
//! so the evil choice, the rare roll, the natural fill and the placement are
//! independent reproducible streams.

/// Sub-seeds for each layout generation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Corruption vs crimson coin flip
    pub evil: u64,
    /// Mushroom roll
    pub rare: u64,
    /// Natural biome draws
    pub natural: u64,
    /// Insertion positions of the evil and rare biomes
    pub placement: u64,
}

const EVIL_SALT: u64 = 0xE71C_0A5E_D15C_0001;
const RARE_SALT: u64 = 0x5A0F_F00D_3B1A_0002;
const NATURAL_SALT: u64 = 0x0F0E_57D3_5E27_0003;
const PLACEMENT_SALT: u64 = 0x9A7C_E5E6_1E47_0004;

impl WorldSeeds {
    /// Create seeds from a master seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            evil: derive_seed(master, EVIL_SALT),
            rare: derive_seed(master, RARE_SALT),
            natural: derive_seed(master, NATURAL_SALT),
            placement: derive_seed(master, PLACEMENT_SALT),
        }
    }
}

/// Derive a sub-seed from a master seed and a per-step salt.
/// SplitMix64 finalizer; fixed arithmetic so saved seeds replay on any build.
fn derive_seed(master: u64, salt: u64) -> u64 {
    let mut z = (master ^ salt).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Turn user-entered seed text into a numeric seed.
///
/// Decimal text maps to its value; anything else is hashed with 64-bit FNV-1a.
pub fn parse_seed(text: &str) -> u64 {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return value;
    }
    trimmed.bytes().fold(0xCBF2_9CE4_8422_2325u64, |hash, b| {
        (hash ^ b as u64).wrapping_mul(0x0000_0100_0000_01B3)
    })
}

impl std::fmt::Display for WorldSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WorldSeeds {{ master: {}, evil: {}, rare: {}, natural: {}, placement: {} }}",
            self.master, self.evil, self.rare, self.natural, self.placement,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_derivation() {
        let seeds1 = WorldSeeds::from_master(12345);
        let seeds2 = WorldSeeds::from_master(12345);
        assert_eq!(seeds1, seeds2);
    }

    #[test]
    fn test_different_steps_get_different_seeds() {
        let seeds = WorldSeeds::from_master(12345);

        assert_ne!(seeds.evil, seeds.rare);
        assert_ne!(seeds.rare, seeds.natural);
        assert_ne!(seeds.natural, seeds.placement);
        assert_ne!(seeds.evil, seeds.placement);
    }

    #[test]
    fn test_neighbouring_masters_diverge() {
        let a = WorldSeeds::from_master(0);
        let b = WorldSeeds::from_master(1);
        assert_ne!(a.natural, b.natural);
        assert_ne!(a.placement, b.placement);
    }

    #[test]
    fn test_parse_seed_numeric_and_text() {
        assert_eq!(parse_seed("12345"), 12345);
        assert_eq!(parse_seed("  42 "), 42);
        assert_eq!(parse_seed("for the worthy"), parse_seed("for the worthy"));
        assert_ne!(parse_seed("for the worthy"), parse_seed("not the bees"));
        // Empty text hashes to the FNV offset basis
        assert_eq!(parse_seed(""), 0xCBF2_9CE4_8422_2325);
    }
}
