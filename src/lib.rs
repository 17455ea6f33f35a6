//! Biome seed finder library
//!
//! Simulates the horizontal biome layout of a world from its seed and
//! searches seed space for layouts with wanted biome adjacencies.
//! Re-exports the engine API for use by binaries and front ends.

pub mod adjacency;
pub mod analyze;
pub mod ascii;
pub mod biomes;
pub mod error;
pub mod export;
pub mod finder;
pub mod generator;
pub mod layout;
pub mod logging;
pub mod presets;
pub mod seeds;
pub mod world;

pub use adjacency::{satisfies, satisfies_all, AdjacencyConstraint};
pub use analyze::{adjacency_frequencies, analyze, Analysis};
pub use biomes::Biome;
pub use error::{Error, Result};
pub use finder::{find_seeds, SearchReport, SearchRequest, SearchResult, SeedSource};
pub use generator::generate;
pub use layout::Layout;
pub use world::WorldSize;
