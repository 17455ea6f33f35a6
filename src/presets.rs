//! Ready-made searches for common biome pairings

use crate::adjacency::AdjacencyConstraint;
use crate::biomes::Biome;
use crate::finder::SearchRequest;
use crate::world::WorldSize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPreset {
    pub name: &'static str,
    pub constraints: Vec<AdjacencyConstraint>,
    pub size: WorldSize,
}

impl SearchPreset {
    /// Build a request using the finder defaults (5 seeds, 5000 attempts, random seeds)
    pub fn into_request(self) -> SearchRequest {
        SearchRequest::new(self.constraints, self.size)
    }
}

pub fn presets() -> Vec<SearchPreset> {
    vec![
        SearchPreset {
            name: "Desert next to Jungle",
            constraints: vec![AdjacencyConstraint::new(Biome::Desert, Biome::Jungle)],
            size: WorldSize::Medium,
        },
        SearchPreset {
            name: "Snow next to Forest",
            constraints: vec![AdjacencyConstraint::new(Biome::Snow, Biome::Forest)],
            size: WorldSize::Large,
        },
        SearchPreset {
            name: "Corruption next to Jungle",
            constraints: vec![AdjacencyConstraint::new(Biome::Corruption, Biome::Jungle)],
            size: WorldSize::Medium,
        },
    ]
}
