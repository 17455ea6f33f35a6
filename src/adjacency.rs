//! Biome adjacency constraints and checks

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::biomes::Biome;
use crate::error::Error;
use crate::layout::Layout;

/// Unordered biome pair: "some A segment sits directly next to some B segment".
///
/// Stored normalized (smaller biome first) so `(A, B)` and `(B, A)` compare
/// and hash equal. `A == B` asks for two consecutive segments of that biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(Biome, Biome)", into = "(Biome, Biome)")]
pub struct AdjacencyConstraint {
    first: Biome,
    second: Biome,
}

impl AdjacencyConstraint {
    pub fn new(a: Biome, b: Biome) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> Biome {
        self.first
    }

    pub fn second(&self) -> Biome {
        self.second
    }

    pub fn is_degenerate(&self) -> bool {
        self.first == self.second
    }

    /// Does the neighbouring pair `(left, right)` realize this constraint?
    pub fn matches_pair(&self, left: Biome, right: Biome) -> bool {
        (left == self.first && right == self.second) || (left == self.second && right == self.first)
    }
}

impl From<(Biome, Biome)> for AdjacencyConstraint {
    fn from((a, b): (Biome, Biome)) -> Self {
        Self::new(a, b)
    }
}

impl From<AdjacencyConstraint> for (Biome, Biome) {
    fn from(c: AdjacencyConstraint) -> Self {
        (c.first, c.second)
    }
}

impl fmt::Display for AdjacencyConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ↔ {}", self.first, self.second)
    }
}

/// Parses `desert-jungle`, `Desert:Jungle` or `desert,jungle`.
impl FromStr for AdjacencyConstraint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(|c| c == '-' || c == ':' || c == ',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) => Ok(Self::new(a.parse()?, b.parse()?)),
            _ => Err(Error::Parse(format!(
                "expected a biome pair like 'desert-jungle', got '{}'",
                s
            ))),
        }
    }
}

/// True iff some neighbouring pair of segments equals the constraint's pair.
pub fn satisfies(layout: &Layout, constraint: &AdjacencyConstraint) -> bool {
    layout
        .adjacent_pairs()
        .any(|(left, right)| constraint.matches_pair(left, right))
}

/// True iff every constraint holds. Stops at the first failure.
pub fn satisfies_all(layout: &Layout, constraints: &[AdjacencyConstraint]) -> bool {
    constraints.iter().all(|c| satisfies(layout, c))
}
