//! Saving and loading found seeds.
//!
//! Results are written as pretty JSON wrapped in a small versioned envelope.
//! Only seeds and their layouts are stored; any layout can be regenerated
//! from its seed and size.

use std::fs;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::finder::SearchResult;
use crate::generator::generate;

/// Metadata wrapper for the save file format.
#[derive(Serialize, Deserialize)]
struct SeedSaveFile {
    /// Format version for forward compatibility
    version: u32,
    /// Local time the file was written
    saved_at: String,
    results: Vec<SearchResult>,
}

const SAVE_VERSION: u32 = 1;

/// Default output file name
pub const DEFAULT_RESULTS_FILE: &str = "found_seeds.json";

/// Save search results to a JSON file.
pub fn save_results(results: &[SearchResult], path: &Path) -> Result<()> {
    let save = SeedSaveFile {
        version: SAVE_VERSION,
        saved_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        results: results.to_vec(),
    };

    let json = serde_json::to_string_pretty(&save)?;
    fs::write(path, json)?;
    log::info!("Saved {} seeds to {}", results.len(), path.display());
    Ok(())
}

/// Load search results from a JSON file.
///
/// Each stored layout must be well formed. A layout that no longer matches
/// its regenerated seed is kept but logged, since the generator may have
/// changed since the file was written.
pub fn load_results(path: &Path) -> Result<Vec<SearchResult>> {
    let json = fs::read_to_string(path)?;
    let save: SeedSaveFile = serde_json::from_str(&json)?;

    if save.version > SAVE_VERSION {
        return Err(Error::SaveFormat(format!(
            "file version {} is newer than supported version {}",
            save.version, SAVE_VERSION
        )));
    }

    for result in &save.results {
        if !result.layout.is_well_formed() {
            return Err(Error::SaveFormat(format!(
                "seed {} has a malformed layout: {}",
                result.seed, result.layout
            )));
        }
        if generate(result.seed, result.size)? != result.layout {
            log::warn!("Seed {} no longer regenerates its saved layout", result.seed);
        }
    }

    Ok(save.results)
}
