use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alignment::chunk_align::DEFAULT_FALLBACK_CHUNK_SECS;
use crate::alignment::merge::{ParticleTable, DEFAULT_MAX_MERGE_CHARS, DEFAULT_PARTICLES};
use crate::error::AlignError;

/// Which pairwise merge policy the pipeline applies after word alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Length-only pairing of short adjacent words.
    Short,
    /// Length pairing refined with comma and Korean particle rules.
    Natural,
    /// Emit every aligned word as its own chunk.
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    pub merge_strategy: MergeStrategy,
    /// Words at or under this trimmed character count may pair up.
    pub max_merge_chars: usize,
    /// Duration of synthetic intervals when the custom-chunk aligner runs out
    /// of tokens.
    pub fallback_chunk_secs: f64,
    /// Reproduce the legacy behavior of reporting a sentence as complete even
    /// when the timing source ran out and trailing words were dropped.
    pub legacy_silent_drop: bool,
    /// Particle inventory for the natural merge. Replacing this changes merge
    /// behavior only; alignment is language-agnostic.
    pub particles: Vec<String>,
}

impl CaptionConfig {
    pub const DEFAULT_MAX_MERGE_CHARS: usize = DEFAULT_MAX_MERGE_CHARS;
    pub const DEFAULT_FALLBACK_CHUNK_SECS: f64 = DEFAULT_FALLBACK_CHUNK_SECS;

    pub fn load(path: &Path) -> Result<Self, AlignError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| AlignError::io("read caption config", e))?;
        serde_json::from_str(&data).map_err(|e| AlignError::json("parse caption config", e))
    }

    pub fn particle_table(&self) -> ParticleTable {
        ParticleTable::new(self.particles.iter().cloned())
    }

    pub(crate) fn validate(&self) -> Result<(), AlignError> {
        if self.max_merge_chars == 0 {
            return Err(AlignError::invalid_config(
                "max_merge_chars must be at least 1",
            ));
        }
        if !self.fallback_chunk_secs.is_finite() || self.fallback_chunk_secs <= 0.0 {
            return Err(AlignError::invalid_config(format!(
                "fallback_chunk_secs must be a positive duration, got {}",
                self.fallback_chunk_secs
            )));
        }
        Ok(())
    }
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            merge_strategy: MergeStrategy::Natural,
            max_merge_chars: Self::DEFAULT_MAX_MERGE_CHARS,
            fallback_chunk_secs: Self::DEFAULT_FALLBACK_CHUNK_SECS,
            legacy_silent_drop: false,
            particles: DEFAULT_PARTICLES.iter().map(|p| p.to_string()).collect(),
        }
    }
}
