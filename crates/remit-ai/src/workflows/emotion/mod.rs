//! Emotion scoring for sender bios.
//!
//! The local engine is a deterministic keyword scorer over a static lexicon;
//! an optional remote ML analyzer can be delegated to first, with the local
//! engine as the fallback path.

pub(crate) mod lexicon;
pub mod remote;
pub mod repository;
pub mod router;
mod rules;
pub mod service;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use remote::{AnalysisOutcome, AnalyzerModel, EmotionAnalyzer, RemoteAnalyzer, RemoteAnalyzerError};
pub use repository::{ProfileRecord, ProfileRepository, ProfileRepositoryError};
pub use router::analysis_router;
pub use service::{AnalysisError, AnalysisService, MAX_ANALYSIS_TEXT_CHARS};

/// The closed set of emotion categories the platform scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Pride,
    Nostalgia,
    Love,
    Hope,
}

impl EmotionCategory {
    /// Canonical iteration order; ties elsewhere break on this order.
    pub const ALL: [EmotionCategory; 4] = [
        EmotionCategory::Pride,
        EmotionCategory::Nostalgia,
        EmotionCategory::Love,
        EmotionCategory::Hope,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EmotionCategory::Pride => "pride",
            EmotionCategory::Nostalgia => "nostalgia",
            EmotionCategory::Love => "love",
            EmotionCategory::Hope => "hope",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            EmotionCategory::Pride => 0,
            EmotionCategory::Nostalgia => 1,
            EmotionCategory::Love => 2,
            EmotionCategory::Hope => 3,
        }
    }
}

/// Per-category scores in [0, 1]. The vector is not required to sum to one;
/// the dominant category simply lands at (or near) the top of the range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionVector {
    pub pride: f32,
    pub nostalgia: f32,
    pub love: f32,
    pub hope: f32,
}

impl EmotionVector {
    /// Returned when a text contains no lexicon matches at all: unknown
    /// input still gets a plausible baseline rather than an all-zero vector.
    pub const NEUTRAL_DEFAULT: EmotionVector = EmotionVector {
        pride: 0.5,
        nostalgia: 0.5,
        love: 0.6,
        hope: 0.7,
    };

    pub fn get(&self, category: EmotionCategory) -> f32 {
        match category {
            EmotionCategory::Pride => self.pride,
            EmotionCategory::Nostalgia => self.nostalgia,
            EmotionCategory::Love => self.love,
            EmotionCategory::Hope => self.hope,
        }
    }

    /// Iterate categories in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, f32)> + '_ {
        EmotionCategory::ALL
            .iter()
            .map(|category| (*category, self.get(*category)))
    }

    /// The highest-scoring category; ties break on canonical order.
    pub fn dominant(&self) -> (EmotionCategory, f32) {
        let mut best = (EmotionCategory::Pride, self.pride);
        for (category, score) in self.iter().skip(1) {
            if score > best.1 {
                best = (category, score);
            }
        }
        best
    }

    /// Clamp every score into [0, 1]; applied to externally supplied vectors.
    pub fn clamped(self) -> Self {
        Self {
            pride: self.pride.clamp(0.0, 1.0),
            nostalgia: self.nostalgia.clamp(0.0, 1.0),
            love: self.love.clamp(0.0, 1.0),
            hope: self.hope.clamp(0.0, 1.0),
        }
    }

    pub(crate) fn from_scores(scores: [f32; 4]) -> Self {
        Self {
            pride: scores[EmotionCategory::Pride.index()],
            nostalgia: scores[EmotionCategory::Nostalgia.index()],
            love: scores[EmotionCategory::Love.index()],
            hope: scores[EmotionCategory::Hope.index()],
        }
    }
}

/// Stateless keyword scorer over the static lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmotionEngine;

impl EmotionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score free text into an emotion vector. Deterministic: identical
    /// input always yields an identical vector.
    pub fn analyze(&self, text: &str) -> EmotionVector {
        rules::score_text(text)
    }
}
