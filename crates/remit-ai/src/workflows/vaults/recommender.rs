use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{DiasporaLocation, Vault};
use super::preferences::preferred_kinds;
use crate::workflows::emotion::{EmotionCategory, EmotionVector};

/// Score decay per preference-list position: the 1st preferred kind gets
/// full weight, the 2nd 0.85x, the 3rd 0.70x.
const RANK_DECAY: f32 = 0.15;

const MAX_RECOMMENDATIONS: usize = 3;

/// A catalog vault with its accumulated recommendation score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedVault {
    pub vault: Vault,
    pub score: f32,
}

/// Ranked suggestions for one emotion vector. `suggestion` is present only
/// when at least one vault scored positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSet {
    pub ranked: Vec<RankedVault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Rank the supplied catalog against an emotion vector and the sender's
/// location preferences. Only vaults with strictly positive score are
/// returned, capped at three.
pub fn recommend(
    emotions: &EmotionVector,
    location: DiasporaLocation,
    vaults: &[Vault],
) -> RecommendationSet {
    let mut kind_scores: BTreeMap<&'static str, f32> = BTreeMap::new();

    for (category, score) in emotions.iter() {
        for (idx, kind) in preferred_kinds(location, category).iter().enumerate() {
            let weight = score * (1.0 - idx as f32 * RANK_DECAY);
            *kind_scores.entry(*kind).or_insert(0.0) += weight;
        }
    }

    let mut scored: Vec<RankedVault> = vaults
        .iter()
        .map(|vault| RankedVault {
            vault: vault.clone(),
            score: kind_scores.get(vault.kind.as_str()).copied().unwrap_or(0.0),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let ranked: Vec<RankedVault> = scored
        .into_iter()
        .filter(|entry| entry.score > 0.0)
        .take(MAX_RECOMMENDATIONS)
        .collect();

    let suggestion = suggestion_text(emotions, location, &ranked);

    RecommendationSet { ranked, suggestion }
}

/// One fixed template per dominant emotion. No positive-scoring vault means
/// no suggestion at all.
fn suggestion_text(
    emotions: &EmotionVector,
    location: DiasporaLocation,
    ranked: &[RankedVault],
) -> Option<String> {
    let (dominant, score) = emotions.dominant();
    if score <= 0.0 {
        return None;
    }
    let top = ranked.first()?;

    let text = match dominant {
        EmotionCategory::Pride => format!(
            "High pride detected! Your story suggests strong commitment to education and \
             livelihood. Recommend the {} vault for community scholarships.",
            top.vault.kind
        ),
        EmotionCategory::Nostalgia => format!(
            "Nostalgia detected! Memories matter. Consider supporting water and agriculture \
             projects that connect to your roots in {}.",
            location.label()
        ),
        EmotionCategory::Love => "Love and family detected! Healthcare and education vaults help \
             family back home. Perfect for supporting loved ones' wellbeing."
            .to_string(),
        EmotionCategory::Hope => "Hope detected! Inspire change back home. Solar and education \
             projects bring sustainable futures to communities."
            .to_string(),
    };

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::vaults::domain::VaultId;

    fn vault(id: &str, kind: &str) -> Vault {
        Vault {
            id: VaultId(id.to_string()),
            kind: kind.to_string(),
            description: format!("{kind} projects"),
        }
    }

    fn catalog() -> Vec<Vault> {
        vec![
            vault("vault-education", "education"),
            vault("vault-healthcare", "healthcare"),
            vault("vault-water", "water"),
            vault("vault-solar", "solar_energy"),
            vault("vault-livelihood", "livelihood"),
            vault("vault-relief", "disaster_relief"),
            vault("vault-agriculture", "agriculture"),
        ]
    }

    #[test]
    fn hope_dominant_vector_recommends_solar_with_hope_template() {
        let emotions = EmotionVector {
            pride: 0.1,
            nostalgia: 0.1,
            love: 0.2,
            hope: 0.9,
        };

        let set = recommend(&emotions, DiasporaLocation::UnitedStates, &catalog());

        assert!(set
            .ranked
            .iter()
            .any(|entry| entry.vault.kind == "solar_energy" && entry.score > 0.0));
        let suggestion = set.suggestion.expect("hope suggestion present");
        assert!(suggestion.starts_with("Hope detected!"));
    }

    #[test]
    fn zero_score_vaults_are_excluded() {
        let emotions = EmotionVector {
            pride: 0.0,
            nostalgia: 0.0,
            love: 0.8,
            hope: 0.0,
        };
        // US love rows never reference water or agriculture.
        let set = recommend(&emotions, DiasporaLocation::UnitedStates, &catalog());

        assert!(!set.ranked.is_empty());
        assert!(set
            .ranked
            .iter()
            .all(|entry| entry.score > 0.0 && entry.vault.kind != "water"));
    }

    #[test]
    fn ranking_is_capped_at_three() {
        let emotions = EmotionVector {
            pride: 0.9,
            nostalgia: 0.8,
            love: 0.7,
            hope: 0.6,
        };

        let set = recommend(&emotions, DiasporaLocation::UnitedArabEmirates, &catalog());

        assert_eq!(set.ranked.len(), 3);
        assert!(set.ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn empty_catalog_yields_no_ranking_and_no_suggestion() {
        let emotions = EmotionVector::NEUTRAL_DEFAULT;

        let set = recommend(&emotions, DiasporaLocation::Canada, &[]);

        assert!(set.ranked.is_empty());
        assert!(set.suggestion.is_none());
    }

    #[test]
    fn unmatched_kinds_score_zero_and_drop_out() {
        let emotions = EmotionVector::NEUTRAL_DEFAULT;
        let strangers = vec![vault("vault-opera", "opera_house")];

        let set = recommend(&emotions, DiasporaLocation::UnitedStates, &strangers);

        assert!(set.ranked.is_empty());
        assert!(set.suggestion.is_none());
    }

    #[test]
    fn unknown_location_tag_uses_us_rows() {
        let emotions = EmotionVector {
            pride: 0.0,
            nostalgia: 0.9,
            love: 0.0,
            hope: 0.0,
        };
        let parsed = DiasporaLocation::parse("Mars Colony");
        assert_eq!(parsed, DiasporaLocation::Other);

        let other = recommend(&emotions, parsed, &catalog());
        let us = recommend(&emotions, DiasporaLocation::UnitedStates, &catalog());

        assert_eq!(other.ranked, us.ranked);
    }

    #[test]
    fn dominant_ties_break_in_category_order() {
        let emotions = EmotionVector {
            pride: 0.5,
            nostalgia: 0.5,
            love: 0.5,
            hope: 0.5,
        };

        let set = recommend(&emotions, DiasporaLocation::UnitedStates, &catalog());

        let suggestion = set.suggestion.expect("suggestion present");
        assert!(suggestion.starts_with("High pride detected!"));
    }
}
