//! Static keyword lexicon backing the local emotion scorer.
//!
//! All tables are iterated in declaration order; scoring results depend on
//! that order (first intensity modifier wins), so entries must not be
//! reordered casually.

use super::EmotionCategory;

/// One weighted phrase in the scoring lexicon.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LexiconEntry {
    pub(crate) category: EmotionCategory,
    pub(crate) phrase: &'static str,
    pub(crate) weight: f32,
    pub(crate) negatable: bool,
}

const fn entry(
    category: EmotionCategory,
    phrase: &'static str,
    weight: f32,
    negatable: bool,
) -> LexiconEntry {
    LexiconEntry {
        category,
        phrase,
        weight,
        negatable,
    }
}

/// Phrase table per category. Weights sit in (0, 1]; `negatable` marks
/// phrases whose meaning flips under a nearby negation ("not proud"),
/// as opposed to anchors like "childhood" that stay nostalgic regardless.
pub(crate) const LEXICON: &[LexiconEntry] = &[
    // pride
    entry(EmotionCategory::Pride, "proud", 0.9, true),
    entry(EmotionCategory::Pride, "proud of", 1.0, true),
    entry(EmotionCategory::Pride, "achievement", 0.8, true),
    entry(EmotionCategory::Pride, "accomplished", 0.9, true),
    entry(EmotionCategory::Pride, "success", 0.7, true),
    entry(EmotionCategory::Pride, "successful", 0.8, true),
    entry(EmotionCategory::Pride, "triumph", 0.95, true),
    entry(EmotionCategory::Pride, "excel", 0.8, true),
    entry(EmotionCategory::Pride, "excellence", 0.85, true),
    entry(EmotionCategory::Pride, "honor", 0.9, true),
    entry(EmotionCategory::Pride, "dignity", 0.85, true),
    entry(EmotionCategory::Pride, "strong", 0.6, true),
    entry(EmotionCategory::Pride, "strong tradition", 0.85, true),
    entry(EmotionCategory::Pride, "heritage", 0.75, false),
    entry(EmotionCategory::Pride, "legacy", 0.8, false),
    entry(EmotionCategory::Pride, "succeed", 0.8, true),
    entry(EmotionCategory::Pride, "superior", 0.75, true),
    // nostalgia
    entry(EmotionCategory::Nostalgia, "remember", 0.75, true),
    entry(EmotionCategory::Nostalgia, "childhood", 0.85, false),
    entry(EmotionCategory::Nostalgia, "past", 0.6, false),
    entry(EmotionCategory::Nostalgia, "old days", 0.9, false),
    entry(EmotionCategory::Nostalgia, "memories", 0.85, false),
    entry(EmotionCategory::Nostalgia, "miss", 0.85, true),
    entry(EmotionCategory::Nostalgia, "missing", 0.85, true),
    entry(EmotionCategory::Nostalgia, "bygone", 0.9, false),
    entry(EmotionCategory::Nostalgia, "reminisce", 0.9, false),
    entry(EmotionCategory::Nostalgia, "homesick", 0.95, true),
    entry(EmotionCategory::Nostalgia, "home", 0.5, false),
    entry(EmotionCategory::Nostalgia, "hometown", 0.8, false),
    entry(EmotionCategory::Nostalgia, "back home", 0.9, false),
    entry(EmotionCategory::Nostalgia, "roots", 0.75, false),
    entry(EmotionCategory::Nostalgia, "old times", 0.85, false),
    entry(EmotionCategory::Nostalgia, "the good old days", 0.95, false),
    entry(EmotionCategory::Nostalgia, "used to", 0.7, false),
    entry(EmotionCategory::Nostalgia, "once", 0.6, false),
    entry(EmotionCategory::Nostalgia, "childhood days", 0.95, false),
    // love
    entry(EmotionCategory::Love, "love", 0.95, true),
    entry(EmotionCategory::Love, "loving", 0.85, true),
    entry(EmotionCategory::Love, "care", 0.75, true),
    entry(EmotionCategory::Love, "caring", 0.75, true),
    entry(EmotionCategory::Love, "family", 0.6, false),
    entry(EmotionCategory::Love, "dear", 0.8, true),
    entry(EmotionCategory::Love, "affection", 0.9, true),
    entry(EmotionCategory::Love, "affectionate", 0.9, true),
    entry(EmotionCategory::Love, "cherish", 0.9, true),
    entry(EmotionCategory::Love, "heart", 0.7, false),
    entry(EmotionCategory::Love, "support", 0.7, true),
    entry(EmotionCategory::Love, "compassion", 0.85, true),
    entry(EmotionCategory::Love, "empathy", 0.85, true),
    entry(EmotionCategory::Love, "tender", 0.8, true),
    entry(EmotionCategory::Love, "devotion", 0.95, true),
    entry(EmotionCategory::Love, "devoted", 0.95, true),
    entry(EmotionCategory::Love, "adore", 0.95, true),
    entry(EmotionCategory::Love, "beloved", 0.95, false),
    entry(EmotionCategory::Love, "warmth", 0.85, false),
    entry(EmotionCategory::Love, "close to", 0.75, true),
    entry(EmotionCategory::Love, "bond", 0.8, false),
    // hope
    entry(EmotionCategory::Hope, "hope", 0.9, true),
    entry(EmotionCategory::Hope, "hopeful", 0.9, true),
    entry(EmotionCategory::Hope, "future", 0.6, false),
    entry(EmotionCategory::Hope, "better", 0.65, true),
    entry(EmotionCategory::Hope, "improve", 0.7, true),
    entry(EmotionCategory::Hope, "improvement", 0.75, true),
    entry(EmotionCategory::Hope, "dream", 0.75, false),
    entry(EmotionCategory::Hope, "aspire", 0.85, true),
    entry(EmotionCategory::Hope, "aspiring", 0.8, true),
    entry(EmotionCategory::Hope, "believe", 0.65, true),
    entry(EmotionCategory::Hope, "possibility", 0.7, false),
    entry(EmotionCategory::Hope, "achieve", 0.75, true),
    entry(EmotionCategory::Hope, "tomorrow", 0.7, false),
    entry(EmotionCategory::Hope, "positive", 0.65, true),
    entry(EmotionCategory::Hope, "optimistic", 0.85, true),
    entry(EmotionCategory::Hope, "optimism", 0.85, true),
    entry(EmotionCategory::Hope, "change", 0.6, false),
    entry(EmotionCategory::Hope, "progress", 0.75, true),
    entry(EmotionCategory::Hope, "new beginning", 0.9, false),
    entry(EmotionCategory::Hope, "opportunities", 0.75, false),
    entry(EmotionCategory::Hope, "potential", 0.7, false),
];

/// Intensity modifiers checked against the 20 characters before a match.
/// The first table entry found in the window wins.
pub(crate) const INTENSITY_MODIFIERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("deeply", 1.4),
    ("truly", 1.2),
    ("really", 1.25),
    ("so", 1.2),
    ("incredibly", 1.5),
    ("absolutely", 1.3),
    ("completely", 1.2),
    ("totally", 1.2),
];

/// Negation cues checked against the 30 characters before a negatable match.
pub(crate) const NEGATION_WORDS: &[&str] = &[
    "not",
    "no",
    "never",
    "don't",
    "didn't",
    "won't",
    "wouldn't",
    "can't",
    "couldn't",
    "isn't",
    "aren't",
];
