use super::lexicon::{INTENSITY_MODIFIERS, LEXICON, NEGATION_WORDS};
use super::{EmotionCategory, EmotionVector};

const INTENSITY_WINDOW_CHARS: usize = 20;
const NEGATION_WINDOW_CHARS: usize = 30;
const NEGATION_MULTIPLIER: f32 = -0.5;
const BASE_CONFIDENCE: f32 = 0.7;
const FULL_CONFIDENCE_SENTENCES: f32 = 3.0;

/// Score free text against the static lexicon.
///
/// Contributions are floored at zero before accumulation, so a negated match
/// suppresses itself instead of subtracting from the category. Inputs with no
/// lexicon matches at all fall back to the neutral default vector so a blank
/// or out-of-vocabulary bio still produces a plausible baseline.
pub(crate) fn score_text(text: &str) -> EmotionVector {
    let sentences = split_sentences(text);
    let mut totals = [0f32; EmotionCategory::ALL.len()];

    for sentence in &sentences {
        let lowered = sentence.to_lowercase();
        for entry in LEXICON {
            for position in match_positions(&lowered, entry.phrase) {
                let intensity = intensity_multiplier(&lowered, position);
                let negation = if entry.negatable {
                    negation_multiplier(&lowered, position)
                } else {
                    1.0
                };
                let contribution = (entry.weight * intensity * negation).max(0.0);
                totals[entry.category.index()] += contribution;
            }
        }
    }

    let max_raw = totals.iter().fold(1f32, |acc, total| acc.max(*total));
    let confidence = (sentences.len() as f32 / FULL_CONFIDENCE_SENTENCES).min(1.0);
    let damping = BASE_CONFIDENCE + (1.0 - BASE_CONFIDENCE) * confidence;

    let scores = totals.map(|raw| ((raw / max_raw).min(1.0) * damping).clamp(0.0, 1.0));

    if scores.iter().all(|score| *score == 0.0) {
        return EmotionVector::NEUTRAL_DEFAULT;
    }

    EmotionVector::from_scores(scores)
}

/// Split on sentence terminators, dropping blank segments so runs of
/// punctuation do not produce empty sentences.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Byte offsets of every whole-word occurrence of `phrase` in `haystack`.
/// Both sides are expected lowercased; a match counts only when the adjacent
/// characters are non-alphanumeric, so "pride" never matches inside
/// "prideful".
fn match_positions(haystack: &str, phrase: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut search_from = 0;

    while let Some(found) = haystack[search_from..].find(phrase) {
        let start = search_from + found;
        let end = start + phrase.len();
        if word_boundary_before(haystack, start) && word_boundary_after(haystack, end) {
            positions.push(start);
        }
        search_from = end;
    }

    positions
}

fn word_boundary_before(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric())
}

fn word_boundary_after(text: &str, end: usize) -> bool {
    text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric())
}

/// The last `chars` characters preceding `position`.
fn window_before(text: &str, position: usize, chars: usize) -> &str {
    let prefix = &text[..position];
    let start = prefix
        .char_indices()
        .rev()
        .take(chars)
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(position);
    &prefix[start..]
}

fn intensity_multiplier(sentence: &str, position: usize) -> f32 {
    let window = window_before(sentence, position, INTENSITY_WINDOW_CHARS);
    for (modifier, multiplier) in INTENSITY_MODIFIERS {
        if window.contains(modifier) {
            return *multiplier;
        }
    }
    1.0
}

fn negation_multiplier(sentence: &str, position: usize) -> f32 {
    let window = window_before(sentence, position, NEGATION_WINDOW_CHARS);
    for negation in NEGATION_WORDS {
        if window.contains(negation) {
            return NEGATION_MULTIPLIER;
        }
    }
    1.0
}
