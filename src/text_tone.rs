//! Lexical tone heuristic for free text.
//!
//! Matching is lower-cased substring containment, so an entry also matches inside longer words
//! ("fine" inside "finest"). Each lexicon entry contributes at most once per text.

use serde::{Deserialize, Serialize};

use crate::metrics::clamp01;
use crate::tone::Tone;

pub const BASELINE_SCORE: f32 = 0.5;
pub const WORD_WEIGHT: f32 = 0.12;
pub const TENSE_SCORE_MIN: f32 = 0.65;
pub const CALM_SCORE_MAX: f32 = 0.35;

// "stressed" is listed twice and therefore weighs double.
pub const TENSE_WORDS: &[&str] = &[
    "anxious",
    "anxiety",
    "stressed",
    "stressed",
    "angry",
    "upset",
    "worried",
    "tense",
    "panic",
    "overwhelmed",
    "depressed",
];

pub const CALM_WORDS: &[&str] = &[
    "calm", "relaxed", "peace", "grateful", "happy", "content", "okay", "fine",
];

pub const STRESS_KEYWORDS: &[&str] = &[
    "deadline",
    "pressure",
    "overwhelmed",
    "panic",
    "anxious",
    "stress",
    "sick",
    "tired",
    "sleep",
    "insomnia",
    "angry",
    "fight",
    "argument",
];

/// `score` is a tension index in [0, 1], not a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextToneResult {
    pub tone: Tone,
    pub score: f32,
}

pub fn analyze_text_tone(text: &str) -> TextToneResult {
    if text.trim().is_empty() {
        return TextToneResult {
            tone: Tone::Neutral,
            score: 0.0,
        };
    }

    let lowered = text.to_lowercase();
    let tense_hits = count_present(&lowered, TENSE_WORDS);
    let calm_hits = count_present(&lowered, CALM_WORDS);

    let mut score = BASELINE_SCORE;
    score += WORD_WEIGHT * tense_hits as f32;
    score -= WORD_WEIGHT * calm_hits as f32;
    let score = clamp01(score);

    let tone = if score > TENSE_SCORE_MIN {
        Tone::Tense
    } else if score < CALM_SCORE_MAX {
        Tone::Calm
    } else {
        Tone::Neutral
    };

    log::debug!(
        "text tone: tense_hits={} calm_hits={} score={:.2} tone={}",
        tense_hits,
        calm_hits,
        score,
        tone
    );

    TextToneResult { tone, score }
}

/// Every stress keyword present in `text`, in keyword-list order.
pub fn extract_stress_keywords(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    STRESS_KEYWORDS
        .iter()
        .copied()
        .filter(|k| lowered.contains(k))
        .collect()
}

fn count_present(haystack: &str, lexicon: &[&str]) -> usize {
    lexicon.iter().filter(|w| haystack.contains(*w)).count()
}
