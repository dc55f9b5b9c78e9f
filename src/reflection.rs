use crate::state::UserState;
use crate::text_tone;

const SEPARATOR: &str = " — ";

/// One-line end-of-day summary combining check-ins with the tone of the written reflection.
pub fn auto_summary(state: &UserState, text: &str) -> String {
    let mut parts = Vec::new();

    if !state.situations.is_empty() {
        parts.push(format!("You reflected on: {}", state.situations.join(", ")));
    }

    let tone = text_tone::analyze_text_tone(text);
    let keywords = text_tone::extract_stress_keywords(text);

    parts.push(format!("Energy: {}", state.energy));
    parts.push(format!(
        "Tone: {} (score {}%)",
        tone.tone,
        (tone.score * 100.0).round() as u32
    ));
    if !keywords.is_empty() {
        parts.push(format!("Keywords: {}", keywords.join(", ")));
    }

    parts.join(SEPARATOR)
}
