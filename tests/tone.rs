use wellness_signal_core::tone::{self, Tone, ToneResult};

#[test]
fn quiet_clips_are_calm() {
    assert_eq!(tone::classify(0.004, 0.0), Tone::Calm);
    // Loudness alone decides calm, even with erratic crossings.
    assert_eq!(tone::classify(0.004, 0.9), Tone::Calm);
}

#[test]
fn calm_boundary_is_exclusive() {
    assert_eq!(tone::classify(0.005, 0.0), Tone::Neutral);
}

#[test]
fn loud_or_erratic_clips_are_tense() {
    assert_eq!(tone::classify(0.021, 0.0), Tone::Tense);
    assert_eq!(tone::classify(0.01, 0.2), Tone::Tense);
}

#[test]
fn tense_boundaries_are_exclusive() {
    assert_eq!(tone::classify(0.02, 0.0), Tone::Neutral);
    assert_eq!(tone::classify(0.01, 0.15), Tone::Neutral);
}

#[test]
fn tone_result_carries_its_inputs() {
    let result = ToneResult::from_stats(0.03, 0.05);
    assert_eq!(result.tone, Tone::Tense);
    assert_eq!(result.rms, 0.03);
    assert_eq!(result.zcr, 0.05);
    assert_eq!(ToneResult::neutral().tone, Tone::Neutral);
}

#[test]
fn tones_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&Tone::Tense).unwrap(), "\"tense\"");
    let parsed: Tone = serde_json::from_str("\"calm\"").unwrap();
    assert_eq!(parsed, Tone::Calm);
    assert_eq!(Tone::Neutral.to_string(), "neutral");
}
