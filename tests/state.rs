use wellness_signal_core::state::{Energy, JournalEntry, UserState};
use wellness_signal_core::tone::Tone;

#[test]
fn partial_snapshot_loads_with_defaults() {
    let state: UserState = serde_json::from_str(r#"{"situations": ["steady"]}"#).unwrap();
    assert_eq!(state.energy, Energy::Normal);
    assert_eq!(state.situations, vec!["steady"]);
    assert!(state.audios.is_empty());
    assert!(!state.has_history());
}

#[test]
fn full_snapshot_loads() {
    let raw = r#"{
        "energyLevel": "low",
        "situations": ["overwhelmed", "exhausted"],
        "audios": [
            {"tone": "tense", "timestamp": "2024-03-01T09:30:00Z", "fileRef": "audio/u1/1.webm"},
            {"timestamp": "2024-03-02T09:30:00Z"}
        ],
        "journals": [{"content": "long day", "summary": "tired"}]
    }"#;
    let state: UserState = serde_json::from_str(raw).unwrap();

    assert_eq!(state.energy, Energy::Low);
    assert!(state.has_situation("exhausted"));
    assert_eq!(state.audios[0].tone, Some(Tone::Tense));
    assert_eq!(state.audios[0].file_ref.as_deref(), Some("audio/u1/1.webm"));
    assert_eq!(state.audios[1].tone, None);
    assert_eq!(state.journals[0].text(), "tired");
    assert!(state.has_history());
}

#[test]
fn journal_text_falls_back_to_content() {
    assert_eq!(JournalEntry::new("all good").text(), "all good");
}

#[test]
fn energy_follows_situational_answer() {
    assert_eq!(Energy::from_situation("overwhelmed"), Energy::Low);
    assert_eq!(Energy::from_situation("exhausted"), Energy::Low);
    assert_eq!(Energy::from_situation("steady"), Energy::Normal);
}
