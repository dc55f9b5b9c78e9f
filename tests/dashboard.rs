use chrono::Weekday;

use wellness_signal_core::dashboard;
use wellness_signal_core::forecast;
use wellness_signal_core::state::{Energy, UserState};
use wellness_signal_core::suggestions::Suggestion;
use wellness_signal_core::wellness::StressLevel;

#[test]
fn hard_day_summary() {
    let state = UserState {
        energy: Energy::Low,
        situations: vec!["overwhelmed".to_string(), "exhausted".to_string()],
        ..UserState::default()
    };
    let summary = dashboard::summarize(&state, Weekday::Mon);

    assert_eq!(summary.wellness_score, 30);
    assert_eq!(summary.stress, StressLevel::Elevated);
    assert_eq!(
        summary.energy_suggestions,
        vec![Suggestion::SlowBreaths, Suggestion::RestWithoutGoal]
    );
    assert_eq!(summary.situation_suggestions, vec![Suggestion::Breathing]);
    assert_eq!(summary.forecast, forecast::default_forecast());
}

#[test]
fn summary_serializes_camel_case() {
    let summary = dashboard::summarize(&UserState::default(), Weekday::Wed);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["wellnessScore"], 80);
    assert_eq!(json["stress"], "neutral");
    assert_eq!(json["situationSuggestions"][0], "breathing");
    assert_eq!(json["forecast"][0]["day"], "Mon");
    assert_eq!(json["forecast"].as_array().unwrap().len(), 7);
}
