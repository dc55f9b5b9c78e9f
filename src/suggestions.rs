use std::fmt;

use serde::{Serialize, Serializer};

use crate::state::{EXHAUSTED, Energy, FOCUSED, OVERWHELMED};

/// Recommended actions. Lists returned from this module are ordered; the first is primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    Breathing,
    Pause,
    CalmAudio,
    SlowBreaths,
    RestWithoutGoal,
    ProtectFocus,
    SilenceNotifications,
    ShortWalk,
    Stretch,
}

impl Suggestion {
    pub fn key(&self) -> &'static str {
        match self {
            Suggestion::Breathing => "breathing",
            Suggestion::Pause => "pause",
            Suggestion::CalmAudio => "calm-audio",
            Suggestion::SlowBreaths => "slow-breaths",
            Suggestion::RestWithoutGoal => "rest",
            Suggestion::ProtectFocus => "protect-focus",
            Suggestion::SilenceNotifications => "silence-notifications",
            Suggestion::ShortWalk => "short-walk",
            Suggestion::Stretch => "stretch",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Suggestion::Breathing => "Try a one-minute breathing exercise",
            Suggestion::Pause => "Take a short pause",
            Suggestion::CalmAudio => "Play some calm audio",
            Suggestion::SlowBreaths => "Take three slow breaths",
            Suggestion::RestWithoutGoal => "Rest for five minutes with nothing to do",
            Suggestion::ProtectFocus => "Block a focus window and guard it",
            Suggestion::SilenceNotifications => "Silence notifications until your next break",
            Suggestion::ShortWalk => "Take a short walk",
            Suggestion::Stretch => "Stretch for two minutes",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// The two call shapes the dashboard and check-in flows use.
#[derive(Debug, Clone, Copy)]
pub enum SuggestionInput<'a> {
    Energy(Energy),
    Situations(&'a [String]),
}

pub fn personalize(input: SuggestionInput<'_>) -> Vec<Suggestion> {
    match input {
        SuggestionInput::Energy(energy) => for_energy(energy),
        SuggestionInput::Situations(situations) => for_situations(situations),
    }
}

pub fn for_energy(energy: Energy) -> Vec<Suggestion> {
    match energy {
        Energy::Low => vec![Suggestion::SlowBreaths, Suggestion::RestWithoutGoal],
        Energy::High => vec![Suggestion::ProtectFocus, Suggestion::SilenceNotifications],
        Energy::Normal => vec![Suggestion::ShortWalk, Suggestion::Stretch],
    }
}

pub fn for_situations(situations: &[String]) -> Vec<Suggestion> {
    let has = |tag: &str| situations.iter().any(|s| s == tag);

    if situations.is_empty() || has(OVERWHELMED) || has(EXHAUSTED) {
        vec![Suggestion::Breathing]
    } else if has(FOCUSED) {
        vec![Suggestion::Pause, Suggestion::CalmAudio]
    } else {
        vec![Suggestion::Pause]
    }
}
