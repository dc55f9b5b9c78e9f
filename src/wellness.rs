//! Two independent views of how the user is doing.
//!
//! The numeric wellness score and the categorical stress level are separate heuristics and may
//! disagree; for example a single `exhausted` tag lowers the score while the stress level stays
//! neutral until two situations are recorded.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::{EXHAUSTED, Energy, OVERWHELMED, UserState};

pub const BASE_SCORE: i32 = 80;
pub const MIN_SCORE: i32 = 30;
pub const MAX_SCORE: i32 = 95;
/// Situations needed before a stress level other than neutral is reported.
pub const MIN_SITUATIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Neutral,
    Elevated,
    Normal,
}

impl StressLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Neutral => "neutral",
            StressLevel::Elevated => "elevated",
            StressLevel::Normal => "normal",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn infer_wellness_score(state: &UserState) -> u8 {
    let mut score = BASE_SCORE;

    match state.energy {
        Energy::Low => score -= 25,
        Energy::High => score += 5,
        Energy::Normal => {}
    }

    if state.has_situation(OVERWHELMED) {
        score -= 20;
    }
    if state.has_situation(EXHAUSTED) {
        score -= 25;
    }

    score.clamp(MIN_SCORE, MAX_SCORE) as u8
}

pub fn infer_stress(state: &UserState) -> StressLevel {
    // cold start
    if state.situations.len() < MIN_SITUATIONS {
        return StressLevel::Neutral;
    }
    if state.energy == Energy::Low {
        return StressLevel::Elevated;
    }
    StressLevel::Normal
}
