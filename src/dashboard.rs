use chrono::Weekday;
use serde::Serialize;

use crate::forecast::{self, ForecastDay};
use crate::state::UserState;
use crate::suggestions::{self, Suggestion};
use crate::wellness::{self, StressLevel};

/// Everything the dashboard derives from one snapshot. Recomputed on every load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub wellness_score: u8,
    pub stress: StressLevel,
    pub energy_suggestions: Vec<Suggestion>,
    pub situation_suggestions: Vec<Suggestion>,
    pub forecast: Vec<ForecastDay>,
}

pub fn summarize(state: &UserState, today: Weekday) -> DashboardSummary {
    let summary = DashboardSummary {
        wellness_score: wellness::infer_wellness_score(state),
        stress: wellness::infer_stress(state),
        energy_suggestions: suggestions::for_energy(state.energy),
        situation_suggestions: suggestions::for_situations(&state.situations),
        forecast: forecast::generate_forecast(state, today),
    };
    log::info!(
        "dashboard: score={} stress={} energy={}",
        summary.wellness_score,
        summary.stress,
        state.energy
    );
    summary
}
