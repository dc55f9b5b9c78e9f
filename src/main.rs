use std::fs;

use anyhow::{Context, Result};
use serde::Serialize;

use wellness_signal_core::{audio, config, dashboard, forecast, logging, reflection, state::UserState};

#[derive(Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    audio: Option<audio::AudioAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dashboard: Option<dashboard::DashboardSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reflection: Option<String>,
}

fn main() -> Result<()> {
    let cfg = config::from_env_or_args();
    logging::init(&cfg.log_level);

    let audio = cfg.wav_path.as_deref().map(|path| {
        log::info!("analyzing recording {}", path);
        audio::analyze_wav_file(path)
    });

    let state = match cfg.state_path.as_deref() {
        Some(path) => load_state(path)?,
        None => UserState::default(),
    };

    let today = cfg.today.unwrap_or_else(forecast::today_local);
    let report = Report {
        audio,
        dashboard: Some(dashboard::summarize(&state, today)),
        reflection: cfg
            .reflection
            .as_deref()
            .map(|text| reflection::auto_summary(&state, text)),
    };

    let out = if cfg.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", out);
    Ok(())
}

fn load_state(path: &str) -> Result<UserState> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read state from {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse state in {}", path))
}
