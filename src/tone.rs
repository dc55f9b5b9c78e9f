use std::fmt;

use serde::{Deserialize, Serialize};

/// Below this loudness a clip is calm, whatever its zero-crossing rate.
pub const CALM_RMS_MAX: f32 = 0.005;
/// Above this loudness a clip is tense.
pub const TENSE_RMS_MIN: f32 = 0.02;
/// Above this zero-crossing rate a clip is tense.
pub const TENSE_ZCR_MIN: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Calm,
    Tense,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Calm => "calm",
            Tone::Tense => "tense",
            Tone::Neutral => "neutral",
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Neutral
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneResult {
    pub rms: f32,
    pub zcr: f32,
    pub tone: Tone,
}

impl ToneResult {
    pub fn from_stats(rms: f32, zcr: f32) -> Self {
        Self {
            rms,
            zcr,
            tone: classify(rms, zcr),
        }
    }

    /// Zeroed neutral result used when there is nothing to analyze.
    pub fn neutral() -> Self {
        Self {
            rms: 0.0,
            zcr: 0.0,
            tone: Tone::Neutral,
        }
    }
}

/// First match wins: quiet is calm, then loud or erratic is tense.
pub fn classify(rms: f32, zcr: f32) -> Tone {
    if rms < CALM_RMS_MAX {
        Tone::Calm
    } else if rms > TENSE_RMS_MIN || zcr > TENSE_ZCR_MIN {
        Tone::Tense
    } else {
        Tone::Neutral
    }
}
