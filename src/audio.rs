use std::path::Path;

use serde::Serialize;

use crate::decode::{self, AudioClip, DecodeError};
use crate::frames;
use crate::tone::ToneResult;

/// Outcome of analyzing one recording. Decode failures are carried as a value, not raised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AudioAnalysis {
    Analyzed(ToneResult),
    Empty,
    Failed { error: String },
}

impl AudioAnalysis {
    pub fn tone_result(&self) -> Option<ToneResult> {
        match self {
            AudioAnalysis::Analyzed(result) => Some(*result),
            _ => None,
        }
    }

    pub fn tone_or_default(&self) -> ToneResult {
        self.tone_result().unwrap_or_else(ToneResult::neutral)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, AudioAnalysis::Failed { .. })
    }
}

impl From<DecodeError> for AudioAnalysis {
    fn from(err: DecodeError) -> Self {
        log::warn!("audio analysis skipped: {}", err);
        AudioAnalysis::Failed {
            error: err.to_string(),
        }
    }
}

pub fn analyze_samples(samples: &[f32]) -> AudioAnalysis {
    if samples.is_empty() {
        log::debug!("audio analysis: empty sample buffer");
        return AudioAnalysis::Empty;
    }
    let stats = frames::clip_stats(samples);
    AudioAnalysis::Analyzed(ToneResult::from_stats(stats.rms, stats.zcr))
}

pub fn analyze_clip(clip: &AudioClip) -> AudioAnalysis {
    analyze_samples(&clip.samples)
}

pub fn analyze_wav_bytes(bytes: &[u8]) -> AudioAnalysis {
    match decode::decode_wav_bytes(bytes) {
        Ok(clip) => analyze_clip(&clip),
        Err(err) => err.into(),
    }
}

pub fn analyze_wav_file(path: impl AsRef<Path>) -> AudioAnalysis {
    match decode::decode_wav_file(path) {
        Ok(clip) => analyze_clip(&clip),
        Err(err) => err.into(),
    }
}
