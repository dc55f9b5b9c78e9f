//! Frame statistics over a decoded mono clip.
//!
//! The clip is cut into contiguous frames of [`FRAME_SIZE`] samples. The last frame keeps its
//! own shorter length. Each frame yields loudness (RMS) and zero-crossing rate, and the clip
//! level values are plain means over frames, so a short tail frame weighs as much as a full one.

use serde::{Deserialize, Serialize};

use crate::metrics;

pub const FRAME_SIZE: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    pub rms: f32,
    pub zcr: f32,
}

/// Clip-level averages of the per-frame statistics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClipStats {
    pub rms: f32,
    pub zcr: f32,
}

pub fn frame_stats(samples: &[f32]) -> Vec<FrameStats> {
    samples.chunks(FRAME_SIZE).map(analyze_frame).collect()
}

pub fn analyze_frame(frame: &[f32]) -> FrameStats {
    let len = frame.len().max(1) as f32;

    let sum_squares: f32 = frame.iter().map(|v| v * v).sum();
    let crossings = frame
        .windows(2)
        .filter(|pair| crosses_zero(pair[0], pair[1]))
        .count();

    FrameStats {
        rms: (sum_squares / len).sqrt(),
        zcr: crossings as f32 / len,
    }
}

pub fn aggregate(frames: &[FrameStats]) -> ClipStats {
    ClipStats {
        rms: metrics::safe_mean(frames.iter().map(|f| f.rms)),
        zcr: metrics::safe_mean(frames.iter().map(|f| f.zcr)),
    }
}

/// Frames the clip and aggregates in one pass.
pub fn clip_stats(samples: &[f32]) -> ClipStats {
    let frames = frame_stats(samples);
    let stats = aggregate(&frames);
    log::debug!(
        "clip stats: samples={} frames={} rms={:.5} zcr={:.4}",
        samples.len(),
        frames.len(),
        stats.rms,
        stats.zcr
    );
    stats
}

// Zero counts as non-negative.
fn crosses_zero(prev: f32, next: f32) -> bool {
    (prev >= 0.0 && next < 0.0) || (prev < 0.0 && next >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::crosses_zero;

    #[test]
    fn zero_is_non_negative() {
        assert!(!crosses_zero(0.0, 0.5));
        assert!(crosses_zero(0.0, -0.5));
        assert!(crosses_zero(-0.5, 0.0));
        assert!(!crosses_zero(-0.1, -0.5));
    }
}
