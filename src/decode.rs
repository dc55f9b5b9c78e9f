//! WAV decoding into a mono sample buffer.
//!
//! Only the first channel is kept. Integer PCM is scaled into [-1, 1] by its bit depth.
//! The reader is owned by the decode call and dropped on every return path.

use std::io::{Cursor, Read};
use std::path::Path;

use hound::{SampleFormat, WavReader};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("wav decode failed: {0}")]
    Wav(#[from] hound::Error),
    #[error("unsupported sample format: {bits}-bit {format:?}")]
    UnsupportedFormat { bits: u16, format: SampleFormat },
    #[error("audio has no channels")]
    NoChannels,
}

/// Decoded first-channel samples plus the sample rate reported by the container.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioClip {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

pub fn decode_wav_bytes(bytes: &[u8]) -> Result<AudioClip, DecodeError> {
    let reader = WavReader::new(Cursor::new(bytes))?;
    read_first_channel(reader)
}

pub fn decode_wav_file(path: impl AsRef<Path>) -> Result<AudioClip, DecodeError> {
    let reader = WavReader::open(path.as_ref())?;
    read_first_channel(reader)
}

fn read_first_channel<R: Read>(mut reader: WavReader<R>) -> Result<AudioClip, DecodeError> {
    let spec = reader.spec();
    let channels = spec.channels as usize;
    if channels == 0 {
        return Err(DecodeError::NoChannels);
    }

    let samples = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .step_by(channels)
            .collect::<Result<Vec<_>, _>>()?,
        (SampleFormat::Int, bits @ 1..=32) => {
            let scale = (1_i64 << (bits - 1)) as f32;
            reader
                .samples::<i32>()
                .step_by(channels)
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<Vec<_>, _>>()?
        }
        (format, bits) => return Err(DecodeError::UnsupportedFormat { bits, format }),
    };

    log::debug!(
        "decoded wav: rate={} channels={} bits={} samples={}",
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        samples.len()
    );

    Ok(AudioClip {
        samples,
        sample_rate: spec.sample_rate,
    })
}
