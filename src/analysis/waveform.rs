use crate::audio::SampleBuffer;
use serde::{Deserialize, Serialize};

/// Waveform data for UI visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveformData {
    /// Peak amplitude values per bucket (normalized to 0.0-1.0)
    pub peaks: Vec<f32>,
    /// Total audio duration in seconds
    pub duration: f64,
    /// Milliseconds per bucket
    pub bucket_ms: u32,
}

/// Extracts waveform peak data from a decoded buffer
/// Returns normalized peak values for UI rendering
pub fn extract_waveform(buffer: &SampleBuffer, bucket_ms: u32) -> Result<WaveformData, String> {
    log::info!(
        "Extracting waveform: {} samples at {} Hz, bucket_ms: {}",
        buffer.len(),
        buffer.sample_rate,
        bucket_ms
    );

    let sample_rate = buffer.sample_rate as f64;
    let samples_per_bucket = (sample_rate * bucket_ms as f64 / 1000.0) as usize;

    if samples_per_bucket == 0 {
        return Err("Bucket size too small for sample rate".to_string());
    }

    let duration = buffer.duration();

    // Mix down to mono by averaging channels at each sample index
    let mono_samples: Vec<f32> = if buffer.channel_count() > 1 {
        let channel_count = buffer.channel_count() as f32;
        (0..buffer.len())
            .map(|i| {
                let sum: f32 = buffer.channels.iter().map(|ch| ch[i]).sum();
                sum / channel_count
            })
            .collect()
    } else {
        buffer.channels.first().cloned().unwrap_or_default()
    };

    let peaks: Vec<f32> = mono_samples
        .chunks(samples_per_bucket)
        .map(|bucket| {
            bucket
                .iter()
                .map(|s| s.abs())
                .fold(0.0f32, |a, b| a.max(b))
                .min(1.0)
        })
        .collect();

    log::info!(
        "Extracted {} waveform peaks for {:.2}s audio",
        peaks.len(),
        duration
    );

    Ok(WaveformData {
        peaks,
        duration,
        bucket_ms,
    })
}
