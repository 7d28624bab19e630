use crate::audio::SampleBuffer;
use serde::{Deserialize, Serialize};

/// Configuration for silence detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SilenceDetectionConfig {
    /// Amplitude below which a sample counts as silent (e.g. 0.01)
    pub threshold: f32,
    /// Minimum silence duration in seconds (e.g. 0.5 for 500ms)
    pub min_silence_duration: f64,
    /// Samples skipped between amplitude checks. Larger steps scan faster
    /// but bound boundary precision to `step / sample_rate` seconds;
    /// 1 checks every sample.
    pub step: usize,
}

impl Default for SilenceDetectionConfig {
    fn default() -> Self {
        SilenceDetectionConfig {
            threshold: 0.01,
            min_silence_duration: 0.5,
            step: 100,
        }
    }
}

/// A half-open time span `[start, end)` in seconds classified as silent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SilenceRegion {
    pub start: f64,
    pub end: f64,
}

impl SilenceRegion {
    /// Returns the length of this region in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Detects silent regions in a decoded buffer.
/// Returns regions sorted by start time, non-overlapping, each at least
/// `min_silence_duration` long (up to one scan step of rounding).
///
/// Silence is judged from channel 0 only; other channels are not
/// consulted. An empty buffer yields an empty region list rather than
/// an error.
pub fn detect_silence(
    buffer: &SampleBuffer,
    config: &SilenceDetectionConfig,
) -> Vec<SilenceRegion> {
    log::info!(
        "Starting silence detection: threshold={}, min_duration={} s, step={}",
        config.threshold,
        config.min_silence_duration,
        config.step
    );

    let samples = match buffer.channels.first() {
        Some(channel) => channel,
        None => return Vec::new(),
    };

    let regions = scan_for_silence(samples, buffer.sample_rate, config);

    log::info!("Detected {} silence regions", regions.len());
    for (i, region) in regions.iter().enumerate() {
        log::info!(
            "  Silence {}: {:.2}s - {:.2}s ({:.2}s)",
            i + 1,
            region.start,
            region.end,
            region.duration()
        );
    }

    regions
}

/// Scans one channel at a fixed stride, tracking a sounding/silent state
/// machine over the visited samples
fn scan_for_silence(
    samples: &[f32],
    sample_rate: u32,
    config: &SilenceDetectionConfig,
) -> Vec<SilenceRegion> {
    let sample_rate = sample_rate as f64;
    let step = config.step.max(1);
    log::debug!("Scan resolution: {:.4} s per step", step as f64 / sample_rate);

    let mut regions = Vec::new();
    let mut silence_start: Option<usize> = None;

    for index in (0..samples.len()).step_by(step) {
        let is_silent = samples[index].abs() < config.threshold;

        match (is_silent, silence_start) {
            (true, None) => {
                // Start of a new silence run
                silence_start = Some(index);
            }
            (false, Some(start)) => {
                // Run ended; keep it only if long enough
                let duration = (index - start) as f64 / sample_rate;
                if duration >= config.min_silence_duration {
                    regions.push(SilenceRegion {
                        start: start as f64 / sample_rate,
                        end: index as f64 / sample_rate,
                    });
                }
                silence_start = None;
            }
            _ => {}
        }
    }

    // A run still open at the end of the scan closes at the true buffer
    // length, not the last visited index
    if let Some(start) = silence_start {
        let end = samples.len();
        let duration = (end - start) as f64 / sample_rate;
        if duration >= config.min_silence_duration {
            regions.push(SilenceRegion {
                start: start as f64 / sample_rate,
                end: end as f64 / sample_rate,
            });
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2 seconds of mono audio at 8000 Hz, silent on [gap_start, gap_end)
    /// seconds and full-scale (0.9) elsewhere
    fn buffer_with_gap(gap_start: f64, gap_end: f64) -> SampleBuffer {
        let sample_rate = 8000u32;
        let samples: Vec<f32> = (0..2 * sample_rate as usize)
            .map(|i| {
                let t = i as f64 / sample_rate as f64;
                if t >= gap_start && t < gap_end {
                    0.0
                } else {
                    0.9
                }
            })
            .collect();
        SampleBuffer::new(vec![samples], sample_rate)
    }

    #[test]
    fn test_default_config() {
        let config = SilenceDetectionConfig::default();
        assert_eq!(config.threshold, 0.01);
        assert_eq!(config.min_silence_duration, 0.5);
        assert_eq!(config.step, 100);
    }

    #[test]
    fn test_detects_single_region() {
        let buffer = buffer_with_gap(0.5, 1.2);
        let config = SilenceDetectionConfig {
            min_silence_duration: 0.5,
            ..Default::default()
        };

        let regions = detect_silence(&buffer, &config);

        // Boundary error is bounded by one scan step
        let tolerance = config.step as f64 / buffer.sample_rate as f64;
        assert_eq!(regions.len(), 1);
        assert!((regions[0].start - 0.5).abs() <= tolerance);
        assert!((regions[0].end - 1.2).abs() <= tolerance);
    }

    #[test]
    fn test_min_duration_filters_short_region() {
        let buffer = buffer_with_gap(0.5, 1.2);
        let config = SilenceDetectionConfig {
            min_silence_duration: 1.0,
            ..Default::default()
        };

        let regions = detect_silence(&buffer, &config);
        assert!(regions.is_empty());
    }

    #[test]
    fn test_zero_min_duration_admits_short_runs() {
        // 50 ms gap, far below the default 0.5 s minimum
        let buffer = buffer_with_gap(1.0, 1.05);
        let config = SilenceDetectionConfig {
            min_silence_duration: 0.0,
            ..Default::default()
        };

        let regions = detect_silence(&buffer, &config);
        assert!(!regions.is_empty());
    }

    #[test]
    fn test_regions_sorted_and_non_overlapping() {
        let sample_rate = 8000u32;
        // Silent on [0.2, 0.5) and [1.0, 1.4), sounding elsewhere
        let samples: Vec<f32> = (0..2 * sample_rate as usize)
            .map(|i| {
                let t = i as f64 / sample_rate as f64;
                if (t >= 0.2 && t < 0.5) || (t >= 1.0 && t < 1.4) {
                    0.0
                } else {
                    0.9
                }
            })
            .collect();
        let buffer = SampleBuffer::new(vec![samples], sample_rate);
        let config = SilenceDetectionConfig {
            min_silence_duration: 0.1,
            ..Default::default()
        };

        let regions = detect_silence(&buffer, &config);

        assert_eq!(regions.len(), 2);
        for region in &regions {
            assert!(region.start < region.end);
        }
        for pair in regions.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_trailing_silence_closes_at_buffer_end() {
        // Sounding for 1 s, then silent to the end
        let sample_rate = 8000u32;
        let mut samples = vec![0.9f32; sample_rate as usize];
        samples.extend(vec![0.0f32; sample_rate as usize]);
        let buffer = SampleBuffer::new(vec![samples], sample_rate);
        let config = SilenceDetectionConfig::default();

        let regions = detect_silence(&buffer, &config);

        assert_eq!(regions.len(), 1);
        // Flush closes against the buffer length exactly
        assert_eq!(regions[0].end, 2.0);
    }

    #[test]
    fn test_stride_one_finds_exact_boundaries() {
        let buffer = buffer_with_gap(0.5, 1.2);
        let config = SilenceDetectionConfig {
            step: 1,
            ..Default::default()
        };

        let regions = detect_silence(&buffer, &config);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].start, 0.5);
        assert_eq!(regions[0].end, 1.2);
    }

    #[test]
    fn test_zero_step_is_treated_as_one() {
        let buffer = buffer_with_gap(0.5, 1.2);
        let config = SilenceDetectionConfig {
            step: 0,
            ..Default::default()
        };

        let regions = detect_silence(&buffer, &config);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].start, 0.5);
        assert_eq!(regions[0].end, 1.2);
    }

    #[test]
    fn test_empty_buffer_yields_no_regions() {
        let no_channels = SampleBuffer::new(vec![], 44100);
        assert!(detect_silence(&no_channels, &SilenceDetectionConfig::default()).is_empty());

        let zero_length = SampleBuffer::new(vec![Vec::new()], 44100);
        assert!(detect_silence(&zero_length, &SilenceDetectionConfig::default()).is_empty());
    }

    #[test]
    fn test_entirely_silent_buffer() {
        let sample_rate = 8000u32;
        let buffer = SampleBuffer::new(vec![vec![0.0; 2 * sample_rate as usize]], sample_rate);
        let config = SilenceDetectionConfig::default();

        let regions = detect_silence(&buffer, &config);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].start, 0.0);
        assert_eq!(regions[0].end, 2.0);
    }

    #[test]
    fn test_detection_reads_channel_zero_only() {
        let sample_rate = 8000u32;
        let loud = vec![0.9f32; 2 * sample_rate as usize];
        let mut gapped = vec![0.9f32; 2 * sample_rate as usize];
        for sample in &mut gapped[4000..9600] {
            *sample = 0.0;
        }
        let config = SilenceDetectionConfig::default();

        // A gap on channel 1 is invisible while channel 0 stays loud
        let buffer = SampleBuffer::new(vec![loud.clone(), gapped.clone()], sample_rate);
        assert!(detect_silence(&buffer, &config).is_empty());

        // The same gap on channel 0 is detected regardless of channel 1
        let buffer = SampleBuffer::new(vec![gapped, loud], sample_rate);
        let regions = detect_silence(&buffer, &config);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].start, 0.5);
        assert_eq!(regions[0].end, 1.2);
    }
}
