use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::analysis::{detect_silence, SilenceDetectionConfig, SilenceRegion};
use crate::audio::SampleBuffer;
use crate::editing::remove_silence;
use crate::export::encode_wav;
use crate::media::decode_wav;

/// Summary of one processing run, reported to callers for display
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Duration of the input in seconds
    pub old_duration: f64,
    /// Duration after silence removal in seconds
    pub new_duration: f64,
    /// Seconds of audio removed
    pub time_saved: f64,
    /// Wall-clock processing time in seconds
    pub processing_time: f64,
}

/// Runs detection and removal over a decoded buffer. Returns the processed
/// buffer, the regions that were cut, and the run's stats. The region list
/// lets callers show which spans disappeared.
pub fn process_buffer(
    buffer: &SampleBuffer,
    config: &SilenceDetectionConfig,
) -> (SampleBuffer, Vec<SilenceRegion>, ProcessingStats) {
    let started = Instant::now();

    let regions = detect_silence(buffer, config);
    let processed = remove_silence(buffer, &regions);

    let old_duration = buffer.duration();
    let new_duration = processed.duration();
    let stats = ProcessingStats {
        old_duration,
        new_duration,
        time_saved: old_duration - new_duration,
        processing_time: started.elapsed().as_secs_f64(),
    };

    log::info!(
        "Processed {:.2}s of audio down to {:.2}s ({:.2}s saved) in {:.3}s",
        stats.old_duration,
        stats.new_duration,
        stats.time_saved,
        stats.processing_time
    );

    (processed, regions, stats)
}

/// Orchestrates the full file pipeline: decode, detect, remove, encode,
/// write. Returns the run's stats on success.
pub fn process_file(
    input: &Path,
    output: &Path,
    config: &SilenceDetectionConfig,
) -> Result<ProcessingStats, String> {
    log::info!("Starting processing pipeline for: {}", input.display());

    // Decode the source into memory
    let buffer = decode_wav(input)?;

    // Detect and cut silence
    let (processed, regions, stats) = process_buffer(&buffer, config);
    log::info!("Removed {} silence regions", regions.len());

    // Encode and write the result
    let bytes = encode_wav(&processed, processed.len());
    std::fs::write(output, &bytes)
        .map_err(|e| format!("Failed to write output file: {}", e))?;

    log::info!("Pipeline completed successfully: {}", output.display());
    Ok(stats)
}
