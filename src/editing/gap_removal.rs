use crate::analysis::SilenceRegion;
use crate::audio::SampleBuffer;

/// Builds a new buffer containing only the audio outside the given silence
/// regions, in order. The input buffer is never modified and the result owns
/// its own storage, so the original stays valid for other consumers.
///
/// Regions are sorted by start time before use. Overlapping regions are not
/// merged; callers must supply non-overlapping input for correct results.
/// An empty region list yields a full copy; regions covering the whole
/// buffer yield a valid zero-length buffer.
pub fn remove_silence(buffer: &SampleBuffer, regions: &[SilenceRegion]) -> SampleBuffer {
    log::info!(
        "Removing {} silence regions from {:.2}s of audio",
        regions.len(),
        buffer.duration()
    );

    // Callers may pass regions unsorted; sort before the cursor walk
    let mut sorted_regions = regions.to_vec();
    sorted_regions.sort_by(|a, b| a.start.total_cmp(&b.start));

    let keep = keep_intervals(&sorted_regions, buffer.sample_rate, buffer.len());
    let new_length: usize = keep.iter().map(|(start, end)| end - start).sum();

    // Every channel is sliced at identical sample boundaries, which keeps
    // cross-channel alignment exact
    let channels: Vec<Vec<f32>> = buffer
        .channels
        .iter()
        .map(|channel| {
            let mut rebuilt = Vec::with_capacity(new_length);
            for &(start, end) in &keep {
                rebuilt.extend_from_slice(&channel[start..end]);
            }
            rebuilt
        })
        .collect();

    log::info!(
        "Kept {} of {} samples across {} intervals",
        new_length,
        buffer.len(),
        keep.len()
    );

    SampleBuffer::new(channels, buffer.sample_rate)
}

/// Computes the sample-index complement of the sorted silence regions
/// within `[0, length)`
fn keep_intervals(
    sorted_regions: &[SilenceRegion],
    sample_rate: u32,
    length: usize,
) -> Vec<(usize, usize)> {
    let sample_rate = sample_rate as f64;
    let mut intervals = Vec::new();
    let mut cursor = 0usize;

    for region in sorted_regions {
        let region_start = ((region.start * sample_rate).floor() as usize).min(length);
        let region_end = ((region.end * sample_rate).floor() as usize).min(length);

        if cursor < region_start {
            intervals.push((cursor, region_start));
        }
        cursor = region_end;
    }

    if cursor < length {
        intervals.push((cursor, length));
    }

    intervals
}
