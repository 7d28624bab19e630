/// Decoded audio held in memory: one floating-point sample sequence per
/// channel, all of equal length, plus the shared sample rate.
/// Channel order is meaningful and preserved by every operation.
///
/// The processing core never mutates a buffer in place. Operations read
/// buffers and produce new ones, so sharing one buffer across calls
/// (e.g. detection and encoding against the same source) is safe.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Per-channel samples, nominally in [-1.0, 1.0]
    pub channels: Vec<Vec<f32>>,
    /// Samples per second (> 0 by caller contract)
    pub sample_rate: u32,
}

impl SampleBuffer {
    /// Creates a buffer from per-channel sample data.
    /// Callers guarantee every channel has the same length.
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> Self {
        SampleBuffer {
            channels,
            sample_rate,
        }
    }

    /// Returns the per-channel sample count (0 for a channel-less buffer)
    pub fn len(&self) -> usize {
        self.channels.first().map_or(0, |ch| ch.len())
    }

    /// Returns true when the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of channels
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Returns the buffer duration in seconds
    pub fn duration(&self) -> f64 {
        self.len() as f64 / self.sample_rate as f64
    }
}
