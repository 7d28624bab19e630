use crate::audio::SampleBuffer;

/// Content type of the blobs produced by [`encode_wav`]
pub const MIME_TYPE: &str = "audio/wav";

/// Encodes the first `length` frames of the buffer as a complete WAV file:
/// a 44-byte canonical header followed by interleaved 16-bit little-endian
/// integer PCM. `length` may be less than the buffer length when callers
/// want an exact trimmed span; it must not exceed any channel's sample
/// count, or frame indexing panics.
///
/// The layout is fixed. Identical input always produces byte-identical
/// output.
pub fn encode_wav(buffer: &SampleBuffer, length: usize) -> Vec<u8> {
    let channels = buffer.channel_count();
    let data_len = (length * channels * 2) as u32;

    let mut bytes = Vec::with_capacity(44 + length * channels * 2);

    // RIFF chunk descriptor
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    // fmt sub-chunk: integer PCM, 16 bits per sample
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&(channels as u16).to_le_bytes());
    bytes.extend_from_slice(&buffer.sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(buffer.sample_rate * 2 * channels as u32).to_le_bytes());
    bytes.extend_from_slice(&((channels * 2) as u16).to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());

    // data sub-chunk
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());

    for frame in 0..length {
        for channel in &buffer.channels {
            let sample = channel[frame].clamp(-1.0, 1.0);
            // Samples below -0.5 scale by 32768; a full-scale -1.0 lands
            // exactly on i16::MIN
            let value = if 0.5 + sample < 0.0 {
                (sample * 32768.0) as i16
            } else {
                (sample * 32767.0) as i16
            };
            bytes.extend_from_slice(&value.to_le_bytes());
        }
    }

    bytes
}
