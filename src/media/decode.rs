use std::path::Path;

use crate::audio::SampleBuffer;

/// Decodes a WAV file into a SampleBuffer with one f32 sample vector per
/// channel. Accepts 16-bit integer PCM and 32-bit float sources; 16-bit
/// samples are scaled into [-1.0, 1.0) by dividing by 32768.
pub fn decode_wav(path: &Path) -> Result<SampleBuffer, String> {
    log::info!("Decoding WAV file: {}", path.display());

    if !path.exists() {
        return Err(format!("Audio file not found: {}", path.display()));
    }

    let mut reader = hound::WavReader::open(path)
        .map_err(|e| format!("Failed to open WAV file: {}", e))?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(|v| v as f32 / 32768.0))
            .collect::<Result<_, _>>()
            .map_err(|e| format!("Failed to read samples: {}", e))?,
        (hound::SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(|e| format!("Failed to read samples: {}", e))?,
        (sample_format, bits) => {
            return Err(format!(
                "Unsupported WAV format: {} bits per sample ({:?})",
                bits, sample_format
            ));
        }
    };

    let channel_count = spec.channels.max(1) as usize;
    let mut channels: Vec<Vec<f32>> = (0..channel_count)
        .map(|_| Vec::with_capacity(interleaved.len() / channel_count))
        .collect();
    for (index, sample) in interleaved.into_iter().enumerate() {
        channels[index % channel_count].push(sample);
    }

    let buffer = SampleBuffer::new(channels, spec.sample_rate);

    log::info!(
        "Decoded {:.2}s of audio: {} channels at {} Hz",
        buffer.duration(),
        buffer.channel_count(),
        buffer.sample_rate
    );

    Ok(buffer)
}
