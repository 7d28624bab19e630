//! Detects silent passages in decoded audio and produces a shortened
//! buffer plus a byte-exact 16-bit WAV encoding of the result.

// Declare modules
pub mod analysis;
pub mod audio;
pub mod editing;
pub mod editor;
pub mod export;
pub mod media;

pub use analysis::{
    detect_silence, extract_waveform, SilenceDetectionConfig, SilenceRegion, WaveformData,
};
pub use audio::SampleBuffer;
pub use editing::remove_silence;
pub use editor::{process_buffer, process_file, ProcessingStats};
pub use export::{encode_wav, MIME_TYPE};
pub use media::decode_wav;
