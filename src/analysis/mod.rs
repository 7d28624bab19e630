pub mod silence_detection;
pub mod waveform;

pub use silence_detection::{detect_silence, SilenceDetectionConfig, SilenceRegion};
pub use waveform::{extract_waveform, WaveformData};
