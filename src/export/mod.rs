pub mod wav_encoder;

pub use wav_encoder::{encode_wav, MIME_TYPE};
