pub mod decode;

pub use decode::decode_wav;
