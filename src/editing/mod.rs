pub mod gap_removal;

pub use gap_removal::remove_silence;
