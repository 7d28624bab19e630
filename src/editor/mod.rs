pub mod actions;

pub use actions::{process_buffer, process_file, ProcessingStats};
