//! Schema module - Configuration types for encoding, decoding and playback.

mod config;

pub use config::*;
