//! Animation sequences, storage and playback.
//!
//! An [`AnimationSequence`] is the ordered list of packed frames for one
//! loop. It can be stored in the `.lmxa` container and played back in a
//! terminal.
//!
//! # File Format
//!
//! ```text
//! Header (24 bytes):
//!   Magic: "LMXA" (4 bytes)
//!   Version: u16
//!   Flags: u16 (reserved)
//!   Rows: u16
//!   Cols: u16
//!   Word bits: u16
//!   Words per frame: u16
//!   Frame count: u32
//!   Reserved: 4 bytes
//!
//! Frame data (frame_count * 20 bytes):
//!   Words: 4 x u32
//!   Duration (ms): u32
//! ```
//!
//! All integers are little-endian.

pub mod format;
mod player;
mod sequence;

pub use format::{ANIMATION_MAGIC, ANIMATION_VERSION, AnimationHeader};
pub use player::{PlaybackStats, Player};
pub use sequence::{AnimationSequence, Frames, SequenceBuilder, SequenceError};
