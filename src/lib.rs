//! Matrix Anim - Bit-exact codec for 8x13 LED matrix animations.
//!
//! Frames are authored as ASCII art, packed into four 32-bit words each
//! (104 pixel bits, row-major, MSB first, then 24 zero bits) and emitted as a
//! `uint32_t` array for firmware. The same words decode back to the grid.
//!
//! # Architecture
//!
//! - `codec`: Grid model, packer and unpacker (no I/O)
//! - `animation`: Frame sequences, the `.lmxa` container and terminal playback
//! - `text`: Frame sheets, C array listings and pixel rendering
//! - `schema`: Configuration types
//!
//! # Example
//!
//! ```rust
//! use matrix_anim::{
//!     animation::AnimationSequence,
//!     text::{split_frames, to_c_array},
//! };
//!
//! let sheet = "#############\n".repeat(8);
//! let groups = split_frames(&sheet);
//! let sequence = AnimationSequence::from_frame_groups(&groups, 55)?.value;
//!
//! let listing = to_c_array(&sequence, "HeartAnim");
//! assert!(listing.contains("{0xffffffff, 0xffffffff, 0xffffffff, 0xffffff00, 55},"));
//! # Ok::<(), matrix_anim::animation::SequenceError>(())
//! ```

pub mod animation;
pub mod codec;
pub mod schema;
pub mod text;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use animation::{AnimationSequence, Player, SequenceError};
pub use codec::{Grid, Normalized, Notice, PackedFrame, bits_of, pack, unpack};
pub use schema::{AnimConfig, PixelStyle, ShortRowPolicy};
