//! Codec module - Bit-exact conversion between pixel grids and packed words.

pub mod geometry;
mod grid;
mod notice;
mod pack;
mod unpack;

pub use geometry::{
    COLS, GEOMETRY, Geometry, PADDING_BITS, PIXEL_BITS, ROWS, STREAM_BITS, WORD_BITS,
    WORDS_PER_FRAME,
};
pub use grid::*;
pub use notice::*;
pub use pack::*;
pub use unpack::*;

/// Error type for codec operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Expected {expected} pixel bits, got {found}")]
    BitCount { expected: usize, found: usize },
}
