//! Grid to word serialization.

use serde::{Deserialize, Serialize};

use super::geometry::{WORD_BITS, WORDS_PER_FRAME};
use super::grid::Grid;

/// Frame duration used when the caller gives none.
pub const DEFAULT_DURATION_MS: u32 = 55;

/// A frame in its firmware form: four words and a duration.
///
/// Bit 31 of word 0 is pixel (0, 0); pixels follow row-major. The low 24 bits
/// of word 3 are padding and are always zero when produced by [`pack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackedFrame {
    pub words: [u32; WORDS_PER_FRAME],
    pub duration_ms: u32,
}

impl PackedFrame {
    pub const fn new(words: [u32; WORDS_PER_FRAME], duration_ms: u32) -> Self {
        Self { words, duration_ms }
    }

    /// Pack with [`DEFAULT_DURATION_MS`].
    pub fn from_grid(grid: &Grid) -> Self {
        pack(grid, DEFAULT_DURATION_MS)
    }
}

/// Serialize a grid into four words.
///
/// Pixels are emitted row-major, MSB first within each word; the trailing 24
/// bits stay zero.
pub fn pack(grid: &Grid, duration_ms: u32) -> PackedFrame {
    let mut words = [0u32; WORDS_PER_FRAME];
    for (i, lit) in grid.bits().enumerate() {
        if lit {
            words[i / WORD_BITS] |= 1 << (WORD_BITS - 1 - i % WORD_BITS);
        }
    }
    PackedFrame { words, duration_ms }
}
