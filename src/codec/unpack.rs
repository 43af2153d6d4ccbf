//! Word to grid deserialization.

use super::geometry::{COLS, GEOMETRY, PIXEL_BITS, ROWS, WORD_BITS};
use super::grid::Grid;
use super::pack::PackedFrame;

#[inline]
fn bit_at(words: &[u32], i: usize) -> bool {
    (words[i / WORD_BITS] >> (WORD_BITS - 1 - i % WORD_BITS)) & 1 == 1
}

/// Expand words MSB-first and keep the first 104 bits.
///
/// Anything past the pixel bits (padding, surplus words) is dropped. If the
/// words hold fewer than 104 bits the short sequence is returned as-is;
/// [`Grid::from_bits`] rejects it.
pub fn bits_of(words: &[u32]) -> Vec<bool> {
    let available = (words.len() * WORD_BITS).min(PIXEL_BITS);
    (0..available).map(|i| bit_at(words, i)).collect()
}

/// Rebuild the grid stored in a packed frame. Padding bits are not read.
pub fn unpack(frame: &PackedFrame) -> Grid {
    let mut cells = [[false; COLS]; ROWS];
    for i in 0..PIXEL_BITS {
        if let Some((r, c)) = GEOMETRY.cell_of(i) {
            cells[r][c] = bit_at(&frame.words, i);
        }
    }
    Grid::from_cells(cells)
}
