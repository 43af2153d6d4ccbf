//! Matrix geometry shared by every part of the codec.
//!
//! The panel is 8 rows by 13 columns. Its 104 pixel bits are serialized into
//! whole 32-bit words, so a frame always occupies 4 words (128 bits) with 24
//! trailing padding bits.

/// Matrix rows.
pub const ROWS: usize = 8;

/// Matrix columns.
pub const COLS: usize = 13;

/// Bits per serialized word.
pub const WORD_BITS: usize = u32::BITS as usize;

/// Meaningful pixel bits per frame.
pub const PIXEL_BITS: usize = ROWS * COLS;

/// Words needed to hold one frame.
pub const WORDS_PER_FRAME: usize = words_for(PIXEL_BITS);

/// Total bits in a packed frame, padding included.
pub const STREAM_BITS: usize = WORDS_PER_FRAME * WORD_BITS;

/// Zero bits appended after the pixel data.
pub const PADDING_BITS: usize = STREAM_BITS - PIXEL_BITS;

/// Round a bit count up to whole words.
pub const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

const _: () = assert!(PADDING_BITS < WORD_BITS);

/// Geometry as a value, for places that record or compare it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub rows: usize,
    pub cols: usize,
    pub word_bits: usize,
    pub words_per_frame: usize,
}

/// The one geometry this crate supports.
pub const GEOMETRY: Geometry = Geometry {
    rows: ROWS,
    cols: COLS,
    word_bits: WORD_BITS,
    words_per_frame: WORDS_PER_FRAME,
};

impl Geometry {
    /// Meaningful pixel bits.
    #[inline]
    pub const fn pixel_bits(&self) -> usize {
        self.rows * self.cols
    }

    /// Pixel bits plus padding.
    #[inline]
    pub const fn stream_bits(&self) -> usize {
        self.words_per_frame * self.word_bits
    }

    /// Map a stream bit index to its (row, column) cell.
    ///
    /// Returns `None` for padding bits.
    #[inline]
    pub const fn cell_of(&self, bit: usize) -> Option<(usize, usize)> {
        if bit < self.pixel_bits() {
            Some((bit / self.cols, bit % self.cols))
        } else {
            None
        }
    }
}
