//! Fixed-size pixel grid for one animation frame.

use serde::{Deserialize, Serialize};

use super::CodecError;
use super::geometry::{COLS, GEOMETRY, PIXEL_BITS, ROWS};
use super::notice::{Normalized, Notice, NoticeKind};

/// Glyphs that mark a lit pixel in frame-sheet text.
pub const LIT_GLYPHS: [char; 4] = ['#', '1', '@', '*'];

/// Filler used when padding short rows. Always unlit.
pub const UNLIT_FILLER: char = '.';

/// Classify one frame-sheet character.
///
/// Total: anything outside [`LIT_GLYPHS`] is unlit.
#[inline]
pub fn is_lit_glyph(c: char) -> bool {
    LIT_GLYPHS.contains(&c)
}

/// One frame as an 8x13 boolean matrix.
///
/// Dimensions are fixed by the type, so a `Grid` can never be non-canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[bool; COLS]; ROWS],
}

impl Grid {
    /// All pixels unlit.
    pub const fn blank() -> Self {
        Self {
            cells: [[false; COLS]; ROWS],
        }
    }

    pub const fn from_cells(cells: [[bool; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    /// Build a grid from arbitrary text rows.
    ///
    /// Missing rows are blank, rows past the 8th are dropped, and each row is
    /// padded with [`UNLIT_FILLER`] or cut to 13 characters. Every adjustment
    /// is reported as a [`Notice`]; none of them is an error.
    pub fn normalize<S: AsRef<str>>(raw_rows: &[S]) -> Normalized<Self> {
        let mut notices = Vec::new();

        if raw_rows.len() < ROWS {
            notices.push(Notice::new(NoticeKind::RowCountPadded {
                found: raw_rows.len(),
            }));
        } else if raw_rows.len() > ROWS {
            notices.push(Notice::new(NoticeKind::RowCountTruncated {
                found: raw_rows.len(),
            }));
        }

        let mut cells = [[false; COLS]; ROWS];
        for (r, raw) in raw_rows.iter().take(ROWS).enumerate() {
            let raw = raw.as_ref();
            let width = raw.chars().count();
            if width < COLS {
                notices.push(Notice::new(NoticeKind::RowWidthPadded {
                    row: r,
                    found: width,
                }));
            } else if width > COLS {
                notices.push(Notice::new(NoticeKind::RowWidthTruncated {
                    row: r,
                    found: width,
                }));
            }

            let padded = raw.chars().chain(std::iter::repeat(UNLIT_FILLER));
            for (cell, c) in cells[r].iter_mut().zip(padded) {
                *cell = is_lit_glyph(c);
            }
        }

        Normalized {
            value: Self { cells },
            notices,
        }
    }

    /// Rebuild a grid from exactly 104 row-major bits.
    pub fn from_bits(bits: &[bool]) -> Result<Self, CodecError> {
        if bits.len() != PIXEL_BITS {
            return Err(CodecError::BitCount {
                expected: PIXEL_BITS,
                found: bits.len(),
            });
        }

        let mut cells = [[false; COLS]; ROWS];
        for (i, &bit) in bits.iter().enumerate() {
            if let Some((r, c)) = GEOMETRY.cell_of(i) {
                cells[r][c] = bit;
            }
        }
        Ok(Self { cells })
    }

    /// Pixel state, or `None` outside the matrix.
    #[inline]
    pub fn is_lit(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[[bool; COLS]; ROWS] {
        &self.cells
    }

    /// All pixels in row-major order.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    pub fn lit_count(&self) -> usize {
        self.bits().filter(|&b| b).count()
    }

    /// Render as frame-sheet rows using the given glyphs.
    pub fn to_text_rows(&self, lit: char, unlit: char) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&on| if on { lit } else { unlit })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_rows(n: usize) -> Vec<String> {
        vec!["#".repeat(COLS); n]
    }

    #[test]
    fn test_glyph_classification() {
        for c in ['#', '1', '@', '*'] {
            assert!(is_lit_glyph(c), "{:?} should be lit", c);
        }
        for c in [' ', '.', '0', 'o', 'X', '\t', '🟦'] {
            assert!(!is_lit_glyph(c), "{:?} should be unlit", c);
        }
    }

    #[test]
    fn test_short_row_padded_with_filler() {
        let mut rows = vec!["###".to_string()];
        rows.extend(full_rows(7));
        let grid = Grid::normalize(&rows).value;

        let text = grid.to_text_rows('#', UNLIT_FILLER);
        assert_eq!(text[0], "###..........");
        assert_eq!(text[0].chars().count(), COLS);
    }

    #[test]
    fn test_long_row_truncated() {
        let rows = vec!["..............#####"; ROWS];
        let normalized = Grid::normalize(&rows);
        assert_eq!(normalized.value, Grid::blank());
        assert_eq!(normalized.notices.len(), ROWS);
        assert_eq!(
            normalized.notices[0].kind,
            NoticeKind::RowWidthTruncated { row: 0, found: 19 }
        );
    }

    #[test]
    fn test_five_rows_padded_to_eight() {
        let normalized = Grid::normalize(&full_rows(5));
        let grid = normalized.value;

        for r in 0..5 {
            assert!(grid.rows()[r].iter().all(|&b| b));
        }
        for r in 5..ROWS {
            assert!(grid.rows()[r].iter().all(|&b| !b));
        }
        assert_eq!(
            normalized.notices,
            vec![Notice::new(NoticeKind::RowCountPadded { found: 5 })]
        );
    }

    #[test]
    fn test_ten_rows_truncated_to_eight() {
        let mut rows = full_rows(8);
        rows.push(".".repeat(COLS));
        rows.push(".".repeat(COLS));
        let normalized = Grid::normalize(&rows);

        assert_eq!(normalized.value.lit_count(), PIXEL_BITS);
        assert_eq!(
            normalized.notices,
            vec![Notice::new(NoticeKind::RowCountTruncated { found: 10 })]
        );
    }

    #[test]
    fn test_canonical_input_is_clean() {
        let normalized = Grid::normalize(&full_rows(ROWS));
        assert!(normalized.is_clean());
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        // 13 multi-byte glyphs, all unlit
        let rows = vec!["🟦".repeat(COLS); ROWS];
        let normalized = Grid::normalize(&rows);
        assert!(normalized.is_clean());
        assert_eq!(normalized.value, Grid::blank());
    }

    #[test]
    fn test_from_bits_row_major() {
        let mut bits = vec![false; PIXEL_BITS];
        bits[14] = true;
        let grid = Grid::from_bits(&bits).unwrap();
        assert_eq!(grid.is_lit(1, 1), Some(true));
        assert_eq!(grid.lit_count(), 1);
    }

    #[test]
    fn test_from_bits_rejects_wrong_length() {
        let err = Grid::from_bits(&[true; 103]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::BitCount {
                expected: 104,
                found: 103
            }
        ));
        assert!(Grid::from_bits(&[false; 128]).is_err());
        assert!(Grid::from_bits(&[]).is_err());
    }

    #[test]
    fn test_is_lit_out_of_range() {
        let grid = Grid::blank();
        assert_eq!(grid.is_lit(ROWS, 0), None);
        assert_eq!(grid.is_lit(0, COLS), None);
    }

    #[test]
    fn test_serde_as_nested_arrays() {
        let mut cells = [[false; COLS]; ROWS];
        cells[0][0] = true;
        let grid = Grid::from_cells(cells);
        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.starts_with("[[true,false"));
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
