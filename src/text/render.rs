//! Drawing grids as terminal text.

use crate::codec::Grid;
use crate::schema::PixelStyle;

impl PixelStyle {
    /// `(unlit, lit)` symbols.
    pub fn symbols(self) -> (&'static str, &'static str) {
        match self {
            PixelStyle::Emoji => ("⬛", "🟦"),
            PixelStyle::Ascii => (".", "o"),
        }
    }
}

/// Draw a grid as 8 newline-separated lines.
pub fn render_grid(grid: &Grid, style: PixelStyle) -> String {
    let (off, on) = style.symbols();
    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&lit| if lit { on } else { off })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{COLS, ROWS};

    #[test]
    fn test_ascii_render() {
        let mut cells = [[false; COLS]; ROWS];
        cells[0][0] = true;
        cells[7][12] = true;
        let text = render_grid(&Grid::from_cells(cells), PixelStyle::Ascii);

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], "o............");
        assert_eq!(lines[7], "............o");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_emoji_render() {
        let text = render_grid(&Grid::blank(), PixelStyle::Emoji);
        assert_eq!(text.lines().next(), Some("⬛".repeat(COLS).as_str()));
        assert!(!text.contains("🟦"));
    }
}
