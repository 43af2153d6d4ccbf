//! The browser editor's frame shape.
//!
//! The editor keeps frames as `{ grid: number[][], delay: number }` with
//! `0`/`1` cells. Conversions live here so they build and test on the host;
//! `wasm.rs` only moves values across the JS boundary.

use serde::{Deserialize, Serialize};

use crate::{
    animation::{AnimationSequence, SequenceBuilder, SequenceError},
    codec::{Grid, Normalized},
};

/// One frame as held by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorFrame {
    pub grid: Vec<Vec<u8>>,
    pub delay: u32,
}

impl EditorFrame {
    /// Cells as `#`/`.` text rows; any non-zero cell is lit.
    pub fn text_rows(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|row| row.iter().map(|&v| if v != 0 { '#' } else { '.' }).collect())
            .collect()
    }

    pub fn from_grid(grid: &Grid, delay: u32) -> Self {
        Self {
            grid: grid
                .rows()
                .iter()
                .map(|row| row.iter().map(|&lit| lit as u8).collect())
                .collect(),
            delay,
        }
    }
}

/// Build a sequence from editor frames.
///
/// Cells go through [`Grid::normalize`], so odd-sized grids are padded or
/// truncated with the usual notices, tagged with their frame index.
pub fn sequence_from_editor_frames(
    frames: &[EditorFrame],
) -> Result<Normalized<AnimationSequence>, SequenceError> {
    let mut builder = SequenceBuilder::with_capacity(frames.len());
    let mut notices = Vec::new();

    for (i, frame) in frames.iter().enumerate() {
        let normalized = Grid::normalize(&frame.text_rows());
        notices.extend(normalized.notices.into_iter().map(|n| n.in_frame(i)));
        builder.push_grid(&normalized.value, frame.delay);
    }

    Ok(Normalized {
        value: builder.finish()?,
        notices,
    })
}

/// Editor frames for every frame of the sequence, in order.
pub fn editor_frames(sequence: &AnimationSequence) -> Vec<EditorFrame> {
    sequence
        .render()
        .map(|(grid, delay)| EditorFrame::from_grid(&grid, delay))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{COLS, NoticeKind, ROWS};

    fn blank_frame(delay: u32) -> EditorFrame {
        EditorFrame {
            grid: vec![vec![0; COLS]; ROWS],
            delay,
        }
    }

    #[test]
    fn test_text_rows() {
        let frame = EditorFrame {
            grid: vec![vec![1, 0, 2], vec![0, 0, 0]],
            delay: 55,
        };
        assert_eq!(frame.text_rows(), vec!["#.#", "..."]);
    }

    #[test]
    fn test_editor_frames_to_sequence() {
        let mut first = blank_frame(100);
        first.grid[0][0] = 1;
        first.grid[7][12] = 1;

        let normalized = sequence_from_editor_frames(&[first, blank_frame(55)]).unwrap();
        assert!(normalized.is_clean());

        let seq = normalized.value;
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.frames()[0].words, [0x8000_0000, 0, 0, 0x0100_0000]);
        assert_eq!(seq.frames()[0].duration_ms, 100);
        assert_eq!(seq.frames()[1].words, [0; 4]);
    }

    #[test]
    fn test_odd_sized_grid_raises_tagged_notices() {
        let frames = vec![
            blank_frame(55),
            EditorFrame {
                grid: vec![vec![1; 3]; 5],
                delay: 55,
            },
        ];

        let normalized = sequence_from_editor_frames(&frames).unwrap();
        assert!(normalized.notices.iter().all(|n| n.frame == Some(1)));
        assert!(
            normalized
                .notices
                .iter()
                .any(|n| n.kind == NoticeKind::RowCountPadded { found: 5 })
        );
    }

    #[test]
    fn test_no_frames() {
        assert!(matches!(
            sequence_from_editor_frames(&[]),
            Err(SequenceError::NoFrames)
        ));
    }

    #[test]
    fn test_editor_frames_round_trip() {
        let mut frame = blank_frame(80);
        frame.grid[3][6] = 1;

        let seq = sequence_from_editor_frames(std::slice::from_ref(&frame))
            .unwrap()
            .value;
        assert_eq!(editor_frames(&seq), vec![frame]);
    }

    #[test]
    fn test_serde_shape() {
        let frame = EditorFrame {
            grid: vec![vec![0, 1]],
            delay: 55,
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, r#"{"grid":[[0,1]],"delay":55}"#);
    }
}
