//! Ordered, restartable collection of packed frames.

use crate::codec::{
    Grid, Normalized, Notice, NoticeKind, PackedFrame, WORDS_PER_FRAME, pack, unpack,
};
use crate::schema::ShortRowPolicy;

/// Values a word row needs: the words plus a duration.
const ROW_VALUES: usize = WORDS_PER_FRAME + 1;

/// Errors building an animation sequence.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    #[error("Animation has no frames")]
    NoFrames,
    #[error("Row {row} has {found} values, expected at least {min}", min = ROW_VALUES)]
    ShortRow { row: usize, found: usize },
}

/// One playable animation loop.
///
/// Always holds at least one frame. Frame order is playback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSequence {
    frames: Vec<PackedFrame>,
}

impl AnimationSequence {
    /// Normalize and pack each text row-group, keeping order.
    ///
    /// Notices are tagged with the index of the group that raised them.
    pub fn from_frame_groups<G, S>(
        groups: &[G],
        duration_ms: u32,
    ) -> Result<Normalized<Self>, SequenceError>
    where
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut builder = SequenceBuilder::with_capacity(groups.len());
        let mut notices = Vec::new();

        for (i, group) in groups.iter().enumerate() {
            let (grid, grid_notices) = Grid::normalize(group.as_ref()).into_parts();
            notices.extend(grid_notices.into_iter().map(|n| n.in_frame(i)));
            builder.push_grid(&grid, duration_ms);
        }

        Ok(Normalized {
            value: builder.finish()?,
            notices,
        })
    }

    /// Build from extracted word rows: four words then a duration.
    ///
    /// Short rows are skipped or rejected depending on `policy`. Values past
    /// the duration are ignored.
    pub fn from_word_rows<R: AsRef<[u32]>>(
        rows: &[R],
        policy: ShortRowPolicy,
    ) -> Result<Normalized<Self>, SequenceError> {
        let mut builder = SequenceBuilder::with_capacity(rows.len());
        let mut notices = Vec::new();

        for (i, row) in rows.iter().enumerate() {
            let values = row.as_ref();
            if values.len() < ROW_VALUES {
                match policy {
                    ShortRowPolicy::Skip => {
                        notices.push(
                            Notice::new(NoticeKind::ShortWordRow {
                                found: values.len(),
                            })
                            .in_frame(i),
                        );
                        continue;
                    }
                    ShortRowPolicy::Reject => {
                        return Err(SequenceError::ShortRow {
                            row: i,
                            found: values.len(),
                        });
                    }
                }
            }
            if values.len() > ROW_VALUES {
                notices.push(
                    Notice::new(NoticeKind::ExtraWordValues {
                        found: values.len(),
                    })
                    .in_frame(i),
                );
            }

            let mut words = [0u32; WORDS_PER_FRAME];
            words.copy_from_slice(&values[..WORDS_PER_FRAME]);
            builder.push_frame(PackedFrame::new(words, values[WORDS_PER_FRAME]));
        }

        Ok(Normalized {
            value: builder.finish()?,
            notices,
        })
    }

    pub fn frames(&self) -> &[PackedFrame] {
        &self.frames
    }

    pub fn get(&self, index: usize) -> Option<&PackedFrame> {
        self.frames.get(index)
    }

    /// Number of frames. Never zero.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Length of one pass through the loop.
    pub fn total_duration_ms(&self) -> u64 {
        self.frames.iter().map(|f| f.duration_ms as u64).sum()
    }

    /// Iterate decoded frames from the start.
    ///
    /// Each call starts over, so the same sequence can be replayed any number
    /// of times.
    pub fn render(&self) -> Frames<'_> {
        Frames {
            inner: self.frames.iter(),
        }
    }
}

/// Iterator over `(grid, duration_ms)` pairs.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    inner: std::slice::Iter<'a, PackedFrame>,
}

impl<'a> Iterator for Frames<'a> {
    type Item = (Grid, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|f| (unpack(f), f.duration_ms))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for Frames<'a> {}

/// Incremental sequence construction.
///
/// Usage:
/// ```ignore
/// let mut builder = SequenceBuilder::new();
/// for grid in grids {
///     builder.push_grid(&grid, 55);
/// }
/// let sequence = builder.finish()?;
/// ```
#[derive(Debug, Default)]
pub struct SequenceBuilder {
    frames: Vec<PackedFrame>,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
        }
    }

    /// Pack and append a grid.
    pub fn push_grid(&mut self, grid: &Grid, duration_ms: u32) -> &mut Self {
        self.frames.push(pack(grid, duration_ms));
        self
    }

    pub fn push_frame(&mut self, frame: PackedFrame) -> &mut Self {
        self.frames.push(frame);
        self
    }

    /// Frames pushed so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Seal the sequence. Fails if nothing was pushed.
    pub fn finish(self) -> Result<AnimationSequence, SequenceError> {
        if self.frames.is_empty() {
            return Err(SequenceError::NoFrames);
        }
        Ok(AnimationSequence {
            frames: self.frames,
        })
    }
}
