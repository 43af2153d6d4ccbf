//! Advisory notices produced while normalizing input.
//!
//! None of these stop processing. The codec returns them alongside the value
//! and leaves logging to the host.

use std::fmt;

use super::geometry::{COLS, ROWS, WORDS_PER_FRAME};

/// What was adjusted or skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Fewer than `ROWS` rows; blank rows were appended.
    RowCountPadded { found: usize },
    /// More than `ROWS` rows; the excess was dropped.
    RowCountTruncated { found: usize },
    /// Row narrower than `COLS`; filled with unlit cells.
    RowWidthPadded { row: usize, found: usize },
    /// Row wider than `COLS`; cut at the last column.
    RowWidthTruncated { row: usize, found: usize },
    /// Word row too short to hold a frame; skipped.
    ShortWordRow { found: usize },
    /// Word row carried values past the duration; ignored.
    ExtraWordValues { found: usize },
}

/// A non-fatal event, optionally tied to a frame index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub frame: Option<usize>,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(kind: NoticeKind) -> Self {
        Self { frame: None, kind }
    }

    /// Attach a frame index.
    pub fn in_frame(self, frame: usize) -> Self {
        Self {
            frame: Some(frame),
            ..self
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NoticeKind::RowCountPadded { found } => write!(
                f,
                "frame has {} rows, expected {}; padded with blank rows",
                found, ROWS
            ),
            NoticeKind::RowCountTruncated { found } => write!(
                f,
                "frame has {} rows, expected {}; extra rows dropped",
                found, ROWS
            ),
            NoticeKind::RowWidthPadded { row, found } => write!(
                f,
                "row {} has {} columns, expected {}; padded",
                row, found, COLS
            ),
            NoticeKind::RowWidthTruncated { row, found } => write!(
                f,
                "row {} has {} columns, expected {}; truncated",
                row, found, COLS
            ),
            NoticeKind::ShortWordRow { found } => write!(
                f,
                "row has {} values, expected {} words and a duration; skipped",
                found, WORDS_PER_FRAME
            ),
            NoticeKind::ExtraWordValues { found } => write!(
                f,
                "row has {} values, only the first {} are used",
                found,
                WORDS_PER_FRAME + 1
            ),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.frame {
            Some(frame) => write!(f, "frame {}: {}", frame, self.kind),
            None => self.kind.fmt(f),
        }
    }
}

/// A value together with the notices raised while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    pub value: T,
    pub notices: Vec<Notice>,
}

impl<T> Normalized<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            notices: Vec::new(),
        }
    }

    /// True if nothing had to be adjusted.
    pub fn is_clean(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Normalized<U> {
        Normalized {
            value: f(self.value),
            notices: self.notices,
        }
    }

    pub fn into_parts(self) -> (T, Vec<Notice>) {
        (self.value, self.notices)
    }
}
