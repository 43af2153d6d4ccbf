//! Terminal playback of an animation sequence.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::sequence::AnimationSequence;
use crate::schema::PixelStyle;
use crate::text::render_grid;

/// Cursor home + clear screen.
const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";

/// Looping player for an animation sequence.
///
/// The player only borrows the sequence, so stopping playback at any point
/// leaves it untouched.
///
/// Usage:
/// ```ignore
/// let player = Player::new(&sequence).style(PixelStyle::Ascii).loops(Some(3));
/// let stats = player.play(&mut std::io::stdout())?;
/// ```
pub struct Player<'a> {
    sequence: &'a AnimationSequence,
    style: PixelStyle,
    loops: Option<u64>,
    title: Option<String>,
    stop: Arc<AtomicBool>,
}

/// Summary of a playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackStats {
    pub frames_shown: u64,
    pub loops_completed: u64,
    /// True if the stop flag ended playback.
    pub stopped: bool,
}

impl<'a> Player<'a> {
    pub fn new(sequence: &'a AnimationSequence) -> Self {
        Self {
            sequence,
            style: PixelStyle::default(),
            loops: None,
            title: None,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn style(mut self, style: PixelStyle) -> Self {
        self.style = style;
        self
    }

    /// Number of passes; `None` plays until stopped.
    pub fn loops(mut self, loops: Option<u64>) -> Self {
        self.loops = loops;
        self
    }

    /// Line printed above every frame.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Flag that stops playback before the next frame when set.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Play in real time, sleeping for each frame's duration.
    pub fn play<W: Write>(&self, out: &mut W) -> io::Result<PlaybackStats> {
        self.play_with(out, std::thread::sleep)
    }

    /// Play with a custom sleep function.
    pub fn play_with<W, S>(&self, out: &mut W, mut sleep: S) -> io::Result<PlaybackStats>
    where
        W: Write,
        S: FnMut(Duration),
    {
        let mut stats = PlaybackStats::default();

        while self.loops.is_none_or(|n| stats.loops_completed < n) {
            for (grid, duration_ms) in self.sequence.render() {
                if self.stop.load(Ordering::Relaxed) {
                    stats.stopped = true;
                    return Ok(stats);
                }

                write!(out, "{}", CLEAR_SCREEN)?;
                if let Some(title) = &self.title {
                    writeln!(out, "{}", title)?;
                }
                writeln!(out, "{}", render_grid(&grid, self.style))?;
                out.flush()?;

                stats.frames_shown += 1;
                sleep(Duration::from_millis(duration_ms as u64));
            }
            stats.loops_completed += 1;
        }

        Ok(stats)
    }
}
