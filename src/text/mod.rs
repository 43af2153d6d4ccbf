//! Text module - Frame sheets, C array listings and terminal rendering.
//!
//! These sit outside the codec: they read and write the textual forms and
//! hand plain rows and integers across.

mod editor;
mod frame_reader;
mod listing;
mod render;
mod word_array;

pub use editor::*;
pub use frame_reader::*;
pub use listing::*;
pub use render::*;
pub use word_array::*;
