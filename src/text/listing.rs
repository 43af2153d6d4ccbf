//! Textual output forms for an animation sequence.

use std::fmt::Write;

use crate::animation::AnimationSequence;
use crate::codec::WORDS_PER_FRAME;

/// Render as a C array listing.
///
/// ```text
/// const uint32_t HeartAnim[][5] = {
///     {0x80000000, 0x00000000, 0x00000000, 0x00000000, 55},
/// };
/// ```
pub fn to_c_array(sequence: &AnimationSequence, name: &str) -> String {
    let mut out = format!(
        "const uint32_t {}[][{}] = {{\n",
        name,
        WORDS_PER_FRAME + 1
    );
    for frame in sequence.frames() {
        let words: Vec<String> = frame.words.iter().map(|w| format!("0x{:08x}", w)).collect();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "    {{{}, {}}},", words.join(", "), frame.duration_ms);
    }
    out.push_str("};\n");
    out
}

/// Render as a pretty-printed JSON array of packed frames.
pub fn to_json(sequence: &AnimationSequence) -> serde_json::Result<String> {
    serde_json::to_string_pretty(sequence.frames())
}

/// Render as an ASCII frame sheet: one block per frame, blank-line separated.
pub fn to_frame_sheet(sequence: &AnimationSequence, lit: char, unlit: char) -> String {
    sequence
        .render()
        .map(|(grid, _)| grid.to_text_rows(lit, unlit).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
        + "\n"
}
