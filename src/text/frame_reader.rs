//! Splitting an ASCII frame sheet into row groups.

/// Split a frame sheet on blank lines.
///
/// Empty lines separate frames. Whitespace-only lines are dropped without
/// ending the current frame. Other rows are returned verbatim (minus a
/// trailing `\r`); geometry is fixed up later by [`Grid::normalize`](crate::codec::Grid::normalize).
pub fn split_frames(source: &str) -> Vec<Vec<&str>> {
    let mut frames = Vec::new();
    let mut current = Vec::new();

    for line in source.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            if !current.is_empty() {
                frames.push(std::mem::take(&mut current));
            }
        } else if !line.trim().is_empty() {
            current.push(line);
        }
    }
    if !current.is_empty() {
        frames.push(current);
    }

    frames
}
