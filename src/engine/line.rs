use super::grid::SIZE;

/// Compact, merge and re-pad one line read toward its leading edge.
///
/// Returns the new line and the points gained. Each tile merges at most once:
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`, never `[8, 0, 0, 0]`.
pub fn slide_line(line: [u32; SIZE]) -> ([u32; SIZE], u32) {
    let mut out = [0u32; SIZE];
    let mut gained = 0;
    let mut len = 0;
    // tile at out[len - 1] may still absorb the next equal tile
    let mut open = false;
    for v in line.into_iter().filter(|&v| v != 0) {
        if open && out[len - 1] == v {
            out[len - 1] = v * 2;
            gained += v * 2;
            open = false;
        } else {
            out[len] = v;
            len += 1;
            open = true;
        }
    }
    (out, gained)
}
