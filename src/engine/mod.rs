//! Pure 2048 engine: grid transform, tile spawning and terminal detection.
//!
//! Nothing here touches the browser; every function is a total transform over
//! `Copy` values so it can be driven from native tests.

mod grid;
mod line;
mod spawn;

pub use grid::{Direction, Grid, GridError, MAX_TILE, ParseDirectionError, SIZE, WIN_TILE};
pub use line::slide_line;
pub use spawn::{RngTiles, ScriptedTiles, TILE_THRESHOLDS, TILE_VALUES, TileSource, spawn_tile, tile_for_draw};

/// Result of sliding a grid in one direction (no spawn).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    /// Whether any cell changed.
    pub moved: bool,
    /// Sum of the values of all tiles created by merges.
    pub gained: u32,
}

/// Slide and merge every line of `grid` toward `direction`.
pub fn apply_move(grid: Grid, direction: Direction) -> MoveOutcome {
    let mut next = grid;
    let mut gained = 0;
    for line in 0..SIZE {
        let (slid, points) = slide_line(grid.line(direction, line));
        next.write_line(direction, line, slid);
        gained += points;
    }
    MoveOutcome {
        grid: next,
        moved: next != grid,
        gained,
    }
}
