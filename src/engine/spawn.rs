//! Random tile placement.
//!
//! A spawn needs two random draws: which empty cell, and which value. Both go
//! through [`TileSource`] so tests can replay a fixed sequence instead of
//! depending on a global generator.

use std::collections::VecDeque;

use rand::Rng;

use super::grid::Grid;

/// Values a spawn can place and their cumulative probability thresholds.
pub const TILE_VALUES: [u32; 2] = [2, 4];
pub const TILE_THRESHOLDS: [f64; 2] = [0.9, 1.0];

pub trait TileSource {
    /// Index in `0..len` of the empty cell to fill. `len` is never zero.
    fn pick_cell(&mut self, len: usize) -> usize;
    /// Uniform draw in `[0, 1)` compared against [`TILE_THRESHOLDS`].
    fn draw_value(&mut self) -> f64;
}

/// [`TileSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngTiles<R>(pub R);

impl<R: Rng> TileSource for RngTiles<R> {
    fn pick_cell(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn draw_value(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Replays scripted draws. Once a queue runs dry it yields cell 0 / draw 0.0
/// (a 2 in the first empty cell).
#[derive(Debug, Clone, Default)]
pub struct ScriptedTiles {
    cells: VecDeque<usize>,
    values: VecDeque<f64>,
}

impl ScriptedTiles {
    pub fn new(cells: impl IntoIterator<Item = usize>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            values: values.into_iter().collect(),
        }
    }

    /// Always fills the first empty cell (row-major) with a 2.
    pub fn first_cell() -> Self {
        Self::default()
    }
}

impl TileSource for ScriptedTiles {
    fn pick_cell(&mut self, len: usize) -> usize {
        self.cells.pop_front().unwrap_or(0).min(len - 1)
    }

    fn draw_value(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(0.0)
    }
}

/// Map a `[0, 1)` draw onto a tile value via the cumulative thresholds.
pub fn tile_for_draw(draw: f64) -> u32 {
    for (value, threshold) in TILE_VALUES.iter().zip(TILE_THRESHOLDS) {
        if draw < threshold {
            return *value;
        }
    }
    TILE_VALUES[0]
}

/// Place one random tile into an empty cell. A full grid is returned unchanged.
pub fn spawn_tile<S: TileSource + ?Sized>(grid: Grid, source: &mut S) -> Grid {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return grid;
    }
    let (row, col) = empty[source.pick_cell(empty.len())];
    let mut next = grid;
    next.set(row, col, tile_for_draw(source.draw_value()));
    next
}
