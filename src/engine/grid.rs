//! Fixed 4x4 tile grid and the directional line mapping used by moves.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Side length of the (square) grid.
pub const SIZE: usize = 4;

/// Tile value that marks a won session.
pub const WIN_TILE: u32 = 2048;

/// Largest tile a 4x4 game can produce (`2^18`, with a 4 spawned into the last
/// free cell). Caps caller-built grids so merge arithmetic stays far from `u32`
/// overflow.
pub const MAX_TILE: u32 = 1 << 18;

/// A direction to slide/merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Grid coordinates `(row, col)` of line `line`, in the order tiles are read
    /// for this direction. Index 0 is the edge tiles compact toward.
    pub fn line_cells(self, line: usize) -> [(usize, usize); SIZE] {
        let mut cells = [(0, 0); SIZE];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = match self {
                Direction::Left => (line, i),
                Direction::Right => (line, SIZE - 1 - i),
                Direction::Up => (i, line),
                Direction::Down => (SIZE - 1 - i, line),
            };
        }
        cells
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}' (expected up, down, left or right)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("tile ({row},{col}) holds {value}, expected 0 or a power of two >= 2")]
    NotPowerOfTwo { row: usize, col: usize, value: u32 },
    #[error("tile ({row},{col}) holds {value}, above the largest reachable tile {MAX_TILE}")]
    TooLarge { row: usize, col: usize, value: u32 },
}

/// 4x4 grid of tile values; `0` is an empty cell.
///
/// Grids are plain `Copy` values: every transform returns a new grid so a
/// previous session snapshot is never aliased by the next one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[[u32; SIZE]; SIZE]"))]
pub struct Grid([[u32; SIZE]; SIZE]);

impl Grid {
    /// An all-empty grid.
    pub const EMPTY: Grid = Grid([[0; SIZE]; SIZE]);

    /// Build a grid from rows, rejecting values that are not 0 or a power of two
    /// in `2..=MAX_TILE`.
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Result<Self, GridError> {
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != 0 && (value == 1 || !value.is_power_of_two()) {
                    return Err(GridError::NotPowerOfTwo { row, col, value });
                }
                if value > MAX_TILE {
                    return Err(GridError::TooLarge { row, col, value });
                }
            }
        }
        Ok(Grid(rows))
    }

    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.0
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.0[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        self.0[row][col] = value;
    }

    /// Row-major copy of all 16 cells.
    pub fn cells(&self) -> Vec<u32> {
        self.0.iter().flatten().copied().collect()
    }

    /// Coordinates of empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut result = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.0[row][col] == 0 {
                    result.push((row, col));
                }
            }
        }
        result
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().flatten().all(|&v| v != 0)
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn contains(&self, value: u32) -> bool {
        self.0.iter().flatten().any(|&v| v == value)
    }

    /// True if some move could still change the grid: an empty cell exists, or two
    /// orthogonally adjacent cells hold the same value.
    pub fn has_moves(&self) -> bool {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let v = self.0[row][col];
                if v == 0 {
                    return true;
                }
                if col + 1 < SIZE && v == self.0[row][col + 1] {
                    return true;
                }
                if row + 1 < SIZE && v == self.0[row + 1][col] {
                    return true;
                }
            }
        }
        false
    }

    /// Read line `line` in `direction` traversal order.
    pub fn line(&self, direction: Direction, line: usize) -> [u32; SIZE] {
        direction.line_cells(line).map(|(r, c)| self.0[r][c])
    }

    pub(crate) fn write_line(&mut self, direction: Direction, line: usize, values: [u32; SIZE]) {
        for ((r, c), v) in direction.line_cells(line).into_iter().zip(values) {
            self.0[r][c] = v;
        }
    }
}

impl TryFrom<[[u32; SIZE]; SIZE]> for Grid {
    type Error = GridError;

    fn try_from(rows: [[u32; SIZE]; SIZE]) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                if *v == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", v)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
