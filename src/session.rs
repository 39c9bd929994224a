//! Session controller: one game of 2048 as an explicit value.
//!
//! A [`Session`] is never mutated in place by a move. [`Session::handle_move`]
//! takes the current snapshot and returns the next one, so callers can keep or
//! compare both.

use log::{debug, info};

use crate::engine::{Direction, Grid, TileSource, WIN_TILE, apply_move, spawn_tile};

/// Coarse game status for rendering. `won` and `over` are independent flags on
/// the session; `Won` takes precedence here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    Playing,
    Won,
    Over,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Playing => "playing",
            Status::Won => "won",
            Status::Over => "over",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "SessionRecord"))]
pub struct Session {
    grid: Grid,
    score: u64,
    won: bool,
    over: bool,
}

impl Session {
    /// Start a game: an empty grid with two spawned tiles.
    pub fn new<S: TileSource + ?Sized>(source: &mut S) -> Self {
        let grid = spawn_tile(Grid::EMPTY, source);
        let grid = spawn_tile(grid, source);
        info!("new session\n{grid}");
        Self::from_parts(grid, 0)
    }

    /// Resume from a known grid and score; flags are derived from the grid.
    pub fn from_parts(grid: Grid, score: u64) -> Self {
        Self {
            grid,
            score,
            won: grid.max_tile() >= WIN_TILE,
            over: !grid.has_moves(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// A 2048 tile has appeared at some point in this session.
    pub fn won(&self) -> bool {
        self.won
    }

    /// No move can change the grid any more.
    pub fn over(&self) -> bool {
        self.over
    }

    pub fn status(&self) -> Status {
        if self.won {
            Status::Won
        } else if self.over {
            Status::Over
        } else {
            Status::Playing
        }
    }

    /// Apply one move command and return the next session.
    ///
    /// Moves after game over, and moves that change nothing, return `self`
    /// unchanged without consuming any random draws.
    pub fn handle_move<S: TileSource + ?Sized>(&self, direction: Direction, source: &mut S) -> Session {
        if self.over {
            debug!("ignoring {direction}: game over");
            return *self;
        }
        let outcome = apply_move(self.grid, direction);
        if !outcome.moved {
            debug!("{direction} changed nothing");
            return *self;
        }

        let grid = spawn_tile(outcome.grid, source);
        let next = Session {
            grid,
            score: self.score + u64::from(outcome.gained),
            won: self.won || grid.contains(WIN_TILE),
            over: grid.is_full() && !grid.has_moves(),
        };
        debug!("{direction}: +{} -> {}", outcome.gained, next.score);
        if next.won && !self.won {
            info!("reached {WIN_TILE} with score {}", next.score);
        }
        if next.over {
            info!("game over with score {}", next.score);
        }
        next
    }

    /// Text for the share action, e.g. `I scored 1200 in 2048! https://...`.
    pub fn share_text(&self, url: &str) -> String {
        if url.is_empty() {
            format!("I scored {} in 2048!", self.score)
        } else {
            format!("I scored {} in 2048! {}", self.score, url)
        }
    }
}

/// Wire form of a session. `over` is always recomputed from the grid and
/// `won` can only be raised, so a stored snapshot cannot contradict its grid.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SessionRecord {
    grid: Grid,
    score: u64,
    #[serde(default)]
    won: bool,
}

#[cfg(feature = "serde")]
impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        let mut session = Session::from_parts(record.grid, record.score);
        session.won |= record.won;
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{MAX_TILE, ScriptedTiles};

    fn grid(rows: [[u32; 4]; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn new_session_has_two_tiles() {
        let mut source = ScriptedTiles::new([0, 14], [0.1, 0.95]);
        let session = Session::new(&mut source);
        assert_eq!(session.grid().tile_count(), 2);
        assert_eq!(session.grid().get(0, 0), 2);
        assert_eq!(session.grid().get(3, 3), 4);
        assert_eq!(session.score(), 0);
        assert_eq!(session.status(), Status::Playing);
    }

    #[test]
    fn from_parts_derives_flags() {
        let locked = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2048]]);
        let session = Session::from_parts(locked, 10);
        assert!(session.won());
        assert!(session.over());
        assert_eq!(session.status(), Status::Won);
    }

    #[test]
    fn tiles_past_2048_count_as_won() {
        let session = Session::from_parts(grid([[4096, 2, 0, 0], [0; 4], [0; 4], [0; 4]]), 0);
        assert!(session.won());
        assert!(!session.over());
    }

    #[test]
    fn largest_tiles_merge_without_overflow() {
        let big = grid([[MAX_TILE, MAX_TILE, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut source = ScriptedTiles::first_cell();
        let next = Session::from_parts(big, 7).handle_move(Direction::Left, &mut source);
        assert_eq!(next.grid().get(0, 0), MAX_TILE * 2);
        assert_eq!(next.score(), 7 + u64::from(MAX_TILE * 2));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn deserialize_rederives_flags_from_grid() {
        let json = r#"{"grid":[[2048,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]],"score":5,"won":false,"over":true}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(session.won());
        assert!(!session.over());
        assert_eq!(session.score(), 5);

        let bad = r#"{"grid":[[3,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]],"score":0,"won":false,"over":false}"#;
        assert!(serde_json::from_str::<Session>(bad).is_err());

        let fresh = Session::from_parts(grid([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]), 3);
        let back: Session = serde_json::from_str(&serde_json::to_string(&fresh).unwrap()).unwrap();
        assert_eq!(back, fresh);
    }

    #[test]
    fn share_text_formats_score() {
        let session = Session::from_parts(grid([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]), 1200);
        assert_eq!(session.share_text("https://example.com"), "I scored 1200 in 2048! https://example.com");
        assert_eq!(session.share_text(""), "I scored 1200 in 2048!");
    }
}
