// Invariants checked over many seeded random games.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use twenty48::{Direction, Grid, RngTiles, SIZE, Session, apply_move};

fn random_direction(rng: &mut StdRng) -> Direction {
    Direction::ALL[rng.gen_range(0..4)]
}

/// Non-zero values of every line sit at the leading edge with zeros trailing.
fn is_compacted(grid: &Grid, direction: Direction) -> bool {
    (0..SIZE).all(|line| {
        let values = grid.line(direction, line);
        let filled = values.iter().take_while(|&&v| v != 0).count();
        values[filled..].iter().all(|&v| v == 0)
    })
}

fn play(seed: u64, max_moves: usize, mut check: impl FnMut(&Session, Direction, &Session)) -> Session {
    let mut tiles = RngTiles(StdRng::seed_from_u64(seed));
    let mut picker = StdRng::seed_from_u64(seed ^ 0x2048);
    let mut session = Session::new(&mut tiles);
    for _ in 0..max_moves {
        if session.over() {
            break;
        }
        let dir = random_direction(&mut picker);
        let next = session.handle_move(dir, &mut tiles);
        check(&session, dir, &next);
        session = next;
    }
    session
}

#[test]
fn init_places_exactly_two_tiles() {
    for seed in 0..50 {
        let mut tiles = RngTiles(StdRng::seed_from_u64(seed));
        let session = Session::new(&mut tiles);
        assert_eq!(session.grid().tile_count(), 2);
        assert!(session.grid().cells().iter().all(|&v| v == 0 || v == 2 || v == 4));
        assert_eq!(session.score(), 0);
    }
}

#[test]
fn moves_leave_lines_compacted() {
    for seed in 0..20 {
        play(seed, 300, |before, dir, _| {
            let out = apply_move(*before.grid(), dir);
            assert!(is_compacted(&out.grid, dir), "seed {seed}: {dir}\n{}", out.grid);
        });
    }
}

#[test]
fn score_and_flags_are_monotonic() {
    for seed in 0..20 {
        play(seed, 500, |before, _, after| {
            assert!(after.score() >= before.score());
            assert!(!before.won() || after.won());
            assert!(!before.over() || after.over());
        });
    }
}

#[test]
fn score_grows_by_merged_points() {
    for seed in 0..10 {
        play(seed, 300, |before, dir, after| {
            let out = apply_move(*before.grid(), dir);
            if out.moved {
                assert_eq!(after.score(), before.score() + u64::from(out.gained));
            }
        });
    }
}

#[test]
fn ineffective_moves_change_nothing() {
    for seed in 0..20 {
        play(seed, 300, |before, dir, after| {
            if !apply_move(*before.grid(), dir).moved {
                assert_eq!(before, after);
            }
        });
    }
}

#[test]
fn at_most_one_new_tile_per_move() {
    for seed in 0..20 {
        play(seed, 300, |before, _, after| {
            assert!(after.grid().tile_count() <= before.grid().tile_count() + 1);
        });
    }
}

#[test]
fn tiles_stay_powers_of_two() {
    for seed in 0..10 {
        let end = play(seed, 1000, |_, _, _| {});
        assert!(end.grid().cells().iter().all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())));
        assert!(Grid::from_rows(*end.grid().rows()).is_ok());
    }
}

#[test]
fn game_over_means_full_and_locked() {
    let mut finished = 0;
    for seed in 0..40 {
        let end = play(seed, 5_000, |_, _, _| {});
        if end.over() {
            finished += 1;
            let g = end.grid();
            assert!(g.is_full());
            for r in 0..SIZE {
                for c in 0..SIZE {
                    if c + 1 < SIZE {
                        assert_ne!(g.get(r, c), g.get(r, c + 1));
                    }
                    if r + 1 < SIZE {
                        assert_ne!(g.get(r, c), g.get(r + 1, c));
                    }
                }
            }
            for dir in Direction::ALL {
                assert!(!apply_move(*g, dir).moved);
            }
        }
    }
    // random play on a 4x4 grid ends quickly
    assert!(finished > 30, "only {finished} games finished");
}
