// Translation of raw browser input into engine directions.

use crate::engine::Direction;

/// Map a `KeyboardEvent.key` value to a direction. Only the arrow keys move.
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// On-screen buttons in display order, with their labels.
pub const BUTTONS: [(Direction, &str); 4] = [
    (Direction::Up, "↑"),
    (Direction::Left, "←"),
    (Direction::Down, "↓"),
    (Direction::Right, "→"),
];
