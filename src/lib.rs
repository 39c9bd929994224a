//! Twenty48 core crate.
//!
//! The classic 2048 tile-sliding puzzle as a pure engine plus a small WASM
//! widget. The engine (`engine`, `session`) is plain Rust and runs natively; the
//! widget wires it to a canvas, on-screen buttons and the arrow keys.
//!
//! ```
//! use twenty48::{Direction, ScriptedTiles, Session};
//!
//! let mut tiles = ScriptedTiles::first_cell();
//! let session = Session::new(&mut tiles);
//! let next = session.handle_move(Direction::Right, &mut tiles);
//! assert!(next.score() >= session.score());
//! ```

use wasm_bindgen::prelude::*;

pub mod config;
pub mod engine;
pub mod input;
pub mod logging;
pub mod render;
pub mod session;
pub mod widget;

pub use config::{ConfigError, WidgetConfig};
pub use engine::{
    Direction, Grid, GridError, MAX_TILE, MoveOutcome, ParseDirectionError, RngTiles, SIZE, ScriptedTiles, TileSource,
    WIN_TILE, apply_move, spawn_tile,
};
pub use session::{Session, Status};
pub use widget::Game2048;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Mount the widget with default settings.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    widget::mount(WidgetConfig::default())
}

/// Mount the widget with a JSON config, e.g. `{"seed": 7, "share_url": "https://..."}`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = WidgetConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    widget::mount(config)
}
