//! Browser widget: the `Game2048` class exported to JS, and the DOM mount that
//! wires a canvas, direction buttons and the keyboard to one game.

use std::cell::{Cell, RefCell};

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

use crate::config::WidgetConfig;
use crate::engine::{Direction, RngTiles};
use crate::input::{BUTTONS, direction_for_key};
use crate::logging;
use crate::render;
use crate::session::Session;

/// One game session plus the random stream that feeds its spawns.
#[wasm_bindgen]
pub struct Game2048 {
    session: Session,
    tiles: RngTiles<StdRng>,
}

impl Game2048 {
    fn from_rng(rng: StdRng) -> Self {
        let mut tiles = RngTiles(rng);
        let session = Session::new(&mut tiles);
        Self { session, tiles }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply one move; returns whether the session changed.
    pub fn apply(&mut self, direction: Direction) -> bool {
        let next = self.session.handle_move(direction, &mut self.tiles);
        let changed = next != self.session;
        self.session = next;
        changed
    }
}

impl Default for Game2048 {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Game2048 {
    /// New game seeded from browser entropy.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game2048 {
        Self::from_rng(StdRng::from_entropy())
    }

    /// New game with a fixed seed; the same seed and moves replay the same game.
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u64) -> Game2048 {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Move by direction name (`"up"`, `"down"`, `"left"`, `"right"`).
    #[wasm_bindgen(js_name = "move")]
    pub fn move_named(&mut self, direction: &str) -> Result<bool, JsValue> {
        let direction: Direction = direction
            .parse()
            .map_err(|e: crate::engine::ParseDirectionError| JsValue::from_str(&e.to_string()))?;
        Ok(self.apply(direction))
    }

    /// Move by `KeyboardEvent.key`; keys other than the arrows do nothing.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        match direction_for_key(key) {
            Some(direction) => self.apply(direction),
            None => false,
        }
    }

    /// Row-major tile values.
    pub fn cells(&self) -> Vec<u32> {
        self.session.grid().cells()
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> f64 {
        self.session.score() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn won(&self) -> bool {
        self.session.won()
    }

    #[wasm_bindgen(getter)]
    pub fn over(&self) -> bool {
        self.session.over()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.session.status().as_str().to_string()
    }

    #[wasm_bindgen(js_name = shareText)]
    pub fn share_text(&self, url: &str) -> String {
        self.session.share_text(url)
    }

    /// Start over, continuing the same random stream.
    pub fn reset(&mut self) {
        self.session = Session::new(&mut self.tiles);
    }
}

#[cfg(feature = "serde_json")]
impl Game2048 {
    pub fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.session)
    }
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen]
impl Game2048 {
    /// `{"grid": [[..]], "score": n, "won": b, "over": b}`
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.snapshot().map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

// --- DOM mount --------------------------------------------------------------

struct WidgetState {
    ctx: CanvasRenderingContext2d,
    canvas_px: f64,
    share_url: String,
    game: Game2048,
}

impl WidgetState {
    fn redraw(&self) {
        render::render(&self.ctx, self.canvas_px, self.game.session(), &self.share_url);
    }
}

/// Element id of the direction button row.
pub const CONTROLS_ID: &str = "t48-controls";

thread_local! {
    static WIDGET: RefCell<Option<WidgetState>> = const { RefCell::new(None) };
    static LISTENERS_WIRED: Cell<bool> = const { Cell::new(false) };
}

/// True only for the first caller; buttons and the keydown listener are page-wide
/// and must be added once, whatever the number of mounts.
fn claim_listeners() -> bool {
    LISTENERS_WIRED.with(|wired| !wired.replace(true))
}

/// Apply `direction` to the mounted game and repaint if anything changed.
fn dispatch(direction: Direction) {
    WIDGET.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            if state.game.apply(direction) {
                state.redraw();
            }
        }
    });
}

/// Direction buttons under the canvas plus the arrow-key listener.
fn wire_controls(doc: &web_sys::Document, body: &web_sys::HtmlElement) -> Result<(), JsValue> {
    let row = doc.create_element("div")?;
    row.set_id(CONTROLS_ID);
    row.set_attribute("style", "display:flex; gap:8px; justify-content:center;")
        .ok();
    for (direction, label) in BUTTONS {
        let button = doc.create_element("button")?;
        button.set_text_content(Some(label));
        button.set_attribute("aria-label", direction.as_str()).ok();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            dispatch(direction);
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        row.append_child(&button)?;
    }
    body.append_child(&row)?;

    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        if let Some(direction) = direction_for_key(&evt.key()) {
            // keep arrows from scrolling the page
            evt.prevent_default();
            dispatch(direction);
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn mount(config: WidgetConfig) -> Result<(), JsValue> {
    logging::init(logging::parse_level(&config.log_level));

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(&config.canvas_id) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(&config.canvas_id);
        c.set_attribute("style", "display:block; margin:16px auto; border-radius:6px;")
            .ok();
        body.append_child(&c)?;
        c
    };
    canvas.set_width(config.canvas_px);
    canvas.set_height(config.canvas_px);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    // Later mounts reuse the controls; only the game below is replaced.
    if claim_listeners() {
        wire_controls(&doc, &body)?;
    }

    let game = match config.seed {
        Some(seed) => Game2048::with_seed(seed),
        None => Game2048::new(),
    };
    let state = WidgetState {
        ctx,
        canvas_px: f64::from(config.canvas_px),
        share_url: config.share_url,
        game,
    };
    state.redraw();
    WIDGET.with(|cell| cell.replace(Some(state)));
    log::info!("mounted 2048 widget on #{}", config.canvas_id);
    Ok(())
}
