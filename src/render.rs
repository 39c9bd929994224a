//! Canvas rendering of a session: grid, score line and the won/over overlay.

use web_sys::CanvasRenderingContext2d;

use crate::engine::SIZE;
use crate::session::{Session, Status};

// Height reserved under the grid for the score line.
const FOOTER_PX: f64 = 36.0;
const GAP_PX: f64 = 8.0;

/// Background and text colour for a tile value.
pub fn tile_colors(value: u32) -> (&'static str, &'static str) {
    match value {
        0 => ("#cdc1b4", "#776e65"),
        2 => ("#eee4da", "#776e65"),
        4 => ("#ede0c8", "#776e65"),
        8 => ("#f2b179", "#f9f6f2"),
        16 => ("#f59563", "#f9f6f2"),
        32 => ("#f67c5f", "#f9f6f2"),
        64 => ("#f65e3b", "#f9f6f2"),
        128 => ("#edcf72", "#f9f6f2"),
        256 => ("#edcc61", "#f9f6f2"),
        512 => ("#edc850", "#f9f6f2"),
        1024 => ("#edc53f", "#f9f6f2"),
        2048 => ("#edc22e", "#f9f6f2"),
        _ => ("#3c3a32", "#f9f6f2"),
    }
}

/// Font size in px for a tile label, shrinking as digits grow.
pub fn label_font_px(value: u32, cell_px: f64) -> f64 {
    let digits = value.to_string().len() as f64;
    (cell_px * 0.45).min(cell_px * 1.4 / digits.max(1.0))
}

/// Headline shown over the grid, if any.
pub fn overlay_title(status: Status) -> Option<&'static str> {
    match status {
        Status::Playing => None,
        Status::Won => Some("You won!"),
        Status::Over => Some("Game Over"),
    }
}

pub fn render(ctx: &CanvasRenderingContext2d, canvas_px: f64, session: &Session, share_url: &str) {
    let board_px = canvas_px - FOOTER_PX;
    let cell_px = (board_px - GAP_PX * (SIZE as f64 + 1.0)) / SIZE as f64;

    ctx.set_fill_style_str("#faf8ef");
    ctx.fill_rect(0.0, 0.0, canvas_px, canvas_px);
    ctx.set_fill_style_str("#bbada0");
    ctx.fill_rect(0.0, 0.0, canvas_px, board_px);

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for (row, values) in session.grid().rows().iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            let x = GAP_PX + col as f64 * (cell_px + GAP_PX);
            let y = GAP_PX + row as f64 * (cell_px + GAP_PX);
            let (bg, fg) = tile_colors(value);
            ctx.set_fill_style_str(bg);
            ctx.fill_rect(x, y, cell_px, cell_px);
            if value != 0 {
                ctx.set_fill_style_str(fg);
                ctx.set_font(&format!("bold {}px 'Fira Code', monospace", label_font_px(value, cell_px).round()));
                ctx.fill_text(&value.to_string(), x + cell_px / 2.0, y + cell_px / 2.0).ok();
            }
        }
    }

    ctx.set_fill_style_str("#776e65");
    ctx.set_font("20px 'Fira Code', monospace");
    ctx.fill_text(&format!("Score: {}", session.score()), canvas_px / 2.0, board_px + FOOTER_PX / 2.0)
        .ok();

    if let Some(title) = overlay_title(session.status()) {
        ctx.set_fill_style_str("rgba(238,228,218,0.73)");
        ctx.fill_rect(0.0, 0.0, canvas_px, board_px);
        ctx.set_fill_style_str("#776e65");
        ctx.set_font("bold 40px 'Fira Code', monospace");
        ctx.fill_text(title, canvas_px / 2.0, board_px / 2.0 - 16.0).ok();
        ctx.set_font("14px 'Fira Code', monospace");
        ctx.fill_text(&session.share_text(share_url), canvas_px / 2.0, board_px / 2.0 + 24.0)
            .ok();
    }
}
