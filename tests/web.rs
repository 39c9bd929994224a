// Browser tests for the exported `Game2048` class (wasm-pack test --headless).
#![cfg(target_arch = "wasm32")]

use twenty48::Game2048;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn named_moves_accept_directions() {
    let mut game = Game2048::with_seed(11);
    for name in ["left", "UP", "right", "down"] {
        assert!(game.move_named(name).is_ok());
    }
    assert_eq!(game.cells().len(), 16);
}

#[wasm_bindgen_test]
fn unknown_direction_is_an_error() {
    let mut game = Game2048::with_seed(11);
    let before = game.cells();
    assert!(game.move_named("sideways").is_err());
    assert_eq!(game.cells(), before);
}

#[wasm_bindgen_test]
fn entropy_seeded_game_starts_with_two_tiles() {
    let game = Game2048::new();
    assert_eq!(game.cells().iter().filter(|&&v| v != 0).count(), 2);
    assert_eq!(game.status(), "playing");
    assert!(game.share_text("").starts_with("I scored 0"));
}

#[wasm_bindgen_test]
fn remounting_keeps_a_single_set_of_controls() {
    twenty48::start_game().unwrap();
    twenty48::start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    assert_eq!(doc.get_elements_by_tag_name("button").length(), 4);
    let row = doc.get_element_by_id(twenty48::widget::CONTROLS_ID).unwrap();
    assert_eq!(row.child_element_count(), 4);
}
