//! Shared test helpers for edit state tests

#![allow(dead_code)]

use fontedit_edit::{BatchPixelChange, Face, FontEditState, Margins, PixelGrid, Size};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Three 8x4 glyphs: a diagonal, a box outline and an empty glyph
pub fn create_test_face() -> Face {
    let glyphs = vec![
        PixelGrid::from_text("#.......\n.#......\n..#.....\n...#...."),
        PixelGrid::from_text("########\n#......#\n#......#\n########"),
        PixelGrid::new(8, 4),
    ];
    Face::with_glyphs("Test", Size::new(8, 4), Margins::new(0, 1), glyphs).unwrap()
}

/// Edit state with glyph 0 active and a clean history
pub fn create_test_state() -> FontEditState {
    init_logging();
    let mut state = FontEditState::new(create_test_face());
    state.switch_active_glyph(0).unwrap();
    state.take_events();
    state
}

/// Paint gesture on the active glyph
pub fn paint(state: &FontEditState, pixels: &[(usize, usize, bool)]) -> BatchPixelChange {
    let grid = state.face().active_glyph().unwrap().pixels();
    let mut change = BatchPixelChange::new();
    for &(x, y, value) in pixels {
        change.record(grid, x, y, value);
    }
    change
}

pub fn active_pixels(state: &FontEditState) -> PixelGrid {
    state.face().active_glyph().unwrap().pixels().clone()
}
