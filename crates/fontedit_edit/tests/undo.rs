//! Undo/redo tests for the edit state
//!
//! Every reversible action must push exactly one command and undoing it
//! must restore the face bit for bit.

mod helpers;

use fontedit_edit::{FontEditState, UndoState};
use helpers::{active_pixels, create_test_face, create_test_state, paint};

#[test]
fn test_undo_stack_initially_empty() {
    let state = FontEditState::new(create_test_face());
    assert_eq!(state.undo_stack_len(), 0);
    assert_eq!(state.redo_stack_len(), 0);
    assert!(!state.can_undo());
    assert!(!state.can_redo());
}

#[test]
fn test_first_glyph_selection_is_not_recorded() {
    let state = create_test_state();
    assert_eq!(state.face().active_glyph_index(), Some(0));
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_edit_then_undo_restores_face() {
    let mut state = create_test_state();
    let before = state.face().clone();

    let change = paint(&state, &[(7, 0, true), (0, 0, false)]);
    state.edit_glyph(change).unwrap();
    assert_ne!(state.face(), &before);
    assert_eq!(state.undo_description().as_deref(), Some("Edit Glyph"));

    state.undo().unwrap();
    assert_eq!(state.face(), &before);
    assert!(!state.face().is_modified());
}

#[test]
fn test_redo_reapplies_edit() {
    let mut state = create_test_state();
    let change = paint(&state, &[(3, 3, false), (4, 3, true)]);
    state.edit_glyph(change).unwrap();
    let edited = active_pixels(&state);

    state.undo().unwrap();
    state.redo().unwrap();
    assert_eq!(active_pixels(&state), edited);
    assert_eq!(state.undo_stack_len(), 1);
    assert_eq!(state.redo_stack_len(), 0);
}

#[test]
fn test_new_command_prunes_redo_branch() {
    let mut state = create_test_state();
    for x in 4..7 {
        let change = paint(&state, &[(x, 0, true)]);
        state.edit_glyph(change).unwrap();
    }
    state.undo().unwrap();
    state.undo().unwrap();
    assert_eq!(state.redo_stack_len(), 2);

    let change = paint(&state, &[(0, 3, true)]);
    state.edit_glyph(change).unwrap();

    assert_eq!(state.undo_stack_len(), 2);
    assert_eq!(state.redo_stack_len(), 0);

    let before = active_pixels(&state);
    state.redo().unwrap();
    assert_eq!(active_pixels(&state), before);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut state = create_test_state();
    let before = state.face().clone();
    state.undo().unwrap();
    state.redo().unwrap();
    assert_eq!(state.face(), &before);
}

#[test]
fn test_switch_active_glyph_is_undoable() {
    let mut state = create_test_state();
    state.switch_active_glyph(2).unwrap();
    assert_eq!(state.face().active_glyph_index(), Some(2));
    assert_eq!(state.undo_description().as_deref(), Some("Switch Active Glyph"));

    // selecting the same glyph again does nothing
    state.switch_active_glyph(2).unwrap();
    assert_eq!(state.undo_stack_len(), 1);

    state.undo().unwrap();
    assert_eq!(state.face().active_glyph_index(), Some(0));
    state.redo().unwrap();
    assert_eq!(state.face().active_glyph_index(), Some(2));
}

#[test]
fn test_edit_undo_targets_original_glyph_after_switch() {
    let mut state = create_test_state();
    let change = paint(&state, &[(7, 3, true)]);
    state.edit_glyph(change).unwrap();
    state.switch_active_glyph(1).unwrap();

    // undo switch, then undo the edit on glyph 0
    state.undo().unwrap();
    state.undo().unwrap();
    assert!(!state.face().is_glyph_modified(0).unwrap());
    assert!(!state.face().is_glyph_modified(1).unwrap());
}

#[test]
fn test_reset_glyph_is_undoable() {
    let mut state = create_test_state();
    let change = paint(&state, &[(6, 1, true), (5, 2, true)]);
    state.edit_glyph(change).unwrap();
    let edited = active_pixels(&state);
    assert!(state.can_reset_glyph());

    state.reset_current_glyph().unwrap();
    assert!(!state.can_reset_glyph());
    assert_eq!(state.undo_description().as_deref(), Some("Reset Glyph"));

    state.undo().unwrap();
    assert_eq!(active_pixels(&state), edited);
    assert!(state.can_reset_glyph());
}

#[test]
fn test_reset_unmodified_glyph_pushes_nothing() {
    let mut state = create_test_state();
    state.reset_current_glyph().unwrap();
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_reset_font_clears_history() {
    let mut state = create_test_state();
    let change = paint(&state, &[(7, 0, true)]);
    state.edit_glyph(change).unwrap();
    state.switch_active_glyph(2).unwrap();
    let change = paint(&state, &[(0, 0, true), (1, 1, true)]);
    state.edit_glyph(change).unwrap();
    assert!(state.can_reset_font());

    state.reset_font();

    assert!(!state.face().is_modified());
    assert!(!state.can_reset_font());
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    for glyph in state.face().glyphs() {
        assert_eq!(glyph.pixels(), glyph.original_pixels());
    }
}

#[test]
fn test_paste_glyph_is_undoable() {
    let mut state = create_test_state();
    state.switch_active_glyph(1).unwrap();
    assert!(state.copy_glyph());
    let copied = active_pixels(&state);

    state.switch_active_glyph(2).unwrap();
    assert!(state.can_paste_glyph());
    state.paste_glyph().unwrap();
    assert_eq!(active_pixels(&state), copied);
    assert_eq!(state.undo_description().as_deref(), Some("Paste Glyph"));

    state.undo().unwrap();
    assert!(active_pixels(&state).is_empty());
}

#[test]
fn test_paste_without_clipboard_is_noop() {
    let mut state = create_test_state();
    assert!(!state.can_paste_glyph());
    state.paste_glyph().unwrap();
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_noop_gesture_pushes_nothing() {
    let mut state = create_test_state();
    // (0,0) is already set
    let change = paint(&state, &[(0, 0, true)]);
    state.edit_glyph(change).unwrap();
    assert_eq!(state.undo_stack_len(), 0);
}
