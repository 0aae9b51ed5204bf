//! Editing layer for bitmap fonts
//!
//! Provides the undo/redo engine and the edit state a UI drives:
//! - `Command` / `UndoStack` - generic linear undo history
//! - `FaceModel` - the face plus change notifications, target of all commands
//! - `FontEditState` - glyph editing, reset, clipboard and export settings
//!
//! The UI is expected to call methods on `FontEditState` and redraw based
//! on the events returned by `take_events()`.

mod command;
mod face_model;
mod settings;
mod state;
mod undo_stack;

pub use command::{Command, CommandAction};
pub use face_model::{FaceModel, FontEditEvent};
pub use settings::ExportSettings;
pub use state::FontEditState;
pub use undo_stack::{UndoStack, UndoState};

// Re-export the model so callers only need this crate
pub use fontedit_engine::{
    BatchPixelChange, ChangeType, Face, FaceInfo, FaceState, FontEditError, Glyph, GlyphSelection, Margins, PixelGrid, Result, Size,
};
