//! Font Edit State
//!
//! The controller an external UI drives. Every reversible user action is
//! turned into a [`Command`] and pushed through the undo stack:
//!
//! | Action              | Undo step            | Captured state                  |
//! |---------------------|----------------------|---------------------------------|
//! | Paint gesture       | "Edit Glyph"         | glyph index + pixel diff        |
//! | Select other glyph  | "Switch Active Glyph"| previous and new index          |
//! | Reset glyph         | "Reset Glyph"        | glyph index + pixels before     |
//! | Paste glyph         | "Paste Glyph"        | glyph index + pixels before/after |
//!
//! Resetting the whole font is not undoable and clears the history.

use fontedit_engine::export::{format_for, timestamp_now};
use fontedit_engine::{render, BatchPixelChange, ChangeType, Face, GlyphSelection, PixelGrid, Result};

use crate::{Command, ExportSettings, FaceModel, FontEditEvent, UndoStack, UndoState};

pub struct FontEditState {
    model: FaceModel,
    undo_stack: UndoStack<FaceModel>,
    clipboard: Option<PixelGrid>,
    export_settings: ExportSettings,
    /// `Created:` header text, fixed until the face is reloaded or restamped
    created: String,
}

impl FontEditState {
    pub fn new(face: Face) -> Self {
        Self {
            model: FaceModel::new(face),
            undo_stack: UndoStack::new(),
            clipboard: None,
            export_settings: ExportSettings::default(),
            created: timestamp_now(),
        }
    }

    pub fn face(&self) -> &Face {
        self.model.face()
    }

    /// Replace the face being edited; the undo history no longer applies and is dropped.
    pub fn load_face(&mut self, face: Face) {
        self.model.replace_face(face);
        self.undo_stack.clear();
        self.created = timestamp_now();
    }

    /// Events produced since the last call.
    pub fn take_events(&mut self) -> Vec<FontEditEvent> {
        self.model.take_events()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Glyph editing
    // ═══════════════════════════════════════════════════════════════════════

    /// Apply a coalesced paint gesture to the active glyph.
    pub fn edit_glyph(&mut self, change: BatchPixelChange) -> Result<()> {
        let Some(index) = self.face().active_glyph_index() else {
            log::debug!("edit_glyph: no active glyph");
            return Ok(());
        };
        if change.is_noop() {
            return Ok(());
        }

        let undo_change = change.clone();
        let command = Command::new(
            "Edit Glyph",
            move |model: &mut FaceModel| model.modify_glyph(index, &change, ChangeType::Normal),
            move |model: &mut FaceModel| model.modify_glyph(index, &undo_change, ChangeType::Reverse),
        );
        self.undo_stack.push(command, &mut self.model)
    }

    /// Make `index` the active glyph.
    ///
    /// The very first selection is not recorded; later switches are undoable.
    pub fn switch_active_glyph(&mut self, index: usize) -> Result<()> {
        self.face().glyph(index)?;
        match self.face().active_glyph_index() {
            Some(current) if current == index => Ok(()),
            Some(current) => {
                let command = Command::new(
                    "Switch Active Glyph",
                    move |model: &mut FaceModel| model.set_active_glyph(Some(index)),
                    move |model: &mut FaceModel| model.set_active_glyph(Some(current)),
                );
                self.undo_stack.push(command, &mut self.model)
            }
            None => self.model.set_active_glyph(Some(index)),
        }
    }

    /// Restore the active glyph to the pixels it was loaded with.
    pub fn reset_current_glyph(&mut self) -> Result<()> {
        let Some(glyph) = self.face().active_glyph() else {
            log::debug!("reset_current_glyph: no active glyph");
            return Ok(());
        };
        if !glyph.is_modified() {
            return Ok(());
        }

        let index = glyph.index();
        let before = glyph.pixels().clone();
        let command = Command::new(
            "Reset Glyph",
            move |model: &mut FaceModel| model.reset_glyph(index),
            move |model: &mut FaceModel| model.set_glyph_pixels(index, &before),
        );
        self.undo_stack.push(command, &mut self.model)
    }

    /// Restore every glyph and drop the undo history. Not undoable.
    pub fn reset_font(&mut self) {
        self.model.reset();
        self.undo_stack.clear();
    }

    /// Append a glyph to the face, returning its index.
    pub fn add_glyph(&mut self, pixels: PixelGrid) -> Result<usize> {
        self.model.add_glyph(pixels)
    }

    /// Copy the active glyph's pixels. Returns false if no glyph is active.
    pub fn copy_glyph(&mut self) -> bool {
        match self.face().active_glyph() {
            Some(glyph) => {
                self.clipboard = Some(glyph.pixels().clone());
                true
            }
            None => false,
        }
    }

    pub fn can_paste_glyph(&self) -> bool {
        self.clipboard.is_some() && self.face().active_glyph().is_some()
    }

    /// Overwrite the active glyph with the copied pixels.
    pub fn paste_glyph(&mut self) -> Result<()> {
        let (Some(pasted), Some(glyph)) = (self.clipboard.clone(), self.face().active_glyph()) else {
            log::debug!("paste_glyph: nothing to paste or no active glyph");
            return Ok(());
        };
        if glyph.pixels() == &pasted {
            return Ok(());
        }

        let index = glyph.index();
        let before = glyph.pixels().clone();
        let command = Command::new(
            "Paste Glyph",
            move |model: &mut FaceModel| model.set_glyph_pixels(index, &pasted),
            move |model: &mut FaceModel| model.set_glyph_pixels(index, &before),
        );
        self.undo_stack.push(command, &mut self.model)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Queries for action enablement
    // ═══════════════════════════════════════════════════════════════════════

    pub fn can_reset_glyph(&self) -> bool {
        self.face().active_glyph().is_some_and(|glyph| glyph.is_modified())
    }

    pub fn can_reset_font(&self) -> bool {
        self.face().is_modified()
    }

    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.undo_len()
    }

    pub fn redo_stack_len(&self) -> usize {
        self.undo_stack.redo_len()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Export
    // ═══════════════════════════════════════════════════════════════════════

    pub fn export_settings(&self) -> &ExportSettings {
        &self.export_settings
    }

    pub fn set_export_settings(&mut self, settings: ExportSettings) -> Result<()> {
        settings.validate()?;
        self.export_settings = settings;
        Ok(())
    }

    pub fn set_invert_bits(&mut self, invert: bool) {
        self.export_settings.invert_bits = invert;
    }

    pub fn set_msb_first(&mut self, msb_first: bool) {
        self.export_settings.msb_first = msb_first;
    }

    pub fn set_include_line_spacing(&mut self, include: bool) {
        self.export_settings.include_line_spacing = include;
    }

    /// Select the output dialect by identifier.
    pub fn set_output_format(&mut self, identifier: &str) -> Result<()> {
        let format = format_for(identifier)?;
        self.export_settings.output_format = format.identifier().to_string();
        Ok(())
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    /// Override the `Created:` header text used by later exports.
    pub fn set_created(&mut self, created: impl Into<String>) {
        self.created = created.into();
    }

    /// Take the current local time as the `Created:` header text.
    pub fn stamp_now(&mut self) {
        self.created = timestamp_now();
    }

    /// Source code for all glyphs with the current export settings.
    pub fn source_code(&self) -> Result<String> {
        self.export(&GlyphSelection::All)
    }

    pub fn export(&self, selection: &GlyphSelection) -> Result<String> {
        let options = self.export_settings.export_options(&self.created);
        render(self.face(), selection, &options, &self.export_settings.output_format)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UndoState Trait Implementation
// ═══════════════════════════════════════════════════════════════════════════

impl UndoState for FontEditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        self.undo_stack.undo(&mut self.model)
    }

    fn redo_description(&self) -> Option<String> {
        self.undo_stack.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        self.undo_stack.redo(&mut self.model)
    }
}
