use fontedit_engine::Result;

/// Action run by a [`Command`] against the undo target.
pub type CommandAction<T> = Box<dyn Fn(&mut T) -> Result<()>>;

/// A reversible state transition with a display label.
///
/// Both actions own everything they need (snapshots, glyph indices) so a
/// command stays valid no matter what happens to the target between runs.
/// Actions receive the target from the [`crate::UndoStack`] and have no
/// access to the stack itself, so replaying a command can never push new history.
pub struct Command<T> {
    label: String,
    redo: CommandAction<T>,
    undo: CommandAction<T>,
}

impl<T> Command<T> {
    pub fn new(
        label: impl Into<String>,
        redo: impl Fn(&mut T) -> Result<()> + 'static,
        undo: impl Fn(&mut T) -> Result<()> + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            redo: Box::new(redo),
            undo: Box::new(undo),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn redo(&self, target: &mut T) -> Result<()> {
        (self.redo)(target)
    }

    pub(crate) fn undo(&self, target: &mut T) -> Result<()> {
        (self.undo)(target)
    }
}

impl<T> std::fmt::Debug for Command<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command").field("label", &self.label).finish_non_exhaustive()
    }
}
