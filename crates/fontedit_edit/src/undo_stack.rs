//! Linear undo history.
//!
//! Position `index` splits the history: commands `[0, index)` are applied,
//! `[index, len)` are undone and available for redo. Pushing a command
//! while `index < len` discards the undone branch.

use fontedit_engine::Result;

use crate::Command;

/// Single-step undo and redo driven from menu entries. Stepping past either
/// end of the history is not an error and leaves everything unchanged.
pub trait UndoState {
    /// Label of the command `undo` would revert.
    fn undo_description(&self) -> Option<String>;

    fn can_undo(&self) -> bool;

    /// Revert the most recent applied command.
    fn undo(&mut self) -> Result<()>;

    /// Label of the command `redo` would reapply.
    fn redo_description(&self) -> Option<String>;

    fn can_redo(&self) -> bool;

    /// Reapply the most recently undone command.
    fn redo(&mut self) -> Result<()>;
}

/// History of [`Command`]s operating on a target of type `T`.
pub struct UndoStack<T> {
    commands: Vec<Command<T>>,
    index: usize,
}

impl<T> Default for UndoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UndoStack<T> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: 0,
        }
    }

    /// Execute `command` and record it.
    ///
    /// If the command fails the history is left untouched.
    pub fn push(&mut self, command: Command<T>, target: &mut T) -> Result<()> {
        command.redo(target)?;
        log::debug!("push '{}' (discarding {} undone)", command.label(), self.commands.len() - self.index);
        self.commands.truncate(self.index);
        self.commands.push(command);
        self.index = self.commands.len();
        Ok(())
    }

    pub fn undo(&mut self, target: &mut T) -> Result<()> {
        if self.index == 0 {
            log::debug!("nothing to undo");
            return Ok(());
        }
        let command = &self.commands[self.index - 1];
        log::debug!("undo '{}'", command.label());
        if let Err(err) = command.undo(target) {
            log::warn!("undo of '{}' failed: {}", command.label(), err);
            return Err(err);
        }
        self.index -= 1;
        Ok(())
    }

    pub fn redo(&mut self, target: &mut T) -> Result<()> {
        let Some(command) = self.commands.get(self.index) else {
            log::debug!("nothing to redo");
            return Ok(());
        };
        log::debug!("redo '{}'", command.label());
        if let Err(err) = command.redo(target) {
            log::warn!("redo of '{}' failed: {}", command.label(), err);
            return Err(err);
        }
        self.index += 1;
        Ok(())
    }

    /// Forget all history without running any command.
    pub fn clear(&mut self) {
        log::debug!("clear undo history ({} commands)", self.commands.len());
        self.commands.clear();
        self.index = 0;
    }

    /// Total number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of applied commands.
    pub fn undo_len(&self) -> usize {
        self.index
    }

    /// Number of undone commands available for redo.
    pub fn redo_len(&self) -> usize {
        self.commands.len() - self.index
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index < self.commands.len()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.index.checked_sub(1).map(|i| self.commands[i].label().to_string())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.commands.get(self.index).map(|c| c.label().to_string())
    }
}

impl<T> std::fmt::Debug for UndoStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoStack").field("commands", &self.commands).field("index", &self.index).finish()
    }
}
