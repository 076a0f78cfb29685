//! Shared undo/redo facility for the document tree.
//!
//! # Responsibility
//! - Record a labeled inverse for every mutation applied to the tree.
//! - Replay inverses in strict LIFO order for undo, FIFO for redo.
//!
//! # Invariants
//! - Exactly one context is shared by a whole document tree; mutation calls
//!   receive it explicitly instead of holding back-references.
//! - Recording a new edit invalidates the redo log.
//! - Replay never fails; a missing target means the tree lost referential
//!   integrity, which is a programming-contract violation.

pub(crate) mod op;

use crate::model::file::ChecklistFile;
use op::EditOp;

/// One recorded undo/redo step: the inverse operation plus its menu label.
#[derive(Debug)]
struct EditRecord {
    label: &'static str,
    op: EditOp,
}

/// Ordered undo/redo log shared across one document tree.
///
/// Passed explicitly into every mutation call; the mutation applies its
/// forward edit to the tree and records the inverse here.
#[derive(Debug, Default)]
pub struct EditContext {
    undo_log: Vec<EditRecord>,
    redo_log: Vec<EditRecord>,
}

impl EditContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the inverse of an edit that was just applied.
    ///
    /// Consecutive edits are kept as separate steps; nothing is coalesced.
    pub(crate) fn record(&mut self, label: &'static str, inverse: EditOp) {
        self.redo_log.clear();
        self.undo_log.push(EditRecord { label, op: inverse });
    }

    /// Reverts the most recent edit. Returns its label, or `None` when the
    /// undo log is empty.
    pub fn undo(&mut self, file: &mut ChecklistFile) -> Option<&'static str> {
        let record = self.undo_log.pop()?;
        let inverse = record.op.apply(file);
        self.redo_log.push(EditRecord {
            label: record.label,
            op: inverse,
        });
        Some(record.label)
    }

    /// Re-applies the most recently undone edit. Returns its label, or
    /// `None` when the redo log is empty.
    pub fn redo(&mut self, file: &mut ChecklistFile) -> Option<&'static str> {
        let record = self.redo_log.pop()?;
        let inverse = record.op.apply(file);
        self.undo_log.push(EditRecord {
            label: record.label,
            op: inverse,
        });
        Some(record.label)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_log.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_log.is_empty()
    }

    /// Label of the edit the next `undo` call would revert.
    pub fn current_action_name(&self) -> Option<&'static str> {
        self.undo_log.last().map(|record| record.label)
    }

    /// Label of the edit the next `redo` call would re-apply.
    pub fn redo_action_name(&self) -> Option<&'static str> {
        self.redo_log.last().map(|record| record.label)
    }
}
