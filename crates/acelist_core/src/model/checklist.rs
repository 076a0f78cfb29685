//! Checklist domain model.
//!
//! # Responsibility
//! - Own an ordered sequence of entries under one named checklist.
//! - Provide recorded add/remove/move/duplicate operations for entries.
//!
//! # Invariants
//! - `id` is stable and never reused for another checklist.
//! - Entry order is the persisted order; no implicit sorting.
//! - Structural edits record identity-matched inverses with the shared
//!   undo facility.

use crate::model::entry::{Entry, EntryId};
use crate::model::move_items;
use crate::undo::op::{inverse_move, EditOp};
use crate::undo::EditContext;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a checklist.
pub type ChecklistId = Uuid;

/// One named checklist holding an ordered list of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    /// Stable global ID used for lookup, move/duplicate, and undo targeting.
    pub(crate) id: ChecklistId,
    pub(crate) name: String,
    pub(crate) entries: Vec<Entry>,
    /// Pre-selected for display when the file opens; exclusive among
    /// sibling checklists within the owning group.
    pub(crate) is_default: bool,
}

impl Checklist {
    /// Creates the starter checklist seeded with one placeholder entry.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Checklist 1".to_string(),
            entries: vec![Entry::default()],
            is_default: false,
        }
    }

    /// Creates an empty checklist with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            entries: Vec::new(),
            is_default: false,
        }
    }

    pub fn id(&self) -> ChecklistId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Finds one entry by stable ID.
    pub fn entry(&self, entry_id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == entry_id)
    }

    /// Finds one entry by stable ID for mutation.
    pub fn entry_mut(&mut self, entry_id: EntryId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id == entry_id)
    }

    /// Renames the checklist, recording the inverse as "Change Name".
    pub fn set_name(&mut self, ctx: &mut EditContext, value: impl Into<String>) {
        let value = value.into();
        if self.name == value {
            return;
        }
        let previous = std::mem::replace(&mut self.name, value);
        ctx.record(
            "Change Name",
            EditOp::SetChecklistName {
                checklist_id: self.id,
                value: previous,
            },
        );
    }

    /// Appends one entry, recording the inverse as "Add Checklist Entry".
    pub fn add_entry(&mut self, ctx: &mut EditContext, entry: Entry) -> EntryId {
        let entry_id = entry.id;
        self.entries.push(entry);
        ctx.record(
            "Add Checklist Entry",
            EditOp::RemoveEntries {
                entry_ids: vec![entry_id],
            },
        );
        entry_id
    }

    /// Inserts one entry at `index`, recording the inverse as
    /// "Add Checklist Entry".
    pub fn insert_entry(&mut self, ctx: &mut EditContext, index: usize, entry: Entry) -> EntryId {
        let entry_id = entry.id;
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
        ctx.record(
            "Add Checklist Entry",
            EditOp::RemoveEntries {
                entry_ids: vec![entry_id],
            },
        );
        entry_id
    }

    /// Appends several entries, recording one inverse as
    /// "Add Checklist Entries".
    pub fn add_entries(&mut self, ctx: &mut EditContext, entries: Vec<Entry>) {
        if entries.is_empty() {
            return;
        }
        let entry_ids = entries.iter().map(|entry| entry.id).collect();
        self.entries.extend(entries);
        ctx.record(
            "Add Checklist Entries",
            EditOp::RemoveEntries { entry_ids },
        );
    }

    /// Removes one entry by ID, recording the inverse as
    /// "Remove Checklist Entry". A missing ID is a legal no-op.
    pub fn remove_entry(&mut self, ctx: &mut EditContext, entry_id: EntryId) {
        let Some(index) = self.entries.iter().position(|entry| entry.id == entry_id) else {
            return;
        };
        let entry = self.entries.remove(index);
        ctx.record(
            "Remove Checklist Entry",
            EditOp::InsertEntries {
                checklist_id: self.id,
                inserts: vec![(index, entry)],
            },
        );
    }

    /// Removes every entry whose ID is listed, recording one inverse that
    /// restores the exact elements at their original positions.
    pub fn remove_entries(&mut self, ctx: &mut EditContext, entry_ids: &[EntryId]) {
        let mut inserts = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());
        for (index, entry) in self.entries.drain(..).enumerate() {
            if entry_ids.contains(&entry.id) {
                inserts.push((index, entry));
            } else {
                kept.push(entry);
            }
        }
        self.entries = kept;
        if inserts.is_empty() {
            return;
        }
        ctx.record(
            "Remove Checklist Entries",
            EditOp::InsertEntries {
                checklist_id: self.id,
                inserts,
            },
        );
    }

    /// Reorders entries. A single-element move records its inverse as
    /// "Move Checklist Entry"; moving several elements at once is applied
    /// but intentionally not undoable.
    pub fn move_entries(&mut self, ctx: &mut EditContext, from_offsets: &[usize], to: usize) {
        if let [from] = *from_offsets {
            let landing = if to > from { to - 1 } else { to };
            if landing == from {
                return;
            }
            move_items(&mut self.entries, from_offsets, to);
            let (inverse_from, inverse_to) = inverse_move(from, to);
            ctx.record(
                "Move Checklist Entry",
                EditOp::MoveEntry {
                    checklist_id: self.id,
                    from: inverse_from,
                    to: inverse_to,
                },
            );
        } else {
            move_items(&mut self.entries, from_offsets, to);
        }
    }

    /// Duplicates one entry under a fresh identity, inserting the copy right
    /// after the source and recording the inverse as "Duplicate Entry".
    /// A missing ID is a legal no-op.
    pub fn duplicate_entry(&mut self, ctx: &mut EditContext, entry_id: EntryId) -> Option<EntryId> {
        let index = self.entries.iter().position(|entry| entry.id == entry_id)?;
        let copy = self.entries[index].duplicate();
        let copy_id = copy.id;
        self.entries.insert(index + 1, copy);
        ctx.record(
            "Duplicate Entry",
            EditOp::RemoveEntries {
                entry_ids: vec![copy_id],
            },
        );
        Some(copy_id)
    }

    /// Copies this checklist and its entries under fresh identities,
    /// preserving all scalar fields.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            entries: self.entries.iter().map(Entry::duplicate).collect(),
            is_default: self.is_default,
        }
    }

    /// Field-wise equality that ignores identity.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.is_default == other.is_default
            && self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| a.content_eq(b))
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new()
    }
}
