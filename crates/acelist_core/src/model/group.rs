//! Checklist group domain model.
//!
//! # Responsibility
//! - Own an ordered sequence of checklists under one named group.
//! - Track the single default checklist within the group.
//!
//! # Invariants
//! - `id` is stable and never reused for another group.
//! - At most one owned checklist carries the default flag.
//! - Structural edits record identity-matched inverses with the shared
//!   undo facility.

use crate::model::checklist::{Checklist, ChecklistId};
use crate::model::move_items;
use crate::undo::op::{inverse_move, EditOp};
use crate::undo::EditContext;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a checklist group.
pub type GroupId = Uuid;

/// Sentinel shown when no sibling carries the default flag.
pub(crate) const NO_DEFAULT_NAME: &str = "None";

/// One named group holding an ordered list of checklists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Stable global ID used for lookup, move/duplicate, and undo targeting.
    pub(crate) id: GroupId,
    pub(crate) name: String,
    pub(crate) checklists: Vec<Checklist>,
    /// Pre-selected for display when the file opens; exclusive among
    /// sibling groups within the file.
    pub(crate) is_default: bool,
}

impl Group {
    /// Creates the starter group seeded with one starter checklist.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "New Group".to_string(),
            checklists: vec![Checklist::new()],
            is_default: false,
        }
    }

    /// Creates an empty group with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            checklists: Vec::new(),
            is_default: false,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn checklists(&self) -> &[Checklist] {
        &self.checklists
    }

    /// Finds one checklist by stable ID.
    pub fn checklist(&self, checklist_id: ChecklistId) -> Option<&Checklist> {
        self.checklists
            .iter()
            .find(|checklist| checklist.id == checklist_id)
    }

    /// Finds one checklist by stable ID for mutation.
    pub fn checklist_mut(&mut self, checklist_id: ChecklistId) -> Option<&mut Checklist> {
        self.checklists
            .iter_mut()
            .find(|checklist| checklist.id == checklist_id)
    }

    /// Returns the checklist currently flagged as the group default.
    pub fn default_checklist(&self) -> Option<&Checklist> {
        self.checklists.iter().find(|checklist| checklist.is_default)
    }

    /// Name of the default checklist, or the sentinel `"None"`.
    ///
    /// Display-only; consumed by the presentation layer.
    pub fn default_checklist_name(&self) -> String {
        self.default_checklist()
            .map(|checklist| checklist.name.clone())
            .unwrap_or_else(|| NO_DEFAULT_NAME.to_string())
    }

    /// Renames the group, recording the inverse as "Change Name".
    pub fn set_name(&mut self, ctx: &mut EditContext, value: impl Into<String>) {
        let value = value.into();
        if self.name == value {
            return;
        }
        let previous = std::mem::replace(&mut self.name, value);
        ctx.record(
            "Change Name",
            EditOp::SetGroupName {
                group_id: self.id,
                value: previous,
            },
        );
    }

    /// Flags one checklist as the group default, clearing the flag on every
    /// sibling. A missing ID is a legal no-op. Records the inverse as
    /// "Change Default Checklist".
    pub fn set_default_checklist(&mut self, ctx: &mut EditContext, checklist_id: ChecklistId) {
        if self.checklist(checklist_id).is_none() {
            return;
        }
        let previous = self
            .checklists
            .iter()
            .find(|checklist| checklist.is_default)
            .map(|checklist| checklist.id);
        if previous == Some(checklist_id) {
            return;
        }
        for checklist in &mut self.checklists {
            checklist.is_default = checklist.id == checklist_id;
        }
        ctx.record(
            "Change Default Checklist",
            EditOp::SetDefaultChecklist {
                group_id: self.id,
                checklist_id: previous,
            },
        );
    }

    /// Appends one checklist, or inserts it after `after` when given.
    /// Records the inverse as "Add Checklist".
    pub fn add_checklist(
        &mut self,
        ctx: &mut EditContext,
        checklist: Checklist,
        after: Option<ChecklistId>,
    ) -> ChecklistId {
        let index = match after {
            Some(after_id) => self
                .checklists
                .iter()
                .position(|existing| existing.id == after_id)
                .map(|index| index + 1)
                .unwrap_or(self.checklists.len()),
            None => self.checklists.len(),
        };
        let checklist_id = checklist.id;
        self.checklists.insert(index, checklist);
        ctx.record(
            "Add Checklist",
            EditOp::RemoveChecklists {
                checklist_ids: vec![checklist_id],
            },
        );
        checklist_id
    }

    /// Removes one checklist by ID, recording the inverse as
    /// "Remove Checklist". A missing ID is a legal no-op.
    pub fn remove_checklist(&mut self, ctx: &mut EditContext, checklist_id: ChecklistId) {
        let Some(index) = self
            .checklists
            .iter()
            .position(|checklist| checklist.id == checklist_id)
        else {
            return;
        };
        let checklist = self.checklists.remove(index);
        ctx.record(
            "Remove Checklist",
            EditOp::InsertChecklists {
                group_id: self.id,
                inserts: vec![(index, checklist)],
            },
        );
    }

    /// Reorders checklists. A single-element move records its inverse as
    /// "Move Checklist"; moving several elements at once is applied but
    /// intentionally not undoable.
    pub fn move_checklists(&mut self, ctx: &mut EditContext, from_offsets: &[usize], to: usize) {
        if let [from] = *from_offsets {
            let landing = if to > from { to - 1 } else { to };
            if landing == from {
                return;
            }
            move_items(&mut self.checklists, from_offsets, to);
            let (inverse_from, inverse_to) = inverse_move(from, to);
            ctx.record(
                "Move Checklist",
                EditOp::MoveChecklist {
                    group_id: self.id,
                    from: inverse_from,
                    to: inverse_to,
                },
            );
        } else {
            move_items(&mut self.checklists, from_offsets, to);
        }
    }

    /// Duplicates one checklist under fresh identities, inserting the copy
    /// right after the source and recording the inverse as
    /// "Duplicate Checklist". A missing ID is a legal no-op.
    pub fn duplicate_checklist(
        &mut self,
        ctx: &mut EditContext,
        checklist_id: ChecklistId,
    ) -> Option<ChecklistId> {
        let index = self
            .checklists
            .iter()
            .position(|checklist| checklist.id == checklist_id)?;
        let mut copy = self.checklists[index].duplicate();
        // The source may be the group default; the copy must not be.
        copy.is_default = false;
        let copy_id = copy.id;
        self.checklists.insert(index + 1, copy);
        ctx.record(
            "Duplicate Checklist",
            EditOp::RemoveChecklists {
                checklist_ids: vec![copy_id],
            },
        );
        Some(copy_id)
    }

    /// Copies this group and its whole subtree under fresh identities,
    /// preserving all scalar fields.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            checklists: self.checklists.iter().map(Checklist::duplicate).collect(),
            is_default: self.is_default,
        }
    }

    /// Field-wise equality that ignores identity.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.is_default == other.is_default
            && self.checklists.len() == other.checklists.len()
            && self
                .checklists
                .iter()
                .zip(&other.checklists)
                .all(|(a, b)| a.content_eq(b))
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}
