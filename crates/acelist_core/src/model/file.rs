//! Checklist file domain model.
//!
//! # Responsibility
//! - Own the document root: header text fields plus the ordered groups.
//! - Track the single default group and resolve entities by stable ID.
//!
//! # Invariants
//! - `id` is stable for the lifetime of the in-memory document.
//! - At most one owned group carries the default flag.
//! - Structural edits record identity-matched inverses with the shared
//!   undo facility.

use crate::model::checklist::{Checklist, ChecklistId};
use crate::model::entry::{Entry, EntryId};
use crate::model::group::{Group, GroupId, NO_DEFAULT_NAME};
use crate::model::move_items;
use crate::undo::op::{inverse_move, EditOp, FileField};
use crate::undo::EditContext;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an in-memory checklist file.
pub type FileId = Uuid;

/// Document root: header text fields and the ordered group list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistFile {
    /// Stable in-memory identity; not persisted.
    pub(crate) id: FileId,
    pub(crate) name: String,
    pub(crate) make_and_model: String,
    pub(crate) aircraft_info: String,
    pub(crate) manufacturer_id: String,
    pub(crate) copyright: String,
    pub(crate) groups: Vec<Group>,
}

impl ChecklistFile {
    /// Creates the starter document seeded with one starter group.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Blank Checklist".to_string(),
            make_and_model: "Fast Plane".to_string(),
            aircraft_info: "Some Data".to_string(),
            manufacturer_id: "Manufacturer".to_string(),
            copyright: "2024".to_string(),
            groups: vec![Group::new()],
        }
    }

    /// Creates an empty document with the given name and blank header
    /// fields.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            make_and_model: String::new(),
            aircraft_info: String::new(),
            manufacturer_id: String::new(),
            copyright: String::new(),
            groups: Vec::new(),
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn make_and_model(&self) -> &str {
        &self.make_and_model
    }

    pub fn aircraft_info(&self) -> &str {
        &self.aircraft_info
    }

    pub fn manufacturer_id(&self) -> &str {
        &self.manufacturer_id
    }

    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Finds one group by stable ID.
    pub fn group(&self, group_id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == group_id)
    }

    /// Finds one group by stable ID for mutation.
    pub fn group_mut(&mut self, group_id: GroupId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|group| group.id == group_id)
    }

    /// Finds one checklist anywhere in the tree by stable ID.
    pub fn checklist(&self, checklist_id: ChecklistId) -> Option<&Checklist> {
        self.groups
            .iter()
            .find_map(|group| group.checklist(checklist_id))
    }

    /// Finds one checklist anywhere in the tree by stable ID for mutation.
    pub fn checklist_mut(&mut self, checklist_id: ChecklistId) -> Option<&mut Checklist> {
        self.groups
            .iter_mut()
            .find_map(|group| group.checklist_mut(checklist_id))
    }

    /// Finds one entry anywhere in the tree by stable ID.
    pub fn entry(&self, entry_id: EntryId) -> Option<&Entry> {
        self.groups.iter().find_map(|group| {
            group
                .checklists
                .iter()
                .find_map(|checklist| checklist.entry(entry_id))
        })
    }

    /// Finds one entry anywhere in the tree by stable ID for mutation.
    pub fn entry_mut(&mut self, entry_id: EntryId) -> Option<&mut Entry> {
        self.groups.iter_mut().find_map(|group| {
            group
                .checklists
                .iter_mut()
                .find_map(|checklist| checklist.entry_mut(entry_id))
        })
    }

    /// Returns the group currently flagged as the file default.
    pub fn default_group(&self) -> Option<&Group> {
        self.groups.iter().find(|group| group.is_default)
    }

    /// Name of the default group, or the sentinel `"None"`.
    ///
    /// Display-only; consumed by the presentation layer.
    pub fn default_group_name(&self) -> String {
        self.default_group()
            .map(|group| group.name.clone())
            .unwrap_or_else(|| NO_DEFAULT_NAME.to_string())
    }

    /// Renames the file, recording the inverse as "Change Name".
    pub fn set_name(&mut self, ctx: &mut EditContext, value: impl Into<String>) {
        let value = value.into();
        if self.name == value {
            return;
        }
        let previous = std::mem::replace(&mut self.name, value);
        ctx.record(
            "Change Name",
            EditOp::SetFileField {
                field: FileField::Name,
                value: previous,
            },
        );
    }

    /// Changes the aircraft make/model, recording the inverse as
    /// "Change Make and Model".
    pub fn set_make_and_model(&mut self, ctx: &mut EditContext, value: impl Into<String>) {
        let value = value.into();
        if self.make_and_model == value {
            return;
        }
        let previous = std::mem::replace(&mut self.make_and_model, value);
        ctx.record(
            "Change Make and Model",
            EditOp::SetFileField {
                field: FileField::MakeAndModel,
                value: previous,
            },
        );
    }

    /// Changes the aircraft information, recording the inverse as
    /// "Change Aircraft Info".
    pub fn set_aircraft_info(&mut self, ctx: &mut EditContext, value: impl Into<String>) {
        let value = value.into();
        if self.aircraft_info == value {
            return;
        }
        let previous = std::mem::replace(&mut self.aircraft_info, value);
        ctx.record(
            "Change Aircraft Info",
            EditOp::SetFileField {
                field: FileField::AircraftInfo,
                value: previous,
            },
        );
    }

    /// Changes the manufacturer identification, recording the inverse as
    /// "Change Manufacturer ID".
    pub fn set_manufacturer_id(&mut self, ctx: &mut EditContext, value: impl Into<String>) {
        let value = value.into();
        if self.manufacturer_id == value {
            return;
        }
        let previous = std::mem::replace(&mut self.manufacturer_id, value);
        ctx.record(
            "Change Manufacturer ID",
            EditOp::SetFileField {
                field: FileField::ManufacturerId,
                value: previous,
            },
        );
    }

    /// Changes the copyright line, recording the inverse as
    /// "Change Copyright".
    pub fn set_copyright(&mut self, ctx: &mut EditContext, value: impl Into<String>) {
        let value = value.into();
        if self.copyright == value {
            return;
        }
        let previous = std::mem::replace(&mut self.copyright, value);
        ctx.record(
            "Change Copyright",
            EditOp::SetFileField {
                field: FileField::Copyright,
                value: previous,
            },
        );
    }

    /// Flags one group as the file default, clearing the flag on every
    /// sibling. A missing ID is a legal no-op. Records the inverse as
    /// "Change Default Group".
    pub fn set_default_group(&mut self, ctx: &mut EditContext, group_id: GroupId) {
        if self.group(group_id).is_none() {
            return;
        }
        let previous = self
            .groups
            .iter()
            .find(|group| group.is_default)
            .map(|group| group.id);
        if previous == Some(group_id) {
            return;
        }
        for group in &mut self.groups {
            group.is_default = group.id == group_id;
        }
        ctx.record(
            "Change Default Group",
            EditOp::SetDefaultGroup {
                group_id: previous,
            },
        );
    }

    /// Flags one checklist as the default within the group that owns it.
    /// A missing ID is a legal no-op.
    pub fn set_default_checklist(&mut self, ctx: &mut EditContext, checklist_id: ChecklistId) {
        let Some(group_id) = self
            .groups
            .iter()
            .find(|group| group.checklist(checklist_id).is_some())
            .map(|group| group.id)
        else {
            return;
        };
        let group = self
            .group_mut(group_id)
            .unwrap_or_else(|| panic!("group {group_id} vanished during default change"));
        group.set_default_checklist(ctx, checklist_id);
    }

    /// Appends one group, or inserts it after `after` when given. Records
    /// the inverse as "Add Group".
    pub fn add_group(
        &mut self,
        ctx: &mut EditContext,
        group: Group,
        after: Option<GroupId>,
    ) -> GroupId {
        let index = match after {
            Some(after_id) => self
                .groups
                .iter()
                .position(|existing| existing.id == after_id)
                .map(|index| index + 1)
                .unwrap_or(self.groups.len()),
            None => self.groups.len(),
        };
        let group_id = group.id;
        self.groups.insert(index, group);
        ctx.record(
            "Add Group",
            EditOp::RemoveGroups {
                group_ids: vec![group_id],
            },
        );
        group_id
    }

    /// Removes one group by ID, recording the inverse as "Remove Group".
    /// A missing ID is a legal no-op.
    pub fn remove_group(&mut self, ctx: &mut EditContext, group_id: GroupId) {
        let Some(index) = self.groups.iter().position(|group| group.id == group_id) else {
            return;
        };
        let group = self.groups.remove(index);
        ctx.record(
            "Remove Group",
            EditOp::InsertGroups {
                inserts: vec![(index, group)],
            },
        );
    }

    /// Reorders groups. A single-element move records its inverse as
    /// "Move Group"; moving several elements at once is applied but
    /// intentionally not undoable.
    pub fn move_groups(&mut self, ctx: &mut EditContext, from_offsets: &[usize], to: usize) {
        if let [from] = *from_offsets {
            let landing = if to > from { to - 1 } else { to };
            if landing == from {
                return;
            }
            move_items(&mut self.groups, from_offsets, to);
            let (inverse_from, inverse_to) = inverse_move(from, to);
            ctx.record(
                "Move Group",
                EditOp::MoveGroup {
                    from: inverse_from,
                    to: inverse_to,
                },
            );
        } else {
            move_items(&mut self.groups, from_offsets, to);
        }
    }

    /// Duplicates one group under fresh identities, inserting the copy right
    /// after the source and recording the inverse as "Duplicate Group".
    /// A missing ID is a legal no-op.
    pub fn duplicate_group(&mut self, ctx: &mut EditContext, group_id: GroupId) -> Option<GroupId> {
        let index = self.groups.iter().position(|group| group.id == group_id)?;
        let mut copy = self.groups[index].duplicate();
        // The source may be the file default; the copy must not be.
        copy.is_default = false;
        let copy_id = copy.id;
        self.groups.insert(index + 1, copy);
        ctx.record(
            "Duplicate Group",
            EditOp::RemoveGroups {
                group_ids: vec![copy_id],
            },
        );
        Some(copy_id)
    }

    /// Copies the whole document under fresh identities for every entity,
    /// preserving all scalar fields.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            make_and_model: self.make_and_model.clone(),
            aircraft_info: self.aircraft_info.clone(),
            manufacturer_id: self.manufacturer_id.clone(),
            copyright: self.copyright.clone(),
            groups: self.groups.iter().map(Group::duplicate).collect(),
        }
    }

    /// Field-wise equality that ignores identity.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.make_and_model == other.make_and_model
            && self.aircraft_info == other.aircraft_info
            && self.manufacturer_id == other.manufacturer_id
            && self.copyright == other.copyright
            && self.groups.len() == other.groups.len()
            && self
                .groups
                .iter()
                .zip(&other.groups)
                .all(|(a, b)| a.content_eq(b))
    }
}

impl Default for ChecklistFile {
    fn default() -> Self {
        Self::new()
    }
}
