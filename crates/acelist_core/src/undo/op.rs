//! Reversible edit operations over the document tree.
//!
//! # Responsibility
//! - Express every recordable mutation as a closed, exhaustively-matched
//!   operation set.
//! - Apply an operation and hand back its exact inverse in one step.
//!
//! # Invariants
//! - Targets are resolved by stable ID from the document root.
//! - Removal inverses restore the exact same elements at their original
//!   positions, identity-matched.
//! - A target missing from the tree is a programming-contract violation
//!   and panics.

use crate::model::checklist::{Checklist, ChecklistId};
use crate::model::entry::{Entry, EntryId, EntryType, Justification};
use crate::model::file::ChecklistFile;
use crate::model::group::{Group, GroupId};
use crate::model::move_items;

/// Header text field selector for file-level field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileField {
    Name,
    MakeAndModel,
    AircraftInfo,
    ManufacturerId,
    Copyright,
}

/// One reversible edit. Applying an op mutates the tree and returns the op
/// that undoes it.
#[derive(Debug)]
pub(crate) enum EditOp {
    SetFileField {
        field: FileField,
        value: String,
    },
    SetGroupName {
        group_id: GroupId,
        value: String,
    },
    SetChecklistName {
        checklist_id: ChecklistId,
        value: String,
    },
    SetEntryKind {
        entry_id: EntryId,
        value: EntryType,
    },
    SetEntryJustification {
        entry_id: EntryId,
        value: Justification,
    },
    SetEntryText {
        entry_id: EntryId,
        value: String,
    },
    SetEntryResponse {
        entry_id: EntryId,
        value: String,
    },
    SetEntryBlankLines {
        entry_id: EntryId,
        value: u8,
    },
    /// `None` clears the default flag on every group.
    SetDefaultGroup {
        group_id: Option<GroupId>,
    },
    /// `None` clears the default flag on every checklist in the group.
    SetDefaultChecklist {
        group_id: GroupId,
        checklist_id: Option<ChecklistId>,
    },
    /// Inserts at the recorded pre-removal indices, ascending.
    InsertGroups {
        inserts: Vec<(usize, Group)>,
    },
    RemoveGroups {
        group_ids: Vec<GroupId>,
    },
    InsertChecklists {
        group_id: GroupId,
        inserts: Vec<(usize, Checklist)>,
    },
    RemoveChecklists {
        checklist_ids: Vec<ChecklistId>,
    },
    InsertEntries {
        checklist_id: ChecklistId,
        inserts: Vec<(usize, Entry)>,
    },
    RemoveEntries {
        entry_ids: Vec<EntryId>,
    },
    /// `to` is an insertion offset in the pre-removal sequence.
    MoveGroup {
        from: usize,
        to: usize,
    },
    MoveChecklist {
        group_id: GroupId,
        from: usize,
        to: usize,
    },
    MoveEntry {
        checklist_id: ChecklistId,
        from: usize,
        to: usize,
    },
}

/// Inverse of a single-element move, in the same insertion-offset terms.
pub(crate) fn inverse_move(from: usize, to: usize) -> (usize, usize) {
    if to > from {
        (to - 1, from)
    } else {
        (to, from + 1)
    }
}

impl EditOp {
    /// Applies this operation to the tree and returns its inverse.
    pub(crate) fn apply(self, file: &mut ChecklistFile) -> EditOp {
        match self {
            EditOp::SetFileField { field, value } => {
                let slot = match field {
                    FileField::Name => &mut file.name,
                    FileField::MakeAndModel => &mut file.make_and_model,
                    FileField::AircraftInfo => &mut file.aircraft_info,
                    FileField::ManufacturerId => &mut file.manufacturer_id,
                    FileField::Copyright => &mut file.copyright,
                };
                let previous = std::mem::replace(slot, value);
                EditOp::SetFileField {
                    field,
                    value: previous,
                }
            }
            EditOp::SetGroupName { group_id, value } => {
                let group = group_mut(file, group_id);
                let previous = std::mem::replace(&mut group.name, value);
                EditOp::SetGroupName {
                    group_id,
                    value: previous,
                }
            }
            EditOp::SetChecklistName {
                checklist_id,
                value,
            } => {
                let checklist = checklist_mut(file, checklist_id);
                let previous = std::mem::replace(&mut checklist.name, value);
                EditOp::SetChecklistName {
                    checklist_id,
                    value: previous,
                }
            }
            EditOp::SetEntryKind { entry_id, value } => {
                let entry = entry_mut(file, entry_id);
                let previous = std::mem::replace(&mut entry.kind, value);
                EditOp::SetEntryKind {
                    entry_id,
                    value: previous,
                }
            }
            EditOp::SetEntryJustification { entry_id, value } => {
                let entry = entry_mut(file, entry_id);
                let previous = std::mem::replace(&mut entry.justification, value);
                EditOp::SetEntryJustification {
                    entry_id,
                    value: previous,
                }
            }
            EditOp::SetEntryText { entry_id, value } => {
                let entry = entry_mut(file, entry_id);
                let previous = std::mem::replace(&mut entry.text, value);
                EditOp::SetEntryText {
                    entry_id,
                    value: previous,
                }
            }
            EditOp::SetEntryResponse { entry_id, value } => {
                let entry = entry_mut(file, entry_id);
                let previous = std::mem::replace(&mut entry.response, value);
                EditOp::SetEntryResponse {
                    entry_id,
                    value: previous,
                }
            }
            EditOp::SetEntryBlankLines { entry_id, value } => {
                let entry = entry_mut(file, entry_id);
                let previous = std::mem::replace(&mut entry.blank_lines_following, value);
                EditOp::SetEntryBlankLines {
                    entry_id,
                    value: previous,
                }
            }
            EditOp::SetDefaultGroup { group_id } => {
                if let Some(group_id) = group_id {
                    group_mut(file, group_id);
                }
                let previous = file
                    .groups
                    .iter()
                    .find(|group| group.is_default)
                    .map(|group| group.id);
                for group in &mut file.groups {
                    group.is_default = group_id == Some(group.id);
                }
                EditOp::SetDefaultGroup { group_id: previous }
            }
            EditOp::SetDefaultChecklist {
                group_id,
                checklist_id,
            } => {
                let group = group_mut(file, group_id);
                let previous = group
                    .checklists
                    .iter()
                    .find(|checklist| checklist.is_default)
                    .map(|checklist| checklist.id);
                for checklist in &mut group.checklists {
                    checklist.is_default = checklist_id == Some(checklist.id);
                }
                EditOp::SetDefaultChecklist {
                    group_id,
                    checklist_id: previous,
                }
            }
            EditOp::InsertGroups { inserts } => {
                let mut group_ids = Vec::with_capacity(inserts.len());
                for (index, group) in inserts {
                    group_ids.push(group.id);
                    let index = index.min(file.groups.len());
                    file.groups.insert(index, group);
                }
                EditOp::RemoveGroups { group_ids }
            }
            EditOp::RemoveGroups { group_ids } => {
                let mut inserts = Vec::new();
                let mut kept = Vec::with_capacity(file.groups.len());
                for (index, group) in file.groups.drain(..).enumerate() {
                    if group_ids.contains(&group.id) {
                        inserts.push((index, group));
                    } else {
                        kept.push(group);
                    }
                }
                file.groups = kept;
                EditOp::InsertGroups { inserts }
            }
            EditOp::InsertChecklists { group_id, inserts } => {
                let group = group_mut(file, group_id);
                let mut checklist_ids = Vec::with_capacity(inserts.len());
                for (index, checklist) in inserts {
                    checklist_ids.push(checklist.id);
                    let index = index.min(group.checklists.len());
                    group.checklists.insert(index, checklist);
                }
                EditOp::RemoveChecklists { checklist_ids }
            }
            EditOp::RemoveChecklists { checklist_ids } => {
                let mut owner_id = None;
                let mut inserts = Vec::new();
                for group in &mut file.groups {
                    if !group
                        .checklists
                        .iter()
                        .any(|checklist| checklist_ids.contains(&checklist.id))
                    {
                        continue;
                    }
                    owner_id = Some(group.id);
                    let mut kept = Vec::with_capacity(group.checklists.len());
                    for (index, checklist) in group.checklists.drain(..).enumerate() {
                        if checklist_ids.contains(&checklist.id) {
                            inserts.push((index, checklist));
                        } else {
                            kept.push(checklist);
                        }
                    }
                    group.checklists = kept;
                    break;
                }
                let group_id = owner_id.unwrap_or_else(|| {
                    panic!("edit target checklists are no longer in the tree")
                });
                EditOp::InsertChecklists { group_id, inserts }
            }
            EditOp::InsertEntries {
                checklist_id,
                inserts,
            } => {
                let checklist = checklist_mut(file, checklist_id);
                let mut entry_ids = Vec::with_capacity(inserts.len());
                for (index, entry) in inserts {
                    entry_ids.push(entry.id);
                    let index = index.min(checklist.entries.len());
                    checklist.entries.insert(index, entry);
                }
                EditOp::RemoveEntries { entry_ids }
            }
            EditOp::RemoveEntries { entry_ids } => {
                let mut owner_id = None;
                let mut inserts = Vec::new();
                'groups: for group in &mut file.groups {
                    for checklist in &mut group.checklists {
                        if !checklist
                            .entries
                            .iter()
                            .any(|entry| entry_ids.contains(&entry.id))
                        {
                            continue;
                        }
                        owner_id = Some(checklist.id);
                        let mut kept = Vec::with_capacity(checklist.entries.len());
                        for (index, entry) in checklist.entries.drain(..).enumerate() {
                            if entry_ids.contains(&entry.id) {
                                inserts.push((index, entry));
                            } else {
                                kept.push(entry);
                            }
                        }
                        checklist.entries = kept;
                        break 'groups;
                    }
                }
                let checklist_id = owner_id.unwrap_or_else(|| {
                    panic!("edit target entries are no longer in the tree")
                });
                EditOp::InsertEntries {
                    checklist_id,
                    inserts,
                }
            }
            EditOp::MoveGroup { from, to } => {
                move_items(&mut file.groups, &[from], to);
                let (inverse_from, inverse_to) = inverse_move(from, to);
                EditOp::MoveGroup {
                    from: inverse_from,
                    to: inverse_to,
                }
            }
            EditOp::MoveChecklist { group_id, from, to } => {
                let group = group_mut(file, group_id);
                move_items(&mut group.checklists, &[from], to);
                let (inverse_from, inverse_to) = inverse_move(from, to);
                EditOp::MoveChecklist {
                    group_id,
                    from: inverse_from,
                    to: inverse_to,
                }
            }
            EditOp::MoveEntry {
                checklist_id,
                from,
                to,
            } => {
                let checklist = checklist_mut(file, checklist_id);
                move_items(&mut checklist.entries, &[from], to);
                let (inverse_from, inverse_to) = inverse_move(from, to);
                EditOp::MoveEntry {
                    checklist_id,
                    from: inverse_from,
                    to: inverse_to,
                }
            }
        }
    }
}

fn group_mut(file: &mut ChecklistFile, group_id: GroupId) -> &mut Group {
    file.group_mut(group_id)
        .unwrap_or_else(|| panic!("edit target group {group_id} is no longer in the tree"))
}

fn checklist_mut(file: &mut ChecklistFile, checklist_id: ChecklistId) -> &mut Checklist {
    file.checklist_mut(checklist_id)
        .unwrap_or_else(|| panic!("edit target checklist {checklist_id} is no longer in the tree"))
}

fn entry_mut(file: &mut ChecklistFile, entry_id: EntryId) -> &mut Entry {
    file.entry_mut(entry_id)
        .unwrap_or_else(|| panic!("edit target entry {entry_id} is no longer in the tree"))
}
