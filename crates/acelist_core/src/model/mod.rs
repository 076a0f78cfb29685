//! Domain model for the checklist document tree.
//!
//! # Responsibility
//! - Define the four-level hierarchy: file, group, checklist, entry.
//! - Keep ownership strict: each parent exclusively owns its children.
//!
//! # Invariants
//! - Every entity carries a stable `Uuid` identity, never reused.
//! - At most one child per level carries the default flag.
//! - All mutations route through `EditContext`-recorded operations.

pub mod checklist;
pub mod entry;
pub mod file;
pub mod group;

/// Reorders `items` by removing the elements at `from_offsets` and
/// re-inserting them, in their original relative order, before the element
/// that sat at `to` prior to removal.
///
/// Offsets must be in range; `to` may be `items.len()` to move to the end.
pub(crate) fn move_items<T>(items: &mut Vec<T>, from_offsets: &[usize], to: usize) {
    let mut offsets = from_offsets.to_vec();
    offsets.sort_unstable();
    offsets.dedup();

    let mut moved = Vec::with_capacity(offsets.len());
    for &offset in offsets.iter().rev() {
        moved.push(items.remove(offset));
    }
    moved.reverse();

    let shift = offsets.iter().filter(|&&offset| offset < to).count();
    let insert_at = (to - shift).min(items.len());
    for (slot, item) in moved.into_iter().enumerate() {
        items.insert(insert_at + slot, item);
    }
}
