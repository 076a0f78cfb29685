//! Wire codec for one group block.
//!
//! # Responsibility
//! - Wrap the `"<0"` header and `">"` footer around a greedy checklist
//!   list.
//!
//! # Invariants
//! - A failed parse leaves the cursor untouched, so the file codec can
//!   reinterpret the same bytes as the file footer.

use crate::codec::checklist::{parse_checklist, write_checklist};
use crate::codec::cursor::ByteCursor;
use crate::codec::{field, SaveError, LINE_TERMINATOR};
use crate::model::checklist::Checklist;
use crate::model::group::Group;
use uuid::Uuid;

const HEADER: &[u8] = b"<0";
const FOOTER: &[u8] = b">";

/// Parses one group block, or returns `None` with the cursor unmoved when
/// the next bytes are not a group.
pub(crate) fn parse_group(cursor: &mut ByteCursor<'_>) -> Option<Group> {
    let mark = cursor.position();
    if !cursor.consume_if(HEADER) {
        return None;
    }

    match parse_after_header(cursor) {
        Some(group) => Some(group),
        None => {
            cursor.rewind_to(mark);
            None
        }
    }
}

fn parse_after_header(cursor: &mut ByteCursor<'_>) -> Option<Group> {
    let name = field::read_text(cursor)?;

    let mut checklists: Vec<Checklist> = Vec::new();
    while let Some(checklist) = parse_checklist(cursor) {
        checklists.push(checklist);
    }

    if !cursor.consume_if(FOOTER) {
        return None;
    }
    if !cursor.consume_if(&LINE_TERMINATOR) {
        return None;
    }

    Some(Group {
        id: Uuid::new_v4(),
        name,
        checklists,
        is_default: false,
    })
}

/// Writes one group block with header, name, checklists, and footer.
pub(crate) fn write_group(out: &mut Vec<u8>, group: &Group) -> Result<(), SaveError> {
    out.extend_from_slice(HEADER);
    field::write_text(out, &group.name, "group name")?;
    for checklist in &group.checklists {
        write_checklist(out, checklist)?;
    }
    out.extend_from_slice(FOOTER);
    out.extend_from_slice(&LINE_TERMINATOR);
    Ok(())
}
