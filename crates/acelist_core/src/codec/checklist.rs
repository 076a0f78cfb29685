//! Wire codec for one checklist block.
//!
//! # Responsibility
//! - Wrap the `"(0"` header and `")"` footer around a greedy entry list.
//!
//! # Invariants
//! - A failed parse leaves the cursor untouched, so the owning group can
//!   reinterpret the same bytes as its own footer token.
//! - The entry list has no length prefix; it ends at the first byte that
//!   does not open an entry.

use crate::codec::cursor::ByteCursor;
use crate::codec::entry::{parse_entry, write_entry};
use crate::codec::{field, SaveError, LINE_TERMINATOR};
use crate::model::checklist::Checklist;
use crate::model::entry::Entry;
use uuid::Uuid;

const HEADER: &[u8] = b"(0";
const FOOTER: &[u8] = b")";

/// Parses one checklist block, or returns `None` with the cursor unmoved
/// when the next bytes are not a checklist.
pub(crate) fn parse_checklist(cursor: &mut ByteCursor<'_>) -> Option<Checklist> {
    let mark = cursor.position();
    if !cursor.consume_if(HEADER) {
        return None;
    }

    match parse_after_header(cursor) {
        Some(checklist) => Some(checklist),
        None => {
            cursor.rewind_to(mark);
            None
        }
    }
}

fn parse_after_header(cursor: &mut ByteCursor<'_>) -> Option<Checklist> {
    let name = field::read_text(cursor)?;

    let mut entries: Vec<Entry> = Vec::new();
    while let Some(entry) = parse_entry(cursor) {
        entries.push(entry);
    }

    if !cursor.consume_if(FOOTER) {
        return None;
    }
    if !cursor.consume_if(&LINE_TERMINATOR) {
        return None;
    }

    Some(Checklist {
        id: Uuid::new_v4(),
        name,
        entries,
        is_default: false,
    })
}

/// Writes one checklist block with header, name, entries, and footer.
pub(crate) fn write_checklist(out: &mut Vec<u8>, checklist: &Checklist) -> Result<(), SaveError> {
    out.extend_from_slice(HEADER);
    field::write_text(out, &checklist.name, "checklist name")?;
    for entry in &checklist.entries {
        write_entry(out, entry)?;
    }
    out.extend_from_slice(FOOTER);
    out.extend_from_slice(&LINE_TERMINATOR);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_checklist;
    use crate::codec::cursor::ByteCursor;

    #[test]
    fn parses_block_and_stops_at_footer() {
        let mut cursor = ByteCursor::new(b"(0CL1\r\np0Check fuel\r\n)\r\n>");
        let checklist = parse_checklist(&mut cursor).expect("checklist should parse");
        assert_eq!(checklist.name(), "CL1");
        assert_eq!(checklist.entries().len(), 1);
        assert_eq!(cursor.peek(), Some(b'>'));
    }

    #[test]
    fn empty_entry_list_is_valid() {
        let mut cursor = ByteCursor::new(b"(0Empty\r\n)\r\n");
        let checklist = parse_checklist(&mut cursor).expect("checklist should parse");
        assert!(checklist.entries().is_empty());
        assert!(cursor.is_at_end());
    }

    #[test]
    fn wrong_header_consumes_nothing() {
        let mut cursor = ByteCursor::new(b">\r\n");
        assert!(parse_checklist(&mut cursor).is_none());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn missing_footer_rewinds_fully() {
        let mut cursor = ByteCursor::new(b"(0CL1\r\np0Check fuel\r\n");
        assert!(parse_checklist(&mut cursor).is_none());
        assert_eq!(cursor.position(), 0);
    }
}
