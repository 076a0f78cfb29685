//! Wire codec for one checklist line item.
//!
//! # Responsibility
//! - Parse the 2-byte type/justification header, the challenge/response
//!   split, and trailing blank-line markers.
//! - Write the mirror image of the same layout.
//!
//! # Invariants
//! - A failed parse leaves the cursor untouched, so the owning checklist
//!   can reinterpret the same byte as its footer token.
//! - Blank-line counts are never clamped here; whatever a file carries
//!   round-trips.

use crate::codec::cursor::ByteCursor;
use crate::codec::field;
use crate::codec::{SaveError, LINE_TERMINATOR};
use crate::model::entry::{Entry, EntryType};
use uuid::Uuid;

/// Separator between a challenge text and its expected response.
const CHALLENGE_SEPARATOR: u8 = b'~';

/// Parses one entry, or returns `None` with the cursor unmoved when the
/// next bytes are not an entry.
pub(crate) fn parse_entry(cursor: &mut ByteCursor<'_>) -> Option<Entry> {
    let kind = field::entry_type_from_code(cursor.peek()?)?;
    let mark = cursor.position();
    let _ = cursor.consume_fixed(1);

    match parse_after_type(cursor, kind) {
        Some(entry) => Some(entry),
        None => {
            cursor.rewind_to(mark);
            None
        }
    }
}

fn parse_after_type(cursor: &mut ByteCursor<'_>, kind: EntryType) -> Option<Entry> {
    let justification = field::justification_from_code(cursor.consume_fixed(1)?[0])?;

    let (text, response) = if kind == EntryType::Challenge {
        let text = field::decode_text(cursor.consume_until(CHALLENGE_SEPARATOR)?)?;
        let _ = cursor.consume_fixed(1);
        let response = field::read_text(cursor)?;
        (text, response)
    } else {
        (field::read_text(cursor)?, String::new())
    };

    let mut blank_lines_following: u8 = 0;
    while cursor.consume_if(&LINE_TERMINATOR) {
        blank_lines_following = blank_lines_following.saturating_add(1);
    }

    Some(Entry {
        id: Uuid::new_v4(),
        kind,
        justification,
        text,
        response,
        blank_lines_following,
    })
}

/// Writes one entry, including its trailing blank lines.
pub(crate) fn write_entry(out: &mut Vec<u8>, entry: &Entry) -> Result<(), SaveError> {
    out.push(field::entry_type_code(entry.kind));
    out.push(field::justification_code(entry.justification));

    if entry.kind == EntryType::Challenge {
        field::ensure_encodable(&entry.text, "entry text")?;
        if entry.text.as_bytes().contains(&CHALLENGE_SEPARATOR) {
            return Err(SaveError::EmbeddedSeparator {
                context: "entry text",
            });
        }
        out.extend_from_slice(entry.text.as_bytes());
        out.push(CHALLENGE_SEPARATOR);
        field::write_text(out, &entry.response, "entry response")?;
    } else {
        field::write_text(out, &entry.text, "entry text")?;
    }

    for _ in 0..entry.blank_lines_following {
        out.extend_from_slice(&LINE_TERMINATOR);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_entry, write_entry};
    use crate::codec::cursor::ByteCursor;
    use crate::codec::SaveError;
    use crate::model::entry::{Entry, EntryType, Justification};

    #[test]
    fn parses_plain_entry() {
        let mut cursor = ByteCursor::new(b"p0Check fuel\r\n");
        let entry = parse_entry(&mut cursor).expect("entry should parse");
        assert_eq!(entry.kind(), EntryType::Text);
        assert_eq!(entry.justification(), Justification::Left);
        assert_eq!(entry.text(), "Check fuel");
        assert_eq!(entry.blank_lines_following(), 0);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn parses_challenge_split() {
        let mut cursor = ByteCursor::new(b"r1Fuel pump~ON\r\n");
        let entry = parse_entry(&mut cursor).expect("entry should parse");
        assert_eq!(entry.kind(), EntryType::Challenge);
        assert_eq!(entry.text(), "Fuel pump");
        assert_eq!(entry.response(), "ON");
    }

    #[test]
    fn counts_trailing_blank_lines_without_clamping() {
        let mut cursor = ByteCursor::new(b"n0Note\r\n\r\n\r\n\r\n\r\n\r\n\r\n)");
        let entry = parse_entry(&mut cursor).expect("entry should parse");
        assert_eq!(entry.blank_lines_following(), 7);
        assert_eq!(cursor.peek(), Some(b')'));
    }

    #[test]
    fn unknown_type_code_does_not_consume() {
        // The next bytes are exactly a checklist footer token.
        let mut cursor = ByteCursor::new(b")\r\n");
        assert!(parse_entry(&mut cursor).is_none());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn bad_justification_rewinds_fully() {
        let mut cursor = ByteCursor::new(b"pXoops\r\n");
        assert!(parse_entry(&mut cursor).is_none());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn write_rejects_separator_in_challenge_text() {
        let mut entry = Entry::new(EntryType::Challenge, Justification::Left, "a~b");
        entry.response = "ON".to_string();
        let mut out = Vec::new();
        let err = write_entry(&mut out, &entry).unwrap_err();
        assert_eq!(err, SaveError::EmbeddedSeparator { context: "entry text" });
    }

    #[test]
    fn separator_in_plain_text_is_allowed() {
        let entry = Entry::new(EntryType::Text, Justification::Left, "a~b");
        let mut out = Vec::new();
        write_entry(&mut out, &entry).expect("plain text may contain `~`");
        assert_eq!(out, b"p0a~b\r\n");
    }
}
