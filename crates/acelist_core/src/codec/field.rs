//! Wire codecs for text fields and single-byte enumeration codes.
//!
//! # Responsibility
//! - Read/write CRLF-terminated text spans.
//! - Map entry type and justification tags to their single ASCII codes.
//!
//! # Invariants
//! - An unrecognized enumeration code is a hard parse failure, never a
//!   silent fallback.
//! - The write boundary rejects text that would corrupt the structural
//!   parse on the next load.

use crate::codec::cursor::ByteCursor;
use crate::codec::{SaveError, LINE_TERMINATOR};
use crate::model::entry::{EntryType, Justification};

/// Reads one CRLF-terminated text field, decoding it as UTF-8.
pub(crate) fn read_text(cursor: &mut ByteCursor<'_>) -> Option<String> {
    let bytes = cursor.consume_line()?;
    decode_text(bytes)
}

/// Decodes a raw text span as UTF-8.
pub(crate) fn decode_text(bytes: &[u8]) -> Option<String> {
    String::from_utf8(bytes.to_vec()).ok()
}

/// Rejects text that embeds the line terminator bytes.
pub(crate) fn ensure_encodable(text: &str, context: &'static str) -> Result<(), SaveError> {
    if text
        .bytes()
        .any(|byte| byte == LINE_TERMINATOR[0] || byte == LINE_TERMINATOR[1])
    {
        return Err(SaveError::EmbeddedLineBreak { context });
    }
    Ok(())
}

/// Writes one text field followed by the line terminator.
pub(crate) fn write_text(
    out: &mut Vec<u8>,
    text: &str,
    context: &'static str,
) -> Result<(), SaveError> {
    ensure_encodable(text, context)?;
    out.extend_from_slice(text.as_bytes());
    out.extend_from_slice(&LINE_TERMINATOR);
    Ok(())
}

pub(crate) fn entry_type_code(kind: EntryType) -> u8 {
    match kind {
        EntryType::Undefined => b'c',
        EntryType::Text => b'p',
        EntryType::Note => b'n',
        EntryType::Subtitle => b't',
        EntryType::Warning => b'w',
        EntryType::Caution => b'a',
        EntryType::Challenge => b'r',
    }
}

pub(crate) fn entry_type_from_code(code: u8) -> Option<EntryType> {
    match code {
        b'c' => Some(EntryType::Undefined),
        b'p' => Some(EntryType::Text),
        b'n' => Some(EntryType::Note),
        b't' => Some(EntryType::Subtitle),
        b'w' => Some(EntryType::Warning),
        b'a' => Some(EntryType::Caution),
        b'r' => Some(EntryType::Challenge),
        _ => None,
    }
}

pub(crate) fn justification_code(justification: Justification) -> u8 {
    match justification {
        Justification::Left => b'0',
        Justification::IndentOne => b'1',
        Justification::IndentTwo => b'2',
        Justification::IndentThree => b'3',
        Justification::IndentFour => b'4',
        Justification::Center => b'c',
    }
}

pub(crate) fn justification_from_code(code: u8) -> Option<Justification> {
    match code {
        b'0' => Some(Justification::Left),
        b'1' => Some(Justification::IndentOne),
        b'2' => Some(Justification::IndentTwo),
        b'3' => Some(Justification::IndentThree),
        b'4' => Some(Justification::IndentFour),
        b'c' => Some(Justification::Center),
        _ => None,
    }
}
