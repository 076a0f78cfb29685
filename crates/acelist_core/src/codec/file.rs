//! Wire codec for the whole checklist file.
//!
//! # Responsibility
//! - Decode magic headers, default-selection bytes, the five header text
//!   fields, the group list, the `END` footer, and the checksum trailer.
//! - Encode the mirror image and append the checksum last.
//!
//! # Invariants
//! - The checksum is validated over the whole buffer before any structural
//!   parsing.
//! - Raw default indices become exclusive flags on load and are recomputed
//!   from the flags on save; any index inside the sibling count is
//!   honored, including the last element.
//! - Everything after the group list must be exactly the footer line and
//!   the four checksum bytes.

use crate::codec::cursor::ByteCursor;
use crate::codec::group::{parse_group, write_group};
use crate::codec::{checksum, field, LoadError, SaveError, LINE_TERMINATOR};
use crate::model::file::ChecklistFile;
use crate::model::group::Group;
use uuid::Uuid;

const FORMAT_MAGIC: [u8; 4] = [0xF0, 0xF0, 0xF0, 0xF0];
const VERSION_MAGIC: [u8; 2] = [0x00, 0x01];
const FOOTER: &[u8] = b"END";
const CHECKSUM_LEN: usize = 4;

pub(crate) fn parse_file(bytes: &[u8]) -> Result<ChecklistFile, LoadError> {
    if !checksum::validate(bytes) {
        return Err(LoadError::ChecksumMismatch);
    }

    let mut cursor = ByteCursor::new(bytes);
    if !cursor.consume_if(&FORMAT_MAGIC) {
        return Err(LoadError::CorruptFile);
    }
    if !cursor.consume_if(&VERSION_MAGIC) {
        return Err(LoadError::CorruptFile);
    }
    let defaults = cursor.consume_fixed(2).ok_or(LoadError::CorruptFile)?;
    let (default_group, default_checklist) = (defaults[0], defaults[1]);
    if !cursor.consume_if(&LINE_TERMINATOR) {
        return Err(LoadError::CorruptFile);
    }

    let name = field::read_text(&mut cursor).ok_or(LoadError::CorruptFile)?;
    let make_and_model = field::read_text(&mut cursor).ok_or(LoadError::CorruptFile)?;
    let aircraft_info = field::read_text(&mut cursor).ok_or(LoadError::CorruptFile)?;
    let manufacturer_id = field::read_text(&mut cursor).ok_or(LoadError::CorruptFile)?;
    let copyright = field::read_text(&mut cursor).ok_or(LoadError::CorruptFile)?;

    let mut groups: Vec<Group> = Vec::new();
    while let Some(group) = parse_group(&mut cursor) {
        groups.push(group);
    }

    if !cursor.consume_if(FOOTER) {
        return Err(LoadError::CorruptFile);
    }
    if !cursor.consume_if(&LINE_TERMINATOR) {
        return Err(LoadError::CorruptFile);
    }
    if cursor.remaining() != CHECKSUM_LEN {
        return Err(LoadError::CorruptFile);
    }

    let mut file = ChecklistFile {
        id: Uuid::new_v4(),
        name,
        make_and_model,
        aircraft_info,
        manufacturer_id,
        copyright,
        groups,
    };
    apply_default_indices(&mut file, default_group, default_checklist);
    Ok(file)
}

/// Converts the raw header index bytes into the exclusive default flags.
///
/// Indices are honored for any position inside the sibling count; the
/// checklist index is resolved within the default group.
fn apply_default_indices(file: &mut ChecklistFile, default_group: u8, default_checklist: u8) {
    let Some(group) = file.groups.get_mut(default_group as usize) else {
        return;
    };
    group.is_default = true;
    if let Some(checklist) = group.checklists.get_mut(default_checklist as usize) {
        checklist.is_default = true;
    }
}

/// Scans the default flags back into the raw header index bytes: first
/// flagged group, first flagged checklist within it, else 0.
fn default_indices(file: &ChecklistFile) -> (u8, u8) {
    let group_index = file
        .groups
        .iter()
        .position(|group| group.is_default)
        .unwrap_or(0);
    let checklist_index = file
        .groups
        .get(group_index)
        .and_then(|group| {
            group
                .checklists
                .iter()
                .position(|checklist| checklist.is_default)
        })
        .unwrap_or(0);
    (
        group_index.min(u8::MAX as usize) as u8,
        checklist_index.min(u8::MAX as usize) as u8,
    )
}

pub(crate) fn write_file(file: &ChecklistFile) -> Result<Vec<u8>, SaveError> {
    let mut out = Vec::new();
    out.extend_from_slice(&FORMAT_MAGIC);
    out.extend_from_slice(&VERSION_MAGIC);
    let (default_group, default_checklist) = default_indices(file);
    out.push(default_group);
    out.push(default_checklist);
    out.extend_from_slice(&LINE_TERMINATOR);

    field::write_text(&mut out, &file.name, "file name")?;
    field::write_text(&mut out, &file.make_and_model, "make and model")?;
    field::write_text(&mut out, &file.aircraft_info, "aircraft info")?;
    field::write_text(&mut out, &file.manufacturer_id, "manufacturer id")?;
    field::write_text(&mut out, &file.copyright, "copyright")?;

    for group in &file.groups {
        write_group(&mut out, group)?;
    }

    out.extend_from_slice(FOOTER);
    out.extend_from_slice(&LINE_TERMINATOR);
    checksum::append(&mut out);
    Ok(out)
}
