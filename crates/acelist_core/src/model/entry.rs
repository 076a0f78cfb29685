//! Checklist entry domain model.
//!
//! # Responsibility
//! - Define one checklist line item: type, justification, text, response,
//!   trailing blank lines.
//! - Provide the sample-entry palette used to seed new line items.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `response` is meaningful only when `kind == EntryType::Challenge`; it is
//!   retained (not cleared) across type changes.
//! - `blank_lines_following` is not clamped here; the practical [0, 5] range
//!   is a presentation-layer policy.

use crate::undo::op::EditOp;
use crate::undo::EditContext;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a checklist entry.
pub type EntryId = Uuid;

/// Category of one checklist line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Undefined,
    Text,
    Note,
    Subtitle,
    Warning,
    Caution,
    /// Prompt plus expected pilot response.
    Challenge,
}

impl EntryType {
    /// Display label for pickers and menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Text => "Text",
            Self::Note => "Note",
            Self::Subtitle => "Subtitle",
            Self::Warning => "Warning",
            Self::Caution => "Caution",
            Self::Challenge => "Challenge/Response",
        }
    }
}

/// Horizontal alignment or indent level applied to an entry's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    Left,
    IndentOne,
    IndentTwo,
    IndentThree,
    IndentFour,
    Center,
}

impl Justification {
    /// Display label for pickers and menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Left Justified",
            Self::IndentOne => "Indent 1 Level",
            Self::IndentTwo => "Indent 2 Levels",
            Self::IndentThree => "Indent 3 Levels",
            Self::IndentFour => "Indent 4 Levels",
            Self::Center => "Center Justified",
        }
    }
}

/// Sample-entry palette used when inserting a new line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPreset {
    NewItem,
    TextLeft,
    TextIndentOne,
    TextIndentTwo,
    TextIndentThree,
    TextIndentFour,
    TextCenter,
    NoteBlankLines,
    Subtitle,
    Warning,
    Caution,
    Challenge,
}

/// One line item of a checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable global ID used for lookup, move/duplicate, and undo targeting.
    pub(crate) id: EntryId,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub(crate) kind: EntryType,
    pub(crate) justification: Justification,
    pub(crate) text: String,
    /// Expected pilot response; meaningful only for challenge entries.
    pub(crate) response: String,
    /// Number of blank lines emitted after this entry on save.
    pub(crate) blank_lines_following: u8,
}

impl Entry {
    /// Creates an entry with a generated stable ID and no response.
    pub fn new(
        kind: EntryType,
        justification: Justification,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            justification,
            text: text.into(),
            response: String::new(),
            blank_lines_following: 0,
        }
    }

    /// Creates an entry pre-filled from the sample palette.
    pub fn preset(preset: EntryPreset) -> Self {
        match preset {
            EntryPreset::NewItem => {
                Self::new(EntryType::Undefined, Justification::Left, "New Item")
            }
            EntryPreset::TextLeft => Self::new(
                EntryType::Text,
                Justification::Left,
                "Plain Text Left Justified",
            ),
            EntryPreset::TextIndentOne => Self::new(
                EntryType::Text,
                Justification::IndentOne,
                "Plain Text Indented 1 Level",
            ),
            EntryPreset::TextIndentTwo => Self::new(
                EntryType::Text,
                Justification::IndentTwo,
                "Plain Text Indented 2 Levels",
            ),
            EntryPreset::TextIndentThree => Self::new(
                EntryType::Text,
                Justification::IndentThree,
                "Plain Text Indented 3 Levels",
            ),
            EntryPreset::TextIndentFour => Self::new(
                EntryType::Text,
                Justification::IndentFour,
                "Plain Text Indented 4 Levels",
            ),
            EntryPreset::TextCenter => Self::new(
                EntryType::Text,
                Justification::Center,
                "Plain Text Center Justified",
            ),
            EntryPreset::NoteBlankLines => {
                let mut entry =
                    Self::new(EntryType::Note, Justification::Left, "Note with 5 blank lines");
                entry.blank_lines_following = 5;
                entry
            }
            EntryPreset::Subtitle => {
                Self::new(EntryType::Subtitle, Justification::Left, "Subtitle Type")
            }
            EntryPreset::Warning => Self::new(
                EntryType::Warning,
                Justification::Center,
                "This is a Warning Center Justified",
            ),
            EntryPreset::Caution => {
                Self::new(EntryType::Caution, Justification::Left, "This is a Caution")
            }
            EntryPreset::Challenge => {
                let mut entry =
                    Self::new(EntryType::Challenge, Justification::Left, "Challenge");
                entry.response = "Response".to_string();
                entry
            }
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn kind(&self) -> EntryType {
        self.kind
    }

    pub fn justification(&self) -> Justification {
        self.justification
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn blank_lines_following(&self) -> u8 {
        self.blank_lines_following
    }

    /// Changes the entry type, recording the inverse as "Change Type".
    ///
    /// Setting the current value records nothing.
    pub fn set_kind(&mut self, ctx: &mut EditContext, value: EntryType) {
        if self.kind == value {
            return;
        }
        let previous = std::mem::replace(&mut self.kind, value);
        ctx.record(
            "Change Type",
            EditOp::SetEntryKind {
                entry_id: self.id,
                value: previous,
            },
        );
    }

    /// Changes the justification, recording the inverse as
    /// "Change Justification".
    pub fn set_justification(&mut self, ctx: &mut EditContext, value: Justification) {
        if self.justification == value {
            return;
        }
        let previous = std::mem::replace(&mut self.justification, value);
        ctx.record(
            "Change Justification",
            EditOp::SetEntryJustification {
                entry_id: self.id,
                value: previous,
            },
        );
    }

    /// Changes the entry text, recording the inverse as "Change Text".
    ///
    /// Consecutive distinct edits are recorded as separate undo steps.
    pub fn set_text(&mut self, ctx: &mut EditContext, value: impl Into<String>) {
        let value = value.into();
        if self.text == value {
            return;
        }
        let previous = std::mem::replace(&mut self.text, value);
        ctx.record(
            "Change Text",
            EditOp::SetEntryText {
                entry_id: self.id,
                value: previous,
            },
        );
    }

    /// Changes the challenge response, recording the inverse as
    /// "Change Response".
    pub fn set_response(&mut self, ctx: &mut EditContext, value: impl Into<String>) {
        let value = value.into();
        if self.response == value {
            return;
        }
        let previous = std::mem::replace(&mut self.response, value);
        ctx.record(
            "Change Response",
            EditOp::SetEntryResponse {
                entry_id: self.id,
                value: previous,
            },
        );
    }

    /// Changes the trailing blank-line count, recording the inverse as
    /// "Change Lines".
    pub fn set_blank_lines_following(&mut self, ctx: &mut EditContext, value: u8) {
        if self.blank_lines_following == value {
            return;
        }
        let previous = std::mem::replace(&mut self.blank_lines_following, value);
        ctx.record(
            "Change Lines",
            EditOp::SetEntryBlankLines {
                entry_id: self.id,
                value: previous,
            },
        );
    }

    /// Copies this entry under a fresh identity, preserving all scalar
    /// fields.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: self.kind,
            justification: self.justification,
            text: self.text.clone(),
            response: self.response.clone(),
            blank_lines_following: self.blank_lines_following,
        }
    }

    /// Field-wise equality that ignores identity.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.justification == other.justification
            && self.text == other.text
            && self.response == other.response
            && self.blank_lines_following == other.blank_lines_following
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::preset(EntryPreset::NewItem)
    }
}
