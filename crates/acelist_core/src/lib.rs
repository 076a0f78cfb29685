//! Core domain logic for the AceList checklist editor.
//! This crate is the single source of truth for the file format and the
//! document tree invariants.

pub mod codec;
pub mod logging;
pub mod model;
pub mod undo;

pub use codec::{load, save, LoadError, SaveError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::checklist::{Checklist, ChecklistId};
pub use model::entry::{Entry, EntryId, EntryPreset, EntryType, Justification};
pub use model::file::{ChecklistFile, FileId};
pub use model::group::{Group, GroupId};
pub use undo::EditContext;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
