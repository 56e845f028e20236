use thiserror::Error;

use crate::entry::EntryId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    #[error("unknown entry handle: {0}")]
    UnknownEntry(EntryId),
    #[error("unknown anchor handle: {0}")]
    UnknownAnchor(EntryId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_entry_display() {
        let err = PanelError::UnknownEntry(7);
        assert_eq!(err.to_string(), "unknown entry handle: 7");
    }

    #[test]
    fn error_unknown_anchor_display() {
        let err = PanelError::UnknownAnchor(3);
        assert_eq!(err.to_string(), "unknown anchor handle: 3");
    }

    #[test]
    fn error_is_debug() {
        let err = PanelError::UnknownEntry(1);
        let debug = format!("{:?}", err);
        assert!(debug.contains("UnknownEntry"));
    }
}
