//! probe-panel — generic sidebar pane building blocks for probe.
//!
//! A pane shell holds a title, a placeholder message, and an ordered
//! list of entries. Content logic owns the shell and is its only
//! writer; a renderer reads it. Nothing in this crate knows how a pane
//! is actually drawn.

pub mod entry;
pub mod error;
pub mod list;
pub mod shell;

pub use entry::{EntryId, ListEntry};
pub use error::PanelError;
pub use list::ListView;
pub use shell::{PaneBody, PaneShell};
