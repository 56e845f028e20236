//! probe-breakpoints — the breakpoints sidebar pane for probe.
//!
//! This crate implements the pane's content logic: it tracks breakpoint
//! records, keeps the pane list sorted by `(url, line)`, routes
//! enable/disable/text-change notifications from externally owned
//! breakpoints, and reconciles armed state with the debugger backend.

pub mod breakpoint;
pub mod debugger;
pub mod notify;
pub mod pane;
pub mod view;

// Re-export key types for convenience.
pub use breakpoint::{Breakpoint, BreakpointId, SourceId};
pub use debugger::{DebuggerAdapter, DetachedDebugger};
pub use notify::{BreakpointEvent, EventKind, SubscriptionRegistry};
pub use pane::{BreakpointLocation, BreakpointsPane};
pub use view::OrderedView;
