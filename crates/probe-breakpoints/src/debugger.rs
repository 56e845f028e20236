//! The seam between the pane and the debugger backend.

use crate::breakpoint::SourceId;

/// Backend capability the pane uses to arm and disarm breakpoints.
///
/// Calls are fire-and-forget: the pane never inspects or retries a
/// failed request; failure policy belongs to the adapter. `disarm` must
/// be idempotent — the pane disarms resolved breakpoints on removal
/// even when they are already disabled.
pub trait DebuggerAdapter {
    /// Whether a debug session is currently active.
    fn is_session_active(&self) -> bool;

    /// Request that the debugger start breaking at a resolved location.
    fn arm(&mut self, source: SourceId, line: i64);

    /// Request that the debugger stop breaking at a resolved location.
    fn disarm(&mut self, source: SourceId, line: i64);
}

/// Adapter for a front-end with no debug session.
///
/// Reports the session as inactive, which suppresses every arm/disarm
/// request before it reaches the adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedDebugger;

impl DebuggerAdapter for DetachedDebugger {
    fn is_session_active(&self) -> bool {
        false
    }

    fn arm(&mut self, _source: SourceId, _line: i64) {}

    fn disarm(&mut self, _source: SourceId, _line: i64) {}
}
