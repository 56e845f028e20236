//! Breakpoint records tracked by the pane.

/// Opaque identity of a breakpoint, stable for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BreakpointId(pub i64);

/// Identifier of a script the debugger has loaded.
///
/// A breakpoint only gets one once the debugger resolves it against a
/// loaded script; until then it cannot be armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(pub i64);

/// A breakpoint as seen by the pane.
///
/// The record is owned and mutated externally (by the debugging session
/// that created it); the pane tracks a copy and updates it from
/// notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    /// Stable identity.
    pub id: BreakpointId,
    /// Source file/resource the breakpoint lives in.
    pub url: String,
    /// Line number (1-based).
    pub line: i64,
    /// Resolved script, if the debugger has loaded one.
    pub source_id: Option<SourceId>,
    /// Whether the breakpoint should pause execution.
    pub enabled: bool,
    /// Display name (function or location).
    pub label: String,
    /// Text of the source line, for display.
    pub source_text: String,
}

impl Breakpoint {
    /// Create an enabled, unresolved breakpoint at the given location.
    pub fn new(id: BreakpointId, url: impl Into<String>, line: i64) -> Self {
        Self {
            id,
            url: url.into(),
            line,
            source_id: None,
            enabled: true,
            label: String::new(),
            source_text: String::new(),
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the source line text.
    pub fn with_source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = text.into();
        self
    }

    /// Mark the breakpoint as resolved against a loaded script.
    pub fn with_source_id(mut self, source_id: SourceId) -> Self {
        self.source_id = Some(source_id);
        self
    }

    /// Start the breakpoint out disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// The key the pane sorts by: ascending `url`, ties broken by `line`.
    pub fn sort_key(&self) -> (&str, i64) {
        (&self.url, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_new_defaults() {
        let bp = Breakpoint::new(BreakpointId(1), "app.js", 10);
        assert_eq!(bp.id, BreakpointId(1));
        assert_eq!(bp.url, "app.js");
        assert_eq!(bp.line, 10);
        assert!(bp.enabled);
        assert_eq!(bp.source_id, None);
        assert_eq!(bp.label, "");
        assert_eq!(bp.source_text, "");
    }

    #[test]
    fn breakpoint_builders() {
        let bp = Breakpoint::new(BreakpointId(2), "lib.js", 42)
            .with_label("init")
            .with_source_text("var x = 0;")
            .with_source_id(SourceId(7))
            .disabled();
        assert_eq!(bp.label, "init");
        assert_eq!(bp.source_text, "var x = 0;");
        assert_eq!(bp.source_id, Some(SourceId(7)));
        assert!(!bp.enabled);
    }

    #[test]
    fn breakpoint_sort_key_orders_by_url_then_line() {
        let a = Breakpoint::new(BreakpointId(1), "a.js", 99);
        let b = Breakpoint::new(BreakpointId(2), "b.js", 1);
        let b2 = Breakpoint::new(BreakpointId(3), "b.js", 5);
        assert!(a.sort_key() < b.sort_key());
        assert!(b.sort_key() < b2.sort_key());
    }
}
