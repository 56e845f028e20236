//! The breakpoints sidebar pane.

use std::collections::HashMap;

use probe_panel::{EntryId, PaneShell};

use crate::breakpoint::{Breakpoint, BreakpointId, SourceId};
use crate::debugger::DebuggerAdapter;
use crate::notify::{BreakpointEvent, SubscriptionRegistry};
use crate::view::OrderedView;

/// Default pane title.
pub const DEFAULT_TITLE: &str = "Breakpoints";
/// Default placeholder shown while no breakpoint is tracked.
pub const DEFAULT_PLACEHOLDER: &str = "No Breakpoints";

/// Where a breakpoint points, for outer navigation layers.
///
/// The pane never navigates itself; it hands this to whatever does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointLocation {
    /// Source file/resource.
    pub url: String,
    /// Resolved script, if any.
    pub source_id: Option<SourceId>,
    /// Line number (1-based).
    pub line: i64,
}

/// Tracks breakpoints and keeps the view and the debugger in sync.
///
/// Tracking begins at [`add`](Self::add) and ends at
/// [`remove`](Self::remove). In between, external mutations arrive as
/// [`BreakpointEvent`]s through [`handle_event`](Self::handle_event).
/// The pane maintains three things in lockstep:
///
/// - the map of tracked records (at most one per id),
/// - the view, sorted ascending by `(url, line)`,
/// - the debugger, where a breakpoint is armed iff the session is
///   active, the breakpoint is resolved, and it is enabled.
pub struct BreakpointsPane {
    breakpoints: HashMap<BreakpointId, Breakpoint>,
    view: OrderedView,
    registry: SubscriptionRegistry,
    debugger: Box<dyn DebuggerAdapter>,
}

impl BreakpointsPane {
    /// Create a pane with the default title and placeholder.
    pub fn new(debugger: Box<dyn DebuggerAdapter>) -> Self {
        Self::with_labels(debugger, DEFAULT_TITLE, DEFAULT_PLACEHOLDER)
    }

    /// Create a pane with custom title and placeholder strings.
    pub fn with_labels(
        debugger: Box<dyn DebuggerAdapter>,
        title: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            breakpoints: HashMap::new(),
            view: OrderedView::new(PaneShell::new(title, placeholder)),
            registry: SubscriptionRegistry::new(),
            debugger,
        }
    }

    /// Start tracking a breakpoint.
    ///
    /// A no-op if the id is already tracked. Otherwise the record is
    /// stored, its notifications subscribed, a view entry inserted at
    /// the sorted position, and — when the session is active and the
    /// breakpoint is resolved and enabled — arming is requested.
    pub fn add(&mut self, bp: Breakpoint) {
        if self.breakpoints.contains_key(&bp.id) {
            tracing::debug!("breakpoint {:?} already tracked", bp.id);
            return;
        }

        self.registry.subscribe_all(bp.id);
        self.view.insert(&bp);

        if self.debugger.is_session_active() {
            if let Some(source) = bp.source_id {
                if bp.enabled {
                    self.debugger.arm(source, bp.line);
                }
            }
        }

        self.breakpoints.insert(bp.id, bp);
    }

    /// Stop tracking a breakpoint.
    ///
    /// A no-op if the id is not tracked. Otherwise notifications are
    /// unsubscribed, the record and view entry dropped, and — when the
    /// session is active and the breakpoint is resolved — disarming is
    /// requested regardless of the enabled flag, so no armed state can
    /// outlive the removal.
    pub fn remove(&mut self, id: BreakpointId) {
        if !self.breakpoints.contains_key(&id) {
            tracing::debug!("breakpoint {:?} not tracked", id);
            return;
        }

        // Unsubscribe before any other mutation so a notification
        // arriving mid-removal cannot observe a half-removed breakpoint.
        self.registry.unsubscribe_all(id);

        let Some(bp) = self.breakpoints.remove(&id) else {
            return;
        };
        self.view.remove(id);

        if self.debugger.is_session_active() {
            if let Some(source) = bp.source_id {
                // Disarm even when disabled; the adapter's disarm is
                // idempotent and this guarantees nothing stays armed.
                self.debugger.disarm(source, bp.line);
            }
        }
    }

    /// Route a notification from an externally mutated breakpoint.
    ///
    /// Events whose `(id, kind)` pair is not subscribed are dropped, so
    /// a late notification for a removed breakpoint has no effect.
    pub fn handle_event(&mut self, id: BreakpointId, event: BreakpointEvent) {
        if !self.registry.is_subscribed(id, event.kind()) {
            tracing::debug!("dropping {:?} event for breakpoint {:?}", event.kind(), id);
            return;
        }
        match event {
            BreakpointEvent::Enabled => self.enabled_changed(id, true),
            BreakpointEvent::Disabled => self.enabled_changed(id, false),
            BreakpointEvent::TextChanged(text) => self.text_changed(id, text),
        }
    }

    fn enabled_changed(&mut self, id: BreakpointId, enabled: bool) {
        let Some(bp) = self.breakpoints.get_mut(&id) else {
            return;
        };
        bp.enabled = enabled;
        self.view.set_enabled(id, enabled);

        if !self.debugger.is_session_active() {
            return;
        }
        let Some(source) = bp.source_id else {
            return;
        };
        if enabled {
            self.debugger.arm(source, bp.line);
        } else {
            self.debugger.disarm(source, bp.line);
        }
    }

    fn text_changed(&mut self, id: BreakpointId, text: String) {
        let Some(bp) = self.breakpoints.get_mut(&id) else {
            return;
        };
        bp.source_text = text;
        self.view.set_source_text(id, &bp.source_text);
    }

    /// Whether a breakpoint is tracked.
    pub fn contains(&self, id: BreakpointId) -> bool {
        self.breakpoints.contains_key(&id)
    }

    /// The tracked record for a breakpoint.
    pub fn get(&self, id: BreakpointId) -> Option<&Breakpoint> {
        self.breakpoints.get(&id)
    }

    /// Number of tracked breakpoints.
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Whether no breakpoint is tracked.
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// The ordered view, for renderers and outer layers.
    pub fn view(&self) -> &OrderedView {
        &self.view
    }

    /// Resolve a clicked view entry back to its breakpoint.
    pub fn breakpoint_at_entry(&self, entry: EntryId) -> Option<&Breakpoint> {
        self.view
            .breakpoint_at(entry)
            .and_then(|id| self.breakpoints.get(&id))
    }

    /// Where a tracked breakpoint points, for navigation.
    pub fn location(&self, id: BreakpointId) -> Option<BreakpointLocation> {
        self.breakpoints.get(&id).map(|bp| BreakpointLocation {
            url: bp.url.clone(),
            source_id: bp.source_id,
            line: bp.line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::SourceId;
    use crate::debugger::DetachedDebugger;

    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Arm(SourceId, i64),
        Disarm(SourceId, i64),
    }

    #[derive(Debug, Default)]
    struct DebuggerState {
        active: bool,
        calls: Vec<Call>,
    }

    /// Records arm/disarm requests; shared so tests can inspect them
    /// after handing the adapter to the pane.
    #[derive(Debug, Clone, Default)]
    struct RecordingDebugger(Rc<RefCell<DebuggerState>>);

    impl RecordingDebugger {
        fn active() -> Self {
            let debugger = Self::default();
            debugger.0.borrow_mut().active = true;
            debugger
        }

        fn calls(&self) -> Vec<Call> {
            self.0.borrow().calls.clone()
        }
    }

    impl DebuggerAdapter for RecordingDebugger {
        fn is_session_active(&self) -> bool {
            self.0.borrow().active
        }

        fn arm(&mut self, source: SourceId, line: i64) {
            self.0.borrow_mut().calls.push(Call::Arm(source, line));
        }

        fn disarm(&mut self, source: SourceId, line: i64) {
            self.0.borrow_mut().calls.push(Call::Disarm(source, line));
        }
    }

    fn resolved(id: i64, url: &str, line: i64) -> Breakpoint {
        Breakpoint::new(BreakpointId(id), url, line).with_source_id(SourceId(100 + id))
    }

    #[test]
    fn pane_add_resolved_enabled_arms_once() {
        let debugger = RecordingDebugger::active();
        let mut pane = BreakpointsPane::new(Box::new(debugger.clone()));

        pane.add(resolved(1, "a.js", 10));

        assert_eq!(debugger.calls(), vec![Call::Arm(SourceId(101), 10)]);
    }

    #[test]
    fn pane_add_disabled_does_not_arm() {
        let debugger = RecordingDebugger::active();
        let mut pane = BreakpointsPane::new(Box::new(debugger.clone()));

        pane.add(resolved(1, "a.js", 10).disabled());

        assert!(debugger.calls().is_empty());
    }

    #[test]
    fn pane_add_unresolved_does_not_arm() {
        let debugger = RecordingDebugger::active();
        let mut pane = BreakpointsPane::new(Box::new(debugger.clone()));

        pane.add(Breakpoint::new(BreakpointId(1), "a.js", 10));

        assert!(debugger.calls().is_empty());
        assert!(pane.contains(BreakpointId(1)));
    }

    #[test]
    fn pane_add_without_session_does_not_arm() {
        let debugger = RecordingDebugger::default();
        let mut pane = BreakpointsPane::new(Box::new(debugger.clone()));

        pane.add(resolved(1, "a.js", 10));

        assert!(debugger.calls().is_empty());
    }

    #[test]
    fn pane_duplicate_add_is_noop() {
        let debugger = RecordingDebugger::active();
        let mut pane = BreakpointsPane::new(Box::new(debugger.clone()));

        pane.add(resolved(1, "a.js", 10));
        pane.add(resolved(1, "a.js", 10));

        assert_eq!(pane.len(), 1);
        assert_eq!(pane.view().len(), 1);
        assert_eq!(debugger.calls(), vec![Call::Arm(SourceId(101), 10)]);
    }

    #[test]
    fn pane_remove_disarms_even_when_disabled() {
        let debugger = RecordingDebugger::active();
        let mut pane = BreakpointsPane::new(Box::new(debugger.clone()));

        pane.add(resolved(1, "a.js", 10).disabled());
        pane.remove(BreakpointId(1));

        assert_eq!(debugger.calls(), vec![Call::Disarm(SourceId(101), 10)]);
    }

    #[test]
    fn pane_remove_untracked_is_noop() {
        let debugger = RecordingDebugger::active();
        let mut pane = BreakpointsPane::new(Box::new(debugger.clone()));

        pane.remove(BreakpointId(9));

        assert!(debugger.calls().is_empty());
        assert!(pane.is_empty());
    }

    #[test]
    fn pane_toggle_enabled_reconciles_debugger() {
        let debugger = RecordingDebugger::active();
        let mut pane = BreakpointsPane::new(Box::new(debugger.clone()));

        pane.add(resolved(1, "a.js", 10));
        pane.handle_event(BreakpointId(1), BreakpointEvent::Disabled);
        pane.handle_event(BreakpointId(1), BreakpointEvent::Enabled);

        assert_eq!(
            debugger.calls(),
            vec![
                Call::Arm(SourceId(101), 10),
                Call::Disarm(SourceId(101), 10),
                Call::Arm(SourceId(101), 10),
            ]
        );
        assert!(pane.get(BreakpointId(1)).unwrap().enabled);
    }

    #[test]
    fn pane_toggle_unresolved_touches_view_only() {
        let debugger = RecordingDebugger::active();
        let mut pane = BreakpointsPane::new(Box::new(debugger.clone()));

        pane.add(Breakpoint::new(BreakpointId(1), "a.js", 10));
        pane.handle_event(BreakpointId(1), BreakpointEvent::Disabled);

        assert!(debugger.calls().is_empty());
        let entry = pane.view().entry_for(BreakpointId(1)).unwrap();
        assert!(!pane.view().shell().list().get(entry).unwrap().checked());
    }

    #[test]
    fn pane_text_changed_never_calls_debugger() {
        let debugger = RecordingDebugger::active();
        let mut pane = BreakpointsPane::new(Box::new(debugger.clone()));

        pane.add(resolved(1, "a.js", 10));
        pane.handle_event(
            BreakpointId(1),
            BreakpointEvent::TextChanged("edited".into()),
        );

        assert_eq!(debugger.calls(), vec![Call::Arm(SourceId(101), 10)]);
        assert_eq!(pane.get(BreakpointId(1)).unwrap().source_text, "edited");
    }

    #[test]
    fn pane_events_after_remove_are_dropped() {
        let debugger = RecordingDebugger::active();
        let mut pane = BreakpointsPane::new(Box::new(debugger.clone()));

        pane.add(resolved(1, "a.js", 10));
        pane.remove(BreakpointId(1));
        let calls_after_remove = debugger.calls();

        pane.handle_event(BreakpointId(1), BreakpointEvent::Enabled);
        pane.handle_event(BreakpointId(1), BreakpointEvent::Disabled);
        pane.handle_event(BreakpointId(1), BreakpointEvent::TextChanged("x".into()));

        assert_eq!(debugger.calls(), calls_after_remove);
        assert!(pane.view().is_empty());
    }

    #[test]
    fn pane_event_for_unknown_breakpoint_is_dropped() {
        let mut pane = BreakpointsPane::new(Box::new(DetachedDebugger));
        pane.handle_event(BreakpointId(5), BreakpointEvent::Enabled);
        assert!(pane.is_empty());
    }

    #[test]
    fn pane_location_for_navigation() {
        let mut pane = BreakpointsPane::new(Box::new(DetachedDebugger));
        pane.add(resolved(1, "a.js", 10));

        let location = pane.location(BreakpointId(1)).unwrap();
        assert_eq!(location.url, "a.js");
        assert_eq!(location.source_id, Some(SourceId(101)));
        assert_eq!(location.line, 10);

        assert_eq!(pane.location(BreakpointId(2)), None);
    }

    #[test]
    fn pane_breakpoint_at_entry_resolves_clicks() {
        let mut pane = BreakpointsPane::new(Box::new(DetachedDebugger));
        pane.add(resolved(1, "a.js", 10).with_label("main"));

        let entry = pane.view().entry_for(BreakpointId(1)).unwrap();
        let bp = pane.breakpoint_at_entry(entry).unwrap();
        assert_eq!(bp.label, "main");

        assert!(pane.breakpoint_at_entry(entry + 1).is_none());
    }

    #[test]
    fn pane_custom_labels() {
        let pane = BreakpointsPane::with_labels(Box::new(DetachedDebugger), "BPs", "none yet");
        assert_eq!(pane.view().shell().title(), "BPs");
        assert_eq!(pane.view().shell().placeholder(), "none yet");
    }
}
