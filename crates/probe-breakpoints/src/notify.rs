//! Notification routing for tracked breakpoints.
//!
//! Breakpoints are mutated by their external owner; the pane only
//! observes those mutations as events. Subscription bookkeeping is an
//! explicit registry keyed by `(breakpoint, kind)` so that
//! unsubscription on removal is exact: once a pair is removed, events
//! for it are dropped at dispatch.

use std::collections::HashSet;

use crate::breakpoint::BreakpointId;

/// The notification kinds a breakpoint emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The breakpoint was switched on.
    Enabled,
    /// The breakpoint was switched off.
    Disabled,
    /// The breakpoint's source line text changed.
    TextChanged,
}

impl EventKind {
    /// Every kind the pane subscribes for a tracked breakpoint.
    pub const ALL: [EventKind; 3] = [
        EventKind::Enabled,
        EventKind::Disabled,
        EventKind::TextChanged,
    ];
}

/// A notification from an externally mutated breakpoint.
///
/// Events carry the post-mutation value where the pane needs one,
/// since the mutation happened on the owner's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakpointEvent {
    /// The breakpoint was switched on.
    Enabled,
    /// The breakpoint was switched off.
    Disabled,
    /// The source line text changed to the carried value.
    TextChanged(String),
}

impl BreakpointEvent {
    /// The subscription kind this event is dispatched under.
    pub fn kind(&self) -> EventKind {
        match self {
            BreakpointEvent::Enabled => EventKind::Enabled,
            BreakpointEvent::Disabled => EventKind::Disabled,
            BreakpointEvent::TextChanged(_) => EventKind::TextChanged,
        }
    }
}

/// Exact, idempotent subscription bookkeeping.
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    subs: HashSet<(BreakpointId, EventKind)>,
}

impl SubscriptionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe one `(breakpoint, kind)` pair.
    ///
    /// Returns `true` if the pair was not already subscribed.
    pub fn subscribe(&mut self, id: BreakpointId, kind: EventKind) -> bool {
        self.subs.insert((id, kind))
    }

    /// Unsubscribe one `(breakpoint, kind)` pair.
    ///
    /// Returns `true` if the pair was subscribed.
    pub fn unsubscribe(&mut self, id: BreakpointId, kind: EventKind) -> bool {
        self.subs.remove(&(id, kind))
    }

    /// Subscribe every kind for a breakpoint.
    pub fn subscribe_all(&mut self, id: BreakpointId) {
        for kind in EventKind::ALL {
            self.subscribe(id, kind);
        }
    }

    /// Unsubscribe every kind for a breakpoint.
    pub fn unsubscribe_all(&mut self, id: BreakpointId) {
        for kind in EventKind::ALL {
            self.unsubscribe(id, kind);
        }
    }

    /// Whether a `(breakpoint, kind)` pair is subscribed.
    pub fn is_subscribed(&self, id: BreakpointId, kind: EventKind) -> bool {
        self.subs.contains(&(id, kind))
    }

    /// Number of subscribed pairs.
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    /// Whether nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }
}
