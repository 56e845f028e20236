//! The ordered view of tracked breakpoints.

use std::collections::HashMap;

use probe_panel::{EntryId, ListEntry, PaneShell};

use crate::breakpoint::{Breakpoint, BreakpointId};

/// Sort key for list placement: ascending `url`, ties broken by `line`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    url: String,
    line: i64,
}

/// Keeps the pane list in ascending `(url, line)` order and maps
/// breakpoint identities to entry handles (and back).
///
/// Insertion is a linear scan. Breakpoints number in the tens, so the
/// walk keeps ordering deterministic without an ordered container.
/// Equal keys preserve arrival order.
///
/// The view is the only writer of the shell it owns; renderers read the
/// shell through [`shell`](Self::shell).
#[derive(Debug)]
pub struct OrderedView {
    shell: PaneShell,
    /// Breakpoint ids in current list order, with their sort keys.
    order: Vec<(BreakpointId, SortKey)>,
    to_entry: HashMap<BreakpointId, EntryId>,
    to_breakpoint: HashMap<EntryId, BreakpointId>,
}

impl OrderedView {
    /// Create a view over the given shell.
    pub fn new(shell: PaneShell) -> Self {
        Self {
            shell,
            order: Vec::new(),
            to_entry: HashMap::new(),
            to_breakpoint: HashMap::new(),
        }
    }

    /// Insert an entry for a breakpoint at its sorted position.
    ///
    /// The first insertion flips the shell from placeholder to list.
    pub fn insert(&mut self, bp: &Breakpoint) {
        let key = SortKey {
            url: bp.url.clone(),
            line: bp.line,
        };
        let row = ListEntry::new(bp.label.as_str())
            .with_checked(bp.enabled)
            .with_detail(bp.source_text.as_str());

        // First entry with a strictly greater key; equal keys stay in
        // front so arrival order is preserved among them.
        let mut pos = self.order.iter().position(|(_, existing)| *existing > key);
        let anchor = match pos {
            Some(p) => match self.to_entry.get(&self.order[p].0).copied() {
                Some(anchor) => Some(anchor),
                None => {
                    tracing::warn!("no entry handle for anchor breakpoint, appending");
                    pos = None;
                    None
                }
            },
            None => None,
        };

        let entry = match anchor {
            Some(anchor) => match self.shell.list_mut().insert_before(row, anchor) {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("breakpoint list out of sync ({}), appending", err);
                    pos = None;
                    self.shell.list_mut().append(
                        ListEntry::new(bp.label.as_str())
                            .with_checked(bp.enabled)
                            .with_detail(bp.source_text.as_str()),
                    )
                }
            },
            None => self.shell.list_mut().append(row),
        };

        match pos {
            Some(p) => self.order.insert(p, (bp.id, key)),
            None => self.order.push((bp.id, key)),
        }
        self.to_entry.insert(bp.id, entry);
        self.to_breakpoint.insert(entry, bp.id);

        if self.order.len() == 1 {
            self.shell.show_list();
        }
    }

    /// Remove the entry for a breakpoint.
    ///
    /// Removing the last entry flips the shell back to its placeholder.
    pub fn remove(&mut self, id: BreakpointId) {
        let Some(entry) = self.to_entry.remove(&id) else {
            tracing::debug!("no view entry for breakpoint {:?}", id);
            return;
        };
        self.to_breakpoint.remove(&entry);
        self.order.retain(|(other, _)| *other != id);
        if let Err(err) = self.shell.list_mut().remove(entry) {
            tracing::warn!("breakpoint list out of sync: {}", err);
        }
        if self.order.is_empty() {
            self.shell.show_placeholder();
        }
    }

    /// Update a breakpoint's checked indicator in place.
    pub fn set_enabled(&mut self, id: BreakpointId, enabled: bool) {
        let Some(&entry) = self.to_entry.get(&id) else {
            return;
        };
        if let Some(row) = self.shell.list_mut().get_mut(entry) {
            row.set_checked(enabled);
        }
    }

    /// Update a breakpoint's detail text in place.
    pub fn set_source_text(&mut self, id: BreakpointId, text: &str) {
        let Some(&entry) = self.to_entry.get(&id) else {
            return;
        };
        if let Some(row) = self.shell.list_mut().get_mut(entry) {
            row.set_detail(text);
        }
    }

    /// The shell renderers draw from.
    pub fn shell(&self) -> &PaneShell {
        &self.shell
    }

    /// Breakpoint ids in current list order.
    pub fn ids_in_order(&self) -> Vec<BreakpointId> {
        self.order.iter().map(|(id, _)| *id).collect()
    }

    /// Resolve a view entry back to its breakpoint.
    pub fn breakpoint_at(&self, entry: EntryId) -> Option<BreakpointId> {
        self.to_breakpoint.get(&entry).copied()
    }

    /// The view entry for a breakpoint.
    pub fn entry_for(&self, id: BreakpointId) -> Option<EntryId> {
        self.to_entry.get(&id).copied()
    }

    /// Number of entries shown.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the view shows no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
