use std::collections::HashMap;

use crate::entry::{EntryId, ListEntry};
use crate::error::PanelError;

/// An ordered, handle-addressed container of [`ListEntry`] rows.
///
/// Every inserted entry gets an [`EntryId`]. Order is explicit: callers
/// choose between [`append`](Self::append) and
/// [`insert_before`](Self::insert_before); the container imposes no
/// ordering policy of its own.
#[derive(Debug, Default)]
pub struct ListView {
    /// Entry handles in display order.
    order: Vec<EntryId>,
    entries: HashMap<EntryId, ListEntry>,
    next_id: EntryId,
}

impl ListView {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end, returning its handle.
    pub fn append(&mut self, entry: ListEntry) -> EntryId {
        let id = self.alloc_id();
        self.order.push(id);
        self.entries.insert(id, entry);
        id
    }

    /// Insert an entry immediately before `anchor`, returning its handle.
    pub fn insert_before(
        &mut self,
        entry: ListEntry,
        anchor: EntryId,
    ) -> Result<EntryId, PanelError> {
        let Some(pos) = self.order.iter().position(|&id| id == anchor) else {
            return Err(PanelError::UnknownAnchor(anchor));
        };
        let id = self.alloc_id();
        self.order.insert(pos, id);
        self.entries.insert(id, entry);
        Ok(id)
    }

    /// Remove an entry, returning it.
    pub fn remove(&mut self, id: EntryId) -> Result<ListEntry, PanelError> {
        let Some(entry) = self.entries.remove(&id) else {
            return Err(PanelError::UnknownEntry(id));
        };
        self.order.retain(|&other| other != id);
        Ok(entry)
    }

    /// Whether the list contains the given handle.
    pub fn contains(&self, id: EntryId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Get an entry by handle.
    pub fn get(&self, id: EntryId) -> Option<&ListEntry> {
        self.entries.get(&id)
    }

    /// Get a mutable entry by handle.
    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut ListEntry> {
        self.entries.get_mut(&id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &ListEntry)> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|entry| (*id, entry)))
    }

    fn alloc_id(&mut self) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
