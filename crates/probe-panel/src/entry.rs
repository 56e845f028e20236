/// Handle to an entry inside a [`ListView`](crate::list::ListView).
///
/// Handles are allocated by the container and never reused within a
/// container's lifetime.
pub type EntryId = usize;

/// A single row in a sidebar list.
///
/// A row has two independently mutable regions: a checked indicator and
/// a detail text line. Both update in place; neither affects the row's
/// position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    checked: bool,
    label: String,
    detail: String,
}

impl ListEntry {
    /// Create an unchecked entry with the given label and no detail text.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            checked: false,
            label: label.into(),
            detail: String::new(),
        }
    }

    /// Set the initial checked state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the initial detail text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// The checked indicator state.
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Update the checked indicator in place.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// The entry's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The entry's detail text.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Update the detail text in place.
    pub fn set_detail(&mut self, detail: impl Into<String>) {
        self.detail = detail.into();
    }
}
