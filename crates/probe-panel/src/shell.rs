use crate::list::ListView;

/// What a renderer should draw as the pane's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneBody {
    /// An informational placeholder message.
    Placeholder,
    /// The entry list.
    List,
}

/// A generic sidebar pane: a title, a placeholder message, and a list.
///
/// The shell tracks which body a renderer should draw. The content logic
/// that owns the shell is its only writer; renderers read
/// [`body`](Self::body), [`title`](Self::title), and the list.
#[derive(Debug)]
pub struct PaneShell {
    title: String,
    placeholder: String,
    body: PaneBody,
    list: ListView,
}

impl PaneShell {
    /// Create a pane showing its placeholder, with an empty list.
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            placeholder: placeholder.into(),
            body: PaneBody::Placeholder,
            list: ListView::new(),
        }
    }

    /// The pane title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The placeholder message shown when the list is hidden.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Which body a renderer should draw.
    pub fn body(&self) -> PaneBody {
        self.body
    }

    /// Whether the placeholder is currently shown.
    pub fn is_placeholder_visible(&self) -> bool {
        self.body == PaneBody::Placeholder
    }

    /// Show the list instead of the placeholder.
    pub fn show_list(&mut self) {
        self.body = PaneBody::List;
    }

    /// Show the placeholder instead of the list.
    pub fn show_placeholder(&mut self) {
        self.body = PaneBody::Placeholder;
    }

    /// The pane's list.
    pub fn list(&self) -> &ListView {
        &self.list
    }

    /// The pane's list, mutable.
    pub fn list_mut(&mut self) -> &mut ListView {
        &mut self.list
    }
}
