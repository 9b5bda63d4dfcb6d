use crate::resources::FormResource;

/// User-triggered operations. Every action except `Clear` issues exactly one
/// HTTP request; `Clear` is local to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Retrieve,
    Delete,
    /// Collection fetch; labeled "Search" or "List" depending on the resource.
    Search,
    Suspend,
    Restore,
    Clear,
}

impl Action {
    /// Actions whose failure wipes the form instead of leaving it as-is.
    pub fn clears_form_on_failure(self) -> bool {
        matches!(self, Action::Retrieve | Action::Delete)
    }
}

/// Successful outcome of a dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub enum Completed<T> {
    /// A single record, to be copied into the form.
    Entity(T),
    /// Deletion acknowledged; the response body is ignored.
    Deleted,
    /// A collection, to be rendered as the results table.
    Listing(Vec<T>),
}

pub enum Msg<R: FormResource> {
    /// A form input changed.
    Edit(&'static str, String),
    /// An action button was clicked.
    Trigger(Action),
    /// A dispatched request completed. `seq` identifies the request so
    /// completions of superseded requests can be discarded.
    Finished {
        seq: u32,
        action: Action,
        outcome: Result<Completed<R::Record>, String>,
    },
}
