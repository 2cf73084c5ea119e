//! Tri-state holder for the result of a remote query.

/// Result of a remote query as seen by the UI.
///
/// `Failed` is kept apart from an empty `Loaded` so the view can tell
/// "nothing matched" from "the query did not complete".
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Remote<T> {
    /// No query has been issued, or its result was discarded.
    #[default]
    Idle,
    /// A query is outstanding.
    Loading,
    /// The latest query completed.
    Loaded(T),
    /// The latest query failed; carries a client-safe reason.
    Failed(String),
}

impl<T> Remote<T> {
    /// Whether a query is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Borrow the loaded value, if any.
    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure reason, if the latest query failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }
}

impl<T> Remote<Vec<T>> {
    /// Items to display: the loaded list, or nothing in every other state.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.loaded().map_or(&[], Vec::as_slice)
    }
}
