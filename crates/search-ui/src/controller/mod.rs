//! Search and expand/collapse state machine.
//!
//! [`SearchController`] never performs I/O. User actions return the
//! [`Command`] to execute, if any; the driver executes it and hands the
//! [`Outcome`] back through [`SearchController::apply`]. Each command carries
//! a fresh [`RequestTag`], and an outcome is applied only when its tag is the
//! latest one outstanding for that query kind.

use std::fmt;

use tracing::debug;
use uuid::Uuid;

use crate::client::ClientError;
use crate::dto::{FirearmDto, LicenceHolderDto};
use crate::remote::Remote;

/// Shortest term, in characters, that triggers a holder search.
pub const MIN_TERM_CHARS: usize = 2;

/// Monotonically increasing identifier for an issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTag(u64);

impl RequestTag {
    /// Raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Query the driver must run on the controller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a holder search for `term`.
    SearchHolders {
        /// Tag to return with the outcome.
        tag: RequestTag,
        /// Term as typed.
        term: String,
    },
    /// Load the firearms of `holder_id`.
    LoadFirearms {
        /// Tag to return with the outcome.
        tag: RequestTag,
        /// Holder whose firearms to load.
        holder_id: Uuid,
    },
}

impl Command {
    /// Tag identifying this command.
    #[must_use]
    pub const fn tag(&self) -> RequestTag {
        match self {
            Self::SearchHolders { tag, .. } | Self::LoadFirearms { tag, .. } => *tag,
        }
    }
}

/// Completed query, fed back into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Result of a [`Command::SearchHolders`].
    Holders {
        /// Tag of the originating command.
        tag: RequestTag,
        /// Holders returned, or the failure.
        result: Result<Vec<LicenceHolderDto>, ClientError>,
    },
    /// Result of a [`Command::LoadFirearms`].
    Firearms {
        /// Tag of the originating command.
        tag: RequestTag,
        /// Firearms returned, or the failure.
        result: Result<Vec<FirearmDto>, ClientError>,
    },
}

/// UI state for one search screen.
#[derive(Debug, Default)]
pub struct SearchController {
    search_term: String,
    holders: Remote<Vec<LicenceHolderDto>>,
    shown_while_loading: Vec<LicenceHolderDto>,
    selected_holder: Option<Uuid>,
    firearms: Remote<Vec<FirearmDto>>,
    last_tag: u64,
    pending_search: Option<RequestTag>,
    pending_lookup: Option<RequestTag>,
}

impl SearchController {
    /// Empty screen: no term, no results, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Holder search state.
    #[must_use]
    pub const fn holder_results(&self) -> &Remote<Vec<LicenceHolderDto>> {
        &self.holders
    }

    /// Firearm lookup state for the selected holder.
    #[must_use]
    pub const fn firearm_results(&self) -> &Remote<Vec<FirearmDto>> {
        &self.firearms
    }

    /// Holders to display.
    ///
    /// While a search is outstanding this is the last successfully loaded
    /// list; after a failure or a too-short term it is empty.
    #[must_use]
    pub fn holders(&self) -> &[LicenceHolderDto] {
        match &self.holders {
            Remote::Loading => &self.shown_while_loading,
            settled => settled.items(),
        }
    }

    /// Firearms to display; empty unless the latest lookup succeeded.
    #[must_use]
    pub fn firearms(&self) -> &[FirearmDto] {
        self.firearms.items()
    }

    /// Expanded holder, if any.
    #[must_use]
    pub const fn selected_holder(&self) -> Option<Uuid> {
        self.selected_holder
    }

    /// Whether a holder search is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.holders.is_loading()
    }

    /// Whether a firearm lookup is outstanding.
    #[must_use]
    pub const fn is_loading_firearms(&self) -> bool {
        self.firearms.is_loading()
    }

    /// Whether `term` is long enough to search.
    #[must_use]
    pub fn is_searchable(term: &str) -> bool {
        term.chars().count() >= MIN_TERM_CHARS
    }

    fn next_tag(&mut self) -> RequestTag {
        self.last_tag += 1;
        RequestTag(self.last_tag)
    }

    fn collapse(&mut self) {
        self.selected_holder = None;
        self.firearms = Remote::Idle;
        self.pending_lookup = None;
    }

    /// Record a new search term.
    ///
    /// Any expanded holder collapses. Terms shorter than [`MIN_TERM_CHARS`]
    /// clear the holder list without issuing a query; an outstanding search
    /// becomes stale. A searchable term keeps the current rows visible until
    /// its own response arrives.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> Option<Command> {
        self.search_term = term.into();
        self.collapse();

        if !Self::is_searchable(&self.search_term) {
            self.holders = Remote::Idle;
            self.shown_while_loading.clear();
            self.pending_search = None;
            return None;
        }

        let tag = self.next_tag();
        match std::mem::replace(&mut self.holders, Remote::Loading) {
            Remote::Loaded(items) => self.shown_while_loading = items,
            Remote::Loading => {}
            Remote::Idle | Remote::Failed(_) => self.shown_while_loading.clear(),
        }
        self.pending_search = Some(tag);
        Some(Command::SearchHolders {
            tag,
            term: self.search_term.clone(),
        })
    }

    /// Toggle the firearms panel for `holder_id`.
    ///
    /// Activating the selected holder collapses it. Activating any other
    /// holder selects it and issues a lookup.
    pub fn activate_holder(&mut self, holder_id: Uuid) -> Option<Command> {
        if self.selected_holder == Some(holder_id) {
            self.collapse();
            return None;
        }

        let tag = self.next_tag();
        self.selected_holder = Some(holder_id);
        self.firearms = Remote::Loading;
        self.pending_lookup = Some(tag);
        Some(Command::LoadFirearms { tag, holder_id })
    }

    /// Apply a completed query. Returns `false` when the outcome was stale
    /// and ignored.
    pub fn apply(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Holders { tag, result } => {
                if self.pending_search != Some(tag) {
                    debug!(%tag, "discarding stale holder search response");
                    return false;
                }
                self.pending_search = None;
                self.shown_while_loading.clear();
                self.holders = settle(result);
                true
            }
            Outcome::Firearms { tag, result } => {
                if self.pending_lookup != Some(tag) {
                    debug!(%tag, "discarding stale firearm lookup response");
                    return false;
                }
                self.pending_lookup = None;
                self.firearms = settle(result);
                true
            }
        }
    }
}

fn settle<T>(result: Result<Vec<T>, ClientError>) -> Remote<Vec<T>> {
    match result {
        Ok(items) => Remote::Loaded(items),
        Err(err) => Remote::Failed(err.reason()),
    }
}
