//! Search-as-you-type controller for the firearms licence registry.
//!
//! The crate drives the two registry queries from a user's point of view:
//! typing a name searches licence holders, and activating a holder row
//! expands or collapses that holder's firearms.
//!
//! # Overview
//!
//! - [`SearchController`] is a pure state machine. Inputs are user actions
//!   and query responses; outputs are [`Command`]s for a driver to execute.
//!   Every command carries a [`RequestTag`] and only the latest outstanding
//!   response of each kind is applied.
//! - [`Remote`] holds query results as `Idle | Loading | Loaded | Failed`, so
//!   a failed search stays distinguishable from an empty one.
//! - [`SearchView`] renders controller state into display rows and notices.
//! - [`RegistryClient`] is the port the driver calls;
//!   [`HttpRegistryClient`] implements it over reqwest.
//! - [`SearchSession`] runs commands concurrently and feeds responses back
//!   without blocking further input.
//!
//! # Example
//!
//! ```
//! use search_ui::{Command, SearchController};
//!
//! let mut controller = SearchController::new();
//! assert!(controller.set_search_term("a").is_none());
//!
//! let command = controller.set_search_term("an").expect("search issued");
//! assert!(matches!(command, Command::SearchHolders { ref term, .. } if term == "an"));
//! assert!(controller.is_loading());
//! ```

mod client;
mod controller;
mod dto;
mod http_client;
mod remote;
mod session;
mod view;

pub use client::{ClientError, RegistryClient};
pub use controller::{Command, MIN_TERM_CHARS, Outcome, RequestTag, SearchController};
pub use dto::{FirearmDto, LicenceHolderDto};
pub use http_client::{DEFAULT_REQUEST_TIMEOUT, HttpRegistryClient};
pub use remote::Remote;
pub use session::SearchSession;
pub use view::{
    FirearmCard, FirearmPanel, Field, HolderRow, NO_FIREARMS, NO_HOLDERS_FOUND, SEARCH_FAILED,
    SEARCHING, SearchView, LOADING_FIREARMS, LOOKUP_FAILED,
};
