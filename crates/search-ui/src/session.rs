//! Async driver executing controller commands against a registry client.
//!
//! User actions return immediately after spawning their query; responses are
//! applied as they complete through [`SearchSession::next_response`] or
//! [`SearchSession::settle`]. Superseded queries still run to completion and
//! the controller discards their results. A query task that panics or is
//! cancelled resolves its request as failed.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::{Id, JoinError, JoinSet};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::client::{ClientError, RegistryClient};
use crate::controller::{Command, Outcome, SearchController};
use crate::view::SearchView;

/// One search screen bound to a registry client.
pub struct SearchSession {
    controller: SearchController,
    client: Arc<dyn RegistryClient>,
    in_flight: JoinSet<Outcome>,
    dispatched: HashMap<Id, Command>,
}

impl SearchSession {
    /// Start an empty session. Must be used from within a Tokio runtime.
    #[must_use]
    pub fn new(client: Arc<dyn RegistryClient>) -> Self {
        Self {
            controller: SearchController::new(),
            client,
            in_flight: JoinSet::new(),
            dispatched: HashMap::new(),
        }
    }

    /// Controller state.
    #[must_use]
    pub const fn controller(&self) -> &SearchController {
        &self.controller
    }

    /// Render the current state.
    #[must_use]
    pub fn view(&self) -> SearchView {
        SearchView::render(&self.controller)
    }

    /// Number of queries still running, stale ones included.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Record a keystroke; spawns a search when the term is long enough.
    pub fn type_term(&mut self, term: impl Into<String>) {
        if let Some(command) = self.controller.set_search_term(term) {
            self.spawn(command);
        }
    }

    /// Toggle a holder row; spawns a lookup when the row expands.
    pub fn activate_holder(&mut self, holder_id: Uuid) {
        if let Some(command) = self.controller.activate_holder(holder_id) {
            self.spawn(command);
        }
    }

    fn spawn(&mut self, command: Command) {
        let client = Arc::clone(&self.client);
        debug!(tag = %command.tag(), "dispatching registry query");
        let task = command.clone();
        let handle = self
            .in_flight
            .spawn(async move { execute(client.as_ref(), task).await });
        self.dispatched.insert(handle.id(), command);
    }

    /// Wait for the next query to finish and apply it.
    ///
    /// Returns `None` when nothing is in flight, otherwise whether the
    /// response was applied (`false` for stale responses).
    pub async fn next_response(&mut self) -> Option<bool> {
        loop {
            let outcome = match self.in_flight.join_next_with_id().await? {
                Ok((id, outcome)) => {
                    self.dispatched.remove(&id);
                    outcome
                }
                Err(err) => match self.dispatched.remove(&err.id()) {
                    Some(command) => aborted(command, &err),
                    None => {
                        warn!(error = %err, "untracked registry query task failed");
                        continue;
                    }
                },
            };
            return Some(self.controller.apply(outcome));
        }
    }

    /// Apply every outstanding response.
    pub async fn settle(&mut self) {
        while self.next_response().await.is_some() {}
    }
}

fn aborted(command: Command, err: &JoinError) -> Outcome {
    let tag = command.tag();
    warn!(%tag, error = %err, "registry query task ended abnormally");
    let error = ClientError::aborted(err.to_string());
    match command {
        Command::SearchHolders { .. } => Outcome::Holders {
            tag,
            result: Err(error),
        },
        Command::LoadFirearms { .. } => Outcome::Firearms {
            tag,
            result: Err(error),
        },
    }
}

async fn execute(client: &dyn RegistryClient, command: Command) -> Outcome {
    match command {
        Command::SearchHolders { tag, term } => {
            let result = client.search_holders(&term).await;
            if let Err(err) = &result {
                warn!(%tag, error = %err, "holder search failed");
            }
            Outcome::Holders { tag, result }
        }
        Command::LoadFirearms { tag, holder_id } => {
            let result = client.list_firearms(holder_id).await;
            if let Err(err) = &result {
                warn!(%tag, %holder_id, error = %err, "firearm lookup failed");
            }
            Outcome::Firearms { tag, result }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::client::{ClientError, MockRegistryClient};
    use crate::dto::fixtures::{firearm, holder};
    use crate::dto::{FirearmDto, LicenceHolderDto};
    use crate::remote::Remote;
    use crate::view::{FirearmPanel, LOOKUP_FAILED, NO_FIREARMS, SEARCH_FAILED};
    use async_trait::async_trait;
    use mockall::predicate::eq;
    use tokio::sync::oneshot;

    type Reply = Result<Vec<LicenceHolderDto>, ClientError>;

    /// Search client whose responses are released by the test, one term at a
    /// time, so completion order can be forced.
    #[derive(Default)]
    struct GatedClient {
        gates: Mutex<HashMap<String, oneshot::Receiver<Reply>>>,
    }

    impl GatedClient {
        fn gate(&self, term: &str) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.gates
                .lock()
                .expect("gates lock")
                .insert(term.to_owned(), rx);
            tx
        }
    }

    #[async_trait]
    impl RegistryClient for GatedClient {
        async fn search_holders(&self, term: &str) -> Result<Vec<LicenceHolderDto>, ClientError> {
            let gate = self.gates.lock().expect("gates lock").remove(term);
            match gate {
                Some(rx) => rx.await.unwrap_or_else(|_| Err(ClientError::transport("gate dropped"))),
                None => Err(ClientError::transport("no gate for term")),
            }
        }

        async fn list_firearms(&self, _holder_id: Uuid) -> Result<Vec<FirearmDto>, ClientError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn slow_response_for_older_term_never_overwrites_newer() {
        let client = Arc::new(GatedClient::default());
        let older = client.gate("an");
        let newer = client.gate("ann");
        let mut session = SearchSession::new(client.clone());

        session.type_term("an");
        session.type_term("ann");
        assert_eq!(session.in_flight(), 2);

        newer
            .send(Ok(vec![holder(1, "Anna Smith")]))
            .expect("send newer");
        assert_eq!(session.next_response().await, Some(true));
        older
            .send(Ok(vec![holder(1, "Anna Smith"), holder(2, "Bandana Joe")]))
            .expect("send older");
        assert_eq!(session.next_response().await, Some(false));

        let names: Vec<_> = session.view().rows.into_iter().map(|r| r.title).collect();
        assert_eq!(names, ["Anna Smith"]);
        assert_eq!(session.next_response().await, None);
    }

    /// Client whose every call panics inside the query task.
    struct PanickingClient;

    #[async_trait]
    impl RegistryClient for PanickingClient {
        async fn search_holders(&self, _term: &str) -> Result<Vec<LicenceHolderDto>, ClientError> {
            panic!("search client bug");
        }

        async fn list_firearms(&self, _holder_id: Uuid) -> Result<Vec<FirearmDto>, ClientError> {
            panic!("lookup client bug");
        }
    }

    #[tokio::test]
    async fn panicking_search_task_ends_loading_as_failure() {
        let mut session = SearchSession::new(Arc::new(PanickingClient));

        session.type_term("an");
        assert_eq!(session.next_response().await, Some(true));

        let view = session.view();
        assert_eq!(view.indicator, None);
        assert_eq!(view.notice, Some(SEARCH_FAILED));
        assert_eq!(
            session.controller().holder_results(),
            &Remote::Failed("Request failed".to_owned())
        );
        assert_eq!(session.next_response().await, None);
    }

    /// Client that finds one holder and never answers firearm lookups.
    struct StalledLookupClient;

    #[async_trait]
    impl RegistryClient for StalledLookupClient {
        async fn search_holders(&self, _term: &str) -> Result<Vec<LicenceHolderDto>, ClientError> {
            Ok(vec![holder(4, "Dana Doe")])
        }

        async fn list_firearms(&self, _holder_id: Uuid) -> Result<Vec<FirearmDto>, ClientError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn cancelled_lookup_task_shows_lookup_failure() {
        let mut session = SearchSession::new(Arc::new(StalledLookupClient));
        session.type_term("dana");
        session.settle().await;

        session.activate_holder(Uuid::from_u128(4));
        assert!(session.controller().is_loading_firearms());
        session.in_flight.abort_all();
        assert_eq!(session.next_response().await, Some(true));

        assert!(!session.controller().is_loading_firearms());
        let panel = session.view().rows.into_iter().find_map(|row| row.panel);
        assert_eq!(panel.as_ref().and_then(FirearmPanel::notice), Some(LOOKUP_FAILED));
    }

    #[tokio::test]
    async fn short_term_spawns_nothing() {
        let mut client = MockRegistryClient::new();
        client.expect_search_holders().never();
        let mut session = SearchSession::new(Arc::new(client));

        session.type_term("a");

        assert_eq!(session.in_flight(), 0);
        session.settle().await;
        assert!(session.view().rows.is_empty());
    }

    #[tokio::test]
    async fn failed_search_clears_loading_and_shows_notice() {
        let mut client = MockRegistryClient::new();
        client
            .expect_search_holders()
            .with(eq("an"))
            .times(1)
            .returning(|_| Err(ClientError::status(500, "Search failed")));
        let mut session = SearchSession::new(Arc::new(client));

        session.type_term("an");
        session.settle().await;

        let view = session.view();
        assert!(view.rows.is_empty());
        assert_eq!(view.indicator, None);
        assert_eq!(view.notice, Some(SEARCH_FAILED));
    }

    #[tokio::test]
    async fn expanding_then_collapsing_makes_one_lookup() {
        let id = Uuid::from_u128(1);
        let mut client = MockRegistryClient::new();
        client
            .expect_search_holders()
            .returning(|_| Ok(vec![holder(1, "Anna Smith")]));
        client
            .expect_list_firearms()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(Vec::new()));
        let mut session = SearchSession::new(Arc::new(client));

        session.type_term("anna");
        session.settle().await;
        session.activate_holder(id);
        session.settle().await;
        let expanded = session.view();
        session.activate_holder(id);

        let panel = expanded.rows.first().and_then(|r| r.panel.as_ref());
        assert_eq!(panel.and_then(|p| p.notice()), Some(NO_FIREARMS));
        assert_eq!(session.controller().selected_holder(), None);
        assert_eq!(session.in_flight(), 0);
    }

    #[tokio::test]
    async fn lookup_results_land_on_selected_holder() {
        let id = Uuid::from_u128(3);
        let mut client = MockRegistryClient::new();
        client
            .expect_search_holders()
            .returning(|_| Ok(vec![holder(3, "Harriet Holder")]));
        client
            .expect_list_firearms()
            .returning(|_| Ok(vec![firearm(30, 3, "Beretta", "92")]));
        let mut session = SearchSession::new(Arc::new(client));

        session.type_term("harriet");
        session.settle().await;
        session.activate_holder(id);
        session.settle().await;

        assert!(matches!(
            session.controller().firearm_results(),
            Remote::Loaded(items) if items.len() == 1
        ));
    }
}
