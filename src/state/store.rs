// src/state/store.rs

//! Shared content state with guarded commits.
//!
//! A load starts by taking a [`LoadTicket`]. Its result is only written into
//! the store while the ticket is still relevant: not cancelled and not
//! superseded by a newer load. Stale results are dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::models::ContentDocument;
use crate::services::{ContentLoader, ContentSource};

/// Message shown when no source could be loaded.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to load projects right now.";

/// Where the content is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Ready,
    Unavailable,
}

/// Snapshot of the loaded content.
#[derive(Debug, Clone, Default)]
pub struct ContentState {
    pub status: LoadStatus,
    pub document: Arc<ContentDocument>,
    /// Viewer-facing error message
    pub error: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
    /// Bumped on every committed result
    pub revision: u64,
}

impl ContentState {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Idle | LoadStatus::Loading)
    }
}

/// Handle on one load attempt.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    cancelled: Arc<AtomicBool>,
}

impl LoadTicket {
    /// Mark the requester as no longer interested.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Process-wide content store: read with [`snapshot`](Self::snapshot),
/// write with [`commit`](Self::commit), observe with
/// [`subscribe`](Self::subscribe).
#[derive(Debug)]
pub struct ContentStore {
    tx: watch::Sender<ContentState>,
    generation: AtomicU64,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ContentState::default());
        Self {
            tx,
            generation: AtomicU64::new(0),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> ContentState {
        self.tx.borrow().clone()
    }

    /// Receive every future state change.
    pub fn subscribe(&self) -> watch::Receiver<ContentState> {
        self.tx.subscribe()
    }

    /// Start a load, superseding any load still in flight.
    pub fn begin_load(&self) -> LoadTicket {
        let mut generation = 0;
        self.tx.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.status = LoadStatus::Loading;
            state.error = None;
        });
        LoadTicket {
            generation,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a ticket's result may still be applied.
    pub fn is_relevant(&self, ticket: &LoadTicket) -> bool {
        !ticket.is_cancelled() && self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Apply a load result if its ticket is still relevant.
    ///
    /// The relevance check and the write happen under the same lock as
    /// [`begin_load`](Self::begin_load), so a superseded result can never
    /// land after a newer one. Returns `false` when the result was
    /// discarded. A failed load leaves every collection empty.
    pub fn commit(&self, ticket: &LoadTicket, result: Result<ContentDocument>) -> bool {
        let committed = self.tx.send_if_modified(|state| {
            if !self.is_relevant(ticket) {
                return false;
            }
            state.revision += 1;
            match result {
                Ok(document) => {
                    state.status = LoadStatus::Ready;
                    state.document = Arc::new(document);
                    state.error = None;
                    state.loaded_at = Some(Utc::now());
                }
                Err(e) => {
                    log::error!("Content unavailable: {}", e);
                    state.status = LoadStatus::Unavailable;
                    state.document = Arc::new(ContentDocument::default());
                    state.error = Some(UNAVAILABLE_MESSAGE.to_string());
                    state.loaded_at = None;
                }
            }
            true
        });
        if !committed {
            log::debug!(
                "Discarding stale load result (generation {})",
                ticket.generation
            );
        }
        committed
    }

    /// Load inline and commit the result.
    pub async fn load<S: ContentSource>(&self, loader: &ContentLoader<S>) -> bool {
        let ticket = self.begin_load();
        let result = loader.load().await;
        self.commit(&ticket, result)
    }
}

/// A load running on the runtime.
///
/// Dropping the handle cancels the load, like a view going away.
#[derive(Debug)]
pub struct LoadHandle {
    ticket: LoadTicket,
    join: Option<JoinHandle<bool>>,
}

impl LoadHandle {
    pub fn cancel(&self) {
        self.ticket.cancel();
    }

    pub fn ticket(&self) -> &LoadTicket {
        &self.ticket
    }

    /// Wait for the load; `true` if its result was committed.
    pub async fn wait(mut self) -> bool {
        match self.join.take() {
            Some(join) => join.await.unwrap_or_else(|e| {
                log::error!("Content load task failed: {}", e);
                false
            }),
            None => false,
        }
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        if self.join.is_some() {
            self.ticket.cancel();
        }
    }
}

/// Spawn a load whose result is committed to `store` unless cancelled or
/// superseded first.
pub fn spawn_load<S>(store: Arc<ContentStore>, loader: Arc<ContentLoader<S>>) -> LoadHandle
where
    S: ContentSource + 'static,
{
    let ticket = store.begin_load();
    let task_ticket = ticket.clone();
    let join = tokio::spawn(async move {
        let result = loader.load().await;
        store.commit(&task_ticket, result)
    });
    LoadHandle {
        ticket,
        join: Some(join),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use serde_json::{Value, json};
    use tokio::sync::Notify;

    use crate::error::AppError;

    /// Source that answers only after being released.
    struct GatedSource {
        gate: Arc<Notify>,
        document: Value,
    }

    #[async_trait]
    impl ContentSource for GatedSource {
        async fn fetch_document(&self, _location: &str) -> crate::error::Result<Value> {
            self.gate.notified().await;
            Ok(self.document.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ContentSource for FailingSource {
        async fn fetch_document(&self, location: &str) -> crate::error::Result<Value> {
            Err(AppError::status(location, 503))
        }
    }

    fn gated(name: &str) -> (Arc<Notify>, Arc<ContentLoader<GatedSource>>) {
        let gate = Arc::new(Notify::new());
        let source = GatedSource {
            gate: Arc::clone(&gate),
            document: json!({ "projects": [{ "name": name }] }),
        };
        (gate, Arc::new(ContentLoader::new(source, vec!["only".into()])))
    }

    fn project_names(state: &ContentState) -> Vec<String> {
        state.document.projects.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_initial_state() {
        let store = ContentStore::new();
        let state = store.snapshot();
        assert_eq!(state.status, LoadStatus::Idle);
        assert!(state.is_loading());
        assert!(state.document.is_empty());
    }

    #[test]
    fn test_commit_success() {
        let store = ContentStore::new();
        let ticket = store.begin_load();
        assert_eq!(store.snapshot().status, LoadStatus::Loading);

        let doc = ContentDocument::from_value(&json!({ "projects": [{ "name": "A" }] }));
        assert!(store.commit(&ticket, Ok(doc)));

        let state = store.snapshot();
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(project_names(&state), ["A"]);
        assert!(state.error.is_none());
        assert!(state.loaded_at.is_some());
        assert_eq!(state.revision, 1);
    }

    #[test]
    fn test_commit_failure_clears_content() {
        let store = ContentStore::new();
        let first = store.begin_load();
        let doc = ContentDocument::from_value(&json!({ "skills": [{ "name": "Rust" }] }));
        store.commit(&first, Ok(doc));

        let second = store.begin_load();
        store.commit(&second, Err(AppError::Unavailable { attempted: 2 }));

        let state = store.snapshot();
        assert_eq!(state.status, LoadStatus::Unavailable);
        assert_eq!(state.error.as_deref(), Some(UNAVAILABLE_MESSAGE));
        assert!(state.document.is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_superseded_ticket_is_discarded() {
        let store = ContentStore::new();
        let old = store.begin_load();
        let new = store.begin_load();

        let fresh = ContentDocument::from_value(&json!({ "projects": [{ "name": "new" }] }));
        assert!(store.commit(&new, Ok(fresh)));

        let stale = ContentDocument::from_value(&json!({ "projects": [{ "name": "old" }] }));
        assert!(!store.commit(&old, Ok(stale)));
        assert_eq!(project_names(&store.snapshot()), ["new"]);
    }

    #[test]
    fn test_cancelled_ticket_is_discarded() {
        let store = ContentStore::new();
        let ticket = store.begin_load();
        ticket.cancel();
        assert!(!store.is_relevant(&ticket));
        assert!(!store.commit(&ticket, Ok(ContentDocument::default())));
        assert_eq!(store.snapshot().revision, 0);
    }

    #[test]
    fn test_discarded_commit_does_not_notify() {
        let store = ContentStore::new();
        let old = store.begin_load();
        let new = store.begin_load();
        let rx = store.subscribe();

        assert!(!store.commit(&old, Ok(ContentDocument::default())));
        assert!(!rx.has_changed().unwrap());

        assert!(store.commit(&new, Ok(ContentDocument::default())));
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn test_concurrent_loads_leave_newest_result() {
        let store = ContentStore::new();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..200 {
                        let ticket = store.begin_load();
                        let name = ticket.generation().to_string();
                        let doc = ContentDocument::from_value(&json!({
                            "projects": [{ "name": name }]
                        }));
                        store.commit(&ticket, Ok(doc));
                    }
                });
            }
        });

        // The newest ticket is never superseded, so its result is the one shown.
        let newest = store.generation.load(Ordering::SeqCst);
        assert_eq!(newest, 1600);
        let state = store.snapshot();
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(project_names(&state), [newest.to_string()]);
    }

    #[tokio::test]
    async fn test_inline_load_unavailable() {
        let store = ContentStore::new();
        let loader = ContentLoader::new(FailingSource, vec!["a".into(), "b".into()]);
        assert!(store.load(&loader).await);

        let state = store.snapshot();
        assert_eq!(state.status, LoadStatus::Unavailable);
        let doc = &state.document;
        assert!(doc.projects.is_empty() && doc.skills.is_empty());
        assert!(doc.connections.is_empty() && doc.badges.is_empty());
    }

    #[tokio::test]
    async fn test_spawned_load_commits() {
        let store = Arc::new(ContentStore::new());
        let (gate, loader) = gated("A");

        let handle = spawn_load(Arc::clone(&store), loader);
        gate.notify_one();
        assert!(handle.wait().await);
        assert_eq!(project_names(&store.snapshot()), ["A"]);
    }

    #[tokio::test]
    async fn test_cancelled_spawned_load_does_not_commit() {
        let store = Arc::new(ContentStore::new());
        let (gate, loader) = gated("A");

        let handle = spawn_load(Arc::clone(&store), loader);
        handle.cancel();
        gate.notify_one();
        assert!(!handle.wait().await);

        let state = store.snapshot();
        assert_eq!(state.revision, 0);
        assert!(state.document.is_empty());
    }

    #[tokio::test]
    async fn test_stale_spawned_load_cannot_overwrite_newer() {
        let store = Arc::new(ContentStore::new());
        let (old_gate, old_loader) = gated("old");
        let (new_gate, new_loader) = gated("new");

        let old = spawn_load(Arc::clone(&store), old_loader);
        let new = spawn_load(Arc::clone(&store), new_loader);

        new_gate.notify_one();
        assert!(new.wait().await);
        old_gate.notify_one();
        assert!(!old.wait().await);

        assert_eq!(project_names(&store.snapshot()), ["new"]);
    }

    #[tokio::test]
    async fn test_subscribers_see_commits() {
        let store = ContentStore::new();
        let mut rx = store.subscribe();

        let ticket = store.begin_load();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().status, LoadStatus::Loading);

        store.commit(&ticket, Ok(ContentDocument::default()));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().status, LoadStatus::Ready);
    }
}
