//! Artifact Store and Generation State
//!
//! Single-slot store: one current artifact, one generation lifecycle.
//! Every generation attempt takes a token from `begin`, and only the
//! holder of the newest token may publish an outcome. A stale token's
//! completion or failure is dropped without touching the store, which
//! is what lets a newer attempt supersede an older one mid-flight.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::artifact::Artifact;

/// Lifecycle of the generation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenerationState {
    Idle,
    InProgress,
    Completed,
    Failed,
}

/// Proof of having started a generation attempt.
///
/// Tokens are handed out in strictly increasing order and a newer
/// `begin` invalidates every older token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GenerationToken(u64);

impl fmt::Display for GenerationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point-in-time view published to observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub state: GenerationState,
    pub artifact_id: Option<String>,
    pub last_error: Option<String>,
}

struct StoreInner {
    state: GenerationState,
    next_token: u64,
    live: Option<GenerationToken>,
    current: Option<Arc<Artifact>>,
    last_error: Option<String>,
}

impl StoreInner {
    fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            state: self.state,
            artifact_id: self.current.as_ref().map(|a| a.id.clone()),
            last_error: self.last_error.clone(),
        }
    }
}

/// Shared single-slot artifact store.
///
/// The mutex guards short synchronous sections only and is never held
/// across an await point; observation goes through a watch channel so
/// readers never contend with writers.
pub struct ArtifactStore {
    inner: Mutex<StoreInner>,
    snapshot_tx: watch::Sender<StoreSnapshot>,
}

impl ArtifactStore {
    pub fn new() -> Self {
        let inner = StoreInner {
            state: GenerationState::Idle,
            next_token: 0,
            live: None,
            current: None,
            last_error: None,
        };
        let (snapshot_tx, _) = watch::channel(inner.snapshot());
        ArtifactStore {
            inner: Mutex::new(inner),
            snapshot_tx,
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn publish(&self, snapshot: StoreSnapshot) {
        self.snapshot_tx.send_replace(snapshot);
    }

    /// Starts a generation attempt and returns its token.
    ///
    /// Allowed from any state. Starting while another attempt is in
    /// flight invalidates that attempt's token; the previous current
    /// artifact stays in place until a newer one completes.
    pub fn begin(&self) -> GenerationToken {
        let snapshot;
        let token;
        {
            let mut inner = self.lock();
            inner.next_token += 1;
            token = GenerationToken(inner.next_token);
            inner.state = GenerationState::InProgress;
            inner.live = Some(token);
            inner.last_error = None;
            snapshot = inner.snapshot();
        }
        tracing::debug!(%token, "generation started");
        self.publish(snapshot);
        token
    }

    /// Publishes a finished artifact for the given attempt.
    ///
    /// Returns the stored artifact, or `None` when the token is stale,
    /// in which case the store is left untouched.
    pub fn complete(&self, token: GenerationToken, artifact: Artifact) -> Option<Arc<Artifact>> {
        let snapshot;
        let stored;
        {
            let mut inner = self.lock();
            if inner.live != Some(token) {
                tracing::debug!(%token, "dropping completion from superseded attempt");
                return None;
            }
            stored = Arc::new(artifact);
            inner.current = Some(Arc::clone(&stored));
            inner.state = GenerationState::Completed;
            inner.live = None;
            snapshot = inner.snapshot();
        }
        tracing::info!(%token, artifact_id = %stored.id, "generation completed");
        self.publish(snapshot);
        Some(stored)
    }

    /// Records a failure for the given attempt.
    ///
    /// Returns `false` when the token is stale; a superseded attempt
    /// cannot push the store into `Failed`.
    pub fn fail(&self, token: GenerationToken, error: &str) -> bool {
        let snapshot;
        {
            let mut inner = self.lock();
            if inner.live != Some(token) {
                tracing::debug!(%token, "dropping failure from superseded attempt");
                return false;
            }
            inner.state = GenerationState::Failed;
            inner.last_error = Some(error.to_string());
            inner.live = None;
            snapshot = inner.snapshot();
        }
        tracing::warn!(%token, error, "generation failed");
        self.publish(snapshot);
        true
    }

    /// Returns the slot to `Idle`.
    ///
    /// Invalidates any in-flight token and clears the last error. The
    /// current artifact is kept so an earlier result stays downloadable.
    pub fn reset(&self) {
        let snapshot;
        {
            let mut inner = self.lock();
            inner.state = GenerationState::Idle;
            inner.live = None;
            inner.last_error = None;
            snapshot = inner.snapshot();
        }
        tracing::debug!("store reset");
        self.publish(snapshot);
    }

    pub fn state(&self) -> GenerationState {
        self.lock().state
    }

    /// Current artifact, if any generation has ever completed.
    pub fn current(&self) -> Option<Arc<Artifact>> {
        self.lock().current.clone()
    }

    /// Standalone document text of the current artifact, for preview
    /// surfaces.
    pub fn preview(&self) -> Option<String> {
        self.lock().current.as_ref().map(|a| a.html.clone())
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.lock().snapshot()
    }

    /// Watch-channel subscription; receivers see every published
    /// snapshot transition.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.snapshot_tx.subscribe()
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}
