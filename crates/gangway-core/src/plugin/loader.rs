//! Lazy, memoized, single-flight extension loading.
//!
//! An extension's renderable unit is produced by an asynchronous factory
//! invoked at most once per load attempt. Racing callers all observe the
//! identical outcome; a failed attempt stays failed until an explicit
//! reload. Abandoning a caller never cancels the load - the outcome is
//! still cached for the process lifetime.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use crate::error::LoadError;

/// A renderable unit produced by an extension loader and mounted by the
/// external host.
pub trait Renderable: Send + Sync {
    /// Name the host uses when mounting this unit.
    fn name(&self) -> &str;
}

impl fmt::Debug for dyn Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderable").field("name", &self.name()).finish()
    }
}

pub type RenderableHandle = Arc<dyn Renderable>;

/// Simplest renderable: a named static page.
pub struct StaticPage {
    name: String,
}

impl StaticPage {
    pub fn new(name: impl Into<String>) -> RenderableHandle {
        Arc::new(Self { name: name.into() })
    }
}

impl Renderable for StaticPage {
    fn name(&self) -> &str {
        &self.name
    }
}

type LoadOutcome = Result<RenderableHandle, LoadError>;
type Factory = Arc<dyn Fn() -> BoxFuture<'static, LoadOutcome> + Send + Sync>;

/// Externally observable loader state. `Failed` is surfaced as an inline
/// error view at the mount point; siblings are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionState {
    Unloaded,
    Loading,
    Ready,
    Failed,
}

enum Slot {
    Unloaded,
    Loading(watch::Receiver<Option<LoadOutcome>>),
    Done(LoadOutcome),
}

struct Inner {
    name: String,
    factory: Factory,
    slot: Mutex<Slot>,
}

/// Single-flight cache around an extension's load future, keyed by
/// extension identity. State machine: `unloaded -> loading -> ready | failed`.
#[derive(Clone)]
pub struct ExtensionLoader {
    inner: Arc<Inner>,
}

impl ExtensionLoader {
    pub fn new<F, Fut>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = LoadOutcome> + Send + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                factory: Arc::new(move || factory().boxed()),
                slot: Mutex::new(Slot::Unloaded),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Resolve the renderable, starting the load on first call. The load
    /// runs on its own task, so a cancelled caller leaves the attempt (and
    /// its cached outcome) intact.
    pub async fn resolve(&self) -> LoadOutcome {
        let rx = {
            let mut slot = self.inner.slot.lock().await;
            match &*slot {
                Slot::Done(outcome) => return outcome.clone(),
                Slot::Loading(rx) => rx.clone(),
                Slot::Unloaded => {
                    let (tx, rx) = watch::channel(None);
                    *slot = Slot::Loading(rx.clone());
                    self.spawn_load(tx, rx.clone());
                    rx
                }
            }
        };
        self.await_outcome(rx).await
    }

    /// Current state without starting a load.
    pub async fn state(&self) -> ExtensionState {
        match &*self.inner.slot.lock().await {
            Slot::Unloaded => ExtensionState::Unloaded,
            Slot::Loading(_) => ExtensionState::Loading,
            Slot::Done(Ok(_)) => ExtensionState::Ready,
            Slot::Done(Err(_)) => ExtensionState::Failed,
        }
    }

    /// Discard the cached outcome; the next `resolve` is a fresh attempt.
    /// Never automatic. Waiters on an in-flight previous attempt still
    /// observe that attempt's outcome.
    pub async fn reload(&self) {
        let mut slot = self.inner.slot.lock().await;
        debug!(extension = %self.inner.name, "extension reload requested");
        *slot = Slot::Unloaded;
    }

    fn spawn_load(
        &self,
        tx: watch::Sender<Option<LoadOutcome>>,
        attempt: watch::Receiver<Option<LoadOutcome>>,
    ) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            debug!(extension = %inner.name, "loading extension");
            let outcome = (inner.factory)().await;
            match &outcome {
                Ok(handle) => {
                    debug!(extension = %inner.name, renderable = handle.name(), "extension ready");
                }
                Err(err) => {
                    warn!(extension = %inner.name, error = %err, "extension load failed");
                }
            }
            let mut slot = inner.slot.lock().await;
            // A reload may have replaced the slot mid-flight; publish into
            // the cache only if this attempt is still the current one.
            if matches!(&*slot, Slot::Loading(current) if current.same_channel(&attempt)) {
                *slot = Slot::Done(outcome.clone());
            }
            drop(slot);
            let _ = tx.send(Some(outcome));
        });
    }

    async fn await_outcome(&self, mut rx: watch::Receiver<Option<LoadOutcome>>) -> LoadOutcome {
        match rx.wait_for(Option::is_some).await {
            Ok(outcome) => outcome.clone().unwrap_or_else(|| {
                Err(LoadError::new(format!(
                    "extension '{}' published no outcome",
                    self.inner.name
                )))
            }),
            Err(_) => Err(LoadError::new(format!(
                "extension '{}' load task dropped",
                self.inner.name
            ))),
        }
    }
}

impl fmt::Debug for ExtensionLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionLoader")
            .field("name", &self.inner.name)
            .finish_non_exhaustive()
    }
}
