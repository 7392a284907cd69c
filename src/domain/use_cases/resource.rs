use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::errors::FetchError;

/// The three-field `{data, loading, error}` shape, with the fields mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Proof of which request generation a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

struct Slot<T> {
    state: FetchState<T>,
    generation: u64,
    mounted: bool,
}

/// A fetched snapshot owned by exactly one hook.
///
/// Every request takes a ticket; only the newest ticket of a mounted
/// resource may settle it, so late answers from superseded requests are dropped.
pub struct Resource<T> {
    name: &'static str,
    slot: Arc<Mutex<Slot<T>>>,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Resource { name: self.name, slot: self.slot.clone() }
    }
}

impl<T: Clone> Resource<T> {
    pub fn new(name: &'static str) -> Self {
        Resource {
            name,
            slot: Arc::new(Mutex::new(Slot {
                state: FetchState::Loading,
                generation: 0,
                mounted: true,
            })),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Starts a new request: back to `Loading`, previous tickets invalidated.
    pub fn begin(&self) -> FetchTicket {
        let mut slot = self.slot.lock();
        slot.generation += 1;
        slot.mounted = true;
        slot.state = FetchState::Loading;
        tracing::debug!(resource = self.name, generation = slot.generation, "fetch started");
        FetchTicket(slot.generation)
    }

    /// Applies an outcome if `ticket` is still current. Returns whether it was applied.
    pub fn settle(&self, ticket: FetchTicket, outcome: Result<T, String>) -> bool {
        let mut slot = self.slot.lock();
        if !slot.mounted || slot.generation != ticket.0 {
            tracing::debug!(
                resource = self.name,
                ticket = ticket.0,
                current = slot.generation,
                mounted = slot.mounted,
                "discarding stale response"
            );
            return false;
        }

        slot.state = match outcome {
            Ok(data) => {
                tracing::info!(resource = self.name, "fetch settled");
                FetchState::Loaded(data)
            }
            Err(message) => FetchState::Failed(message),
        };
        true
    }

    /// Begin, await `request`, settle. Failures are logged and replaced by `failure_message`.
    pub async fn run<F>(&self, request: F, failure_message: &str) -> bool
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        let ticket = self.begin();
        let outcome = request.await.map_err(|e| {
            tracing::error!(resource = self.name, error = %e, "fetch failed");
            failure_message.to_string()
        });
        self.settle(ticket, outcome)
    }

    pub fn snapshot(&self) -> FetchState<T> {
        self.slot.lock().state.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.slot.lock().mounted
    }

    /// Marks the owner as gone; any in-flight request will be discarded on arrival.
    pub fn unmount(&self) {
        let mut slot = self.slot.lock();
        slot.mounted = false;
        slot.generation += 1;
    }
}
