use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::WorkflowState;

use super::{events::DomainEvent, reducer::reduce};

#[derive(Clone)]
pub struct AppStore {
    inner: Arc<Mutex<WorkflowState>>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(WorkflowState::default())
    }
}

impl AppStore {
    pub fn new(state: WorkflowState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    // State is replaced wholesale, so a poisoned lock still holds a complete state.
    fn lock(&self) -> MutexGuard<'_, WorkflowState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> WorkflowState {
        self.lock().clone()
    }

    pub fn apply(&self, ev: DomainEvent) {
        let mut guard = self.lock();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&WorkflowState) -> R) -> R {
        f(&self.lock())
    }
}
