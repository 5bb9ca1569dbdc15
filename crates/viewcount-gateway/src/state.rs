use std::sync::Arc;

use viewcount_core::{CounterStore, ViewCounter};

#[derive(Debug, Clone)]
pub struct AppState {
    counter: ViewCounter,
}

impl AppState {
    pub fn new(counter: ViewCounter) -> Self {
        Self { counter }
    }

    /// State bound to `store` as the `VIEW_COUNTERS` binding.
    pub fn with_store(store: Arc<dyn CounterStore>) -> Self {
        Self::new(ViewCounter::new(store))
    }

    /// State with no `VIEW_COUNTERS` binding.
    pub fn unbound() -> Self {
        Self::new(ViewCounter::unbound())
    }

    pub fn counter(&self) -> &ViewCounter {
        &self.counter
    }
}
