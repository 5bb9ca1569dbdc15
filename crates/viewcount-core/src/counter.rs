use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::count::ViewCount;
use crate::error::CounterError;
use crate::key::StorageKey;
use crate::slug::Slug;
use crate::store::CounterStore;

type Result<T> = std::result::Result<T, CounterError>;

/// Query value that turns a `GET` into an incrementing read.
const INCREMENT_FLAG: &str = "1";

/// The request methods the counter distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    /// Any other method; always rejected.
    Other,
}

/// The parts of an inbound request the counter looks at.
#[derive(Debug, Clone, Copy)]
pub struct ViewRequest<'a> {
    pub method: RequestMethod,
    /// Raw `slug` query value, before normalization.
    pub slug: Option<&'a str>,
    /// Raw `increment` query value.
    pub increment: Option<&'a str>,
}

impl ViewRequest<'_> {
    /// `POST` always increments. A `GET` increments only with `increment=1`.
    pub fn should_increment(&self) -> bool {
        self.method == RequestMethod::Post || self.increment == Some(INCREMENT_FLAG)
    }
}

/// The count reported back for a slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub slug: Slug,
    pub views: ViewCount,
}

/// Reads and optionally bumps per-slug view counters.
///
/// The store is the `VIEW_COUNTERS` binding. It is optional because a
/// missing binding is reported per request rather than at startup.
#[derive(Clone)]
pub struct ViewCounter {
    store: Option<Arc<dyn CounterStore>>,
}

impl ViewCounter {
    /// Creates a counter bound to `store`.
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Creates a counter with no store binding.
    pub fn unbound() -> Self {
        Self { store: None }
    }

    /// Creates a counter from an optional binding.
    pub fn from_binding(store: Option<Arc<dyn CounterStore>>) -> Self {
        Self { store }
    }

    pub fn is_bound(&self) -> bool {
        self.store.is_some()
    }

    /// Handles one request.
    ///
    /// Validation happens in a fixed order and finishes before any store
    /// access: method, slug presence, slug shape, then the binding. After
    /// that the counter is read once and, when incrementing, written once.
    /// Store failures are returned as-is with no retry, so a failed write
    /// after a good read loses the increment.
    pub async fn handle(&self, request: ViewRequest<'_>) -> Result<ViewSnapshot> {
        if request.method == RequestMethod::Other {
            return Err(CounterError::MethodNotAllowed);
        }

        let raw_slug = match request.slug {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(CounterError::MissingSlug),
        };

        let slug = Slug::parse(raw_slug).ok_or(CounterError::InvalidSlug)?;

        let store = self.store.as_ref().ok_or(CounterError::MissingBinding)?;

        let key = StorageKey::from(&slug);
        let increment = request.should_increment();

        trace!(key = %key, increment, "reading view counter");
        let stored = store.get(key.as_str()).await?;
        let mut views = ViewCount::parse_lenient(stored.as_deref());

        if increment {
            views = views.incremented();
            trace!(key = %key, views = %views, "writing view counter");
            store.put(key.as_str(), &views.to_stored()).await?;
        }

        debug!(slug = %slug, views = %views, increment, "view counter resolved");
        Ok(ViewSnapshot { slug, views })
    }
}

impl std::fmt::Debug for ViewCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewCounter")
            .field("bound", &self.is_bound())
            .finish()
    }
}
