//! Core types and traits for the viewcount service.
//!
//! This crate holds the slug and key model, the counter store contract,
//! and the [`ViewCounter`] that runs the read/increment flow. The HTTP
//! gateway and the storage backends both build on it.

pub mod count;
pub mod counter;
pub mod error;
pub mod key;
pub mod slug;
pub mod store;

pub use count::ViewCount;
pub use counter::{RequestMethod, ViewCounter, ViewRequest, ViewSnapshot};
pub use error::{CounterError, StorageError};
pub use key::StorageKey;
pub use slug::Slug;
pub use store::CounterStore;
