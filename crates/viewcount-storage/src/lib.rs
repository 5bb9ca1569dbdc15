//! Counter store backends.
//!
//! [`InMemoryCounterStore`] keeps counters in process memory and is the
//! default for local runs and tests. [`RedisCounterStore`] keeps them in
//! Redis as plain string values.

pub mod memory;
pub mod redis;

pub use memory::InMemoryCounterStore;
pub use self::redis::RedisCounterStore;
pub use viewcount_core::{CounterStore, StorageError};
