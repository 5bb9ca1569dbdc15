use crate::error::Result;
use async_trait::async_trait;

/// A plain key-value capability holding counter values as decimal strings.
///
/// There is no increment or compare-and-swap operation. Callers read,
/// compute and write back, so two racing increments on the same key can
/// lose one of them.
#[async_trait]
pub trait CounterStore: Send + Sync + 'static {
    /// Returns the raw value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> Result<()>;
}
