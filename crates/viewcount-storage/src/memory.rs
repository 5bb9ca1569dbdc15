use async_trait::async_trait;
use dashmap::DashMap;
use viewcount_core::error::Result;
use viewcount_core::CounterStore;

/// In-memory implementation of [`CounterStore`] using DashMap.
///
/// Values live only as long as the process. `get` and `put` are separate
/// map operations, so concurrent increments through this store race the
/// same way they would against a remote key-value service.
#[derive(Debug, Default)]
pub struct InMemoryCounterStore {
    storage: DashMap<String, String>,
}

impl InMemoryCounterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates an empty store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage.get(key).map(|value| value.clone()))
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.storage.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn put_and_get() {
        let store = InMemoryCounterStore::new();

        store.put("blog:hello", "3").await.unwrap();

        assert_eq!(store.get("blog:hello").await.unwrap().as_deref(), Some("3"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let store = InMemoryCounterStore::new();

        assert!(store.get("blog:nope").await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn put_overwrites() {
        let store = InMemoryCounterStore::with_capacity(4);

        store.put("blog:hello", "3").await.unwrap();
        store.put("blog:hello", "abc").await.unwrap();

        assert_eq!(
            store.get("blog:hello").await.unwrap().as_deref(),
            Some("abc")
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_access() {
        let store = Arc::new(InMemoryCounterStore::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .put(&format!("blog:post-{i:03}"), &i.to_string())
                    .await
                    .unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let value = store.get(&format!("blog:post-{i:03}")).await.unwrap();
            assert_eq!(value, Some(i.to_string()));
        }
    }
}
