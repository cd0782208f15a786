use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::Timestamp;
use linklet_core::store::Result;
use linklet_core::{LinkRecord, LinkStore, ShortCode};

/// In-memory implementation of the `LinkStore` trait using DashMap.
///
/// DashMap's sharded locks scope every operation to the shard owning the
/// key, which provides the per-code linearizability the trait requires:
/// `entry()` makes create-if-absent a single guarded step, `get_mut()`
/// holds the shard write lock for the whole increment, and `remove()` is
/// a single guarded removal. A racing increment and delete therefore
/// resolve to one of the two orderings, and a removed record can never
/// come back.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLinkStore {
    links: DashMap<ShortCode, LinkRecord>,
}

impl InMemoryLinkStore {
    /// Creates a new in-memory link store.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }

    /// Creates a new in-memory link store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: DashMap::with_capacity(capacity),
        }
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn create_if_absent(
        &self,
        code: &ShortCode,
        target_url: &str,
    ) -> Result<Option<LinkRecord>> {
        match self.links.entry(code.clone()) {
            Entry::Occupied(_) => Ok(None),
            Entry::Vacant(slot) => {
                let record = LinkRecord::new(code.clone(), target_url);
                slot.insert(record.clone());
                Ok(Some(record))
            }
        }
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        Ok(self.links.get(code).map(|entry| entry.clone()))
    }

    async fn increment_click(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        // The shard write lock is held across both field updates, so the
        // count and the access stamp always land together.
        let Some(mut entry) = self.links.get_mut(code) else {
            return Ok(None);
        };
        entry.click_count += 1;
        entry.last_accessed_at = Some(Timestamp::now());
        Ok(Some(entry.clone()))
    }

    async fn delete(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.links.remove(code).is_some())
    }
}
