use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::{Record, Store};

/// `Vec`-backed store. Ids come from a counter that only moves forward, so an
/// id is never handed out twice even after the record is removed.
pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
    next_id: AtomicU64,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Store pre-filled with `records`, which are numbered from "1" in order.
    pub fn seeded(records: Vec<T>) -> Self {
        let mut store = Self::new();
        let numbered = records
            .into_iter()
            .map(|mut r| {
                r.assign_id(store.allocate_id());
                r
            })
            .collect();
        store.records = Mutex::new(numbered);
        store
    }

    fn allocate_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::SeqCst).to_string()
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, Vec<T>>> {
        self.records
            .lock()
            .map_err(|_| anyhow::anyhow!("record store lock poisoned"))
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Store<T> for MemoryStore<T> {
    fn list(&self) -> anyhow::Result<Vec<T>> {
        Ok(self.lock()?.clone())
    }

    fn get(&self, id: &str) -> anyhow::Result<Option<T>> {
        Ok(self.lock()?.iter().find(|r| r.id() == id).cloned())
    }

    fn append(&self, mut record: T) -> anyhow::Result<T> {
        let mut records = self.lock()?;
        record.assign_id(self.allocate_id());
        records.push(record.clone());
        Ok(record)
    }

    fn update(
        &self,
        id: &str,
        apply: Box<dyn FnOnce(&mut T) + Send + '_>,
    ) -> anyhow::Result<Option<T>> {
        let mut records = self.lock()?;
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };
        apply(record);
        // The closure may have touched the id; the store's id stands.
        record.assign_id(id.to_string());
        Ok(Some(record.clone()))
    }

    fn remove(&self, id: &str) -> anyhow::Result<bool> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        Ok(records.len() != before)
    }
}
