pub mod memory;
pub mod seed;

pub use memory::MemoryStore;

/// Anything a [`Store`] can hold. The store owns identifier assignment.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
    fn assign_id(&mut self, id: String);
}

/// A process-owned collection of records.
pub trait Store<T: Record>: Send + Sync {
    fn list(&self) -> anyhow::Result<Vec<T>>;

    fn get(&self, id: &str) -> anyhow::Result<Option<T>>;

    /// Assigns a fresh id, stores the record and returns the stored copy.
    fn append(&self, record: T) -> anyhow::Result<T>;

    /// Runs `apply` on the record under the store's lock. `Ok(None)` when no
    /// record has that id.
    fn update(
        &self,
        id: &str,
        apply: Box<dyn FnOnce(&mut T) + Send + '_>,
    ) -> anyhow::Result<Option<T>>;

    /// `Ok(false)` when no record has that id.
    fn remove(&self, id: &str) -> anyhow::Result<bool>;
}
