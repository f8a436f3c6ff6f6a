use parking_lot::RwLock;
use crate::ledger::VoteLedger;
use crate::registry::ItemRegistry;
use crate::Result;

/// Everything a repository guards as one unit: items and the vote history.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub items: ItemRegistry,
    pub votes: VoteLedger,
}

/// Access to the shared [`Store`].
///
/// `write` runs its closure with no other reader or writer interleaved, which is what
/// makes a vote atomic. Closures validate before they mutate, so an `Err` leaves the
/// store as it was. Reads may run concurrently with each other.
pub trait Repository: Send + Sync {
    fn read<T>(&self, f: impl FnOnce(&Store) -> T) -> T;

    fn write<T>(&self, f: impl FnOnce(&mut Store) -> Result<T>) -> Result<T>;
}

/// Process-local repository behind a reader-writer lock
#[derive(Debug, Default)]
pub struct MemoryRepository {
    store: RwLock<Store>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: Store) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}

impl Repository for MemoryRepository {
    #[inline]
    fn read<T>(&self, f: impl FnOnce(&Store) -> T) -> T {
        f(&*self.store.read())
    }

    #[inline]
    fn write<T>(&self, f: impl FnOnce(&mut Store) -> Result<T>) -> Result<T> {
        f(&mut *self.store.write())
    }
}

impl<R: Repository> Repository for std::sync::Arc<R> {
    #[inline]
    fn read<T>(&self, f: impl FnOnce(&Store) -> T) -> T {
        (**self).read(f)
    }

    #[inline]
    fn write<T>(&self, f: impl FnOnce(&mut Store) -> Result<T>) -> Result<T> {
        (**self).write(f)
    }
}
