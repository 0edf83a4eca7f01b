use std::future::Future;
use std::sync::{Arc, RwLock};

/// A write-once slot shared across requests.
///
/// The first successful write wins and later writes are ignored until
/// [`OnceCache::clear`] is called. Concurrent initialisations before the first
/// write lands are allowed; they only cost redundant work.
#[derive(Debug)]
pub struct OnceCache<T> {
    slot: RwLock<Option<Arc<T>>>,
}

impl<T> OnceCache<T> {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    pub fn get(&self) -> Option<Arc<T>> {
        match self.slot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Store `value` unless something is already cached; returns whichever value is cached afterwards.
    pub fn set(&self, value: T) -> Arc<T> {
        let mut guard = match self.slot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.get_or_insert_with(|| Arc::new(value)).clone()
    }

    /// Return the cached value, or run `init` and cache its successful result.
    pub async fn get_or_try_init<E, F, Fut>(&self, init: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get() {
            return Ok(value);
        }
        let value = init().await?;
        Ok(self.set(value))
    }

    pub fn clear(&self) {
        let mut guard = match self.slot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = None;
    }
}

impl<T> Default for OnceCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
