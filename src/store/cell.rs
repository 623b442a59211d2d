use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::store::Store;

/// A lazily initialized slot for the process-wide single-store pattern.
///
/// Most applications hold exactly one store. `StoreCell` lets the host
/// declare that store as a `static` without threading it through every call
/// site, while keeping construction explicit: the cell starts empty and
/// every operation before [`init`](StoreCell::init) reports
/// [`StoreError::NotInitialized`].
///
/// # Examples
///
/// ```
/// use millrace::{Store, StoreCell};
///
/// static STORE: StoreCell<u32> = StoreCell::new();
///
/// assert!(STORE.update(1).is_err());
///
/// STORE.init(Store::builder(0).renderer(|| {}).build()).unwrap();
/// STORE.update(1).unwrap();
/// assert_eq!(STORE.get().unwrap(), 1);
/// ```
pub struct StoreCell<T> {
    slot: RwLock<Option<Store<T>>>,
}

impl<T> StoreCell<T> {
    /// Create an empty cell. Usable in `static` position.
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }
}

impl<T: 'static> StoreCell<T> {
    /// Install the store. Exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyInitialized`] if the cell already holds
    /// a store; the existing store is kept.
    pub fn init(&self, store: Store<T>) -> StoreResult<()> {
        let mut slot = self.slot.write().unwrap();
        if slot.is_some() {
            return Err(StoreError::AlreadyInitialized);
        }
        *slot = Some(store);
        Ok(())
    }

    /// Clone the store handle out of the cell.
    ///
    /// The cell lock is released before the handle is used, so renderers and
    /// middleware may read back through the cell without deadlocking.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotInitialized`] before
    /// [`init`](StoreCell::init).
    pub fn store(&self) -> StoreResult<Store<T>> {
        self.slot
            .read()
            .unwrap()
            .clone()
            .ok_or(StoreError::NotInitialized)
    }

    /// [`Store::update`] on the installed store.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotInitialized`] before init, otherwise whatever the
    /// store's `update` reports.
    pub fn update(&self, proposed: T) -> StoreResult<()> {
        self.store()?.update(proposed)
    }

    /// [`Store::render`] on the installed store.
    pub fn render(&self) -> StoreResult<()> {
        self.store()?.render()
    }

    /// [`Store::read`] on the installed store.
    pub fn read<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(&T) -> R,
    {
        Ok(self.store()?.read(f))
    }

    /// Whether [`init`](StoreCell::init) has run.
    pub fn is_initialized(&self) -> bool {
        self.slot.read().unwrap().is_some()
    }
}

impl<T: Clone + 'static> StoreCell<T> {
    /// [`Store::get`] on the installed store.
    pub fn get(&self) -> StoreResult<T> {
        Ok(self.store()?.get())
    }
}

impl<T> Default for StoreCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
