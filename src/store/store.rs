use std::sync::{Arc, Mutex, RwLock};

use crate::middleware::MiddlewareChain;

use super::builder::StoreBuilder;
use super::errors::{StoreError, StoreResult};

pub(crate) type Renderer = Arc<dyn Fn() + Send + Sync>;

/// A thread-safe state container with middleware and render notification.
///
/// A store holds one current value. Every proposed replacement flows through
/// the store's middleware chain (left to right) and the fold's result
/// becomes the new state; the registered renderer is then invoked once.
/// State is only ever replaced through [`update`](Store::update); there is
/// no setter that bypasses the chain.
///
/// Cloning a store clones a handle: all clones share the same state,
/// renderer and middleware.
pub struct Store<T> {
    state: Arc<RwLock<T>>,
    renderer: Arc<RwLock<Option<Renderer>>>,
    middleware: Arc<MiddlewareChain<T>>,
    // Serializes commit + render across handles; never held during the fold.
    gate: Arc<Mutex<()>>,
}

impl<T: 'static> Store<T> {
    /// Create a store with the given initial state, an empty middleware
    /// chain and no renderer.
    ///
    /// [`update`](Store::update) fails with
    /// [`StoreError::RendererNotConfigured`] until a renderer is registered
    /// through [`set_renderer`](Store::set_renderer).
    pub fn new(initial: T) -> Self {
        Self::from_parts(initial, MiddlewareChain::new())
    }

    /// Start building a store with a renderer and middleware attached up
    /// front.
    pub fn builder(initial: T) -> StoreBuilder<T> {
        StoreBuilder::new(initial)
    }

    pub(super) fn from_parts(initial: T, middleware: MiddlewareChain<T>) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            renderer: Arc::new(RwLock::new(None)),
            middleware: Arc::new(middleware),
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// Replace the state with `proposed` after running it through the
    /// middleware chain, then invoke the renderer once.
    ///
    /// The chain is applied strictly left to right into a local value, so no
    /// intermediate stage output is ever observable through the accessors.
    /// If a stage panics, the panic propagates to the caller before anything
    /// is committed: the state is left unmodified and the store stays
    /// usable.
    ///
    /// The renderer must not call `update` or `render` on the same store;
    /// the internal gate is not re-entrant.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RendererNotConfigured`] if no renderer has been
    /// registered; the state is left untouched.
    pub fn update(&self, proposed: T) -> StoreResult<()> {
        let renderer = self
            .renderer
            .read()
            .unwrap()
            .clone()
            .ok_or(StoreError::RendererNotConfigured)?;

        // Fold outside every lock: a panicking stage unwinds before commit.
        let next = self.middleware.apply(proposed);

        let _gate = self.gate.lock().unwrap();
        *self.state.write().unwrap() = next;
        renderer();
        Ok(())
    }

    /// Re-invoke the registered renderer against the current state.
    ///
    /// Does not mutate state. Acts as a manual refresh.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RendererNotConfigured`] if no renderer has ever
    /// been registered.
    pub fn render(&self) -> StoreResult<()> {
        let renderer = self
            .renderer
            .read()
            .unwrap()
            .clone()
            .ok_or(StoreError::RendererNotConfigured)?;

        let _gate = self.gate.lock().unwrap();
        renderer();
        Ok(())
    }

    /// Register `renderer` as the active render callback, replacing any
    /// previous one, and invoke it once immediately.
    ///
    /// Renderers take no arguments; one that needs the state captures a
    /// clone of the store and reads through [`get`](Store::get) or
    /// [`read`](Store::read).
    pub fn set_renderer<F>(&self, renderer: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.install_renderer(Arc::new(renderer));
    }

    pub(super) fn install_renderer(&self, renderer: Renderer) {
        *self.renderer.write().unwrap() = Some(Arc::clone(&renderer));
        // First invocation happens at registration time.
        let _gate = self.gate.lock().unwrap();
        renderer();
    }

    /// Whether a renderer is currently registered.
    pub fn has_renderer(&self) -> bool {
        self.renderer.read().unwrap().is_some()
    }

    /// Read the current state with a function, without cloning.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let state = self.state.read().unwrap();
        f(&*state)
    }
}

impl<T: Clone + 'static> Store<T> {
    /// Get a clone of the current state.
    pub fn get(&self) -> T {
        self.state.read().unwrap().clone()
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            renderer: Arc::clone(&self.renderer),
            middleware: Arc::clone(&self.middleware),
            gate: Arc::clone(&self.gate),
        }
    }
}
