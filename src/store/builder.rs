use std::sync::Arc;

use crate::middleware::MiddlewareChain;

use super::store::{Renderer, Store};

/// Builder for [`Store`], covering initial state, renderer and middleware in
/// one construction step.
///
/// Stages are applied in registration order. If a renderer is supplied it
/// fires once as part of [`build`](StoreBuilder::build), so the first render
/// happens at construction time.
pub struct StoreBuilder<T> {
    initial: T,
    renderer: Option<Renderer>,
    middleware: MiddlewareChain<T>,
}

impl<T: 'static> StoreBuilder<T> {
    pub(super) fn new(initial: T) -> Self {
        Self {
            initial,
            renderer: None,
            middleware: MiddlewareChain::new(),
        }
    }

    /// Register the render callback. At most one; the last call wins.
    pub fn renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Append a middleware stage. Call order is chain order.
    pub fn middleware<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.middleware.push(stage);
        self
    }

    /// Replace the whole chain with a prebuilt one.
    ///
    /// Discards any stages registered so far through
    /// [`middleware`](StoreBuilder::middleware).
    pub fn middleware_chain(mut self, chain: MiddlewareChain<T>) -> Self {
        self.middleware = chain;
        self
    }

    /// Construct the store.
    ///
    /// A renderer supplied through [`renderer`](StoreBuilder::renderer) is
    /// registered through the same path as
    /// [`set_renderer`](Store::set_renderer) and therefore invoked once
    /// before `build` returns.
    pub fn build(self) -> Store<T> {
        let store = Store::from_parts(self.initial, self.middleware);
        if let Some(renderer) = self.renderer {
            store.install_renderer(renderer);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::Middleware;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn build_with_renderer_renders_once() {
        let renders = Arc::new(AtomicUsize::new(0));
        let renders_clone = renders.clone();

        let _store = Store::builder(0i32)
            .renderer(move || {
                renders_clone.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        assert_eq!(renders.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn build_without_renderer_defers() {
        let renders = Arc::new(AtomicUsize::new(0));

        let store = Store::builder(0i32).build();
        assert_eq!(renders.load(Ordering::SeqCst), 0);
        assert!(!store.has_renderer());

        let renders_clone = renders.clone();
        store.set_renderer(move || {
            renders_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(renders.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn middleware_applies_in_registration_order() {
        let store = Store::builder("x".to_string())
            .middleware(|s: String| s + "a")
            .middleware(|s: String| s + "b")
            .renderer(|| {})
            .build();

        store.update("y".to_string()).unwrap();

        assert_eq!(store.get(), "yab");
    }

    #[test]
    fn middleware_chain_replaces_registered_stages() {
        let stages: Vec<Middleware<i32>> = vec![Box::new(|n| n - 1)];
        let chain: MiddlewareChain<i32> = stages.into_iter().collect();

        let store = Store::builder(0i32)
            .middleware(|n| n + 100)
            .middleware_chain(chain)
            .renderer(|| {})
            .build();

        store.update(10).unwrap();

        assert_eq!(store.get(), 9);
    }
}
