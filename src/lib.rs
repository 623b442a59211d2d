//! # Millrace
//!
//! A minimal, predictable state container for Rust.
//!
//! Millrace holds one current state value. Every proposed replacement flows
//! through an ordered chain of middleware stages (a strict left-to-right
//! fold), the fold's result becomes the new state, and a registered render
//! callback is invoked once afterwards. Updates are synchronous: fold,
//! replacement and render happen as one call stack.
//!
//! ## Store (owned container)
//!
//! - `Store<T>` - thread-safe state container; clones share one state
//! - `StoreBuilder<T>` - attach renderer and middleware at construction
//! - Middleware: `Fn(T) -> T` stages, applied in registration order
//!
//! ## StoreCell (single-store applications)
//!
//! - `StoreCell<T>` - a `static`-friendly slot holding the application's
//!   one store; operations before `init` report an explicit error
//!
//! A renderer runs once at the moment it is registered (the first paint
//! happens at startup) and then once after every successful update. A
//! store built without a renderer refuses updates until one is registered.
//!
//! ```
//! use millrace::Store;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Counter {
//!     count: i32,
//! }
//!
//! let store = Store::builder(Counter { count: 0 })
//!     .middleware(|state: Counter| Counter { count: state.count + 1 })
//!     .renderer(|| {})
//!     .build();
//!
//! store.update(Counter { count: 0 }).unwrap();
//! assert_eq!(store.get(), Counter { count: 1 });
//! ```

pub mod middleware;
pub mod store;

// Re-export main types for convenience
pub use middleware::{Middleware, MiddlewareChain};
pub use store::{Store, StoreBuilder, StoreCell, StoreError, StoreResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = Store::new(0);
        store.set_renderer(|| {});
        store.update(42).unwrap();
        assert_eq!(store.get(), 42);
    }
}
