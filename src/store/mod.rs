//! The state container: stores, builders and the single-store cell.
//!
//! A store holds one current value; updates flow through the middleware
//! chain and finish with a renderer invocation:
//! - `Store<T>` - thread-safe container behind clonable handles
//! - `StoreBuilder<T>` - construction with renderer and middleware attached
//! - `StoreCell<T>` - static slot for applications with exactly one store

mod builder;
mod cell;
mod errors;
mod store;

pub use builder::StoreBuilder;
pub use cell::StoreCell;
pub use errors::{StoreError, StoreResult};
pub use store::Store;
