//! Middleware chains applied during store updates.
//!
//! Every proposed state flows through an ordered chain of transformation
//! stages before it replaces the stored value:
//! - Chains: ordered stages folded strictly left to right
//! - Built-in stages: `logger` for structured logging, `tap` for
//!   side-effecting observers

mod builtin;
mod chain;

pub use builtin::{logger, tap};
pub use chain::{Middleware, MiddlewareChain};
