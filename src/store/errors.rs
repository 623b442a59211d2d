//! Error types for store operations.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by stores and store cells.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A cell operation ran before `init`.
    #[error("store is not initialized")]
    NotInitialized,

    /// An update or manual render ran with no renderer ever registered.
    #[error("render callback not configured")]
    RendererNotConfigured,

    /// A cell received a second `init`.
    #[error("store is already initialized")]
    AlreadyInitialized,
}
