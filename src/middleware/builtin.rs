use std::fmt;

use tracing::debug;

/// Pass-through middleware that logs every value flowing through the chain.
///
/// Emits at `debug` level via `tracing`; output stays inert until the host
/// installs a subscriber.
///
/// # Example
///
/// ```
/// use millrace::middleware::logger;
/// use millrace::Store;
///
/// let store = Store::builder(0)
///     .middleware(logger())
///     .renderer(|| {})
///     .build();
///
/// store.update(41).unwrap();
/// assert_eq!(store.get(), 41);
/// ```
pub fn logger<T: fmt::Debug>() -> impl Fn(T) -> T + Send + Sync {
    |value| {
        debug!("state through chain: {:?}", value);
        value
    }
}

/// Middleware that observes the running value without transforming it.
///
/// The usual home for persistence hooks or counters that should sit in the
/// chain without touching the fold.
pub fn tap<T, F>(observe: F) -> impl Fn(T) -> T + Send + Sync
where
    F: Fn(&T) + Send + Sync,
{
    move |value| {
        observe(&value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn logger_passes_value_through() {
        let stage = logger::<i32>();

        assert_eq!(stage(42), 42);
    }

    #[test]
    fn tap_observes_without_transforming() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = seen.clone();

        let stage = tap(move |n: &usize| {
            seen_clone.store(*n, Ordering::SeqCst);
        });

        assert_eq!(stage(7), 7);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }
}
