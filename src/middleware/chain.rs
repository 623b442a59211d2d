use std::fmt;

/// A boxed transformation stage applied to proposed state during an update.
pub type Middleware<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// An ordered chain of middleware stages.
///
/// Stages run strictly left to right: each stage receives the output of the
/// previous one, and the last stage's output becomes the stored state.
pub struct MiddlewareChain<T> {
    stages: Vec<Middleware<T>>,
}

impl<T: 'static> MiddlewareChain<T> {
    /// Create an empty chain (the identity fold).
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the end of the chain.
    ///
    /// Insertion order is application order.
    pub fn push<F>(&mut self, stage: F)
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.stages.push(Box::new(stage));
    }

    /// Append a stage, builder-style.
    pub fn with<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.push(stage);
        self
    }

    /// Run a proposed value through every stage in order.
    ///
    /// An empty chain returns the value unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::MiddlewareChain;
    ///
    /// let chain = MiddlewareChain::new()
    ///     .with(|s: String| s + "a")
    ///     .with(|s: String| s + "b");
    ///
    /// assert_eq!(chain.apply("x".to_string()), "xab");
    /// ```
    pub fn apply(&self, proposed: T) -> T {
        self.stages
            .iter()
            .fold(proposed, |value, stage| stage(value))
    }

    /// Number of stages in the chain.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<T: 'static> Default for MiddlewareChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> FromIterator<Middleware<T>> for MiddlewareChain<T> {
    fn from_iter<I: IntoIterator<Item = Middleware<T>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

impl<T: 'static> fmt::Debug for MiddlewareChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiddlewareChain")
            .field("stages", &self.stages.len())
            .finish()
    }
}
