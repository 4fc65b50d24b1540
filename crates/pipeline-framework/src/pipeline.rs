//! # Function Composition
//!
//! [`Pipeline`] chains same-typed stages left to right (`pipe`), the way a report is
//! usually read: filter, then transform, then rank. [`compose`] is the right-to-left
//! counterpart for two functions of possibly different types.

/// A sequence of `T -> T` stages applied in insertion order.
///
/// Stages may borrow from their environment for `'a`. A pipeline can be run any number
/// of times.
pub struct Pipeline<'a, T> {
    stages: Vec<Box<dyn Fn(T) -> T + 'a>>,
}

impl<'a, T> Default for Pipeline<'a, T> {
    fn default() -> Self {
        Self { stages: Vec::new() }
    }
}

impl<'a, T> Pipeline<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage that runs after every stage added so far.
    pub fn pipe<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'a,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Feeds `input` through every stage. An empty pipeline is the identity.
    pub fn run(&self, input: T) -> T {
        self.stages.iter().fold(input, |acc, stage| stage(acc))
    }
}

/// Returns `x ↦ f(g(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}
