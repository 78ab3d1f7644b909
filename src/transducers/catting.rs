//! Flattening of nested sequences.
//!
//! Every input of a catting reducer is itself a sequence. Its elements are
//! reduced, through a nested run of the driver, into the same downstream
//! reducer and accumulator.
//!
//! The nested run unwraps one `Reduced` layer before returning, like any
//! other run. For a stop raised downstream to also end the enclosing
//! reduction, the nested run steps through a [`PreservingReduced`] wrapper
//! that adds one extra `Reduced` layer. The nested run hands that inner
//! layer back as a `Step::Reduced`, which the catting reducer returns to
//! its own caller unchanged. Each enclosing catting frame therefore peels
//! exactly one layer, and the outermost driver unwraps the last one.

use crate::core::{Reducer, Step, Transducer};
use crate::driver::reduce;

/// Transducer that flattens each input sequence into the downstream reducer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Catting;

/// Reducer built by [`Catting`].
#[derive(Debug)]
pub struct CattingReducer<R> {
    inner: R,
}

impl<R> Transducer<R> for Catting {
    type Output = CattingReducer<R>;

    fn apply(&self, reducer: R) -> Self::Output {
        CattingReducer { inner: reducer }
    }
}

impl<I, R> Reducer<I> for CattingReducer<R>
where
    I: IntoIterator,
    R: Reducer<I::Item>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: I) -> Step<Self::Acc> {
        let mut preserving = PreservingReduced::new(&mut self.inner);
        reduce(&mut preserving, Step::Continue(acc), input)
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }
}

/// Scoped wrapper that lets a stop escape one level of nested reduction.
///
/// Its accumulator is the downstream accumulator tagged with the step
/// variant that produced it. A `Reduced` answer from downstream is wrapped
/// in a second `Reduced` layer; anything else continues.
#[derive(Debug)]
pub struct PreservingReduced<'a, R> {
    inner: &'a mut R,
}

impl<'a, R> PreservingReduced<'a, R> {
    pub fn new(inner: &'a mut R) -> Self {
        Self { inner }
    }
}

impl<T, R> Reducer<T> for PreservingReduced<'_, R>
where
    R: Reducer<T>,
{
    type Acc = Step<R::Acc>;

    fn init(&mut self) -> Option<Self::Acc> {
        self.inner.init().map(Step::Continue)
    }

    // The driver stops at the first `Reduced`, so `acc` always arrives as
    // `Continue`.
    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        match self.inner.step(acc.into_inner(), input) {
            Step::Reduced(done) => Step::Reduced(Step::Reduced(done)),
            Step::Continue(next) => Step::Continue(Step::Continue(next)),
        }
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        acc.map(|inner| self.inner.result(inner))
    }
}

/// Flatten one level of nesting.
///
/// ```rust
/// use transducers::{cat, reducers, transduce};
///
/// let nested = vec![vec![1, 2], vec![3], vec![], vec![4, 5]];
/// assert_eq!(transduce(cat(), reducers::sum(), nested).unwrap(), 15);
/// ```
pub fn cat() -> Catting {
    Catting
}
