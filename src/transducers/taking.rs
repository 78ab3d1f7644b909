//! Prefix truncation.

use crate::core::{Reducer, Step, Transducer};

/// Transducer that forwards at most `n` elements, then stops the reduction.
///
/// The remaining allowance lives in the reducer built by each
/// [`apply`](Transducer::apply), so a single `Taking` can drive any number
/// of reductions, one after another or side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Taking {
    n: usize,
}

/// Reducer built by [`Taking`].
#[derive(Debug)]
pub struct TakingReducer<R> {
    inner: R,
    remaining: usize,
}

impl<R> Transducer<R> for Taking {
    type Output = TakingReducer<R>;

    fn apply(&self, reducer: R) -> Self::Output {
        TakingReducer {
            inner: reducer,
            remaining: self.n,
        }
    }
}

impl<R> TakingReducer<R> {
    /// Elements this reducer will still forward.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<T, R> Reducer<T> for TakingReducer<R>
where
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.inner.init()
    }

    /// The element arriving once the allowance is spent is dropped, and the
    /// running accumulator is returned untouched as `Reduced`.
    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        if self.remaining == 0 {
            return Step::Reduced(acc);
        }
        self.remaining -= 1;
        self.inner.step(acc, input)
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }
}

/// Forward the first `n` elements only.
///
/// ```rust
/// use transducers::{reducers, taking, transduce};
///
/// assert_eq!(transduce(taking(3), reducers::collect(), 1..).unwrap(), vec![1, 2, 3]);
/// assert!(transduce(taking(0), reducers::collect::<i32>(), 1..).unwrap().is_empty());
/// ```
pub fn taking(n: usize) -> Taking {
    Taking { n }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reducer;

    fn summing() -> impl Reducer<i32, Acc = i32> {
        reducer(0, |acc: i32, x: i32| acc + x)
    }

    #[test]
    fn forwards_exactly_n_elements() {
        let mut chain = taking(2).apply(summing());
        assert_eq!(chain.step(0, 1), Step::Continue(1));
        assert_eq!(chain.step(1, 2), Step::Continue(3));
        assert_eq!(chain.remaining(), 0);
        assert_eq!(chain.step(3, 100), Step::Reduced(3));
    }

    #[test]
    fn zero_reduces_on_first_element() {
        let mut chain = taking(0).apply(summing());
        assert_eq!(chain.step(0, 1), Step::Reduced(0));
    }

    #[test]
    fn each_application_gets_its_own_counter() {
        let take_one = taking(1);
        let mut first = take_one.apply(summing());
        assert_eq!(first.step(0, 5), Step::Continue(5));
        assert_eq!(first.step(5, 6), Step::Reduced(5));

        let mut second = take_one.apply(summing());
        assert_eq!(second.remaining(), 1);
        assert_eq!(second.step(0, 7), Step::Continue(7));
    }
}
