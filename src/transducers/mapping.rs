//! Element-wise transformation.

use crate::core::{Callable, Reducer, Selector, Step, Transducer};

/// Transducer that passes `transform(input)` downstream.
///
/// Every [`apply`](Transducer::apply) clones the transform into the new
/// reducer, so closures must be `Clone`.
#[derive(Clone, Debug)]
pub struct Mapping<F> {
    xform: Callable<F>,
}

/// Reducer built by [`Mapping`].
#[derive(Debug)]
pub struct MappingReducer<R, F> {
    inner: R,
    xform: Callable<F>,
}

impl<R, F: Clone> Transducer<R> for Mapping<F> {
    type Output = MappingReducer<R, F>;

    fn apply(&self, reducer: R) -> Self::Output {
        MappingReducer {
            inner: reducer,
            xform: self.xform.clone(),
        }
    }
}

impl<U, T, R, F> Reducer<U> for MappingReducer<R, F>
where
    R: Reducer<T>,
    F: FnMut(U) -> T,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: U) -> Step<Self::Acc> {
        let transformed = (self.xform.get_mut())(input);
        self.inner.step(acc, transformed)
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }
}

/// Map every element through `transform`.
///
/// ```rust
/// use transducers::{mapping, reducers, transduce};
///
/// let squares = transduce(mapping(|x: u32| x * x), reducers::collect(), 1..=4).unwrap();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub fn mapping<F>(transform: F) -> Mapping<F> {
    Mapping {
        xform: Callable::Function(transform),
    }
}

/// Map every element through a named selector invoked on it.
///
/// ```rust
/// use transducers::{mapping_by, reducers, selector, transduce};
///
/// let lengths = transduce(mapping_by(selector!(str::len)), reducers::sum(), vec!["ab", "cde"]);
/// assert_eq!(lengths.unwrap(), 5);
/// ```
pub fn mapping_by<F>(selector: Selector<F>) -> Mapping<F> {
    Mapping {
        xform: Callable::Selector(selector),
    }
}
