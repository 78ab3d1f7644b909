//! Composition of transducers.

use super::catting::{cat, Catting};
use super::mapping::{mapping, mapping_by, Mapping};
use crate::core::{Selector, Transducer};

/// Two transducers chained so that `first` sees each element before `second`.
///
/// Building the chain runs in the opposite direction: `second` wraps the
/// reducer first, then `first` wraps the result, which leaves `first`'s
/// reducer outermost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Compose<A, B> {
    first: A,
    second: B,
}

impl<A, B> Compose<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<R, A, B> Transducer<R> for Compose<A, B>
where
    B: Transducer<R>,
    A: Transducer<B::Output>,
{
    type Output = A::Output;

    fn apply(&self, reducer: R) -> Self::Output {
        self.first.apply(self.second.apply(reducer))
    }
}

/// Chain two transducers; elements flow through `first`, then `second`.
///
/// For longer chains use [`compose!`](crate::compose!) or
/// [`Pipeline`](crate::builder::Pipeline).
///
/// ```rust
/// use transducers::{compose, filtering, mapping, reducers, transduce};
///
/// let xform = compose(mapping(|x: i32| x + 1), filtering(|x: &i32| x % 2 == 0));
/// assert_eq!(transduce(xform, reducers::collect(), 0..5).unwrap(), vec![2, 4]);
/// ```
pub fn compose<A, B>(first: A, second: B) -> Compose<A, B> {
    Compose::new(first, second)
}

/// Map every element to a sequence and flatten the results.
///
/// ```rust
/// use transducers::{mapcat, reducers, transduce};
///
/// let xform = mapcat(|n: usize| vec![n; n]);
/// assert_eq!(transduce(xform, reducers::collect(), 1..=3).unwrap(), vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn mapcat<F>(transform: F) -> Compose<Mapping<F>, Catting> {
    compose(mapping(transform), cat())
}

/// Map every element to a sequence with a named selector and flatten.
///
/// ```rust
/// use transducers::{mapcat_by, reducers, selector, transduce};
///
/// let xform = mapcat_by(selector!(str::chars));
/// assert_eq!(transduce(xform, reducers::string(), vec!["ab", "c"]).unwrap(), "abc");
/// ```
pub fn mapcat_by<F>(selector: Selector<F>) -> Compose<Mapping<F>, Catting> {
    compose(mapping_by(selector), cat())
}
