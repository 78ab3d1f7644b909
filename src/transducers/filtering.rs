//! Predicate-based filtering.

use crate::core::{Callable, Reducer, Selector, Step, Transducer};

/// Transducer that passes downstream only the elements matching a predicate.
///
/// Rejected elements never reach the inner reducer, so they are invisible
/// to every transducer further down the chain, including counting ones
/// like [`taking`](super::taking).
#[derive(Clone, Debug)]
pub struct Filtering<P> {
    predicate: Callable<P>,
}

/// Reducer built by [`Filtering`].
#[derive(Debug)]
pub struct FilteringReducer<R, P> {
    inner: R,
    predicate: Callable<P>,
}

impl<R, P: Clone> Transducer<R> for Filtering<P> {
    type Output = FilteringReducer<R, P>;

    fn apply(&self, reducer: R) -> Self::Output {
        FilteringReducer {
            inner: reducer,
            predicate: self.predicate.clone(),
        }
    }
}

impl<T, R, P> Reducer<T> for FilteringReducer<R, P>
where
    R: Reducer<T>,
    P: FnMut(&T) -> bool,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        if (self.predicate.get_mut())(&input) {
            self.inner.step(acc, input)
        } else {
            Step::Continue(acc)
        }
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }
}

/// Keep the elements for which `predicate` holds.
///
/// ```rust
/// use transducers::{filtering, reducers, transduce};
///
/// let odd = transduce(filtering(|x: &i32| x % 2 == 1), reducers::collect(), 1..=7).unwrap();
/// assert_eq!(odd, vec![1, 3, 5, 7]);
/// ```
pub fn filtering<P>(predicate: P) -> Filtering<P> {
    Filtering {
        predicate: Callable::Function(predicate),
    }
}

/// Keep the elements for which a named selector returns `true`.
///
/// ```rust
/// use transducers::{filtering_by, reducers, selector, transduce_str};
///
/// let digits = transduce_str(filtering_by(selector!(char::is_ascii_digit)), reducers::string(), "a1b22c");
/// assert_eq!(digits.unwrap(), "122");
/// ```
pub fn filtering_by<P>(selector: Selector<P>) -> Filtering<P> {
    Filtering {
        predicate: Callable::Selector(selector),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reducer;

    #[test]
    fn matching_element_is_forwarded() {
        let mut chain =
            filtering(|x: &i32| *x > 0).apply(reducer(0, |acc: i32, x: i32| acc + x));
        assert_eq!(chain.step(1, 5), Step::Continue(6));
    }

    #[test]
    fn rejected_element_skips_inner_reducer() {
        let mut calls = 0;
        {
            let mut chain = filtering(|x: &i32| *x > 0).apply(reducer(0, |acc: i32, x: i32| {
                calls += 1;
                acc + x
            }));
            assert_eq!(chain.step(1, -5), Step::Continue(1));
        }
        assert_eq!(calls, 0);
    }

    #[test]
    fn selector_predicate_receives_reference() {
        let mut chain = filtering_by(Selector::new("str::is_empty", |s: &&str| s.is_empty()))
            .apply(reducer(0, |acc: usize, _s: &str| acc + 1));
        assert_eq!(chain.step(0, ""), Step::Continue(1));
        assert_eq!(chain.step(1, "x"), Step::Continue(1));
    }
}
