//! The generic traversal routine that runs a reducer chain over a sequence.
//!
//! Every `transduce*` function builds the chain by applying the transducer
//! to the base reducer once, picks a starting accumulator, and steps the
//! chain with each element in order. A [`Step::Reduced`] stops the loop
//! right away: no further element is pulled from the sequence and the
//! wrapped accumulator is returned.
//!
//! The drivers never call [`Reducer::result`]. Finalization is left to
//! callers that want it.

pub mod error;

pub use error::TransduceError;

use crate::core::{Reducer, Step, Transducer};

/// Run `xform` over `coll`, seeding from the chain's own `init()`.
///
/// # Example
///
/// ```rust
/// use transducers::{compose, filtering, mapping, reducers, transduce};
///
/// let xform = compose(mapping(|x: i32| x * 3), filtering(|x: &i32| x % 2 == 0));
/// let evens = transduce(&xform, reducers::collect(), 1..=6).unwrap();
/// assert_eq!(evens, vec![6, 12, 18]);
/// ```
///
/// # Errors
///
/// Returns [`TransduceError::MissingSeed`] when no reducer in the chain
/// supplies a seed.
pub fn transduce<X, R, I>(
    xform: X,
    reducer: R,
    coll: I,
) -> Result<<X::Output as Reducer<I::Item>>::Acc, TransduceError>
where
    X: Transducer<R>,
    X::Output: Reducer<I::Item>,
    I: IntoIterator,
{
    let mut chain = xform.apply(reducer);
    let seed = chain.init().ok_or(TransduceError::MissingSeed)?;
    Ok(reduce(&mut chain, seed, coll))
}

/// Run `xform` over `coll` starting from an explicit seed.
///
/// The chain's `init()` is never consulted.
///
/// ```rust
/// use transducers::{reducers, taking, transduce_with};
///
/// let firsts = transduce_with(taking(2), reducers::collect(), vec![0], vec![1, 2, 3]);
/// assert_eq!(firsts, vec![0, 1, 2]);
/// ```
pub fn transduce_with<X, R, I>(
    xform: X,
    reducer: R,
    seed: <X::Output as Reducer<I::Item>>::Acc,
    coll: I,
) -> <X::Output as Reducer<I::Item>>::Acc
where
    X: Transducer<R>,
    X::Output: Reducer<I::Item>,
    I: IntoIterator,
{
    let mut chain = xform.apply(reducer);
    reduce(&mut chain, seed, coll)
}

/// Run `xform` over the characters of `text`, one `char` at a time.
///
/// ```rust
/// use transducers::{mapping, reducers, transduce_str};
///
/// let upper = transduce_str(mapping(|c: char| c.to_ascii_uppercase()), reducers::string(), "abc");
/// assert_eq!(upper.unwrap(), "ABC");
/// ```
///
/// # Errors
///
/// Returns [`TransduceError::MissingSeed`] when no reducer in the chain
/// supplies a seed.
pub fn transduce_str<X, R>(
    xform: X,
    reducer: R,
    text: &str,
) -> Result<<X::Output as Reducer<char>>::Acc, TransduceError>
where
    X: Transducer<R>,
    X::Output: Reducer<char>,
{
    transduce(xform, reducer, text.chars())
}

/// Run `xform` over the characters of `text` starting from an explicit seed.
pub fn transduce_str_with<X, R>(
    xform: X,
    reducer: R,
    seed: <X::Output as Reducer<char>>::Acc,
    text: &str,
) -> <X::Output as Reducer<char>>::Acc
where
    X: Transducer<R>,
    X::Output: Reducer<char>,
{
    transduce_with(xform, reducer, seed, text.chars())
}

/// Step an already built chain over `coll`, unwrapping exactly one
/// `Reduced` layer if the chain terminates early.
pub(crate) fn reduce<R, I>(chain: &mut R, seed: R::Acc, coll: I) -> R::Acc
where
    R: Reducer<I::Item>,
    I: IntoIterator,
{
    let mut acc = seed;
    for (index, input) in coll.into_iter().enumerate() {
        match chain.step(acc, input) {
            Step::Continue(next) => acc = next,
            Step::Reduced(done) => {
                tracing::trace!(consumed = index + 1, "reduction terminated early");
                return done;
            }
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{identity, reducer, step_reducer, Reduced};
    use crate::reducers;
    use crate::transducers::{mapping, taking};

    #[test]
    fn empty_sequence_returns_seed() {
        let out = transduce(identity(), reducer(7, |acc: i32, x: i32| acc + x), Vec::new());
        assert_eq!(out, Ok(7));
    }

    #[test]
    fn explicit_seed_wins_over_init() {
        let out = transduce_with(
            identity(),
            reducer(100, |acc: i32, x: i32| acc + x),
            1,
            vec![2, 3],
        );
        assert_eq!(out, 6);
    }

    #[test]
    fn missing_seed_is_an_error() {
        let out = transduce(identity(), step_reducer(|acc: i32, x: i32| acc + x), vec![1]);
        assert_eq!(out, Err(TransduceError::MissingSeed));
    }

    #[test]
    fn seedless_reducer_works_with_explicit_seed() {
        let out = transduce_with(
            mapping(|x: i32| x * 2),
            step_reducer(|acc: i32, x: i32| acc + x),
            0,
            vec![1, 2, 3],
        );
        assert_eq!(out, 12);
    }

    #[test]
    fn stops_pulling_elements_after_reduced() {
        let mut pulled = Vec::new();
        let source = (1..=5).inspect(|x| pulled.push(*x));
        let out = transduce(taking(2), reducers::collect(), source).unwrap();

        assert_eq!(out, vec![1, 2]);
        assert_eq!(pulled, vec![1, 2, 3]);
    }

    #[test]
    fn reduced_on_last_element_is_unwrapped() {
        let stop_at_three = reducer(0, |acc: i32, x: i32| {
            if x == 3 {
                Step::Reduced(acc + x)
            } else {
                Step::Continue(acc + x)
            }
        });
        assert_eq!(transduce(identity(), stop_at_three, vec![1, 2, 3]), Ok(6));
    }

    #[test]
    fn reducer_step_sees_each_element_in_order() {
        let mut seen = Vec::new();
        let recorder = reducer((), |acc: (), x: char| {
            seen.push(x);
            acc
        });
        transduce_str(identity(), recorder, "héllo").unwrap();
        assert_eq!(seen, vec!['h', 'é', 'l', 'l', 'o']);
    }

    #[test]
    fn str_driver_accepts_explicit_seed() {
        let out = transduce_str_with(identity(), reducers::string(), String::from(">"), "ab");
        assert_eq!(out, ">ab");
    }

    #[test]
    fn reduced_sentinel_stops_reduction() {
        let first_even = reducer(None, |acc: Option<i32>, x: i32| {
            if x % 2 == 0 {
                Reduced::new(Some(x)).into()
            } else {
                Step::Continue(acc)
            }
        });
        assert_eq!(transduce(identity(), first_even, vec![1, 3, 4, 6]), Ok(Some(4)));
    }

    #[test]
    fn driver_does_not_finalize() {
        struct Finalizing;

        impl Reducer<i32> for Finalizing {
            type Acc = i32;

            fn init(&mut self) -> Option<i32> {
                Some(0)
            }

            fn step(&mut self, acc: i32, input: i32) -> Step<i32> {
                Step::Continue(acc + input)
            }

            fn result(&mut self, acc: i32) -> i32 {
                acc * 1000
            }
        }

        assert_eq!(transduce(identity(), Finalizing, vec![1, 2]), Ok(3));

        let mut chain = mapping(|x: i32| x + 1).apply(Finalizing);
        let acc = reduce(&mut chain, 0, vec![1, 2]);
        assert_eq!(chain.result(acc), 5000);
    }
}
