//! The Reducer protocol: a seed, a step function and a finalizer.

use super::callable::{Callable, Selector};
use super::step::Step;
use std::fmt;

/// Terminal (or intermediate) consumer of a pipeline.
///
/// Decorating reducers built by transducers forward [`init`](Reducer::init)
/// and [`result`](Reducer::result) to the reducer they wrap, so the seed of
/// a whole chain is the seed of its innermost reducer.
///
/// `result` is a finalization hook only: the drivers in this crate never call
/// it, callers that want finalization invoke it themselves.
///
/// Calling `step` again after it returned [`Step::Reduced`] is a precondition
/// violation; the behavior of any reducer in that case is unspecified.
///
/// # Example
///
/// ```rust
/// use transducers::{transduce, mapping, Reducer, Step};
///
/// struct Product;
///
/// impl Reducer<u64> for Product {
///     type Acc = u64;
///
///     fn init(&mut self) -> Option<u64> {
///         Some(1)
///     }
///
///     fn step(&mut self, acc: u64, input: u64) -> Step<u64> {
///         Step::Continue(acc * input)
///     }
/// }
///
/// let product = transduce(mapping(|x: u64| x + 1), Product, vec![1, 2, 3]).unwrap();
/// assert_eq!(product, 24);
/// ```
pub trait Reducer<T> {
    type Acc;

    /// Starting accumulator, if this reducer has one.
    fn init(&mut self) -> Option<Self::Acc> {
        None
    }

    /// Fold one input into the accumulator.
    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc>;

    /// Finalize a completed accumulator. Identity by default.
    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        acc
    }
}

impl<T, R> Reducer<T> for &mut R
where
    R: Reducer<T> + ?Sized,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        (**self).init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        (**self).step(acc, input)
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        (**self).result(acc)
    }
}

/// Reducer built from a seed and a step function or selector.
///
/// The step may return a bare accumulator, a [`Step`] or a
/// [`Reduced`](super::Reduced). The seed is handed out once, to the
/// reduction that asks for it.
pub struct FnReducer<A, F> {
    seed: Option<A>,
    step: Callable<F>,
}

impl<A, F> FnReducer<A, F> {
    /// Name of the step selector, if the reducer was built from one.
    pub fn selector_name(&self) -> Option<&'static str> {
        self.step.name()
    }
}

impl<A, T, S, F> Reducer<T> for FnReducer<A, F>
where
    F: FnMut(A, T) -> S,
    S: Into<Step<A>>,
{
    type Acc = A;

    fn init(&mut self) -> Option<A> {
        self.seed.take()
    }

    fn step(&mut self, acc: A, input: T) -> Step<A> {
        (self.step.get_mut())(acc, input).into()
    }
}

impl<A: fmt::Debug, F> fmt::Debug for FnReducer<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnReducer")
            .field("seed", &self.seed)
            .field("step", &self.step)
            .finish()
    }
}

/// Build a reducer from a seed and a step function.
///
/// ```rust
/// use transducers::{identity, reducer, transduce};
///
/// let sum = reducer(0, |acc: i32, x: i32| acc + x);
/// assert_eq!(transduce(identity(), sum, vec![1, 2, 3]).unwrap(), 6);
/// ```
pub fn reducer<A, F>(seed: A, step: F) -> FnReducer<A, F> {
    FnReducer {
        seed: Some(seed),
        step: Callable::Function(step),
    }
}

/// Build a reducer from a seed and a named selector invoked as
/// `selector(acc, input)`.
///
/// ```rust
/// use transducers::{identity, reducer_by, selector, transduce};
///
/// let sum = reducer_by(0, selector!(i64::wrapping_add));
/// assert_eq!(sum.selector_name(), Some("i64::wrapping_add"));
/// assert_eq!(transduce(identity(), sum, vec![1i64, 2, 3]).unwrap(), 6);
/// ```
pub fn reducer_by<A, F>(seed: A, step: Selector<F>) -> FnReducer<A, F> {
    FnReducer {
        seed: Some(seed),
        step: Callable::Selector(step),
    }
}

/// Build a reducer that has a step function but no seed.
///
/// Reductions over it need an explicit seed, see
/// [`transduce_with`](crate::transduce_with).
pub fn step_reducer<A, F>(step: F) -> FnReducer<A, F> {
    FnReducer {
        seed: None,
        step: Callable::Function(step),
    }
}
