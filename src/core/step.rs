//! Early-termination signal for reductions.
//!
//! Every reducer step answers with a [`Step`]: either a new accumulator to
//! keep going with, or a final accumulator that ends the reduction.

use serde::{Deserialize, Serialize};

/// Outcome of a single reducer step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step<A> {
    /// Keep reducing with this accumulator
    Continue(A),

    /// Stop; this is the final accumulator
    Reduced(A),
}

impl<A> Step<A> {
    /// Check whether this step ends the reduction.
    pub fn is_reduced(&self) -> bool {
        matches!(self, Self::Reduced(_))
    }

    /// Take the accumulator out, whichever variant holds it.
    pub fn into_inner(self) -> A {
        match self {
            Self::Continue(acc) | Self::Reduced(acc) => acc,
        }
    }

    /// Transform the accumulator while keeping the variant.
    pub fn map<B, F>(self, f: F) -> Step<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Continue(acc) => Step::Continue(f(acc)),
            Self::Reduced(acc) => Step::Reduced(f(acc)),
        }
    }
}

impl<A> From<A> for Step<A> {
    fn from(acc: A) -> Self {
        Step::Continue(acc)
    }
}

impl<A> From<Reduced<A>> for Step<A> {
    fn from(reduced: Reduced<A>) -> Self {
        Step::Reduced(reduced.value)
    }
}

/// Sentinel wrapping the final accumulator of a reduction.
///
/// Step functions can return it directly to stop the reduction:
///
/// ```rust
/// use transducers::{identity, reducer, transduce_with, Reduced, Step};
///
/// // Stop as soon as the running total passes 10.
/// let capped = reducer(0, |acc: i32, x: i32| -> Step<i32> {
///     let next = acc + x;
///     if next > 10 {
///         Reduced::new(next).into()
///     } else {
///         next.into()
///     }
/// });
///
/// let total = transduce_with(identity(), capped, 0, vec![4, 5, 6, 7]);
/// assert_eq!(total, 15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduced<A> {
    value: A,
}

impl<A> Reduced<A> {
    pub fn new(value: A) -> Self {
        Self { value }
    }

    /// Borrow the wrapped accumulator.
    pub fn value(&self) -> &A {
        &self.value
    }

    pub fn into_value(self) -> A {
        self.value
    }
}
