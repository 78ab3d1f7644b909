//! The Transducer protocol.

/// A reusable transform that decorates a reducer.
///
/// `apply` consumes the reducer it wraps and returns a new reducer that owns
/// it. Transducers take `&self`, so one value can build any number of
/// independent chains; all per-reduction state lives in the built reducer.
pub trait Transducer<R> {
    /// The decorating reducer produced by [`apply`](Transducer::apply).
    type Output;

    fn apply(&self, reducer: R) -> Self::Output;
}

impl<R, X> Transducer<R> for &X
where
    X: Transducer<R> + ?Sized,
{
    type Output = X::Output;

    fn apply(&self, reducer: R) -> Self::Output {
        (**self).apply(reducer)
    }
}

/// Transducer that leaves the reducer untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl<R> Transducer<R> for Identity {
    type Output = R;

    fn apply(&self, reducer: R) -> R {
        reducer
    }
}

/// The no-op transducer.
pub fn identity() -> Identity {
    Identity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{reducer, Reducer, Step};

    #[test]
    fn identity_returns_same_reducer() {
        let mut chain = identity().apply(reducer(1, |acc: i32, x: i32| acc + x));
        assert_eq!(Reducer::<i32>::init(&mut chain), Some(1));
        assert_eq!(chain.step(1, 2), Step::Continue(3));
    }
}
