//! Fluent builder for transducer pipelines.

use crate::core::{identity, Identity, Selector, Transducer};
use crate::transducers::{
    cat, compose, filtering, filtering_by, mapcat, mapcat_by, mapping, mapping_by, taking, Catting,
    Compose, Filtering, Mapping, Taking,
};

/// Builder that appends transducers in the order elements flow through them.
///
/// A `Pipeline` is itself a transducer, so it can be handed to the drivers
/// directly; [`build`](Pipeline::build) unwraps the composed value.
///
/// # Example
///
/// ```rust
/// use transducers::builder::Pipeline;
/// use transducers::{reducers, transduce};
///
/// let pipeline = Pipeline::new()
///     .map(|x: i32| x * 2)
///     .filter(|x: &i32| *x > 4)
///     .take(2);
///
/// let out = transduce(&pipeline, reducers::collect(), vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(out, vec![6, 8]);
///
/// // Pipelines are reusable.
/// let again = transduce(&pipeline, reducers::sum(), vec![10, 20, 30]).unwrap();
/// assert_eq!(again, 60);
/// ```
#[derive(Clone, Debug)]
pub struct Pipeline<X> {
    xform: X,
}

impl Pipeline<Identity> {
    /// Start an empty pipeline that passes every element through.
    pub fn new() -> Self {
        Self { xform: identity() }
    }
}

impl Default for Pipeline<Identity> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X> Pipeline<X> {
    /// Append any transducer.
    pub fn then<Y>(self, next: Y) -> Pipeline<Compose<X, Y>> {
        Pipeline {
            xform: compose(self.xform, next),
        }
    }

    /// Transform every element
    pub fn map<F>(self, transform: F) -> Pipeline<Compose<X, Mapping<F>>> {
        self.then(mapping(transform))
    }

    /// Transform every element with a named selector
    pub fn map_by<F>(self, selector: Selector<F>) -> Pipeline<Compose<X, Mapping<F>>> {
        self.then(mapping_by(selector))
    }

    /// Keep elements matching the predicate
    pub fn filter<P>(self, predicate: P) -> Pipeline<Compose<X, Filtering<P>>> {
        self.then(filtering(predicate))
    }

    /// Keep elements for which the selector returns `true`
    pub fn filter_by<P>(self, selector: Selector<P>) -> Pipeline<Compose<X, Filtering<P>>> {
        self.then(filtering_by(selector))
    }

    /// Forward the first `n` elements, then stop
    pub fn take(self, n: usize) -> Pipeline<Compose<X, Taking>> {
        self.then(taking(n))
    }

    /// Flatten nested sequences
    pub fn cat(self) -> Pipeline<Compose<X, Catting>> {
        self.then(cat())
    }

    /// Map each element to a sequence and flatten
    pub fn mapcat<F>(self, transform: F) -> Pipeline<Compose<X, Compose<Mapping<F>, Catting>>> {
        self.then(mapcat(transform))
    }

    /// Map each element to a sequence with a named selector and flatten
    pub fn mapcat_by<F>(
        self,
        selector: Selector<F>,
    ) -> Pipeline<Compose<X, Compose<Mapping<F>, Catting>>> {
        self.then(mapcat_by(selector))
    }

    /// Unwrap the composed transducer.
    pub fn build(self) -> X {
        self.xform
    }
}

impl<R, X> Transducer<R> for Pipeline<X>
where
    X: Transducer<R>,
{
    type Output = X::Output;

    fn apply(&self, reducer: R) -> Self::Output {
        self.xform.apply(reducer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{reducer, Reducer, Step};
    use crate::reducers;
    use crate::{selector, transduce, transduce_str};

    #[test]
    fn empty_pipeline_is_identity() {
        let mut chain = Pipeline::new().apply(reducer(1, |acc: i32, x: i32| acc * x));
        assert_eq!(Reducer::<i32>::init(&mut chain), Some(1));
        assert_eq!(chain.step(2, 3), Step::Continue(6));
    }

    #[test]
    fn stages_run_in_listed_order() {
        let pipeline = Pipeline::new().take(2).map(|x: i32| x * 100);
        let out = transduce(pipeline, reducers::collect(), vec![1, 2, 3]).unwrap();
        assert_eq!(out, vec![100, 200]);
    }

    #[test]
    fn selector_stages() {
        let pipeline = Pipeline::new()
            .filter_by(selector!(char::is_ascii_alphabetic))
            .mapcat_by(selector!(char::to_lowercase));
        let out = transduce_str(pipeline, reducers::string(), "A1-bC").unwrap();
        assert_eq!(out, "abc");
    }

    #[test]
    fn mapcat_and_cat_stages() {
        let words = Pipeline::new()
            .mapcat_by(selector!(str::split_whitespace))
            .map(|w: &str| w.len());
        let total = transduce(words, reducers::sum(), vec!["a bb", "ccc"]).unwrap();
        assert_eq!(total, 6);

        let flattened = Pipeline::new().cat().mapcat(|x: i32| vec![x; 2]);
        let out = transduce(flattened, reducers::collect(), vec![vec![1], vec![2]]).unwrap();
        assert_eq!(out, vec![1, 1, 2, 2]);
    }

    #[test]
    fn build_returns_composed_transducer() {
        let xform = Pipeline::new().then(taking(1)).build();
        let out = transduce(xform, reducers::count(), vec!['x', 'y']).unwrap();
        assert_eq!(out, 1);
    }
}
