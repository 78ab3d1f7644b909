//! Macros for ergonomic pipeline construction.

/// Compose any number of transducers, in the order elements flow through them.
///
/// `compose!(a, b, c)` is `compose(a, compose(b, c))`; a single argument is
/// returned as is.
///
/// # Example
///
/// ```
/// use transducers::{compose, filtering, mapping, reducers, taking, transduce};
///
/// let xform = compose!(
///     mapping(|x: i32| x * 2),
///     filtering(|x: &i32| *x > 4),
///     taking(2),
/// );
/// let out = transduce(xform, reducers::collect(), vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(out, vec![6, 8]);
/// ```
#[macro_export]
macro_rules! compose {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::transducers::compose($first, $crate::compose!($($rest),+))
    };
}

/// Build a [`Selector`](crate::core::Selector) named after the method path it refers to.
///
/// # Example
///
/// ```
/// use transducers::selector;
///
/// let upper = selector!(char::to_ascii_uppercase);
/// assert_eq!(upper.name(), "char::to_ascii_uppercase");
/// ```
#[macro_export]
macro_rules! selector {
    ($method:path) => {
        $crate::core::Selector::new(stringify!($method), $method)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{reducer, Reducer, Step, Transducer};
    use crate::transducers::{filtering, mapping, taking};

    #[test]
    fn compose_macro_keeps_listed_order() {
        let xform = compose!(
            mapping(|x: i32| x + 1),
            mapping(|x: i32| x * 10),
            filtering(|x: &i32| *x > 20),
        );
        let mut chain = xform.apply(reducer(0, |acc: i32, x: i32| acc + x));
        assert_eq!(chain.step(0, 1), Step::Continue(0));
        assert_eq!(chain.step(0, 2), Step::Continue(30));
    }

    #[test]
    fn compose_macro_accepts_single_transducer() {
        let xform = compose!(taking(1));
        let mut chain = xform.apply(reducer(0, |acc: i32, x: i32| acc + x));
        assert_eq!(Reducer::<i32>::init(&mut chain), Some(0));
        assert_eq!(chain.step(0, 4), Step::Continue(4));
        assert_eq!(chain.step(4, 5), Step::Reduced(4));
    }

    #[test]
    fn selector_macro_names_method_path() {
        let len = selector!(str::len);
        assert_eq!(len.name(), "str::len");
        assert_eq!((len.method())("abc"), 3);
    }
}
