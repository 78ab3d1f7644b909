//! Function-or-selector capabilities used by transforms, predicates and steps.
//!
//! A transform can be given either as an arbitrary closure or as a named
//! method reference such as `str::len`. The choice is made once, when the
//! transducer is constructed, and dispatched by `match` afterwards.

use std::fmt;

/// A named method reference, invoked on the input.
///
/// The name is kept for diagnostics only; calling a selector simply calls
/// the referenced function. Build one with [`selector!`](crate::selector).
///
/// # Example
///
/// ```rust
/// use transducers::{selector, Selector};
///
/// let len = selector!(str::len);
/// assert_eq!(len.name(), "str::len");
/// assert_eq!((len.method())("four"), 4);
///
/// let same = Selector::new("str::len", str::len);
/// assert_eq!(same.name(), len.name());
/// ```
#[derive(Clone, Copy)]
pub struct Selector<F> {
    name: &'static str,
    method: F,
}

impl<F> Selector<F> {
    pub fn new(name: &'static str, method: F) -> Self {
        Self { name, method }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The referenced function.
    pub fn method(&self) -> &F {
        &self.method
    }
}

impl<F> fmt::Debug for Selector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Selector").field(&self.name).finish()
    }
}

/// Either an arbitrary function or a named selector.
#[derive(Clone, Copy)]
pub enum Callable<F> {
    Function(F),
    Selector(Selector<F>),
}

impl<F> Callable<F> {
    /// Name of the selector, if this callable was built from one.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Function(_) => None,
            Self::Selector(selector) => Some(selector.name),
        }
    }

    pub(crate) fn get_mut(&mut self) -> &mut F {
        match self {
            Self::Function(f) => f,
            Self::Selector(selector) => &mut selector.method,
        }
    }
}

impl<F> fmt::Debug for Callable<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Selector(selector) => selector.fmt(f),
        }
    }
}
