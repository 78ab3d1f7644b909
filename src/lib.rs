//! Transducers: composable, source-independent transformation pipelines
//!
//! A pipeline is built once from transducers (map, filter, take, flatten)
//! without knowing where its elements come from or how they will be
//! reduced. A single driver then runs it against any finite sequence,
//! including the characters of a string, into any base reducer.
//!
//! # Core Concepts
//!
//! - **Reducer**: a seed, a step function and an optional finalizer
//! - **Transducer**: a reusable value that decorates a reducer with per-element behavior
//! - **Reduced**: the signal that ends a reduction early, even from inside a flattened sequence
//! - **Driver**: `transduce` builds the reducer chain and steps it over a sequence
//!
//! # Example
//!
//! ```rust
//! use transducers::{cat, compose, mapping, reducers, taking, transduce, transduce_str};
//!
//! // Flatten, then stop after three elements; `4` onward is never looked at.
//! let nested = vec![vec![1, 2], vec![3, 4, 5], vec![6]];
//! let firsts = transduce(compose(cat(), taking(3)), reducers::collect(), nested).unwrap();
//! assert_eq!(firsts, vec![1, 2, 3]);
//!
//! // The same transducer shape works over characters.
//! let shout = transduce_str(mapping(|c: char| c.to_ascii_uppercase()), reducers::string(), "abc");
//! assert_eq!(shout.unwrap(), "ABC");
//! ```

pub mod builder;
pub mod core;
pub mod driver;
pub mod reducers;
pub mod transducers;

// Re-export commonly used types
pub use core::{
    identity, reducer, reducer_by, step_reducer, FnReducer, Identity, Reduced, Reducer, Selector,
    Step, Transducer,
};
pub use driver::{transduce, transduce_str, transduce_str_with, transduce_with, TransduceError};
pub use transducers::{
    cat, compose, filtering, filtering_by, mapcat, mapcat_by, mapping, mapping_by, taking,
};
