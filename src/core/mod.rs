//! Core protocols of the reduction engine.
//!
//! This module contains the pieces every pipeline is made of:
//! - The `Step`/`Reduced` early-termination signal
//! - The `Reducer` protocol and reducers built from plain functions
//! - The `Transducer` protocol that decorates reducers
//! - Function-or-selector capabilities for transforms and predicates

mod callable;
mod reducer;
mod step;
mod transducer;

pub use callable::{Callable, Selector};
pub use reducer::{reducer, reducer_by, step_reducer, FnReducer, Reducer};
pub use step::{Reduced, Step};
pub use transducer::{identity, Identity, Transducer};
