//! Builder API for ergonomic pipeline construction.
//!
//! This module provides a fluent builder and macros for composing
//! transducers without spelling out nested `Compose` types.

pub mod macros;
pub mod pipeline;

pub use pipeline::Pipeline;
