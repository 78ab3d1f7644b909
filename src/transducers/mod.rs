//! Concrete transducers.
//!
//! Each transducer decorates a reducer with one kind of per-element behavior:
//! - `Mapping` transforms elements
//! - `Filtering` drops elements that fail a predicate
//! - `Taking` forwards a prefix and then stops the reduction
//! - `Catting` flattens nested sequences
//! - `Compose` chains two transducers in listed order

mod catting;
mod compose;
mod filtering;
mod mapping;
mod taking;

pub use catting::{cat, Catting, CattingReducer, PreservingReduced};
pub use compose::{compose, mapcat, mapcat_by, Compose};
pub use filtering::{filtering, filtering_by, Filtering, FilteringReducer};
pub use mapping::{mapping, mapping_by, Mapping, MappingReducer};
pub use taking::{taking, Taking, TakingReducer};
