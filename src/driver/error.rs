//! Driver error types.

use thiserror::Error;

/// Errors that can occur when starting a reduction
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransduceError {
    #[error("No seed supplied and no reducer in the chain provides one. Pass a seed explicitly or use a reducer with init()")]
    MissingSeed,
}
