use crate::registry::TowerId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RfLinkError {
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Typed outcome of a failed link completion.
///
/// These are not faults: the registry stays usable and the pending
/// selection is back to idle whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkRejection {
    #[error("cannot link towers with different frequencies ({a} GHz vs {b} GHz)")]
    FrequencyMismatch { a: f64, b: f64 },

    #[error("cannot link {0} to itself")]
    SelfLink(TowerId),

    #[error("no tower selected to link from")]
    NoPendingSelection,

    #[error("{0} not found")]
    NotFound(TowerId),
}
