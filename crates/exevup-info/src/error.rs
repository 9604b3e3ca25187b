use exevup_version::{BumpVersionError, ParseVersionError};
use thiserror::Error;

use crate::Slot;

/// Top-level error type for version info operations
#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not decode version info: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Could not encode version info: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Malformed {slot} version string")]
    Resolve {
        slot: Slot,
        #[source]
        source: ParseVersionError,
    },

    #[error("Cannot bump {slot} version")]
    Bump {
        slot: Slot,
        #[source]
        source: BumpVersionError,
    },
}
