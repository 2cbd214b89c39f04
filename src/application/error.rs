//! Error taxonomy for the read-only wiki layer
//!
//! Missing records and unknown entity selectors are the only caller-facing
//! failures. Malformed pagination input is normalized upstream and empty
//! field values are silently skipped, so neither ever reaches this type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WikiError {
    /// Unknown entity-type selector or no record at the given key
    #[error("not found: {0}")]
    NotFound(&'static str),

    /// Unexpected record-store failure, propagated unchanged
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl WikiError {
    pub const UNKNOWN_ENTITY_TYPE: &'static str = "unknown entity type";
    pub const RECORD_ABSENT: &'static str = "record absent";
}
