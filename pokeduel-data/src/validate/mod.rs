//! Validation of raw catalog records into strict data.
//!
//! Every validator is a pure function that either fully succeeds or reports the first offending
//! field.

mod abilities;
mod bonus_metadata;
mod core_stats;
pub(crate) mod schema;
mod type_table;

pub use abilities::validate_ability_list;
pub use bonus_metadata::{
    BonusMetadata,
    validate_bonus_metadata,
};
pub use core_stats::{
    CoreStats,
    validate_core_stats,
};
pub use type_table::validate_type_table;

use serde_json::Value;

use crate::{
    DataError,
    coerce::{
        coerce_int,
        coerce_string,
        require_positive,
    },
};

/// Validates a catalog number.
pub fn validate_id(value: &Value) -> Result<u32, DataError> {
    positive_u32(value)
}

/// Validates a species name.
pub fn validate_name(value: &Value) -> Result<String, DataError> {
    coerce_string(value)
}

pub(crate) fn positive_u32(value: &Value) -> Result<u32, DataError> {
    let int = require_positive(coerce_int(value)?)?;
    u32::try_from(int).map_err(|_| DataError::InvalidRange(format!("{int} is too large")))
}
