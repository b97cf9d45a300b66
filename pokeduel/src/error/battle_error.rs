use std::fmt::Display;

use pokeduel_data::LookupError;
use thiserror::Error;

/// An error produced by a battle or while building one.
///
/// Battle errors are contract violations by the caller, such as acting out of turn. The battle is
/// never mutated by an action that fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("unknown type \"{0}\"")]
    UnknownType(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("invalid range: {0}")]
    InvalidRange(String),
}

impl From<LookupError> for BattleError {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::NotFound(target) => Self::NotFound(target),
            LookupError::UnknownType(name) => Self::UnknownType(name),
            LookupError::InvalidQuery(error) => Self::InvalidRange(error.to_string()),
        }
    }
}

/// Helper for a [`BattleError::InvalidState`].
pub fn invalid_state_error<M>(message: M) -> BattleError
where
    M: Display,
{
    BattleError::InvalidState(message.to_string())
}

/// Helper for a [`BattleError::NotFound`].
pub fn not_found_error<M>(target: M) -> BattleError
where
    M: Display,
{
    BattleError::NotFound(target.to_string())
}

/// Helper for a [`BattleError::InvalidRange`].
pub fn invalid_range_error<M>(message: M) -> BattleError
where
    M: Display,
{
    BattleError::InvalidRange(message.to_string())
}
