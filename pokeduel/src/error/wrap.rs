use std::fmt::{
    Arguments,
    Display,
};

use crate::error::{
    BattleError,
    invalid_state_error,
    not_found_error,
};

/// Wraps an [`Option`] into a result producing a [`BattleError`].
pub trait WrapOptionError<T> {
    /// Wraps the object into a [`Result<T, BattleError>`], with a
    /// [`BattleError::InvalidState`] behind the scenes.
    fn wrap_expectation<M>(self, message: M) -> Result<T, BattleError>
    where
        M: Display;

    /// Wraps the object into a [`Result<T, BattleError>`], with a
    /// [`BattleError::NotFound`] behind the scenes.
    fn wrap_not_found_error<M>(self, target: M) -> Result<T, BattleError>
    where
        M: Display;

    /// Same as [`WrapOptionError::wrap_not_found_error`], with a formatted target.
    fn wrap_not_found_error_with_format<'a>(self, args: Arguments<'a>) -> Result<T, BattleError>;
}

impl<T> WrapOptionError<T> for Option<T> {
    fn wrap_expectation<M>(self, message: M) -> Result<T, BattleError>
    where
        M: Display,
    {
        self.ok_or_else(|| invalid_state_error(message))
    }

    fn wrap_not_found_error<M>(self, target: M) -> Result<T, BattleError>
    where
        M: Display,
    {
        self.ok_or_else(|| not_found_error(target))
    }

    fn wrap_not_found_error_with_format<'a>(self, args: Arguments<'a>) -> Result<T, BattleError> {
        self.ok_or_else(|| not_found_error(args))
    }
}

#[cfg(test)]
mod wrap_test {
    use pretty_assertions::assert_eq;

    use crate::error::{
        BattleError,
        WrapOptionError,
    };

    #[test]
    fn wraps_missing_values() {
        assert_eq!(Some(1).wrap_not_found_error("mon"), Ok(1));
        assert_eq!(
            None::<u32>.wrap_not_found_error("mon"),
            Err(BattleError::NotFound("mon".to_owned()))
        );
        assert_eq!(
            None::<u32>.wrap_not_found_error_with_format(format_args!("roster entry {}", 4)),
            Err(BattleError::NotFound("roster entry 4".to_owned()))
        );
        assert_eq!(
            None::<u32>.wrap_expectation("no active mon"),
            Err(BattleError::InvalidState("no active mon".to_owned()))
        );
    }
}
