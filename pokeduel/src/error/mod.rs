mod battle_error;
mod wrap;

pub use battle_error::{
    BattleError,
    invalid_range_error,
    invalid_state_error,
    not_found_error,
};
pub use wrap::WrapOptionError;
