mod error_assert;
mod fixtures;
mod log_assert;
mod rng;
mod setup;
mod test_battle_builder;

pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use fixtures::{
    bulbasaur_record,
    charmander_record,
    clefairy_record,
    magnemite_record,
    record_with_id,
    shadow_lugia_record,
    squirtle_record,
    test_catalog,
    test_catalog_records,
};
pub use log_assert::{
    assert_logs_eq,
    assert_new_logs_eq,
};
pub use rng::{
    ControlledRandomNumberGenerator,
    SequenceRandomNumberGenerator,
    get_controlled_rng_for_battle,
};
pub use setup::setup_test_environment;
pub use test_battle_builder::TestBattleBuilder;
