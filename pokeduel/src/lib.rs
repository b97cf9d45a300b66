extern crate alloc;

pub mod battle;
pub mod error;
pub mod log;
pub mod rng;

pub use error::BattleError;
