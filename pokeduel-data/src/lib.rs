extern crate alloc;

mod catalog;
pub mod coerce;
mod error;
mod mons;
pub mod validate;

#[cfg(test)]
mod test_util;

pub use catalog::*;
pub use error::*;
pub use mons::*;
pub use validate::{
    BonusMetadata,
    CoreStats,
};
