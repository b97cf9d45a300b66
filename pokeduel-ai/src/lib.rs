mod ai;
pub mod random;
pub mod weighted;

pub use ai::*;
