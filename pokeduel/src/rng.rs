//! Random number generation for battles.

pub use pokeduel_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
    rand_util,
};
