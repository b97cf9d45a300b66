use serde::{
    Deserialize,
    Serialize,
};

use crate::rng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// Battle engine option for how the damage roll should be chosen in the damage calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomizeDamageRoll {
    /// Draw the damage roll from the random number generator.
    ///
    /// This is the default behavior.
    Randomize,
    /// Only use the maximum damage roll, without drawing.
    Max,
    /// Only use the minimum damage roll, without drawing.
    Min,
}

impl Default for RandomizeDamageRoll {
    fn default() -> Self {
        Self::Randomize
    }
}

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

/// Options for a single battle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOptions {
    /// Should gender, height, and weight of every Mon be randomized?
    #[serde(default)]
    pub randomize_mons: bool,
    /// The initial seed for random number generation.
    ///
    /// This can be used to effectively replay or control a battle.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Options that change how the battle engine itself behaves, which is not necessarily specific to
/// any individual battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEngineOptions {
    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,

    /// Describes how the damage roll should be chosen in the damage calculation.
    ///
    /// Useful for tests against the damage calculator to discover the minimum and maximum damage
    /// values.
    #[serde(default)]
    pub randomize_damage_roll: RandomizeDamageRoll,

    /// Should critical hits be rolled at all?
    ///
    /// If disabled, no critical roll is drawn and attacks are never critical.
    #[serde(default = "default_true")]
    pub allow_critical_hits: bool,
}

fn default_true() -> bool {
    true
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            rng_factory: default_rng_factory(),
            randomize_damage_roll: RandomizeDamageRoll::Randomize,
            allow_critical_hits: true,
        }
    }
}
