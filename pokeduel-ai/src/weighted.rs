use pokeduel::{
    BattleError,
    battle::{
        BattleAction,
        BattleMon,
        calculations,
    },
    rng::{
        PseudoRandomNumberGenerator,
        rand_util,
    },
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    AiContext,
    BattleAi,
    ai::choose_replacement,
};

/// Tuning for a [`WeightedBot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotOptions {
    /// Base weight of a basic attack.
    pub basic_weight: u64,
    /// Base weight of a block.
    pub block_weight: u64,
    /// Base weight of a special attack.
    pub special_weight: u64,
    /// The active Mon's HP ratio at or below which blocking is boosted.
    pub low_hp_ratio: f64,
    /// Weight added to blocking when HP is low.
    pub block_boost: u64,
    /// Type multiplier at or above which special attacks are boosted.
    pub strong_multiplier: f64,
    /// Weight added to special attacks when the matchup is strong.
    pub special_boost: u64,
    /// Type multiplier at or below which special attacks are never chosen.
    pub weak_multiplier: f64,
}

impl Default for BotOptions {
    fn default() -> Self {
        Self {
            basic_weight: 50,
            block_weight: 20,
            special_weight: 30,
            low_hp_ratio: 0.3,
            block_boost: 30,
            strong_multiplier: 2.0,
            special_boost: 40,
            weak_multiplier: 0.5,
        }
    }
}

const CHOICES: [BattleAction; 3] = [
    BattleAction::BasicAttack,
    BattleAction::Block,
    BattleAction::SpecialAttack,
];

/// A bot that makes a weighted random choice between attacking and blocking.
///
/// Weights shift with the active Mon's HP and with the special attack's type matchup. After a
/// faint, the bot switches to a random alive reserve Mon.
pub struct WeightedBot {
    prng: Box<dyn PseudoRandomNumberGenerator>,
    options: BotOptions,
}

impl WeightedBot {
    pub fn new(prng: Box<dyn PseudoRandomNumberGenerator>, options: BotOptions) -> Self {
        Self { prng, options }
    }

    pub fn options(&self) -> &BotOptions {
        &self.options
    }

    /// Weights of a basic attack, a block, and a special attack, in that order.
    pub fn weights(&self, active: &BattleMon, opponent: &BattleMon) -> [u64; 3] {
        let mut basic = self.options.basic_weight;
        let mut block = self.options.block_weight;
        let mut special = self.options.special_weight;

        let hp_ratio = active.hp() as f64 / active.max_hp() as f64;
        if hp_ratio <= self.options.low_hp_ratio {
            block += self.options.block_boost;
        }

        match calculations::type_multiplier(active.species(), opponent.species()) {
            Ok(multiplier) if multiplier <= self.options.weak_multiplier => special = 0,
            Ok(multiplier) if multiplier >= self.options.strong_multiplier => {
                special += self.options.special_boost
            }
            Ok(_) => (),
            Err(error) => {
                log::debug!("{} cannot use a special attack: {error}", active.name());
                special = 0;
            }
        }

        if basic == 0 && block == 0 && special == 0 {
            basic = 1;
        }
        [basic, block, special]
    }
}

impl BattleAi for WeightedBot {
    fn make_choice(&mut self, context: AiContext) -> Result<BattleAction, BattleError> {
        context.check_turn()?;
        if context.must_switch() {
            return choose_replacement(self.prng.as_mut(), &context);
        }
        let weights = self.weights(context.active(), context.opponent());
        let choice = rand_util::weighted_index(self.prng.as_mut(), &weights)
            .and_then(|index| CHOICES.get(index))
            .copied()
            .unwrap_or(BattleAction::BasicAttack);
        log::debug!(
            "{} chose {choice:?} with weights {weights:?} for {}",
            context.side,
            context.active().name()
        );
        Ok(choice)
    }
}
