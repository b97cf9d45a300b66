use pokeduel::{
    BattleError,
    battle::{
        BattleAction,
        calculations,
    },
    rng::{
        PseudoRandomNumberGenerator,
        rand_util,
    },
};

use crate::{
    AiContext,
    BattleAi,
    ai::choose_replacement,
};

/// A bot where decisions are made uniformly at random.
///
/// Special attacks are left out when the type matchup cannot be computed.
pub struct RandomBot {
    prng: Box<dyn PseudoRandomNumberGenerator>,
}

impl RandomBot {
    pub fn new(prng: Box<dyn PseudoRandomNumberGenerator>) -> Self {
        Self { prng }
    }
}

impl BattleAi for RandomBot {
    fn make_choice(&mut self, context: AiContext) -> Result<BattleAction, BattleError> {
        context.check_turn()?;
        if context.must_switch() {
            return choose_replacement(self.prng.as_mut(), &context);
        }
        let mut choices = vec![BattleAction::BasicAttack, BattleAction::Block];
        if calculations::type_multiplier(context.active().species(), context.opponent().species())
            .is_ok()
        {
            choices.push(BattleAction::SpecialAttack);
        }
        let choice = rand_util::sample_slice(self.prng.as_mut(), &choices)
            .copied()
            .unwrap_or(BattleAction::BasicAttack);
        log::debug!("{} randomly chose {choice:?}", context.side);
        Ok(choice)
    }
}
