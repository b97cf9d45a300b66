use pokeduel::{
    BattleError,
    battle::{
        Battle,
        BattleAction,
        BattleMon,
        Side,
    },
    error::{
        WrapOptionError,
        invalid_state_error,
    },
    rng::{
        PseudoRandomNumberGenerator,
        rand_util,
    },
};

/// The context of a bot making a choice in a battle.
///
/// The battle is borrowed immutably, so making a choice can never change it.
#[derive(Clone, Copy)]
pub struct AiContext<'b> {
    pub battle: &'b Battle,
    pub side: Side,
}

impl<'b> AiContext<'b> {
    pub fn new(battle: &'b Battle, side: Side) -> Self {
        Self { battle, side }
    }

    /// The Mon the bot is currently fighting with.
    pub fn active(&self) -> &'b BattleMon {
        self.battle.active(self.side)
    }

    /// The Mon the bot is currently fighting against.
    pub fn opponent(&self) -> &'b BattleMon {
        self.battle.active(self.side.opponent())
    }

    /// Whether the bot must switch out a fainted Mon before doing anything else.
    pub fn must_switch(&self) -> bool {
        self.battle.required_switch() == Some(self.side)
    }

    /// Checks that the bot is allowed to act.
    pub fn check_turn(&self) -> Result<(), BattleError> {
        if let Some(winner) = self.battle.winner() {
            return Err(invalid_state_error(format!(
                "cannot choose an action, {winner} already won"
            )));
        }
        if self.battle.turn() != Some(self.side) {
            return Err(invalid_state_error(format!(
                "cannot choose an action, it is not {}'s turn",
                self.side
            )));
        }
        Ok(())
    }
}

/// A decision maker for one side of a battle.
pub trait BattleAi {
    /// Makes a choice given the current context of the battle.
    ///
    /// Fails if the side cannot act.
    fn make_choice(&mut self, context: AiContext) -> Result<BattleAction, BattleError>;
}

/// Picks a random alive reserve Mon to replace a fainted one.
pub(crate) fn choose_replacement(
    prng: &mut dyn PseudoRandomNumberGenerator,
    context: &AiContext,
) -> Result<BattleAction, BattleError> {
    let candidates = context
        .battle
        .player(context.side)
        .switch_candidates()
        .collect::<Vec<_>>();
    let index = rand_util::sample_slice(prng, &candidates)
        .wrap_expectation(format_args!("{} has no Mon to switch in", context.side))?;
    log::debug!("{} switches to roster entry {index}", context.side);
    Ok(BattleAction::Switch(*index))
}
