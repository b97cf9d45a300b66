use serde::Serialize;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    battle::{
        ActionKind,
        ActionOutcome,
        AttackOutcome,
        BattleAction,
        BattleEngineOptions,
        BattleMon,
        BlockOutcome,
        Player,
        RandomizeDamageRoll,
        SwitchOutcome,
        calculations,
    },
    battle_event,
    error::{
        BattleError,
        invalid_state_error,
    },
    log::{
        BattleEvent,
        EventLog,
    },
    rng::PseudoRandomNumberGenerator,
};

/// One of the two sides of a battle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Side {
    #[string = "p1"]
    One,
    #[string = "p2"]
    Two,
}

impl Side {
    /// The opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// The index of the side, for indexing per-side data.
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// The state of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleState {
    /// Waiting for the given side to act.
    Awaiting(Side),
    /// The battle is over.
    Finished { winner: Side },
}

/// A headless battle between two players.
///
/// Players alternate single actions, starting with [`Side::One`]. When an attack causes a Mon to
/// faint, its player must switch in a replacement before doing anything else, and then acts
/// immediately. The battle ends when one player has no Mons left.
///
/// Every action is validated before anything is mutated, so a failed action leaves the battle
/// exactly as it was.
pub struct Battle {
    players: [Player; 2],
    state: BattleState,
    required_switch: Option<Side>,
    randomize_damage_roll: RandomizeDamageRoll,
    allow_critical_hits: bool,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    log: EventLog,
}

impl Battle {
    /// Creates a new battle between two players.
    ///
    /// The random number generator should be the same one used to create the players' Mons, so
    /// that a single seed replays the whole battle.
    pub fn new(
        player_one: Player,
        player_two: Player,
        prng: Box<dyn PseudoRandomNumberGenerator>,
        engine_options: &BattleEngineOptions,
    ) -> Self {
        let mut battle = Self {
            players: [player_one, player_two],
            state: BattleState::Awaiting(Side::One),
            required_switch: None,
            randomize_damage_roll: engine_options.randomize_damage_roll,
            allow_critical_hits: engine_options.allow_critical_hits,
            prng,
            log: EventLog::new(),
        };
        battle.log_start();
        battle
    }

    fn log_start(&mut self) {
        self.log.push(battle_event!("battlestart"));
        for side in [Side::One, Side::Two] {
            let player = self.player(side);
            let event = battle_event!("player", side, player.name(), player.roster().len());
            let active = Self::active_event(side, player.active());
            self.log.push_extend([event, active]);
        }
        log::info!(
            "Started battle between {} and {} with seed {}",
            self.players[0].name(),
            self.players[1].name(),
            self.prng.initial_seed()
        );
    }

    fn active_event(side: Side, mon: &BattleMon) -> BattleEvent {
        battle_event!(
            "active",
            side,
            mon.name(),
            format!("{}/{}", mon.hp(), mon.max_hp())
        )
    }

    /// The current state of the battle.
    pub fn state(&self) -> BattleState {
        self.state
    }

    /// The side whose turn it is, if the battle is not over.
    pub fn turn(&self) -> Option<Side> {
        match self.state {
            BattleState::Awaiting(side) => Some(side),
            BattleState::Finished { .. } => None,
        }
    }

    /// The winner of the battle, if the battle is over.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            BattleState::Awaiting(_) => None,
            BattleState::Finished { winner } => Some(winner),
        }
    }

    /// Checks if the battle is over.
    pub fn finished(&self) -> bool {
        self.winner().is_some()
    }

    /// The side that must switch out a fainted Mon before doing anything else.
    pub fn required_switch(&self) -> Option<Side> {
        self.required_switch
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    /// The active Mon of the given side.
    pub fn active(&self, side: Side) -> &BattleMon {
        self.player(side).active()
    }

    /// The battle's event log.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Returns all logs added since the last call to this method.
    pub fn new_logs(&mut self) -> impl Iterator<Item = &str> {
        self.log.read_out()
    }

    /// Returns all logs.
    pub fn full_log(&self) -> impl Iterator<Item = &str> {
        self.log.logs()
    }

    /// The battle's random number generator.
    ///
    /// Primarily useful for tests that replace the generator with a controlled one.
    pub fn prng_mut(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// Applies an action for the given side.
    pub fn apply(&mut self, side: Side, action: BattleAction) -> Result<ActionOutcome, BattleError> {
        match action {
            BattleAction::BasicAttack => self.attack_basic(side).map(ActionOutcome::Attack),
            BattleAction::SpecialAttack => self.attack_special(side).map(ActionOutcome::Attack),
            BattleAction::Block => self.block(side).map(ActionOutcome::Block),
            BattleAction::Switch(index) => {
                self.switch_active(side, index).map(ActionOutcome::Switch)
            }
        }
    }

    /// Attacks the opposing active Mon with a basic attack, which ignores types.
    ///
    /// An attack draws at most two values from the battle's random number generator, in this
    /// order:
    /// 1. The critical roll, `[0, 100]`, critical below 10. Skipped when critical hits are
    ///    disabled.
    /// 1. The damage roll, `[217, 255]`. Skipped unless the damage roll is randomized.
    ///
    /// Nothing is drawn if the action fails.
    pub fn attack_basic(&mut self, side: Side) -> Result<AttackOutcome, BattleError> {
        self.attack(side, ActionKind::Basic)
    }

    /// Attacks the opposing active Mon with a special attack, which is scaled by the attacker's
    /// type table against the defender's types.
    ///
    /// Draws the same values as [`Battle::attack_basic`]. An unknown type fails the attack before
    /// anything is drawn.
    pub fn attack_special(&mut self, side: Side) -> Result<AttackOutcome, BattleError> {
        self.attack(side, ActionKind::Special)
    }

    /// Raises the defense of the active Mon.
    ///
    /// Each block raises defense by less than the last.
    pub fn block(&mut self, side: Side) -> Result<BlockOutcome, BattleError> {
        self.check_combat_action(side)?;
        let mon = self.player(side).active();
        let old_defense = mon.defense();
        let new_defense = calculations::defense_growth(old_defense, mon.growth_iteration());
        let mon = self.player_mut(side).active_mut();
        mon.set_defense(new_defense)?;
        mon.decay_growth_iteration();
        mon.record_action(ActionKind::Block);
        log::debug!(
            "{side} {} blocked: defense {old_defense} -> {new_defense}",
            mon.name()
        );
        let event = battle_event!("block", side, mon.name(), old_defense, new_defense);
        self.log.push(event);
        self.state = BattleState::Awaiting(side.opponent());
        Ok(BlockOutcome {
            side,
            old_defense,
            new_defense,
        })
    }

    /// Switches the active Mon to the roster entry at the given index.
    ///
    /// A voluntary switch ends the turn. A switch that replaces a fainted Mon does not, so the
    /// player acts again with the new Mon.
    pub fn switch_active(&mut self, side: Side, index: usize) -> Result<SwitchOutcome, BattleError> {
        self.check_turn(side)?;
        let forced = self.required_switch == Some(side);
        let from = self.player_mut(side).switch_to(index)?;
        if forced {
            self.required_switch = None;
        } else {
            self.state = BattleState::Awaiting(side.opponent());
        }
        let mon = self.active(side);
        log::debug!(
            "{side} switched to {} (forced: {forced})",
            mon.name()
        );
        let event = battle_event!(
            "switch",
            side,
            index,
            mon.name(),
            format!("{}/{}", mon.hp(), mon.max_hp())
        )
        .with_flag("forced", forced);
        self.log.push(event);
        Ok(SwitchOutcome {
            side,
            from,
            to: index,
            forced,
        })
    }

    fn check_turn(&self, side: Side) -> Result<(), BattleError> {
        match self.state {
            BattleState::Finished { winner } => Err(invalid_state_error(format!(
                "battle is over, {winner} won"
            ))),
            BattleState::Awaiting(turn) if turn != side => {
                Err(invalid_state_error(format!("it is not {side}'s turn")))
            }
            BattleState::Awaiting(_) => Ok(()),
        }
    }

    fn check_combat_action(&self, side: Side) -> Result<(), BattleError> {
        self.check_turn(side)?;
        if self.required_switch == Some(side) {
            return Err(invalid_state_error(format!(
                "{side} must switch out a fainted Mon"
            )));
        }
        Ok(())
    }

    fn roll_critical(&mut self) -> bool {
        self.allow_critical_hits
            && self
                .prng
                .chance(calculations::CRITICAL_THRESHOLD, calculations::CRITICAL_OUTCOMES)
    }

    fn roll_damage(&mut self) -> u64 {
        match self.randomize_damage_roll {
            RandomizeDamageRoll::Randomize => self
                .prng
                .range_inclusive(calculations::MIN_DAMAGE_ROLL, calculations::MAX_DAMAGE_ROLL),
            RandomizeDamageRoll::Max => calculations::MAX_DAMAGE_ROLL,
            RandomizeDamageRoll::Min => calculations::MIN_DAMAGE_ROLL,
        }
    }

    fn attack(&mut self, side: Side, kind: ActionKind) -> Result<AttackOutcome, BattleError> {
        self.check_combat_action(side)?;
        let target = side.opponent();
        let attacker = self.active(side);
        let defender = self.active(target);
        let type_multiplier = match kind {
            ActionKind::Special => {
                calculations::type_multiplier(attacker.species(), defender.species())?
            }
            _ => 1.0,
        };
        let stab = calculations::stab(attacker.last_action(), kind);
        let attack = attacker.attack();
        let defense = defender.defense();

        let critical = self.roll_critical();
        let random_roll = self.roll_damage();
        let damage = calculations::calculate_damage(
            attack,
            defense,
            stab,
            critical,
            random_roll,
            type_multiplier,
        );

        let defender = self.player_mut(target).active_mut();
        defender.apply_damage(damage)?;
        let defender_hp = defender.hp();
        let defender_fainted = !defender.alive();
        self.player_mut(side).active_mut().record_action(kind);

        let attacker = self.active(side);
        let defender = self.active(target);
        log::debug!(
            "{side} {} used a {kind} attack on {target} {} for {damage} damage (critical: {critical}, stab: {stab}, type: {type_multiplier})",
            attacker.name(),
            defender.name(),
        );
        let attack_event = battle_event!("attack", side, kind, attacker.name(), defender.name());
        let damage_event = battle_event!(
            "damage",
            target,
            defender.name(),
            damage,
            format!("{}/{}", defender_hp, defender.max_hp())
        )
        .with_flag("crit", critical)
        .with_flag("stab", stab > 1.0)
        .with_flag("supereffective", type_multiplier > 1.0)
        .with_flag("resisted", type_multiplier < 1.0);
        self.log.push_extend([attack_event, damage_event]);

        if defender_fainted {
            self.handle_faint(side);
        } else {
            self.state = BattleState::Awaiting(target);
        }

        Ok(AttackOutcome {
            side,
            kind,
            damage,
            critical,
            stab,
            type_multiplier,
            defender_hp,
            defender_fainted,
        })
    }

    fn handle_faint(&mut self, attacker: Side) {
        let target = attacker.opponent();
        let player = self.player_mut(target);
        player.record_faint();
        let remaining = player.remaining();
        let event = battle_event!("faint", target, player.active().name());
        log::debug!(
            "{target} {} fainted, {remaining} remaining",
            player.active().name()
        );
        self.log.push(event);
        if remaining == 0 {
            self.state = BattleState::Finished { winner: attacker };
            self.log.push(battle_event!("win", attacker));
            log::info!(
                "Battle finished, {attacker} ({}) won",
                self.player(attacker).name()
            );
        } else {
            self.required_switch = Some(target);
            self.state = BattleState::Awaiting(target);
        }
    }
}
