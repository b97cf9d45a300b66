use anyhow::Result;
use pokeduel::battle::{
    Battle,
    BattleBuilder,
    BattleBuilderOptions,
    BattleBuilderPlayerData,
    BattleEngineOptions,
    BattleOptions,
    RandomizeDamageRoll,
    RosterEntry,
};
use pokeduel_data::Catalog;

use crate::ControlledRandomNumberGenerator;

/// Battle builder object for integration tests.
pub struct TestBattleBuilder {
    options: BattleBuilderOptions,
    engine_options: BattleEngineOptions,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            options: BattleBuilderOptions {
                battle: BattleOptions::default(),
                player_1: BattleBuilderPlayerData {
                    name: "Player 1".to_owned(),
                    roster: Vec::new(),
                },
                player_2: BattleBuilderPlayerData {
                    name: "Player 2".to_owned(),
                    roster: Vec::new(),
                },
            },
            engine_options: BattleEngineOptions::default(),
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] from the battle builder.
    pub fn build(mut self, catalog: &Catalog) -> Result<Battle> {
        if self.controlled_rng {
            self.engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        let battle = BattleBuilder::new(self.options, catalog)?.build(self.engine_options)?;
        Ok(battle)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.battle.seed = Some(seed);
        self
    }

    pub fn with_randomized_mons(mut self, randomize: bool) -> Self {
        self.options.battle.randomize_mons = randomize;
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_damage_roll(mut self, randomize: RandomizeDamageRoll) -> Self {
        self.engine_options.randomize_damage_roll = randomize;
        self
    }

    pub fn with_critical_hits(mut self, allow: bool) -> Self {
        self.engine_options.allow_critical_hits = allow;
        self
    }

    pub fn with_player_1<I, E>(mut self, name: &str, roster: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<RosterEntry>,
    {
        self.options.player_1 = Self::player(name, roster);
        self
    }

    pub fn with_player_2<I, E>(mut self, name: &str, roster: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<RosterEntry>,
    {
        self.options.player_2 = Self::player(name, roster);
        self
    }

    fn player<I, E>(name: &str, roster: I) -> BattleBuilderPlayerData
    where
        I: IntoIterator<Item = E>,
        E: Into<RosterEntry>,
    {
        BattleBuilderPlayerData {
            name: name.to_owned(),
            roster: roster.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for TestBattleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
