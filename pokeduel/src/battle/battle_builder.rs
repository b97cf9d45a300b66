use pokeduel_data::{
    Catalog,
    SpeciesData,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::{
        Battle,
        BattleEngineOptions,
        BattleMon,
        BattleOptions,
        Player,
    },
    error::BattleError,
    rng::PseudoRandomNumberGenerator,
};

/// A single roster entry, which names a species in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RosterEntry {
    /// Catalog number.
    Id(u32),
    /// Species name, matched case-insensitively.
    Name(String),
}

impl From<u32> for RosterEntry {
    fn from(value: u32) -> Self {
        Self::Id(value)
    }
}

impl From<&str> for RosterEntry {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl RosterEntry {
    fn resolve<'c>(&self, catalog: &'c Catalog) -> Result<&'c SpeciesData, BattleError> {
        match self {
            Self::Id(id) => catalog.find_by_id(*id),
            Self::Name(name) => catalog.find_by_name(name),
        }
        .map_err(BattleError::from)
    }
}

/// Player data for a [`BattleBuilder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleBuilderPlayerData {
    /// Player's display name.
    pub name: String,
    /// Species to battle with, in roster order. The first entry starts active.
    pub roster: Vec<RosterEntry>,
}

/// Options for building a new battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleBuilderOptions {
    #[serde(default)]
    pub battle: BattleOptions,
    /// The player that acts first.
    pub player_1: BattleBuilderPlayerData,
    /// The other player.
    pub player_2: BattleBuilderPlayerData,
}

/// Object for building a battle from catalog data.
///
/// Rosters are resolved against the catalog when the builder is created, so unknown species are
/// reported before any Mon is created.
#[derive(Debug)]
pub struct BattleBuilder<'c> {
    options: BattleOptions,
    players: [(String, Vec<&'c SpeciesData>); 2],
}

impl<'c> BattleBuilder<'c> {
    /// Constructs a new battle builder object.
    pub fn new(options: BattleBuilderOptions, catalog: &'c Catalog) -> Result<Self, BattleError> {
        let player_1 = Self::resolve_player(options.player_1, catalog)?;
        let player_2 = Self::resolve_player(options.player_2, catalog)?;
        Ok(Self {
            options: options.battle,
            players: [player_1, player_2],
        })
    }

    fn resolve_player(
        player: BattleBuilderPlayerData,
        catalog: &'c Catalog,
    ) -> Result<(String, Vec<&'c SpeciesData>), BattleError> {
        let roster = player
            .roster
            .iter()
            .map(|entry| entry.resolve(catalog))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((player.name, roster))
    }

    /// Builds a new battle instance using data from the builder.
    ///
    /// Mons are created in roster order, player 1 first, using the battle's random number
    /// generator.
    pub fn build(self, engine_options: BattleEngineOptions) -> Result<Battle, BattleError> {
        let mut prng = (engine_options.rng_factory)(self.options.seed);
        let [player_1, player_2] = self.players;
        let player_1 = Self::create_player(player_1, self.options.randomize_mons, prng.as_mut())?;
        let player_2 = Self::create_player(player_2, self.options.randomize_mons, prng.as_mut())?;
        Ok(Battle::new(player_1, player_2, prng, &engine_options))
    }

    fn create_player(
        (name, roster): (String, Vec<&'c SpeciesData>),
        randomize: bool,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Player, BattleError> {
        let roster = roster
            .into_iter()
            .map(|species| BattleMon::from_species(species, randomize, &mut *prng))
            .collect();
        Player::new(name, roster)
    }
}

#[cfg(test)]
mod battle_builder_test {
    use assert_matches::assert_matches;
    use pokeduel_test_utils::test_catalog;
    use pretty_assertions::assert_eq;

    use crate::{
        battle::{
            BattleBuilder,
            BattleBuilderOptions,
            BattleEngineOptions,
            RosterEntry,
            Side,
        },
        error::BattleError,
    };

    fn battle_builder_options() -> BattleBuilderOptions {
        serde_json::from_str(
            r#"{
                "battle": {
                    "seed": 3
                },
                "player_1": {
                    "name": "Red",
                    "roster": ["bulbasaur", 7]
                },
                "player_2": {
                    "name": "Blue",
                    "roster": [4]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_roster_entries() {
        let options = battle_builder_options();
        assert_eq!(
            options.player_1.roster,
            vec![RosterEntry::from("bulbasaur"), RosterEntry::from(7)]
        );
        assert_eq!(options.battle.seed, Some(3));
        assert!(!options.battle.randomize_mons);
    }

    #[test]
    fn builds_battle_from_catalog() {
        let catalog = test_catalog();
        let builder = BattleBuilder::new(battle_builder_options(), &catalog).unwrap();
        let mut battle = builder.build(BattleEngineOptions::default()).unwrap();
        assert_eq!(battle.player(Side::One).name(), "Red");
        assert_eq!(battle.player(Side::One).roster().len(), 2);
        assert_eq!(battle.active(Side::One).name(), "Bulbasaur");
        assert_eq!(battle.active(Side::Two).name(), "Charmander");
        assert_eq!(battle.prng_mut().initial_seed(), 3);
        assert_eq!(
            battle.new_logs().collect::<Vec<_>>(),
            vec![
                "battlestart",
                "player|p1|Red|2",
                "active|p1|Bulbasaur|45/45",
                "player|p2|Blue|1",
                "active|p2|Charmander|39/39",
            ]
        );
    }

    #[test]
    fn fails_for_unknown_species() {
        let catalog = test_catalog();
        let mut options = battle_builder_options();
        options.player_2.roster.push(RosterEntry::from("Missingno"));
        assert_matches!(
            BattleBuilder::new(options, &catalog),
            Err(BattleError::NotFound(_))
        );
        let mut options = battle_builder_options();
        options.player_2.roster.push(RosterEntry::from(9999));
        assert_matches!(
            BattleBuilder::new(options, &catalog),
            Err(BattleError::NotFound(_))
        );
    }

    #[test]
    fn fails_for_empty_roster() {
        let catalog = test_catalog();
        let mut options = battle_builder_options();
        options.player_1.roster.clear();
        let builder = BattleBuilder::new(options, &catalog).unwrap();
        assert_matches!(
            builder.build(BattleEngineOptions::default()).err(),
            Some(BattleError::InvalidState(_))
        );
    }
}
