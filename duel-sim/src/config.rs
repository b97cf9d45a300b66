use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use anyhow::{
    Context,
    Result,
    bail,
};
use pokeduel::battle::{
    BattleBuilderOptions,
    BattleBuilderPlayerData,
    BattleEngineOptions,
    BattleOptions,
    RandomizeDamageRoll,
    RosterEntry,
};
use pokeduel_ai::weighted::BotOptions;
use serde::{
    Deserialize,
    Serialize,
};

fn default_player_1() -> BattleBuilderPlayerData {
    BattleBuilderPlayerData {
        name: "Red".to_owned(),
        roster: vec![
            RosterEntry::from("Bulbasaur"),
            RosterEntry::from("Charmander"),
            RosterEntry::from("Squirtle"),
        ],
    }
}

fn default_player_2() -> BattleBuilderPlayerData {
    BattleBuilderPlayerData {
        name: "Blue".to_owned(),
        roster: vec![
            RosterEntry::from("Squirtle"),
            RosterEntry::from("Bulbasaur"),
            RosterEntry::from("Charmander"),
        ],
    }
}

fn default_max_actions() -> usize {
    1000
}

/// Configuration for a simulated battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Path to the catalog file.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_player_1")]
    pub player_1: BattleBuilderPlayerData,
    #[serde(default = "default_player_2")]
    pub player_2: BattleBuilderPlayerData,
    /// Seed for the battle and both bots.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub randomize_mons: bool,
    #[serde(default)]
    pub randomize_damage_roll: RandomizeDamageRoll,
    #[serde(default)]
    pub bot: BotOptions,
    /// The battle is abandoned after this many actions.
    #[serde(default = "default_max_actions")]
    pub max_actions: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            player_1: default_player_1(),
            player_2: default_player_2(),
            seed: None,
            randomize_mons: false,
            randomize_damage_roll: RandomizeDamageRoll::default(),
            bot: BotOptions::default(),
            max_actions: default_max_actions(),
        }
    }
}

impl SimConfig {
    /// Reads a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if path.is_dir() {
            bail!("config path {} is a directory", path.display());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Resolves the catalog path.
    ///
    /// A path from the command line or its environment variable wins over the configuration file.
    pub fn resolve_catalog_path(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        override_path
            .or_else(|| self.catalog_path.clone())
            .context("no catalog path given on the command line, in POKEDUEL_CATALOG, or in the config")
    }

    pub fn battle_options(&self) -> BattleBuilderOptions {
        BattleBuilderOptions {
            battle: BattleOptions {
                randomize_mons: self.randomize_mons,
                seed: self.seed,
            },
            player_1: self.player_1.clone(),
            player_2: self.player_2.clone(),
        }
    }

    pub fn engine_options(&self) -> BattleEngineOptions {
        BattleEngineOptions {
            randomize_damage_roll: self.randomize_damage_roll,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod config_test {
    use std::path::PathBuf;

    use pokeduel::battle::{
        RandomizeDamageRoll,
        RosterEntry,
    };
    use pretty_assertions::assert_eq;

    use crate::config::SimConfig;

    #[test]
    fn fills_defaults_for_missing_fields() {
        let config: SimConfig = serde_json::from_str(
            r#"{
                "seed": 12,
                "player_2": {
                    "name": "Green",
                    "roster": [25, "Eevee"]
                },
                "randomize_damage_roll": "max",
                "bot": {
                    "block_weight": 0
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.player_1.name, "Red");
        assert_eq!(config.player_1.roster.len(), 3);
        assert_eq!(
            config.player_2.roster,
            vec![RosterEntry::Id(25), RosterEntry::from("Eevee")]
        );
        assert_eq!(config.randomize_damage_roll, RandomizeDamageRoll::Max);
        assert_eq!(config.bot.block_weight, 0);
        assert_eq!(config.bot.basic_weight, 50);
        assert_eq!(config.max_actions, 1000);

        let options = config.battle_options();
        assert_eq!(options.battle.seed, Some(12));
        assert_eq!(options.player_2.name, "Green");
        assert_eq!(
            config.engine_options().randomize_damage_roll,
            RandomizeDamageRoll::Max
        );
    }

    #[test]
    fn command_line_catalog_path_wins() {
        let config = SimConfig {
            catalog_path: Some(PathBuf::from("config.json")),
            ..Default::default()
        };
        assert_eq!(
            config
                .resolve_catalog_path(Some(PathBuf::from("cli.json")))
                .unwrap(),
            PathBuf::from("cli.json")
        );
        assert_eq!(
            config.resolve_catalog_path(None).unwrap(),
            PathBuf::from("config.json")
        );
    }

    #[test]
    fn fails_without_catalog_path() {
        let err = SimConfig::default().resolve_catalog_path(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no catalog path given on the command line, in POKEDUEL_CATALOG, or in the config"
        );
    }

    #[test]
    fn fails_to_read_missing_config() {
        let err = SimConfig::from_file(&PathBuf::from("does/not/exist.json")).unwrap_err();
        assert!(
            err.to_string()
                .contains("failed to read config file does/not/exist.json"),
            "{err}"
        );
    }

    #[test]
    fn fails_to_read_directory_config() {
        let dir = std::env::temp_dir();
        let err = SimConfig::from_file(&dir).unwrap_err();
        assert!(err.to_string().contains("is a directory"), "{err}");
    }
}
