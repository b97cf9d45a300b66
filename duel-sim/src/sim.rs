use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

use anyhow::{
    Context,
    Result,
    bail,
};
use pokeduel::battle::{
    Battle,
    BattleBuilder,
    Side,
};
use pokeduel_ai::{
    AiContext,
    BattleAi,
    weighted::WeightedBot,
};
use pokeduel_data::{
    Catalog,
    CatalogLoader,
};
use pokeduel_prng::RealPseudoRandomNumberGenerator;

use crate::config::SimConfig;

/// Loads the catalog file at the given path.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if path.is_dir() {
        bail!("catalog path {} is a directory", path.display());
    }
    let file = File::open(path)
        .with_context(|| format!("failed to open catalog file {}", path.display()))?;
    let catalog = CatalogLoader::load_from_reader(BufReader::new(file))
        .with_context(|| format!("failed to load catalog file {}", path.display()))?;
    log::info!("Loaded {} species from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// The result of a simulated battle.
pub struct SimOutcome {
    pub battle: Battle,
    pub actions: usize,
}

impl SimOutcome {
    pub fn winner(&self) -> Option<Side> {
        self.battle.winner()
    }
}

fn bot_seed(seed: Option<u64>, side: Side) -> Option<u64> {
    seed.map(|seed| seed.wrapping_add(side.index() as u64 + 1))
}

/// Plays a battle between two weighted bots until one side wins or the action limit is reached.
pub fn run(config: &SimConfig, catalog: &Catalog) -> Result<SimOutcome> {
    let mut battle = BattleBuilder::new(config.battle_options(), catalog)
        .context("failed to resolve rosters")?
        .build(config.engine_options())
        .context("failed to create battle")?;

    let mut bots = [Side::One, Side::Two].map(|side| {
        let prng = RealPseudoRandomNumberGenerator::new(bot_seed(config.seed, side));
        WeightedBot::new(Box::new(prng), config.bot.clone())
    });

    let mut actions = 0;
    while let Some(side) = battle.turn() {
        if actions >= config.max_actions {
            log::warn!("Stopping battle after {actions} actions without a winner");
            break;
        }
        let action = bots[side.index()].make_choice(AiContext::new(&battle, side))?;
        battle
            .apply(side, action)
            .with_context(|| format!("{side} failed to apply {action:?}"))?;
        actions += 1;
    }

    Ok(SimOutcome { battle, actions })
}

#[cfg(test)]
mod sim_test {
    use std::{
        env,
        fs,
        path::PathBuf,
    };

    use assert_matches::assert_matches;
    use pokeduel::battle::{
        RosterEntry,
        Side,
    };
    use pokeduel_test_utils::{
        setup_test_environment,
        test_catalog,
        test_catalog_records,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        config::SimConfig,
        sim::{
            load_catalog,
            run,
        },
    };

    fn config(seed: u64) -> SimConfig {
        SimConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn plays_battle_to_completion() {
        setup_test_environment();
        let catalog = test_catalog();
        let outcome = run(&config(100), &catalog).unwrap();
        assert_matches!(outcome.winner(), Some(_));
        assert!(outcome.actions > 0);
        assert!(outcome.actions <= 1000);
        let log = outcome.battle.full_log().collect::<Vec<_>>();
        assert_eq!(log.first(), Some(&"battlestart"));
        assert_matches!(log.last(), Some(line) if line.starts_with("win|"));
    }

    #[test]
    fn replays_battle_with_same_seed() {
        let catalog = test_catalog();
        let first = run(&config(5), &catalog).unwrap();
        let second = run(&config(5), &catalog).unwrap();
        assert_eq!(first.actions, second.actions);
        assert_eq!(
            first.battle.full_log().collect::<Vec<_>>(),
            second.battle.full_log().collect::<Vec<_>>()
        );
    }

    #[test]
    fn stops_at_action_limit() {
        let catalog = test_catalog();
        let config = SimConfig {
            max_actions: 3,
            ..config(1)
        };
        let outcome = run(&config, &catalog).unwrap();
        assert_eq!(outcome.actions, 3);
        assert_eq!(outcome.winner(), None);
        assert_eq!(outcome.battle.turn(), Some(Side::Two));
    }

    #[test]
    fn fails_for_unknown_roster_entry() {
        let catalog = test_catalog();
        let mut config = config(1);
        config.player_1.roster.push(RosterEntry::from("Mewtwo"));
        let err = run(&config, &catalog).err().unwrap();
        assert_eq!(err.to_string(), "failed to resolve rosters");
    }

    #[test]
    fn loads_catalog_file() {
        let path = env::temp_dir().join(format!("duel-sim-catalog-{}.json", std::process::id()));
        fs::write(&path, serde_json::to_string(&test_catalog_records()).unwrap()).unwrap();
        let catalog = load_catalog(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(catalog.unwrap().len(), 6);
    }

    #[test]
    fn fails_to_load_missing_catalog() {
        let err = load_catalog(&PathBuf::from("missing/catalog.json")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to open catalog file missing/catalog.json"
        );
    }

    #[test]
    fn fails_to_load_directory_catalog() {
        let err = load_catalog(&env::temp_dir()).unwrap_err();
        assert!(err.to_string().ends_with("is a directory"), "{err}");
    }
}
