#[cfg(test)]
mod mon_creation_test {
    use pokeduel::battle::{
        Battle,
        RandomizeDamageRoll,
        Side,
    };
    use pokeduel_data::{
        Catalog,
        Gender,
    };
    use pokeduel_test_utils::{
        TestBattleBuilder,
        get_controlled_rng_for_battle,
        test_catalog,
    };
    use pretty_assertions::assert_eq;

    fn make_battle(catalog: &Catalog, seed: u64, randomize: bool) -> Battle {
        TestBattleBuilder::new()
            .with_seed(seed)
            .with_controlled_rng(true)
            .with_randomized_mons(randomize)
            .with_player_1("Red", ["Bulbasaur"])
            .with_player_2("Blue", ["Magnemite"])
            .build(catalog)
            .unwrap()
    }

    #[test]
    fn copies_species_data_without_randomization() {
        let catalog = test_catalog();
        let mut battle = make_battle(&catalog, 0, false);
        let bulbasaur = battle.active(Side::One);
        assert_eq!(bulbasaur.gender(), Gender::Male);
        assert_eq!(bulbasaur.height_m(), Some(0.7));
        assert_eq!(bulbasaur.weight_kg(), Some(6.9));
        assert_eq!(bulbasaur.speed(), 45);
        let magnemite = battle.active(Side::Two);
        assert_eq!(magnemite.gender(), Gender::Unknown);
        assert_eq!(magnemite.height_m(), Some(0.3));
        assert_eq!(
            get_controlled_rng_for_battle(&mut battle)
                .unwrap()
                .sequence_count(),
            0
        );
    }

    #[test]
    fn randomization_draws_only_for_known_values() {
        let catalog = test_catalog();
        let mut battle = make_battle(&catalog, 0, true);
        // Gender, height, and weight for Bulbasaur. Height and weight for Magnemite.
        assert_eq!(
            get_controlled_rng_for_battle(&mut battle)
                .unwrap()
                .sequence_count(),
            5
        );
        assert_eq!(battle.active(Side::Two).gender(), Gender::Unknown);
    }

    #[test]
    fn randomized_values_stay_within_jitter_range() {
        let catalog = test_catalog();
        for seed in 0..20 {
            let battle = make_battle(&catalog, seed, true);
            let bulbasaur = battle.active(Side::One);
            let height = bulbasaur.height_m().unwrap();
            let weight = bulbasaur.weight_kg().unwrap();
            assert!((0.6 - 1e-9..=0.8 + 1e-9).contains(&height), "{height}");
            assert!((5.5 - 1e-9..=8.3 + 1e-9).contains(&weight), "{weight}");
            assert_eq!((height * 10.0).round() / 10.0, height);
            assert!(matches!(bulbasaur.gender(), Gender::Male | Gender::Female));
            assert_eq!(bulbasaur.hp(), 45);
            assert_eq!(bulbasaur.attack(), 49);
        }
    }

    #[test]
    fn same_seed_creates_same_mons() {
        let catalog = test_catalog();
        let a = make_battle(&catalog, 1234, true);
        let b = make_battle(&catalog, 1234, true);
        for side in [Side::One, Side::Two] {
            assert_eq!(a.active(side), b.active(side));
        }
    }

    #[test]
    fn mutating_mons_never_touches_catalog_or_other_mons() {
        let catalog = test_catalog();
        let mut battle = TestBattleBuilder::new()
            .with_damage_roll(RandomizeDamageRoll::Max)
            .with_critical_hits(false)
            .with_player_1("Red", ["Bulbasaur"])
            .with_player_2("Blue", ["Bulbasaur"])
            .build(&catalog)
            .unwrap();
        let other = TestBattleBuilder::new()
            .with_player_1("Green", ["Bulbasaur"])
            .with_player_2("Yellow", ["Bulbasaur"])
            .build(&catalog)
            .unwrap();

        battle.attack_basic(Side::One).unwrap();
        battle.block(Side::Two).unwrap();

        assert_eq!(battle.active(Side::Two).hp(), 42);
        assert_eq!(battle.active(Side::Two).defense(), 54);
        assert_eq!(battle.active(Side::One).hp(), 45);
        assert_eq!(battle.active(Side::One).defense(), 49);
        for side in [Side::One, Side::Two] {
            assert_eq!(other.active(side).hp(), 45);
            assert_eq!(other.active(side).defense(), 49);
        }
        let species = catalog.find_by_name("Bulbasaur").unwrap();
        assert_eq!(species.base_hp(), 45);
        assert_eq!(species.base_defense(), 49);
        assert_eq!(battle.active(Side::Two).species(), species);
    }
}
