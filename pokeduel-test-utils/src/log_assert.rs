use pokeduel::battle::Battle;

/// Asserts that new logs in the battle are equal to the given logs.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut Battle, want: &[&str]) {
    let got = battle.new_logs().collect::<Vec<&str>>();
    pretty_assertions::assert_eq!(got, want.to_vec())
}

/// Asserts that all logs in the battle, since it started, are equal to the given logs.
#[track_caller]
pub fn assert_logs_eq(battle: &Battle, want: &[&str]) {
    let got = battle.full_log().collect::<Vec<&str>>();
    pretty_assertions::assert_eq!(got, want.to_vec())
}
