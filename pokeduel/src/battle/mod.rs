mod action;
mod battle;
mod battle_builder;
mod battle_options;
pub mod calculations;
mod mon;
mod player;

pub use action::{
    ActionKind,
    ActionOutcome,
    AttackOutcome,
    BattleAction,
    BlockOutcome,
    SwitchOutcome,
};
pub use battle::{
    Battle,
    BattleState,
    Side,
};
pub use battle_builder::{
    BattleBuilder,
    BattleBuilderOptions,
    BattleBuilderPlayerData,
    RosterEntry,
};
pub use battle_options::{
    BattleEngineOptions,
    BattleOptions,
    RandomizeDamageRoll,
};
pub use mon::BattleMon;
pub use player::Player;
