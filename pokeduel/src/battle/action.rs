use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::battle::Side;

/// The kind of combat action a Mon last used.
///
/// Repeating an attack kind grants the same-type attack bonus.
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
pub enum ActionKind {
    #[string = "basic"]
    Basic,
    #[string = "special"]
    Special,
    #[string = "block"]
    Block,
}

/// An action a player can take on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleAction {
    /// Attack with the basic attack, which ignores types.
    BasicAttack,
    /// Attack with the special attack, which is scaled by type effectiveness.
    SpecialAttack,
    /// Raise the active Mon's defense.
    Block,
    /// Switch the active Mon to the roster entry at the given index.
    Switch(usize),
}

impl BattleAction {
    /// The combat action kind, if the action is not a switch.
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Self::BasicAttack => Some(ActionKind::Basic),
            Self::SpecialAttack => Some(ActionKind::Special),
            Self::Block => Some(ActionKind::Block),
            Self::Switch(_) => None,
        }
    }
}

/// The result of an attack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttackOutcome {
    pub side: Side,
    pub kind: ActionKind,
    pub damage: u32,
    pub critical: bool,
    pub stab: f64,
    /// Always 1 for basic attacks.
    pub type_multiplier: f64,
    pub defender_hp: u32,
    pub defender_fainted: bool,
}

/// The result of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockOutcome {
    pub side: Side,
    pub old_defense: u32,
    pub new_defense: u32,
}

/// The result of a switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchOutcome {
    pub side: Side,
    pub from: usize,
    pub to: usize,
    /// Whether the switch replaced a fainted Mon.
    pub forced: bool,
}

/// The result of a successful action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionOutcome {
    Attack(AttackOutcome),
    Block(BlockOutcome),
    Switch(SwitchOutcome),
}
