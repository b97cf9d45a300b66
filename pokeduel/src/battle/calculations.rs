use pokeduel_data::{
    LookupError,
    SpeciesData,
};

use crate::battle::ActionKind;

/// Tolerance under which a value is considered integral before rounding up.
const CEIL_EPSILON: f64 = 1e-9;

/// Bonus for repeating the same attack kind.
pub const STAB_BONUS: f64 = 1.5;
/// Multiplier applied to the critical term of the damage formula on a critical hit.
pub const CRITICAL_MULTIPLIER: u32 = 2;
/// Number of critical roll outcomes below which an attack is a critical hit.
pub const CRITICAL_THRESHOLD: u64 = 10;
/// Number of possible critical roll outcomes, `[0, 100]`.
pub const CRITICAL_OUTCOMES: u64 = 101;
/// Lowest random damage roll.
pub const MIN_DAMAGE_ROLL: u64 = 217;
/// Highest random damage roll, which is also the roll's denominator.
pub const MAX_DAMAGE_ROLL: u64 = 255;
/// Defense boost per block, scaled by the blocking Mon's growth iteration.
pub const BLOCK_GROWTH: f64 = 0.1;
/// Decay applied to the growth iteration after each block.
pub const BLOCK_GROWTH_DECAY: f64 = 0.9;

/// Rounds up, treating values within floating point noise of an integer as that integer.
pub fn ceil(value: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() < CEIL_EPSILON {
        rounded
    } else {
        value.ceil()
    }
}

/// Calculates the same-type attack bonus for using `new` after `previous`.
///
/// Only attacks receive the bonus. Blocking never carries over.
pub fn stab(previous: Option<ActionKind>, new: ActionKind) -> f64 {
    match (previous, new) {
        (Some(ActionKind::Basic), ActionKind::Basic)
        | (Some(ActionKind::Special), ActionKind::Special) => STAB_BONUS,
        _ => 1.0,
    }
}

/// Calculates damage before any type effectiveness is applied.
pub fn base_damage(attack: u32, defense: u32, stab: f64, critical: bool, random_roll: u64) -> f64 {
    let critical = if critical { CRITICAL_MULTIPLIER } else { 1 };
    let ratio = attack as f64 / defense as f64;
    let random_factor = random_roll as f64 / MAX_DAMAGE_ROLL as f64;
    ((((3 * critical + 1) as f64) * 10.0 * ratio) / 40.0 + 2.0) * stab * random_factor
}

/// Calculates the final damage of an attack.
///
/// Basic attacks should pass a type multiplier of 1.
pub fn calculate_damage(
    attack: u32,
    defense: u32,
    stab: f64,
    critical: bool,
    random_roll: u64,
    type_multiplier: f64,
) -> u32 {
    let damage = ceil(base_damage(attack, defense, stab, critical, random_roll) * type_multiplier);
    if damage <= 0.0 {
        0
    } else if damage >= u32::MAX as f64 {
        u32::MAX
    } else {
        damage as u32
    }
}

/// Calculates the type multiplier of an attack from `attacker` against `defender`.
///
/// The attacker's type table is consulted for each of the defender's types.
pub fn type_multiplier(attacker: &SpeciesData, defender: &SpeciesData) -> Result<f64, LookupError> {
    let primary = attacker.type_multiplier_against(defender.primary_type())?;
    let secondary = match defender.secondary_type() {
        Some(secondary) => attacker.type_multiplier_against(secondary)?,
        None => 1.0,
    };
    Ok(primary * secondary)
}

/// Calculates the defense after a block.
pub fn defense_growth(defense: u32, growth_iteration: f64) -> u32 {
    let defense = defense as f64;
    let grown = ceil(defense + defense * BLOCK_GROWTH * growth_iteration);
    if grown >= u32::MAX as f64 {
        u32::MAX
    } else {
        grown as u32
    }
}
