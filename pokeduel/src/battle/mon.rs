use pokeduel_data::{
    Gender,
    SpeciesData,
};

use crate::{
    battle::ActionKind,
    error::{
        BattleError,
        invalid_range_error,
    },
    rng::PseudoRandomNumberGenerator,
};

/// Lowest percentage used when jittering height and weight.
const MIN_JITTER_PERCENT: u64 = 80;
/// Highest percentage used when jittering height and weight.
const MAX_JITTER_PERCENT: u64 = 120;

/// A single Mon in a battle.
///
/// A Mon owns its own snapshot of the species it was created from. Mutating a Mon never affects
/// the catalog or any other Mon.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleMon {
    species: SpeciesData,
    hp: u32,
    max_hp: u32,
    attack: u32,
    defense: u32,
    speed: u32,
    last_action: Option<ActionKind>,
    growth_iteration: f64,
    gender: Gender,
    height_m: Option<f64>,
    weight_kg: Option<f64>,
}

impl BattleMon {
    /// Creates a new Mon from a species.
    ///
    /// Without `randomize`, nothing is drawn: the Mon is male if the species' male percentage is
    /// above 50, and height and weight are copied.
    ///
    /// With `randomize`, values are drawn in this order:
    /// 1. Gender, unless the species is genderless: an integer in `[1, 99]`, male if it is above
    ///    the species' male percentage.
    /// 1. Height, if known: a percentage in `[80, 120]`, rounded to one decimal place.
    /// 1. Weight, if known: the same as height.
    pub fn from_species(
        species: &SpeciesData,
        randomize: bool,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Self {
        let gender = Self::select_gender(species.percentage_male(), randomize, prng);
        let (height_m, weight_kg) = if randomize {
            let height_m = species.height_m().map(|height| Self::jitter(height, prng));
            let weight_kg = species.weight_kg().map(|weight| Self::jitter(weight, prng));
            (height_m, weight_kg)
        } else {
            (species.height_m(), species.weight_kg())
        };
        Self {
            species: species.clone(),
            hp: species.base_hp(),
            max_hp: species.base_hp(),
            attack: species.base_attack(),
            defense: species.base_defense(),
            speed: species.base_speed(),
            last_action: None,
            growth_iteration: 1.0,
            gender,
            height_m,
            weight_kg,
        }
    }

    fn select_gender(
        percentage_male: Option<f64>,
        randomize: bool,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Gender {
        let percentage_male = match percentage_male {
            Some(percentage_male) => percentage_male,
            None => return Gender::Unknown,
        };
        let male = if randomize {
            prng.range_inclusive(1, 99) as f64 > percentage_male
        } else {
            percentage_male > 50.0
        };
        if male { Gender::Male } else { Gender::Female }
    }

    fn jitter(value: f64, prng: &mut dyn PseudoRandomNumberGenerator) -> f64 {
        let percent = prng.range_inclusive(MIN_JITTER_PERCENT, MAX_JITTER_PERCENT);
        (value * percent as f64 / 10.0).round() / 10.0
    }

    /// The species snapshot the Mon was created from.
    pub fn species(&self) -> &SpeciesData {
        &self.species
    }

    pub fn name(&self) -> &str {
        self.species.name()
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Checks if the Mon can still battle.
    pub fn alive(&self) -> bool {
        self.hp > 0
    }

    /// The kind of the last combat action the Mon used.
    pub fn last_action(&self) -> Option<ActionKind> {
        self.last_action
    }

    /// The scale of the next defense boost from blocking.
    pub fn growth_iteration(&self) -> f64 {
        self.growth_iteration
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Height in meters (m).
    pub fn height_m(&self) -> Option<f64> {
        self.height_m
    }

    /// Weight in kilograms (kg).
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    /// Sets the current HP.
    pub fn set_hp(&mut self, hp: u32) -> Result<(), BattleError> {
        if hp > self.max_hp {
            return Err(invalid_range_error(format!(
                "hp {hp} exceeds max hp {}",
                self.max_hp
            )));
        }
        self.hp = hp;
        Ok(())
    }

    /// Sets the max HP, lowering the current HP if needed.
    pub fn set_max_hp(&mut self, max_hp: u32) -> Result<(), BattleError> {
        if max_hp == 0 {
            return Err(invalid_range_error("max hp must be greater than 0"));
        }
        self.max_hp = max_hp;
        if max_hp < self.hp {
            self.set_hp(max_hp)?;
        }
        Ok(())
    }

    pub fn set_attack(&mut self, attack: u32) {
        self.attack = attack;
    }

    pub fn set_defense(&mut self, defense: u32) -> Result<(), BattleError> {
        if defense == 0 {
            return Err(invalid_range_error("defense must be greater than 0"));
        }
        self.defense = defense;
        Ok(())
    }

    /// Applies damage to the Mon. HP never drops below 0.
    pub fn apply_damage(&mut self, damage: u32) -> Result<(), BattleError> {
        self.set_hp(self.hp.saturating_sub(damage))
    }

    /// Restores the Mon to full HP.
    pub fn heal_to_full(&mut self) {
        self.hp = self.max_hp;
    }

    pub(crate) fn record_action(&mut self, kind: ActionKind) {
        self.last_action = Some(kind);
    }

    pub(crate) fn decay_growth_iteration(&mut self) {
        self.growth_iteration *= 0.9;
    }
}
