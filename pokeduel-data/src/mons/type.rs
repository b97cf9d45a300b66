use std::str::FromStr;

use ahash::HashMap;
use serde::Serialize;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::LookupError;

/// The type of a species, which determines its weaknesses and resistances.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "bug"]
    Bug,
    #[string = "dark"]
    Dark,
    #[string = "dragon"]
    Dragon,
    #[string = "electric"]
    Electric,
    #[string = "fairy"]
    Fairy,
    #[string = "fight"]
    #[alias = "fighting"]
    Fight,
    #[string = "fire"]
    Fire,
    #[string = "flying"]
    Flying,
    #[string = "ghost"]
    Ghost,
    #[string = "grass"]
    Grass,
    #[string = "ground"]
    Ground,
    #[string = "ice"]
    Ice,
    #[string = "normal"]
    Normal,
    #[string = "poison"]
    Poison,
    #[string = "psychic"]
    Psychic,
    #[string = "rock"]
    Rock,
    #[string = "steel"]
    Steel,
    #[string = "water"]
    Water,
}

impl Type {
    /// Every type, in type table order.
    pub const ALL: [Type; 18] = [
        Type::Bug,
        Type::Dark,
        Type::Dragon,
        Type::Electric,
        Type::Fairy,
        Type::Fight,
        Type::Fire,
        Type::Flying,
        Type::Ghost,
        Type::Grass,
        Type::Ground,
        Type::Ice,
        Type::Normal,
        Type::Poison,
        Type::Psychic,
        Type::Rock,
        Type::Steel,
        Type::Water,
    ];

    const TABLE_KEY_PREFIX: &str = "against_";

    /// The key of the type in a raw type table record.
    pub fn table_key(&self) -> String {
        format!("{}{self}", Self::TABLE_KEY_PREFIX)
    }

    /// Parses a raw type table record key.
    ///
    /// Only the exact key is accepted, aliases are not.
    pub fn from_table_key(key: &str) -> Option<Self> {
        let name = key.strip_prefix(Self::TABLE_KEY_PREFIX)?;
        Self::ALL.into_iter().find(|typ| typ.to_string() == name)
    }

    /// Parses a type name, case-insensitively.
    pub fn parse(name: &str) -> Result<Self, LookupError> {
        Self::from_str(&name.to_lowercase()).map_err(|_| LookupError::UnknownType(name.to_owned()))
    }
}

/// Damage multipliers of a species' attacks against each defending type.
///
/// Always holds an entry for every [`Type`]. A multiplier of 0 means the defending type is immune.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeTable {
    multipliers: HashMap<Type, f64>,
}

impl TypeTable {
    pub(crate) fn new(multipliers: HashMap<Type, f64>) -> Self {
        Self { multipliers }
    }

    /// The multiplier against the given defending type.
    pub fn get(&self, defender: Type) -> f64 {
        self.multipliers.get(&defender).copied().unwrap_or(1.0)
    }

    /// Iterates over all multipliers, in type table order.
    pub fn iter(&self) -> impl Iterator<Item = (Type, f64)> + '_ {
        Type::ALL.into_iter().map(|typ| (typ, self.get(typ)))
    }
}
