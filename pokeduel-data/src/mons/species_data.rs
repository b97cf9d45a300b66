use serde::Serialize;

use crate::{
    BonusMetadata,
    CoreStats,
    LookupError,
    Type,
    TypeTable,
};

/// Data about a particular species.
///
/// Species data is the immutable template that every battle entity of the species is created from.
/// It can only be constructed by validating a catalog record, so every accessor returns
/// already-checked data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesData {
    id: u32,
    name: String,
    abilities: Vec<String>,
    stats: CoreStats,
    type_table: TypeTable,
    bonus: BonusMetadata,
}

impl SpeciesData {
    pub(crate) fn new(
        id: u32,
        name: String,
        abilities: Vec<String>,
        stats: CoreStats,
        type_table: TypeTable,
        bonus: BonusMetadata,
    ) -> Self {
        Self {
            id,
            name,
            abilities,
            stats,
            type_table,
            bonus,
        }
    }

    /// The unique catalog number of the species.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The display name of the species.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Abilities, for display.
    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }

    /// Core battle stats, types, and descriptive data.
    pub fn core_stats(&self) -> &CoreStats {
        &self.stats
    }

    pub fn base_hp(&self) -> u32 {
        self.stats.hp
    }

    pub fn base_attack(&self) -> u32 {
        self.stats.attack
    }

    pub fn base_defense(&self) -> u32 {
        self.stats.defense
    }

    pub fn base_speed(&self) -> u32 {
        self.stats.speed
    }

    /// The primary type of the species.
    pub fn primary_type(&self) -> &str {
        &self.stats.primary_type
    }

    /// The secondary type of the species, if it exists.
    pub fn secondary_type(&self) -> Option<&str> {
        self.stats.secondary_type.as_deref()
    }

    /// Both types of the species.
    pub fn types(&self) -> (&str, Option<&str>) {
        (self.primary_type(), self.secondary_type())
    }

    /// The species class, which displays on the Dex page.
    pub fn classification(&self) -> &str {
        &self.stats.classification
    }

    pub fn experience_growth(&self) -> u32 {
        self.stats.experience_growth
    }

    /// Multipliers of the species' attacks against each defending type.
    pub fn type_table(&self) -> &TypeTable {
        &self.type_table
    }

    /// Descriptive metadata.
    pub fn bonus(&self) -> &BonusMetadata {
        &self.bonus
    }

    /// Percentage of the species that is male, or [`None`] if the species is genderless.
    pub fn percentage_male(&self) -> Option<f64> {
        self.bonus.percentage_male
    }

    /// Height in meters (m).
    pub fn height_m(&self) -> Option<f64> {
        self.bonus.height_m
    }

    /// Weight in kilograms (kg).
    pub fn weight_kg(&self) -> Option<f64> {
        self.bonus.weight_kg
    }

    /// The generation the species was introduced in.
    pub fn generation(&self) -> u32 {
        self.bonus.generation
    }

    /// The multiplier of the species' attacks against the given defending type.
    ///
    /// Type names are matched case-insensitively.
    pub fn type_multiplier_against(&self, type_name: &str) -> Result<f64, LookupError> {
        Type::parse(type_name).map(|typ| self.type_table.get(typ))
    }
}
