use std::io::Read;

use ahash::{
    HashMap,
    HashMapExt,
};
use serde_json::{
    Map,
    Value,
};

use crate::{
    Catalog,
    CatalogError,
    DataError,
    FieldError,
    SpeciesData,
    WrapFieldError,
    WrapNestedFieldError,
    validate::{
        validate_ability_list,
        validate_bonus_metadata,
        validate_core_stats,
        validate_id,
        validate_name,
        validate_type_table,
    },
};

/// Loads a [`Catalog`] from raw JSON records.
///
/// Loading is atomic: the first malformed record aborts the whole load, and no partial catalog is
/// ever returned.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads a catalog from a JSON array read from the given reader.
    pub fn load_from_reader<R>(reader: R) -> Result<Catalog, CatalogError>
    where
        R: Read,
    {
        Self::load_value(serde_json::from_reader(reader)?)
    }

    /// Loads a catalog from a JSON array string.
    pub fn load_from_str(source: &str) -> Result<Catalog, CatalogError> {
        Self::load_value(serde_json::from_str(source)?)
    }

    fn load_value(value: Value) -> Result<Catalog, CatalogError> {
        match value {
            Value::Array(records) => Self::load(&records),
            _ => Err(CatalogError::NotAnArray),
        }
    }

    /// Loads a catalog from raw records, in order.
    pub fn load(records: &[Value]) -> Result<Catalog, CatalogError> {
        let mut species = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let entry = Self::parse_record(record)
                .and_then(|entry| {
                    if by_id.contains_key(&entry.id()) {
                        Err(DataError::InvalidRange(format!(
                            "duplicate catalog number {}",
                            entry.id()
                        )))
                        .at_field("pokedex_number")
                    } else {
                        Ok(entry)
                    }
                })
                .map_err(|error| {
                    log::warn!("Rejected catalog entry {index}: {error}");
                    CatalogError::malformed_entry(index, error)
                })?;
            by_id.insert(entry.id(), species.len());
            species.push(entry);
        }
        log::info!("Loaded {} species into catalog", species.len());
        Ok(Catalog::new(species, by_id))
    }

    fn parse_record(record: &Value) -> Result<SpeciesData, FieldError> {
        let record = record
            .as_object()
            .ok_or_else(|| DataError::BadConversion(format!("{record} is not a record")))
            .at_field("")?;
        let id = validate_id(Self::field(record, "pokedex_number")?).at_field("pokedex_number")?;
        let name = validate_name(Self::field(record, "name")?).at_field("name")?;
        let abilities =
            validate_ability_list(Self::field(record, "abilities")?).at_field("abilities")?;
        let stats = validate_core_stats(Self::field(record, "stats")?).within("stats")?;
        let type_table = validate_type_table(Self::field(record, "special_strength")?)
            .within("special_strength")?;
        let bonus = validate_bonus_metadata(Self::field(record, "other")?).within("other")?;
        Ok(SpeciesData::new(
            id, name, abilities, stats, type_table, bonus,
        ))
    }

    fn field<'r>(record: &'r Map<String, Value>, key: &str) -> Result<&'r Value, FieldError> {
        record
            .get(key)
            .ok_or_else(|| DataError::DataMissing(format!("missing field \"{key}\"")))
            .at_field(key)
    }
}
